//! Score accrual and speed escalation
//!
//! Score is a continuous value fed by elapsed time. The escalation condition
//! is re-evaluated every tick and keeps firing for as long as the floored
//! score sits on a qualifying multiple of 10, so the speed step compounds
//! across consecutive ticks at the threshold. The first multiple-of-10
//! crossing (10 itself) never fires because of the `> 10` bound. Both are
//! deliberate reproductions of the original game's behavior.

use super::state::GameState;

/// Accrue score from the elapsed delta and escalate obstacle speed.
///
/// On escalation the new global speed is written back into every live
/// obstacle, so the whole field accelerates at once.
pub fn update(state: &mut GameState, delta_ms: f64) {
    state.score += delta_ms / state.tuning.score_divisor_ms;

    let floored = state.score.floor() as u64;
    if floored % 10 == 0 && floored > 10 {
        state.obstacle_speed += state.tuning.speed_step;
        for obstacle in &mut state.obstacles {
            obstacle.speed = state.obstacle_speed;
        }
        log::debug!("Obstacle speed escalated to {}", state.obstacle_speed);
    }
}
