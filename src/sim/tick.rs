//! Per-tick orchestration
//!
//! One call to [`tick`] advances the whole simulation by one frame, in a
//! fixed order: player physics, obstacle spawn/motion/retire, cloud
//! motion/retire/spawn, difficulty, collision.

use super::state::{GamePhase, GameState};
use super::{collision, difficulty, physics, spawn};

/// Event surfaced to the host by a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// The player hit an obstacle; no further ticks should be scheduled
    GameOver { final_score: u32 },
}

/// Advance the simulation to `timestamp_ms`.
///
/// `timestamp_ms` must be monotonically non-decreasing across calls; the
/// elapsed delta is derived from the previous call's timestamp and is zero
/// on the very first tick. After game over this is a no-op.
pub fn tick(state: &mut GameState, timestamp_ms: f64) -> Option<GameEvent> {
    if state.phase == GamePhase::GameOver {
        return None;
    }

    let delta_ms = match state.last_timestamp {
        Some(prev) => (timestamp_ms - prev).max(0.0),
        None => 0.0,
    };
    state.last_timestamp = Some(timestamp_ms);

    physics::update_player(&mut state.player, &state.tuning);

    // New obstacles take their first motion step on the spawn tick;
    // new clouds only start moving the tick after
    spawn::spawn_obstacles(state, delta_ms);
    physics::update_obstacles(&mut state.obstacles);
    spawn::retire_obstacles(state);

    physics::update_clouds(&mut state.clouds, state.tuning.cloud_speed);
    spawn::retire_clouds(state);
    spawn::spawn_cloud(state);

    difficulty::update(state, delta_ms);

    if collision::player_hits_any(&state.player, &state.obstacles) {
        state.phase = GamePhase::GameOver;
        let final_score = state.display_score();
        log::info!("Run ended with score {final_score}");
        return Some(GameEvent::GameOver { final_score });
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::Tuning;
    use glam::Vec2;

    use crate::sim::state::Obstacle;

    #[test]
    fn first_tick_has_zero_delta() {
        let mut state = GameState::new(3, Tuning::default());
        tick(&mut state, 5000.0);
        // No time elapsed: no score, no spawn progress
        assert_eq!(state.score, 0.0);
        assert_eq!(state.spawn_timer, 0.0);
        assert_eq!(state.last_timestamp, Some(5000.0));
    }

    #[test]
    fn delta_is_difference_between_timestamps() {
        let mut state = GameState::new(3, Tuning::default());
        tick(&mut state, 1000.0);
        tick(&mut state, 1016.0);
        assert_eq!(state.spawn_timer, 16.0);
        assert!((state.score - 16.0 / 1500.0).abs() < 1e-9);
    }

    #[test]
    fn collision_ends_the_run_and_reports_score() {
        let mut state = GameState::new(3, Tuning::default());
        state.score = 4.2;
        state.obstacles.push(Obstacle {
            pos: state.player.pos,
            size: state.player.size,
            rgb: 0,
            speed: 0.0,
        });

        let event = tick(&mut state, 0.0);
        assert_eq!(event, Some(GameEvent::GameOver { final_score: 4 }));
        assert!(state.is_over());
    }

    #[test]
    fn tick_after_game_over_is_noop() {
        let mut state = GameState::new(3, Tuning::default());
        state.phase = GamePhase::GameOver;
        state.obstacles.push(Obstacle {
            pos: Vec2::new(400.0, 160.0),
            size: Vec2::new(20.0, 20.0),
            rgb: 0,
            speed: 4.0,
        });

        assert_eq!(tick(&mut state, 1000.0), None);
        assert_eq!(state.obstacles[0].pos.x, 400.0);
        assert_eq!(state.last_timestamp, None);
    }
}
