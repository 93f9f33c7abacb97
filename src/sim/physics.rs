//! Vertical physics for the player and horizontal scroll motion
//!
//! All steps here are per-tick, not delta-time-scaled: the original game's
//! motion is frame-rate dependent and that behavior is kept.

use crate::tuning::Tuning;

use super::state::{Cloud, Obstacle, Player};

/// Advance the player one tick under gravity.
///
/// Grounded players don't integrate at all. An airborne player gains
/// `gravity` of downward velocity, moves by the result, and lands (clamped
/// to the rest line, velocity zeroed, airborne cleared) if the step would
/// carry it below the ground.
pub fn update_player(player: &mut Player, tuning: &Tuning) {
    if !player.airborne {
        return;
    }
    player.vy += tuning.gravity;
    player.pos.y += player.vy;

    let rest_y = player.rest_y();
    if player.pos.y > rest_y {
        player.pos.y = rest_y;
        player.vy = 0.0;
        player.airborne = false;
    }
}

/// Scroll every obstacle left by its own speed.
pub fn update_obstacles(obstacles: &mut [Obstacle]) {
    for obstacle in obstacles {
        obstacle.pos.x -= obstacle.speed;
    }
}

/// Scroll every cloud left by the shared cloud speed.
pub fn update_clouds(clouds: &mut [Cloud], cloud_speed: f32) {
    for cloud in clouds {
        cloud.pos.x -= cloud_speed;
    }
}
