//! Obstacle and cloud spawning, plus off-screen retirement
//!
//! Obstacle spawning is interval-based on accumulated wall-clock time; cloud
//! spawning is a small per-tick probability. Retirement is a stable filter
//! keeping entities whose right edge is still past the left boundary.

use glam::Vec2;
use rand::Rng;

use crate::consts::{GROUND_Y, VIEW_WIDTH};

use super::state::{Cloud, GameState, Obstacle};

/// Accumulate the spawn timer and create at most one obstacle per tick.
///
/// The timer is reset to zero when it fires, not decremented by the
/// interval, so a single huge delta still yields a single obstacle.
pub fn spawn_obstacles(state: &mut GameState, delta_ms: f64) {
    state.spawn_timer += delta_ms;
    if state.spawn_timer < state.tuning.spawn_interval_ms {
        return;
    }
    state.spawn_timer = 0.0;

    let width = state
        .rng
        .random_range(state.tuning.obstacle_min_size..state.tuning.obstacle_max_size);
    let height = state
        .rng
        .random_range(state.tuning.obstacle_min_size..state.tuning.obstacle_max_size);
    let rgb = state.rng.random_range(0..0x100_0000u32);

    let obstacle = Obstacle {
        pos: Vec2::new(VIEW_WIDTH, GROUND_Y - height),
        size: Vec2::new(width, height),
        rgb,
        speed: state.obstacle_speed,
    };
    log::debug!(
        "Spawned obstacle {}x{} at speed {}",
        obstacle.size.x,
        obstacle.size.y,
        obstacle.speed
    );
    state.obstacles.push(obstacle);
}

/// Maybe create one cloud this tick.
pub fn spawn_cloud(state: &mut GameState) {
    if state.rng.random::<f64>() >= state.tuning.cloud_spawn_chance {
        return;
    }

    let width = state
        .rng
        .random_range(state.tuning.cloud_min_width..state.tuning.cloud_max_width);
    let height = state
        .rng
        .random_range(state.tuning.cloud_min_height..state.tuning.cloud_max_height);
    // Anywhere in the sky band above the ground line
    let y = state.rng.random_range(0.0..GROUND_Y - height);

    state.clouds.push(Cloud {
        pos: Vec2::new(VIEW_WIDTH, y),
        size: Vec2::new(width, height),
    });
}

/// Drop obstacles whose right edge has left the visible area.
pub fn retire_obstacles(state: &mut GameState) {
    state.obstacles.retain(|o| o.pos.x + o.size.x > 0.0);
}

/// Drop clouds whose right edge has left the visible area.
pub fn retire_clouds(state: &mut GameState) {
    state.clouds.retain(|c| c.pos.x + c.size.x > 0.0);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::Tuning;

    fn state() -> GameState {
        GameState::new(42, Tuning::default())
    }

    #[test]
    fn obstacle_spawns_when_interval_elapses() {
        let mut s = state();
        spawn_obstacles(&mut s, 1999.0);
        assert!(s.obstacles.is_empty());
        spawn_obstacles(&mut s, 1.0);
        assert_eq!(s.obstacles.len(), 1);
        assert_eq!(s.spawn_timer, 0.0);

        let o = &s.obstacles[0];
        assert_eq!(o.pos.x, VIEW_WIDTH);
        assert_eq!(o.pos.y, GROUND_Y - o.size.y);
        assert!(o.size.x >= 5.0 && o.size.x < 25.0);
        assert!(o.size.y >= 5.0 && o.size.y < 25.0);
        assert_eq!(o.speed, 4.0);
    }

    #[test]
    fn at_most_one_obstacle_per_tick() {
        let mut s = state();
        // Five intervals worth of elapsed time still spawns exactly one
        spawn_obstacles(&mut s, 10_000.0);
        assert_eq!(s.obstacles.len(), 1);
        assert_eq!(s.spawn_timer, 0.0);
    }

    #[test]
    fn spawned_obstacle_copies_current_global_speed() {
        let mut s = state();
        s.obstacle_speed = 5.3;
        spawn_obstacles(&mut s, 2000.0);
        assert_eq!(s.obstacles[0].speed, 5.3);
    }

    #[test]
    fn cloud_spawn_is_probabilistic_and_in_sky_band() {
        let mut s = state();
        s.tuning.cloud_spawn_chance = 1.0;
        spawn_cloud(&mut s);
        assert_eq!(s.clouds.len(), 1);

        let c = &s.clouds[0];
        assert_eq!(c.pos.x, VIEW_WIDTH);
        assert!(c.pos.y >= 0.0);
        assert!(c.pos.y < GROUND_Y - c.size.y);
        assert!(c.size.x >= 50.0 && c.size.x < 100.0);
        assert!(c.size.y >= 30.0 && c.size.y < 60.0);

        s.tuning.cloud_spawn_chance = 0.0;
        for _ in 0..100 {
            spawn_cloud(&mut s);
        }
        assert_eq!(s.clouds.len(), 1);
    }

    #[test]
    fn retirement_keeps_visible_entities_in_order() {
        let mut s = state();
        for (x, w) in [(-30.0, 20.0), (-10.0, 10.0), (-5.0, 10.0), (100.0, 20.0)] {
            s.obstacles.push(Obstacle {
                pos: Vec2::new(x, 160.0),
                size: Vec2::new(w, 20.0),
                rgb: 0,
                speed: 4.0,
            });
        }
        retire_obstacles(&mut s);
        // x + w <= 0 goes; x + w > 0 stays, order preserved
        assert_eq!(s.obstacles.len(), 2);
        assert_eq!(s.obstacles[0].pos.x, -5.0);
        assert_eq!(s.obstacles[1].pos.x, 100.0);
        assert!(s.obstacles.iter().all(|o| o.pos.x + o.size.x > 0.0));
    }
}
