//! Data-driven gameplay parameters
//!
//! Everything that shapes the feel of a run lives here so hosts can override
//! it from a JSON file without recompiling.

use serde::{Deserialize, Serialize};

/// Gameplay parameters for a run
///
/// All per-tick quantities are world units per tick, deliberately not
/// delta-time-scaled: the vertical step and scroll speed are frame-rate
/// dependent, matching the original game's behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Downward acceleration added to the player's vertical velocity per tick
    pub gravity: f32,
    /// Vertical velocity applied when a jump is triggered (negative = up)
    pub jump_impulse: f32,

    /// Obstacle speed at the start of a run
    pub base_obstacle_speed: f32,
    /// Amount added to the global obstacle speed on each escalation
    pub speed_step: f32,
    /// Accumulated milliseconds between obstacle spawns
    pub spawn_interval_ms: f64,
    /// Obstacle width/height are drawn uniformly from [min, max)
    pub obstacle_min_size: f32,
    pub obstacle_max_size: f32,

    /// Horizontal cloud speed, independent of obstacle speed
    pub cloud_speed: f32,
    /// Per-tick probability of spawning a cloud
    pub cloud_spawn_chance: f64,
    /// Cloud width is drawn uniformly from [min, max)
    pub cloud_min_width: f32,
    pub cloud_max_width: f32,
    /// Cloud height is drawn uniformly from [min, max)
    pub cloud_min_height: f32,
    pub cloud_max_height: f32,

    /// Milliseconds of elapsed time worth one point of score
    pub score_divisor_ms: f64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: 0.6,
            jump_impulse: -10.0,

            base_obstacle_speed: 4.0,
            speed_step: 0.1,
            spawn_interval_ms: 2000.0,
            obstacle_min_size: 5.0,
            obstacle_max_size: 25.0,

            cloud_speed: 0.5,
            cloud_spawn_chance: 0.01,
            cloud_min_width: 50.0,
            cloud_max_width: 100.0,
            cloud_min_height: 30.0,
            cloud_max_height: 60.0,

            score_divisor_ms: 1500.0,
        }
    }
}

impl Tuning {
    /// Load tuning overrides from a JSON file, falling back to defaults on
    /// any read or parse failure.
    pub fn load(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(tuning) => {
                    log::info!("Loaded tuning from {}", path.display());
                    tuning
                }
                Err(e) => {
                    log::warn!("Bad tuning file {}: {e} - using defaults", path.display());
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("No tuning file at {} - using defaults", path.display());
                Self::default()
            }
        }
    }
}
