//! Dino Dash - a side-scrolling runner game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, spawning, collisions, game state)
//! - `driver`: Clock/driver that owns the game state and the run/stop decision
//! - `snapshot`: Read-only per-frame view consumed by render sinks
//! - `audio`: Fire-and-forget sound cue interface
//! - `assets`: Startup asset gate polled before the first tick
//! - `tuning`: Data-driven gameplay parameters

pub mod assets;
pub mod audio;
pub mod driver;
pub mod sim;
pub mod snapshot;
pub mod tuning;

pub use driver::{Driver, StepOutcome};
pub use tuning::Tuning;

/// Fixed game geometry (world units match the original 800x200 playfield)
pub mod consts {
    /// Visible area width; obstacles and clouds spawn at this x
    pub const VIEW_WIDTH: f32 = 800.0;
    /// Visible area height
    pub const VIEW_HEIGHT: f32 = 200.0;

    /// Top of the ground strip; the resting line for the player
    pub const GROUND_Y: f32 = 180.0;
    /// Ground strip thickness
    pub const GROUND_HEIGHT: f32 = 20.0;

    /// Player spawn x (never changes during a run)
    pub const PLAYER_X: f32 = 50.0;
    /// Player bounding-box width
    pub const PLAYER_WIDTH: f32 = 44.0;
    /// Player bounding-box height
    pub const PLAYER_HEIGHT: f32 = 47.0;

    /// Asset-gate poll interval in milliseconds
    pub const ASSET_POLL_MS: u64 = 100;
}
