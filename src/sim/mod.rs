//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Driven solely by host-supplied timestamps
//! - Seeded RNG only
//! - Stable entity order (spawn order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod difficulty;
pub mod physics;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{Aabb, player_hits_any};
pub use state::{Cloud, GamePhase, GameState, Ground, Obstacle, Player};
pub use tick::{GameEvent, tick};
