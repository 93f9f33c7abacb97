//! Game state and core simulation types
//!
//! The entity store (player, obstacles, clouds) and the run state (score,
//! global speed, spawn timer, phase) all live in [`GameState`].

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::Serialize;

use crate::consts::*;
use crate::tuning::Tuning;

use super::collision::Aabb;

/// Current phase of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GamePhase {
    /// Active gameplay
    Running,
    /// Run ended by a collision; terminal
    GameOver,
}

/// The controllable runner
///
/// x is fixed for the whole run; only y moves, under per-tick gravity.
#[derive(Debug, Clone, Serialize)]
pub struct Player {
    pub pos: Vec2,
    pub size: Vec2,
    /// Vertical velocity, world units per tick (negative = up)
    pub vy: f32,
    /// True between a jump trigger and the next landing
    pub airborne: bool,
}

impl Player {
    /// Player at rest on the ground line
    pub fn new() -> Self {
        Self {
            pos: Vec2::new(PLAYER_X, GROUND_Y - PLAYER_HEIGHT),
            size: Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT),
            vy: 0.0,
            airborne: false,
        }
    }

    /// y the player rests at when grounded
    pub fn rest_y(&self) -> f32 {
        GROUND_Y - self.size.y
    }

    /// Apply the jump impulse. No-op while airborne.
    pub fn jump(&mut self, impulse: f32) -> bool {
        if self.airborne {
            return false;
        }
        self.vy = impulse;
        self.airborne = true;
        true
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.pos, self.size)
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

/// A ground-level obstacle the player must clear
#[derive(Debug, Clone, Serialize)]
pub struct Obstacle {
    pub pos: Vec2,
    pub size: Vec2,
    /// Cosmetic fill color, 0xRRGGBB
    pub rgb: u32,
    /// Leftward speed per tick; overwritten on every difficulty escalation
    pub speed: f32,
}

impl Obstacle {
    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.pos, self.size)
    }
}

/// A decorative cloud; never participates in collision
#[derive(Debug, Clone, Serialize)]
pub struct Cloud {
    pub pos: Vec2,
    pub size: Vec2,
}

/// The static ground strip
#[derive(Debug, Clone, Serialize)]
pub struct Ground {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Ground {
    pub fn new() -> Self {
        Self {
            pos: Vec2::new(0.0, GROUND_Y),
            size: Vec2::new(VIEW_WIDTH, GROUND_HEIGHT),
        }
    }
}

impl Default for Ground {
    fn default() -> Self {
        Self::new()
    }
}

/// Complete simulation state for one run
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Seeded RNG; the only entropy source in the simulation
    pub rng: Pcg32,
    /// Gameplay parameters
    pub tuning: Tuning,
    /// Current phase; Running -> GameOver is one-way
    pub phase: GamePhase,
    pub player: Player,
    /// Live obstacles in spawn order
    pub obstacles: Vec<Obstacle>,
    /// Live clouds in spawn order
    pub clouds: Vec<Cloud>,
    pub ground: Ground,
    /// Continuous score; the displayed score is its floor
    pub score: f64,
    /// Shared obstacle speed, monotonically non-decreasing
    pub obstacle_speed: f32,
    /// Milliseconds accumulated toward the next obstacle spawn
    pub spawn_timer: f64,
    /// Timestamp of the previous tick; None before the first tick
    pub last_timestamp: Option<f64>,
}

impl GameState {
    /// Fresh run state: player at rest, empty entity sequences, base speed.
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        let obstacle_speed = tuning.base_obstacle_speed;
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            tuning,
            phase: GamePhase::Running,
            player: Player::new(),
            obstacles: Vec::new(),
            clouds: Vec::new(),
            ground: Ground::new(),
            score: 0.0,
            obstacle_speed,
            spawn_timer: 0.0,
            last_timestamp: None,
        }
    }

    /// Score as shown to the player
    pub fn display_score(&self) -> u32 {
        self.score.floor() as u32
    }

    /// Trigger a jump. Ignored while airborne or after game over.
    pub fn trigger_jump(&mut self) -> bool {
        if self.phase == GamePhase::GameOver {
            return false;
        }
        self.player.jump(self.tuning.jump_impulse)
    }

    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }
}
