//! Axis-aligned bounding-box collision detection
//!
//! The overlap predicate is the sole termination trigger for a run, so a
//! false negative here is not tolerable.

use glam::Vec2;
use serde::Serialize;

use super::state::{Obstacle, Player};

/// An axis-aligned bounding box, top-left anchored
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Aabb {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Aabb {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    /// Strict open-interval overlap on both axes: boxes that merely share an
    /// edge do not overlap.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.pos.x < other.pos.x + other.size.x
            && self.pos.x + self.size.x > other.pos.x
            && self.pos.y < other.pos.y + other.size.y
            && self.pos.y + self.size.y > other.pos.y
    }
}

/// True iff the player's box overlaps any obstacle's box.
///
/// Scans in sequence order and short-circuits on the first hit.
pub fn player_hits_any(player: &Player, obstacles: &[Obstacle]) -> bool {
    let player_box = player.aabb();
    obstacles.iter().any(|o| player_box.overlaps(&o.aabb()))
}
