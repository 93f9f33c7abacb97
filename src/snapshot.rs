//! Read-only frame snapshot consumed by render sinks
//!
//! The simulation never talks to a renderer directly; the driver hands each
//! sink a borrowed view of the state once per tick.

use serde::Serialize;

use crate::sim::{Cloud, GameState, Ground, Obstacle, Player};

/// Everything a renderer needs to draw one frame
#[derive(Debug, Serialize)]
pub struct FrameSnapshot<'a> {
    pub ground: &'a Ground,
    pub player: &'a Player,
    pub obstacles: &'a [Obstacle],
    pub clouds: &'a [Cloud],
    /// Floored display score
    pub score: u32,
    /// True once the run has ended
    pub game_over: bool,
}

impl<'a> FrameSnapshot<'a> {
    pub fn of(state: &'a GameState) -> Self {
        Self {
            ground: &state.ground,
            player: &state.player,
            obstacles: &state.obstacles,
            clouds: &state.clouds,
            score: state.display_score(),
            game_over: state.is_over(),
        }
    }
}

/// A consumer of per-tick frame snapshots
pub trait RenderSink {
    fn draw(&mut self, frame: &FrameSnapshot<'_>);
}

/// Sink that discards every frame; useful for headless runs and tests
#[derive(Debug, Default)]
pub struct NullRender;

impl RenderSink for NullRender {
    fn draw(&mut self, _frame: &FrameSnapshot<'_>) {}
}
