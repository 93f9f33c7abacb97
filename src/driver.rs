//! The clock/driver that owns a run
//!
//! A `Driver` holds the game state plus the render and audio sinks, and
//! makes the run/stop decision: the host scheduler calls [`Driver::step`]
//! with a monotonically increasing timestamp and requests the next tick only
//! while the result is [`StepOutcome::Continue`]. Single-threaded by
//! construction; input (`jump`) never interleaves with an in-progress step.

use crate::audio::{AudioCue, AudioSink};
use crate::sim::{self, GameEvent, GameState};
use crate::snapshot::{FrameSnapshot, RenderSink};
use crate::tuning::Tuning;

/// Whether the host should schedule another tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Run is live; request the next tick
    Continue,
    /// Run ended; do not schedule further ticks
    Finished { final_score: u32 },
}

/// Owns the game state and both sinks for one run
pub struct Driver<R: RenderSink, A: AudioSink> {
    state: GameState,
    render: R,
    audio: A,
}

impl<R: RenderSink, A: AudioSink> Driver<R, A> {
    pub fn new(seed: u64, tuning: Tuning, render: R, audio: A) -> Self {
        log::info!("New run with seed {seed}");
        Self {
            state: GameState::new(seed, tuning),
            render,
            audio,
        }
    }

    /// Fire the game-started cue. Call once, after the asset gate clears
    /// and before the first tick.
    pub fn start(&mut self) {
        self.audio.play(AudioCue::GameStarted);
    }

    /// Trigger a jump. Ignored while airborne or after game over; the jump
    /// cue fires only when the impulse is actually applied.
    pub fn jump(&mut self) {
        if self.state.trigger_jump() {
            self.audio.play(AudioCue::Jump);
        }
    }

    /// Run one simulation tick and feed the render sink.
    pub fn step(&mut self, timestamp_ms: f64) -> StepOutcome {
        let event = sim::tick(&mut self.state, timestamp_ms);
        self.render.draw(&FrameSnapshot::of(&self.state));

        match event {
            Some(GameEvent::GameOver { final_score }) => {
                self.audio.play(AudioCue::GameOver);
                StepOutcome::Finished { final_score }
            }
            None if self.state.is_over() => StepOutcome::Finished {
                final_score: self.state.display_score(),
            },
            None => StepOutcome::Continue,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }
}
