//! Fire-and-forget audio cues
//!
//! The simulation core only emits notifications; the sink decides how (and
//! whether) to play them. A cue that cannot be played is logged by the sink
//! and dropped, never surfaced to the caller.

/// Discrete sound cues emitted by the driver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioCue {
    /// A jump was accepted
    Jump,
    /// The run started; hosts typically begin a background loop here
    GameStarted,
    /// The run ended on a collision
    GameOver,
}

/// A consumer of audio cues. Playback failure must stay inside the sink.
pub trait AudioSink {
    fn play(&mut self, cue: AudioCue);
}

/// Sink that drops every cue (logged at debug level)
#[derive(Debug, Default)]
pub struct NullAudio;

impl AudioSink for NullAudio {
    fn play(&mut self, cue: AudioCue) {
        log::debug!("Audio cue dropped (no audio sink): {cue:?}");
    }
}
