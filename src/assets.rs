//! Startup asset gate
//!
//! The first tick must not be requested until the host's assets report
//! loaded. The gate is polled on a coarse timer rather than pushed.

use std::time::Duration;

/// A one-time startup precondition checked before the first tick
pub trait AssetGate {
    /// True once every required asset has loaded
    fn ready(&self) -> bool;
}

/// Gate that is always ready; for hosts with no assets to wait on
#[derive(Debug, Default)]
pub struct NoAssets;

impl AssetGate for NoAssets {
    fn ready(&self) -> bool {
        true
    }
}

/// Block until the gate reports ready, polling at `interval`.
///
/// There is no timeout: an asset that never loads hangs startup forever,
/// matching the original game's load gate.
pub fn block_until_ready(gate: &impl AssetGate, interval: Duration) {
    let mut waited = false;
    while !gate.ready() {
        waited = true;
        std::thread::sleep(interval);
    }
    if waited {
        log::info!("Assets ready");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    struct CountdownGate(AtomicU32);

    impl AssetGate for CountdownGate {
        fn ready(&self) -> bool {
            // Each poll decrements; ready once the countdown is spent
            self.0
                .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
                .is_err()
        }
    }

    #[test]
    fn blocks_until_gate_opens() {
        let gate = CountdownGate(AtomicU32::new(3));
        block_until_ready(&gate, Duration::from_millis(1));
        assert!(gate.ready());
    }

    #[test]
    fn ready_gate_returns_immediately() {
        block_until_ready(&NoAssets, Duration::from_millis(100));
    }
}
