//! Run lifecycle control: pause, resume, and stop.
//!
//! [`ControlHandle`] is the bridge between a controller (CLI driver, GUI
//! buttons) and the single extraction worker. It wraps two shared
//! [`AtomicBool`]s — a pause flag and a stop flag — which the worker reads
//! between frames. Stop is terminal: once requested it cannot be undone and
//! takes precedence over pause.
//!
//! # Example
//!
//! ```
//! use framesift::{ControlHandle, RunState};
//!
//! let control = ControlHandle::new();
//! assert_eq!(control.state(), RunState::Running);
//!
//! control.pause();
//! assert_eq!(control.state(), RunState::Paused);
//!
//! control.resume();
//! control.stop();
//! assert_eq!(control.state(), RunState::Stopped);
//! ```

use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};
use std::time::Duration;

/// How often the worker re-checks the flags while paused.
pub(crate) const PAUSE_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// The externally observable state of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    /// The worker is decoding and writing frames.
    Running,
    /// Forward progress is suspended until [`ControlHandle::resume`].
    Paused,
    /// The run has been told to end. Terminal and irreversible.
    Stopped,
}

/// Shared pause/stop signal between a controller and the extraction worker.
///
/// Clone the handle and share it between threads; all clones observe the
/// same flags. The worker checks the flags once per decoded frame, so
/// neither pause nor stop is instantaneous — they take effect at the next
/// frame-decode checkpoint and cannot interrupt an in-flight decode.
#[derive(Debug, Clone, Default)]
pub struct ControlHandle {
    paused: Arc<AtomicBool>,
    stopped: Arc<AtomicBool>,
}

impl ControlHandle {
    /// Create a new handle in the [`RunState::Running`] state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Request that the worker suspend forward progress.
    pub fn pause(&self) {
        self.paused.store(true, Ordering::Release);
    }

    /// Resume a paused run. Has no effect after [`stop`](ControlHandle::stop).
    pub fn resume(&self) {
        self.paused.store(false, Ordering::Release);
    }

    /// Request that the run end. Terminal; partial output stays on disk.
    pub fn stop(&self) {
        self.stopped.store(true, Ordering::Release);
    }

    /// Whether a pause has been requested (and not yet resumed).
    pub fn is_paused(&self) -> bool {
        self.paused.load(Ordering::Acquire)
    }

    /// Whether a stop has been requested.
    pub fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::Acquire)
    }

    /// The current state. Stop wins over pause.
    pub fn state(&self) -> RunState {
        if self.is_stopped() {
            RunState::Stopped
        } else if self.is_paused() {
            RunState::Paused
        } else {
            RunState::Running
        }
    }

    /// Block while paused, polling at a bounded interval.
    ///
    /// Returns as soon as the run is resumed or stopped. The poll interval
    /// bounds both the CPU cost of waiting and the latency of observing a
    /// flag change at roughly 100 ms.
    pub fn wait_while_paused(&self) {
        while self.is_paused() && !self.is_stopped() {
            std::thread::sleep(PAUSE_POLL_INTERVAL);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_handle_is_running() {
        let control = ControlHandle::new();
        assert!(!control.is_paused());
        assert!(!control.is_stopped());
        assert_eq!(control.state(), RunState::Running);
    }

    #[test]
    fn pause_and_resume_toggle_state() {
        let control = ControlHandle::new();
        control.pause();
        assert_eq!(control.state(), RunState::Paused);
        control.resume();
        assert_eq!(control.state(), RunState::Running);
    }

    #[test]
    fn stop_wins_over_pause() {
        let control = ControlHandle::new();
        control.pause();
        control.stop();
        assert_eq!(control.state(), RunState::Stopped);
        // Resuming after stop does not revive the run.
        control.resume();
        assert_eq!(control.state(), RunState::Stopped);
    }

    #[test]
    fn clones_share_state() {
        let control = ControlHandle::new();
        let clone = control.clone();
        control.pause();
        assert!(clone.is_paused());
        clone.stop();
        assert!(control.is_stopped());
    }

    #[test]
    fn wait_returns_immediately_when_running() {
        let control = ControlHandle::new();
        let start = std::time::Instant::now();
        control.wait_while_paused();
        assert!(start.elapsed() < PAUSE_POLL_INTERVAL);
    }
}
