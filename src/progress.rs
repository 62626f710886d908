//! Progress reporting.
//!
//! [`ProgressSink`] receives two kinds of events from a run: the total
//! expected frame count (once, before decoding starts) and the cumulative
//! number of frames processed (once per decoded frame, sampled or skipped).
//! Frontends implement this to drive a terminal bar, a GUI progress widget,
//! or nothing at all.
//!
//! # Example
//!
//! ```
//! use framesift::ProgressSink;
//!
//! struct PrintProgress;
//!
//! impl ProgressSink for PrintProgress {
//!     fn set_total(&self, total_frames: u64) {
//!         println!("expecting {total_frames} frames");
//!     }
//!
//!     fn frame_processed(&self, frames_done: u64) {
//!         println!("{frames_done} frames done");
//!     }
//! }
//! ```

/// Trait for receiving progress updates during a run.
///
/// Implementations must be [`Send`] and [`Sync`] because the run executes on
/// a worker thread while the sink is typically observed from the foreground.
///
/// Progress sinks are **infallible** — they observe but cannot halt the run.
/// Use a [`ControlHandle`](crate::ControlHandle) for pause and stop.
pub trait ProgressSink: Send + Sync {
    /// Called once before decoding starts, with the sum of all declared
    /// frame counts. Container metadata may under- or over-report the
    /// decodable frame count, so the reported progress may finish short of
    /// or past this total.
    fn set_total(&self, total_frames: u64);

    /// Called after every decoded frame with the cumulative count of frames
    /// processed across all videos so far.
    fn frame_processed(&self, frames_done: u64);
}

/// A no-op sink that discards all progress notifications.
pub struct NoOpProgress;

impl ProgressSink for NoOpProgress {
    fn set_total(&self, _total_frames: u64) {}
    fn frame_processed(&self, _frames_done: u64) {}
}
