//! # framesift
//!
//! Walk a directory of video files and dump a sampled subset of their frames
//! as image files, at a chosen sampling rate and image format.
//!
//! `framesift` decodes each video sequentially through FFmpeg (via the
//! [`ffmpeg-next`](https://crates.io/crates/ffmpeg-next) crate), keeps every
//! Nth frame, and writes it with the [`image`] crate into one subfolder per
//! input video. A run reports progress through a [`ProgressSink`] and obeys
//! pause/resume/stop requests issued through a [`ControlHandle`], so the
//! same core drives both the bundled CLI and embedding frontends.
//!
//! ## Quick start
//!
//! ```no_run
//! use framesift::{ControlHandle, ExtractionJob, FrameSampler, ImageFormat, NoOpProgress};
//!
//! let job = ExtractionJob::new("videos")
//!     .with_output_dir("frames")
//!     .with_rate(10)
//!     .with_format(ImageFormat::Png);
//!
//! let outcome = FrameSampler::new(job).run(&NoOpProgress, &ControlHandle::new())?;
//! # Ok::<(), framesift::SiftError>(())
//! ```
//!
//! ## Background worker
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use framesift::{ExtractionJob, FrameSampler, NoOpProgress};
//!
//! let worker = FrameSampler::spawn(ExtractionJob::new("videos"), Arc::new(NoOpProgress));
//! worker.control().pause();
//! worker.control().resume();
//! worker.control().stop();
//! let outcome = worker.join()?;
//! # Ok::<(), framesift::SiftError>(())
//! ```
//!
//! ## Behavior
//!
//! - Discovery is non-recursive and matches `mp4`, `avi`, `mov`, and `mkv`
//!   extensions case-insensitively; videos are processed in lexicographic
//!   file-name order.
//! - Per video, the sampling interval is `max(1, floor(original_fps) / rate)`,
//!   so at least the first frame is always kept.
//! - Output layout is `{output_dir}/{video_stem}/frame_{0000..}.{ext}` with
//!   gapless zero-padded indices.
//! - A stop abandons the run at the next frame checkpoint and leaves partial
//!   output on disk; any error aborts the whole job with no retries.
//!
//! ## Requirements
//!
//! FFmpeg development libraries must be installed on the system for
//! `ffmpeg-next` to build and link.

pub mod control;
pub mod decoder;
pub mod discover;
pub mod error;
pub mod job;
pub mod progress;
pub mod sampler;
pub mod source;

pub use control::{ControlHandle, RunState};
pub use decoder::FrameDecoder;
pub use discover::{VIDEO_EXTENSIONS, discover_videos};
pub use error::SiftError;
pub use job::{ExtractionJob, ImageFormat};
pub use progress::{NoOpProgress, ProgressSink};
pub use sampler::{
    FrameSampler, Outcome, SamplerWorker, frame_file_name, sampling_interval, total_frame_count,
};
pub use source::VideoSource;
