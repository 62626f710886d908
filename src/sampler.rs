//! The frame-sampling core.
//!
//! [`FrameSampler`] executes an [`ExtractionJob`]: it discovers the video
//! files, totals their declared frame counts for progress reporting, then
//! stream-decodes each video and writes every Nth frame to a per-video
//! subfolder, honoring pause and stop requests between frames.

use std::path::PathBuf;
use std::sync::Arc;
use std::thread::JoinHandle;

use crate::{
    control::ControlHandle,
    decoder::FrameDecoder,
    discover::discover_videos,
    error::SiftError,
    job::{ExtractionJob, ImageFormat},
    progress::ProgressSink,
    source::VideoSource,
};

/// How a run ended when it did not fail.
///
/// A user-requested stop is deliberately not an error; callers that need to
/// distinguish failure use the `Err` arm of the run result instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum Outcome {
    /// Every discovered video was decoded to its end of stream.
    Completed,
    /// The controller requested a stop; decoding was abandoned at the next
    /// frame checkpoint. Frames already written stay on disk.
    Stopped,
}

/// Sampling interval for a video: keep one frame out of every `interval`.
///
/// `max(1, floor(original_fps) / rate)` — never zero, so at least the first
/// frame of every video is kept even when the requested rate exceeds the
/// original frame rate.
pub fn sampling_interval(original_fps: f64, rate: u32) -> u64 {
    let original = original_fps.max(0.0) as u64;
    (original / u64::from(rate.max(1))).max(1)
}

/// File name for the `index`-th frame written for a video.
///
/// Indices are zero-padded to four digits and gapless within a video's
/// output subfolder: `frame_0000.png`, `frame_0001.png`, ...
pub fn frame_file_name(index: u64, format: ImageFormat) -> String {
    format!("frame_{index:04}.{}", format.extension())
}

/// Sum of the declared frame counts of all given videos.
///
/// Opens each file just long enough to read its metadata and releases the
/// handle before opening the next. The result sizes progress reporting and
/// is not reconciled against the decodable frame count.
///
/// # Errors
///
/// Fails with the first [`SiftError::FileOpen`] / [`SiftError::NoVideoStream`]
/// encountered; a file that cannot be opened aborts the whole job.
pub fn total_frame_count(videos: &[PathBuf]) -> Result<u64, SiftError> {
    let mut total = 0u64;
    for path in videos {
        let source = VideoSource::open(path)?;
        total += source.frame_count();
    }
    Ok(total)
}

/// Executes one [`ExtractionJob`].
///
/// # Example
///
/// ```no_run
/// use framesift::{ControlHandle, ExtractionJob, FrameSampler, ImageFormat, NoOpProgress};
///
/// let job = ExtractionJob::new("videos").with_rate(10).with_format(ImageFormat::Png);
/// let outcome = FrameSampler::new(job).run(&NoOpProgress, &ControlHandle::new())?;
/// # Ok::<(), framesift::SiftError>(())
/// ```
pub struct FrameSampler {
    job: ExtractionJob,
}

impl FrameSampler {
    /// Create a sampler for the given job.
    pub fn new(job: ExtractionJob) -> Self {
        Self { job }
    }

    /// The job this sampler will execute.
    pub fn job(&self) -> &ExtractionJob {
        &self.job
    }

    /// Discover the video files this job would process, in run order.
    ///
    /// # Errors
    ///
    /// See [`discover_videos`].
    pub fn discover(&self) -> Result<Vec<PathBuf>, SiftError> {
        discover_videos(self.job.input_dir())
    }

    /// Run the job to completion, stop, or failure.
    ///
    /// For each discovered video this creates a destination subfolder named
    /// after the video's file stem, decodes its frames in order, and writes
    /// every Nth frame as `frame_{index:04}.{ext}`. `sink` receives the
    /// expected total before decoding starts and one update per decoded
    /// frame. `control` is consulted before every decode: a pause blocks
    /// (polling at ~100 ms) until resume or stop, and a stop abandons the
    /// current and all remaining videos.
    ///
    /// Two videos sharing a file stem (`a.mp4`, `a.mkv`) map to the same
    /// subfolder and intermix their frames; the later one overwrites.
    ///
    /// # Errors
    ///
    /// Any discovery, open, decode, or write error is terminal for the whole
    /// job. No retries, no per-video skipping.
    pub fn run(
        &self,
        sink: &dyn ProgressSink,
        control: &ControlHandle,
    ) -> Result<Outcome, SiftError> {
        // Discover before touching the destination: an empty source
        // directory must leave zero side effects.
        let videos = self.discover()?;
        let output_dir = self.job.output_dir();
        std::fs::create_dir_all(output_dir)?;

        let total = total_frame_count(&videos)?;
        sink.set_total(total);
        log::info!(
            "Sampling {} video(s), ~{} frames total, rate {} fps, format {}",
            videos.len(),
            total,
            self.job.rate(),
            self.job.format(),
        );

        let mut frames_done = 0u64;

        for path in &videos {
            if control.is_stopped() {
                return Ok(Outcome::Stopped);
            }

            let stem = path
                .file_stem()
                .map(|stem| stem.to_os_string())
                .unwrap_or_default();
            let frame_dir = output_dir.join(&stem);
            std::fs::create_dir_all(&frame_dir)?;

            let source = VideoSource::open(path)?;
            let interval = sampling_interval(source.frames_per_second(), self.job.rate());
            log::debug!(
                "{}: {:.2} fps, interval {}",
                path.display(),
                source.frames_per_second(),
                interval,
            );

            let mut decoder = FrameDecoder::new(source)?;
            let mut frame_index = 0u64;
            let mut extracted_index = 0u64;

            loop {
                control.wait_while_paused();
                if control.is_stopped() {
                    return Ok(Outcome::Stopped);
                }

                let Some(frame) = decoder.next() else {
                    break;
                };
                let image = frame?;

                if frame_index % interval == 0 {
                    let file = frame_dir.join(frame_file_name(extracted_index, self.job.format()));
                    image.save(&file)?;
                    extracted_index += 1;
                }

                frame_index += 1;
                frames_done += 1;
                sink.frame_processed(frames_done);
            }

            log::debug!(
                "{}: wrote {} of {} decoded frame(s)",
                path.display(),
                extracted_index,
                frame_index,
            );
        }

        Ok(Outcome::Completed)
    }

    /// Run the job on a background worker thread.
    ///
    /// Exactly one worker decodes video and writes files; the returned
    /// [`SamplerWorker`] exposes the [`ControlHandle`] for pause/resume/stop
    /// and joins the worker for the result.
    pub fn spawn(job: ExtractionJob, sink: Arc<dyn ProgressSink>) -> SamplerWorker {
        let control = ControlHandle::new();
        let worker_control = control.clone();
        let handle = std::thread::spawn(move || {
            FrameSampler::new(job).run(sink.as_ref(), &worker_control)
        });
        SamplerWorker { control, handle }
    }
}

/// A running background extraction.
///
/// Created by [`FrameSampler::spawn`].
pub struct SamplerWorker {
    control: ControlHandle,
    handle: JoinHandle<Result<Outcome, SiftError>>,
}

impl SamplerWorker {
    /// The control handle shared with the worker.
    pub fn control(&self) -> &ControlHandle {
        &self.control
    }

    /// Whether the worker has finished (completed, stopped, or failed).
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Wait for the worker and return the run result.
    ///
    /// # Errors
    ///
    /// Returns the worker's own error, or [`SiftError::WorkerPanicked`] if
    /// the worker thread panicked.
    pub fn join(self) -> Result<Outcome, SiftError> {
        self.handle.join().map_err(|_| SiftError::WorkerPanicked)?
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interval_is_floor_of_fps_over_rate() {
        assert_eq!(sampling_interval(30.0, 10), 3);
        assert_eq!(sampling_interval(30.0, 7), 4);
        assert_eq!(sampling_interval(25.0, 1), 25);
        assert_eq!(sampling_interval(29.97, 10), 2); // floor(29.97) = 29
    }

    #[test]
    fn interval_is_never_zero() {
        // Requested rate above the original frame rate.
        assert_eq!(sampling_interval(24.0, 60), 1);
        assert_eq!(sampling_interval(24.0, 24), 1);
        // Degenerate metadata.
        assert_eq!(sampling_interval(0.0, 10), 1);
        assert_eq!(sampling_interval(0.5, 10), 1);
        assert_eq!(sampling_interval(-1.0, 10), 1);
    }

    #[test]
    fn interval_tolerates_zero_rate() {
        // Job construction clamps the rate, but the helper defends anyway.
        assert_eq!(sampling_interval(30.0, 0), 30);
    }

    #[test]
    fn frame_names_are_zero_padded() {
        assert_eq!(frame_file_name(0, ImageFormat::Png), "frame_0000.png");
        assert_eq!(frame_file_name(29, ImageFormat::Jpg), "frame_0029.jpg");
        assert_eq!(frame_file_name(9999, ImageFormat::Tif), "frame_9999.tif");
        // Width grows past four digits rather than truncating.
        assert_eq!(frame_file_name(12345, ImageFormat::Jpeg), "frame_12345.jpeg");
    }
}
