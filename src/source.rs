//! Opened video containers and their metadata.
//!
//! [`VideoSource`] wraps an FFmpeg demuxer context for a single video file
//! and caches the stream metadata the sampler needs: frame rate and declared
//! frame count. Opening a source is cheap relative to decoding, so the
//! sampler opens each file once to total up the expected frame counts and a
//! second time to decode.

use std::path::{Path, PathBuf};
use std::time::Duration;

use ffmpeg_next::{codec::context::Context as CodecContext, format::context::Input, media::Type};

use crate::error::SiftError;

/// An opened video file with cached stream metadata.
///
/// # Example
///
/// ```no_run
/// use framesift::VideoSource;
///
/// let source = VideoSource::open("clip.mp4")?;
/// println!("{:.2} fps, ~{} frames", source.frames_per_second(), source.frame_count());
/// # Ok::<(), framesift::SiftError>(())
/// ```
pub struct VideoSource {
    /// The opened FFmpeg input (demuxer) context.
    pub(crate) input: Input,
    /// Index of the best video stream.
    pub(crate) stream_index: usize,
    /// Path to the opened file (kept for error messages).
    pub(crate) path: PathBuf,
    frames_per_second: f64,
    frame_count: u64,
    width: u32,
    height: u32,
}

impl VideoSource {
    /// Open a video file and read its stream metadata.
    ///
    /// Initializes FFmpeg (idempotent), opens the container, and locates the
    /// best video stream.
    ///
    /// # Errors
    ///
    /// Returns [`SiftError::FileOpen`] if the file cannot be opened or its
    /// codec parameters cannot be read, and [`SiftError::NoVideoStream`] if
    /// the container has no video stream.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, SiftError> {
        let path = path.as_ref().to_path_buf();
        log::debug!("Opening video file: {}", path.display());

        // Safe to call multiple times.
        ffmpeg_next::init().map_err(|error| SiftError::FileOpen {
            path: path.clone(),
            reason: format!("FFmpeg initialisation failed: {error}"),
        })?;

        let input = ffmpeg_next::format::input(&path).map_err(|error| SiftError::FileOpen {
            path: path.clone(),
            reason: error.to_string(),
        })?;

        let stream = input
            .streams()
            .best(Type::Video)
            .ok_or(SiftError::NoVideoStream)?;
        let stream_index = stream.index();

        let decoder_context =
            CodecContext::from_parameters(stream.parameters()).map_err(|error| {
                SiftError::FileOpen {
                    path: path.clone(),
                    reason: format!("Failed to read video codec parameters: {error}"),
                }
            })?;
        let decoder = decoder_context
            .decoder()
            .video()
            .map_err(|error| SiftError::FileOpen {
                path: path.clone(),
                reason: format!("Failed to create video decoder: {error}"),
            })?;

        let width = decoder.width();
        let height = decoder.height();

        // Frames per second from the stream's average frame rate, falling
        // back to the raw rate field for containers that omit it.
        let average_rate = stream.avg_frame_rate();
        let frames_per_second = if average_rate.denominator() != 0 {
            average_rate.numerator() as f64 / average_rate.denominator() as f64
        } else {
            let rate = stream.rate();
            if rate.denominator() != 0 {
                rate.numerator() as f64 / rate.denominator() as f64
            } else {
                0.0
            }
        };

        // Declared frame count: trust the container when it states one,
        // otherwise estimate from duration and frame rate. Either value may
        // differ from the number of actually decodable frames.
        let declared_frames = stream.frames();
        let frame_count = if declared_frames > 0 {
            declared_frames as u64
        } else {
            let duration_microseconds = input.duration();
            let duration = if duration_microseconds > 0 {
                Duration::from_micros(duration_microseconds as u64)
            } else {
                Duration::ZERO
            };
            if frames_per_second > 0.0 {
                (duration.as_secs_f64() * frames_per_second) as u64
            } else {
                0
            }
        };

        Ok(Self {
            input,
            stream_index,
            path,
            frames_per_second,
            frame_count,
            width,
            height,
        })
    }

    /// The original frame rate declared by the container.
    ///
    /// May be approximate for variable-frame-rate content, and `0.0` for
    /// malformed files.
    pub fn frames_per_second(&self) -> f64 {
        self.frames_per_second
    }

    /// The declared total frame count.
    ///
    /// May under- or over-report the number of decodable frames; this is
    /// accepted and only used to size progress reporting.
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Frame width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Frame height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Path this source was opened from.
    pub fn path(&self) -> &Path {
        &self.path
    }
}
