//! Error types for the `framesift` crate.
//!
//! This module defines [`SiftError`], the unified error type returned by all
//! fallible operations in the crate. Errors carry enough context to diagnose
//! the problem at the job boundary, including file paths and upstream error
//! messages.

use std::{io::Error as IoError, path::PathBuf};

use ffmpeg_next::Error as FfmpegError;
use image::ImageError;
use thiserror::Error;

/// The unified error type for all `framesift` operations.
///
/// Every public method that can fail returns `Result<T, SiftError>`. A
/// failure anywhere in a run aborts the whole job; there are no retries and
/// no per-video skipping. A user-requested stop is **not** an error — it is
/// reported as [`Outcome::Stopped`](crate::Outcome::Stopped).
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SiftError {
    /// The input path does not exist or is not a directory.
    #[error("Input directory does not exist or is not a directory: {0}")]
    InvalidInputDirectory(PathBuf),

    /// The input directory contains no files with a recognized video extension.
    #[error("No video files found in {0}")]
    NoVideosFound(PathBuf),

    /// A video file could not be opened.
    #[error("Failed to open video file at {path}: {reason}")]
    FileOpen {
        /// Path that was passed to [`crate::VideoSource::open`].
        path: PathBuf,
        /// Underlying reason the open failed.
        reason: String,
    },

    /// The file does not contain a video stream.
    #[error("No video stream found in file")]
    NoVideoStream,

    /// A video frame could not be decoded.
    #[error("Failed to decode video frame: {0}")]
    VideoDecode(String),

    /// An error originating from the FFmpeg libraries.
    #[error("FFmpeg error: {0}")]
    Ffmpeg(String),

    /// An I/O error occurred while creating directories or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] IoError),

    /// An error from the `image` crate while encoding a frame to disk.
    #[error("Image processing error: {0}")]
    Image(#[from] ImageError),

    /// The background extraction worker panicked.
    #[error("Extraction worker panicked")]
    WorkerPanicked,
}

impl From<FfmpegError> for SiftError {
    fn from(error: FfmpegError) -> Self {
        SiftError::Ffmpeg(error.to_string())
    }
}
