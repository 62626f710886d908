//! Job description for an extraction run.
//!
//! [`ExtractionJob`] is a builder that collects the source directory, the
//! destination directory, the target sampling rate, and the output image
//! format. A job is constructed once per run and handed to
//! [`FrameSampler`](crate::FrameSampler) by value; it is not mutated once
//! execution starts.

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::path::{Path, PathBuf};

/// Output image format for sampled frames.
///
/// A closed set of four formats. The written file extension drives the
/// encoder selected by [`image::DynamicImage::save`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImageFormat {
    /// JPEG with the `.jpg` extension.
    Jpg,
    /// JPEG with the `.jpeg` extension.
    Jpeg,
    /// PNG. This is the default.
    #[default]
    Png,
    /// TIFF with the `.tif` extension.
    Tif,
}

impl ImageFormat {
    /// All supported formats, in menu order.
    pub const ALL: [ImageFormat; 4] = [
        ImageFormat::Jpg,
        ImageFormat::Jpeg,
        ImageFormat::Png,
        ImageFormat::Tif,
    ];

    /// The file extension written for this format (no leading dot).
    pub fn extension(self) -> &'static str {
        match self {
            ImageFormat::Jpg => "jpg",
            ImageFormat::Jpeg => "jpeg",
            ImageFormat::Png => "png",
            ImageFormat::Tif => "tif",
        }
    }

    /// Parse a format name, case-insensitively. A leading dot is tolerated.
    ///
    /// Returns `None` for anything outside the supported set.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().trim_start_matches('.').to_ascii_lowercase().as_str() {
            "jpg" => Some(ImageFormat::Jpg),
            "jpeg" => Some(ImageFormat::Jpeg),
            "png" => Some(ImageFormat::Png),
            "tif" => Some(ImageFormat::Tif),
            _ => None,
        }
    }
}

impl Display for ImageFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.extension())
    }
}

/// The full request for one extraction run.
///
/// # Example
///
/// ```no_run
/// use framesift::{ExtractionJob, ImageFormat};
///
/// let job = ExtractionJob::new("videos")
///     .with_output_dir("frames")
///     .with_rate(10)
///     .with_format(ImageFormat::Png);
/// ```
#[derive(Debug, Clone)]
#[must_use]
pub struct ExtractionJob {
    /// Directory scanned for video files.
    pub(crate) input_dir: PathBuf,
    /// Destination directory. `None` falls back to `input_dir`.
    pub(crate) output_dir: Option<PathBuf>,
    /// Target sampling rate in frames per second. Always ≥ 1.
    pub(crate) rate: u32,
    /// Output image format.
    pub(crate) format: ImageFormat,
}

impl ExtractionJob {
    /// Create a job for the given source directory.
    ///
    /// Defaults: output directory = the source directory, rate = 1 fps,
    /// format = [`ImageFormat::Png`].
    pub fn new<P: Into<PathBuf>>(input_dir: P) -> Self {
        Self {
            input_dir: input_dir.into(),
            output_dir: None,
            rate: 1,
            format: ImageFormat::default(),
        }
    }

    /// Set the destination directory for extracted frames.
    pub fn with_output_dir<P: Into<PathBuf>>(mut self, output_dir: P) -> Self {
        self.output_dir = Some(output_dir.into());
        self
    }

    /// Set the target sampling rate in frames per second.
    ///
    /// Clamped to a minimum of 1.
    pub fn with_rate(mut self, rate: u32) -> Self {
        self.rate = rate.max(1);
        self
    }

    /// Set the output image format.
    pub fn with_format(mut self, format: ImageFormat) -> Self {
        self.format = format;
        self
    }

    /// The directory scanned for video files.
    pub fn input_dir(&self) -> &Path {
        &self.input_dir
    }

    /// The resolved destination directory.
    ///
    /// Falls back to the input directory when no output directory was set.
    pub fn output_dir(&self) -> &Path {
        self.output_dir.as_deref().unwrap_or(&self.input_dir)
    }

    /// The target sampling rate in frames per second.
    pub fn rate(&self) -> u32 {
        self.rate
    }

    /// The output image format.
    pub fn format(&self) -> ImageFormat {
        self.format
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_parse_is_case_insensitive() {
        assert_eq!(ImageFormat::parse("jpg"), Some(ImageFormat::Jpg));
        assert_eq!(ImageFormat::parse("JPEG"), Some(ImageFormat::Jpeg));
        assert_eq!(ImageFormat::parse(".png"), Some(ImageFormat::Png));
        assert_eq!(ImageFormat::parse(" Tif "), Some(ImageFormat::Tif));
        assert_eq!(ImageFormat::parse("bmp"), None);
        assert_eq!(ImageFormat::parse(""), None);
    }

    #[test]
    fn format_default_is_png() {
        assert_eq!(ImageFormat::default(), ImageFormat::Png);
    }

    #[test]
    fn format_display_matches_extension() {
        for format in ImageFormat::ALL {
            assert_eq!(format.to_string(), format.extension());
        }
    }

    #[test]
    fn output_dir_falls_back_to_input() {
        let job = ExtractionJob::new("videos");
        assert_eq!(job.output_dir(), Path::new("videos"));

        let job = job.with_output_dir("frames");
        assert_eq!(job.output_dir(), Path::new("frames"));
    }

    #[test]
    fn rate_clamps_to_one() {
        let job = ExtractionJob::new("videos").with_rate(0);
        assert_eq!(job.rate(), 1);

        let job = ExtractionJob::new("videos").with_rate(30);
        assert_eq!(job.rate(), 30);
    }
}
