//! Video file discovery.
//!
//! Scans a source directory (non-recursively) for files with a recognized
//! video extension. Anything else is ignored.

use std::path::{Path, PathBuf};

use crate::error::SiftError;

/// Extensions recognized as video containers (matched case-insensitively).
pub const VIDEO_EXTENSIONS: [&str; 4] = ["mp4", "avi", "mov", "mkv"];

/// Scan `input_dir` for video files.
///
/// The scan is non-recursive and matches extensions case-insensitively
/// against [`VIDEO_EXTENSIONS`]. Results are sorted lexicographically by
/// file name so that a run processes videos in a deterministic order
/// regardless of the platform's directory-listing order.
///
/// # Errors
///
/// - [`SiftError::InvalidInputDirectory`] if `input_dir` does not exist or
///   is not a directory.
/// - [`SiftError::NoVideosFound`] if no file matches. Nothing has been
///   created or written when this is returned.
pub fn discover_videos<P: AsRef<Path>>(input_dir: P) -> Result<Vec<PathBuf>, SiftError> {
    let input_dir = input_dir.as_ref();
    if !input_dir.is_dir() {
        return Err(SiftError::InvalidInputDirectory(input_dir.to_path_buf()));
    }

    let mut videos: Vec<PathBuf> = Vec::new();
    for entry in std::fs::read_dir(input_dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.is_file() && has_video_extension(&path) {
            videos.push(path);
        }
    }

    if videos.is_empty() {
        return Err(SiftError::NoVideosFound(input_dir.to_path_buf()));
    }

    videos.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(videos)
}

/// Check whether a path carries one of the recognized video extensions.
fn has_video_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|extension| extension.to_str())
        .is_some_and(|extension| {
            let extension = extension.to_ascii_lowercase();
            VIDEO_EXTENSIONS.contains(&extension.as_str())
        })
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::has_video_extension;

    #[test]
    fn extension_match_is_case_insensitive() {
        assert!(has_video_extension(Path::new("a.mp4")));
        assert!(has_video_extension(Path::new("a.MP4")));
        assert!(has_video_extension(Path::new("a.Mkv")));
        assert!(has_video_extension(Path::new("a.MOV")));
        assert!(has_video_extension(Path::new("a.AVI")));
    }

    #[test]
    fn non_video_extensions_rejected() {
        assert!(!has_video_extension(Path::new("a.txt")));
        assert!(!has_video_extension(Path::new("a.mp3")));
        assert!(!has_video_extension(Path::new("a.webm")));
        assert!(!has_video_extension(Path::new("a")));
        assert!(!has_video_extension(Path::new(".mp4")));
    }
}
