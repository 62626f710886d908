//! Video discovery integration tests.
//!
//! These tests only inspect file names, so they run everywhere without media
//! fixtures.

use std::fs;
use std::path::Path;

use framesift::{
    ControlHandle, ExtractionJob, FrameSampler, NoOpProgress, SiftError, discover_videos,
};

fn touch(path: &Path) {
    fs::write(path, b"").expect("Failed to create file");
}

#[test]
fn discovery_is_case_insensitive_and_ignores_non_videos() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    touch(&dir.path().join("a.MP4"));
    touch(&dir.path().join("b.txt"));
    touch(&dir.path().join("c.mkv"));

    let videos = discover_videos(dir.path()).expect("Discovery failed");
    let names: Vec<_> = videos
        .iter()
        .map(|path| path.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["a.MP4", "c.mkv"]);
}

#[test]
fn discovery_covers_all_recognized_extensions() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    for name in ["a.mp4", "b.avi", "c.mov", "d.mkv", "e.webm", "f.mp3"] {
        touch(&dir.path().join(name));
    }

    let videos = discover_videos(dir.path()).expect("Discovery failed");
    assert_eq!(videos.len(), 4);
}

#[test]
fn discovery_is_not_recursive() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let nested = dir.path().join("nested");
    fs::create_dir(&nested).expect("Failed to create subdir");
    touch(&nested.join("hidden.mp4"));
    touch(&dir.path().join("top.mp4"));

    let videos = discover_videos(dir.path()).expect("Discovery failed");
    assert_eq!(videos.len(), 1);
    assert!(videos[0].ends_with("top.mp4"));
}

#[test]
fn discovery_orders_by_file_name() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    // Created out of order on purpose.
    for name in ["zeta.mp4", "alpha.mkv", "mid.avi"] {
        touch(&dir.path().join(name));
    }

    let videos = discover_videos(dir.path()).expect("Discovery failed");
    let names: Vec<_> = videos
        .iter()
        .map(|path| path.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["alpha.mkv", "mid.avi", "zeta.mp4"]);
}

#[test]
fn empty_directory_yields_no_videos_found() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    touch(&dir.path().join("readme.txt"));

    let result = discover_videos(dir.path());
    assert!(matches!(result, Err(SiftError::NoVideosFound(_))));
}

#[test]
fn missing_directory_yields_invalid_input() {
    let result = discover_videos("this_directory_does_not_exist");
    assert!(matches!(result, Err(SiftError::InvalidInputDirectory(_))));
}

#[test]
fn a_file_is_not_a_valid_input_directory() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let file = dir.path().join("clip.mp4");
    touch(&file);

    let result = discover_videos(&file);
    assert!(matches!(result, Err(SiftError::InvalidInputDirectory(_))));
}

#[test]
fn run_against_empty_source_has_zero_side_effects() {
    let input = tempfile::tempdir().expect("Failed to create temp dir");
    let output_root = tempfile::tempdir().expect("Failed to create temp dir");
    let output = output_root.path().join("frames");

    let job = ExtractionJob::new(input.path()).with_output_dir(&output);
    let result = FrameSampler::new(job).run(&NoOpProgress, &ControlHandle::new());

    assert!(matches!(result, Err(SiftError::NoVideosFound(_))));
    assert!(
        !output.exists(),
        "No output directory may be created when no videos are found",
    );
}
