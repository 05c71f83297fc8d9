use super::{CandidateScanner, build_message, discover_candidates, mock_image_path};
use std::fs::{self, File};
use tempfile::tempdir;

#[test]
fn test_discover_candidates_unset_directory() {
    assert!(discover_candidates("").is_empty());
}

#[test]
fn test_discover_candidates_missing_directory() {
    assert!(discover_candidates("/no/such/directory").is_empty());
}

#[test]
fn test_discover_candidates_ignores_non_matching_files() {
    let dir = tempdir().expect("Failed to create temp dir");
    File::create(dir.path().join("readme.txt")).unwrap();
    File::create(dir.path().join("image.jpeg")).unwrap();
    File::create(dir.path().join("no_extension")).unwrap();

    assert!(discover_candidates(dir.path().to_str().unwrap()).is_empty());
}

#[test]
fn test_discover_candidates_finds_nitf_files_recursively() {
    let dir = tempdir().expect("Failed to create temp dir");
    let nested = dir.path().join("pass1");
    fs::create_dir(&nested).unwrap();

    File::create(dir.path().join("scene_a.ntf")).unwrap();
    File::create(nested.join("scene_b.NITF")).unwrap();
    File::create(nested.join("notes.txt")).unwrap();

    let found = discover_candidates(dir.path().to_str().unwrap());
    assert_eq!(found.len(), 2);
    assert_eq!(
        found
            .iter()
            .filter(|p| p.ends_with("scene_a.ntf"))
            .count(),
        1
    );
    assert_eq!(
        found
            .iter()
            .filter(|p| p.ends_with("scene_b.NITF"))
            .count(),
        1
    );
}

#[test]
fn test_scanner_delegates_to_discovery() {
    let dir = tempdir().expect("Failed to create temp dir");
    File::create(dir.path().join("scene_a.ntf")).unwrap();

    let mut scanner = CandidateScanner::new(dir.path().to_str().unwrap());
    assert_eq!(scanner.scan().len(), 1);

    let mut unset = CandidateScanner::new("");
    assert!(unset.scan().is_empty());
}

#[test]
fn test_scanner_reports_missing_directory_once() {
    let mut scanner = CandidateScanner::new("/no/such/directory");
    assert!(scanner.scan().is_empty());
    // The guard is spent after the first scan of a missing directory
    assert!(!scanner.note_missing_directory());
    assert!(scanner.scan().is_empty());
}

#[test]
fn test_missing_directory_guard_fires_once() {
    let mut scanner = CandidateScanner::new("/no/such/directory");
    assert!(scanner.note_missing_directory());
    assert!(!scanner.note_missing_directory());
    assert!(!scanner.note_missing_directory());
}

#[test]
fn test_build_message_round_trips_path() {
    let path = "/data/nitf/pass1/scene_a.ntf";
    let envelope = build_message(path);

    let serialized = serde_json::to_string(&envelope).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&serialized).unwrap();
    let address = parsed["FileLocation"]["MessageData"]["LocationAndStatus"]["Location"]
        ["Network"]["Address"]
        .as_str()
        .unwrap();
    assert_eq!(address, path);
}

#[test]
fn test_mock_image_path_shape() {
    for _ in 0..100 {
        let path = mock_image_path();
        let digits = path
            .strip_prefix("/mock/data/test_image_")
            .and_then(|rest| rest.strip_suffix(".nitf"))
            .expect("unexpected mock path shape");
        assert_eq!(digits.len(), 4);
        let number: u32 = digits.parse().expect("mock path digits not numeric");
        assert!((1000..=9999).contains(&number));
    }
}
