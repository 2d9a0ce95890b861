use std::path::{Path, PathBuf};

use cranlock_util::fs::{ensure_parent_dir, remove_quietly, sibling};
use tempfile::TempDir;

#[test]
fn test_sibling_in_directory() {
    let path = sibling(Path::new("project/packages.txt"), "versions.tsv");
    assert_eq!(path, PathBuf::from("project/versions.tsv"));
}

#[test]
fn test_sibling_bare_filename() {
    let path = sibling(Path::new("packages.txt"), "dependencies.R");
    assert_eq!(path, PathBuf::from("dependencies.R"));
}

#[test]
fn test_ensure_parent_dir_creates_nested() {
    let tmp = TempDir::new().unwrap();
    let file = tmp.path().join("x").join("y").join("out.R");
    ensure_parent_dir(&file).unwrap();
    assert!(tmp.path().join("x").join("y").is_dir());
    assert!(!file.exists());
}

#[test]
fn test_ensure_parent_dir_idempotent() {
    let tmp = TempDir::new().unwrap();
    let file = tmp.path().join("out.R");
    ensure_parent_dir(&file).unwrap();
    ensure_parent_dir(&file).unwrap();
    assert!(tmp.path().is_dir());
}

#[test]
fn test_remove_quietly_existing_and_missing() {
    let tmp = TempDir::new().unwrap();
    let file = tmp.path().join("versions.tsv");
    std::fs::write(&file, "cli\t3.6.2\n").unwrap();
    remove_quietly(&file);
    assert!(!file.exists());
    // Second removal is a no-op
    remove_quietly(&file);
}
