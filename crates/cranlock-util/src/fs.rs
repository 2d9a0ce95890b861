use std::path::{Path, PathBuf};

/// Path of `filename` in the same directory as `file`.
///
/// `sibling(Path::new("proj/packages.txt"), "versions.tsv")` is
/// `proj/versions.tsv`. A bare filename resolves against the current directory.
pub fn sibling(file: &Path, filename: &str) -> PathBuf {
    match file.parent() {
        Some(dir) => dir.join(filename),
        None => PathBuf::from(filename),
    }
}

/// Ensure the parent directory of `path` exists, creating it if needed.
pub fn ensure_parent_dir(path: &Path) -> std::io::Result<()> {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() && !dir.exists() => std::fs::create_dir_all(dir),
        _ => Ok(()),
    }
}

/// Remove a file, ignoring a missing one. Failures are logged, not returned.
pub fn remove_quietly(path: &Path) {
    if !path.exists() {
        return;
    }
    if let Err(e) = std::fs::remove_file(path) {
        tracing::warn!("Failed to remove {}: {e}", path.display());
    }
}
