//! Shared helpers for tree walking

use std::ffi::OsStr;
use std::path::Path;

/// Check whether a file name marks a hidden entry (leading `.`).
pub fn is_hidden_name(name: &OsStr) -> bool {
    name.as_encoded_bytes().first() == Some(&b'.')
}

/// Name shown for an entry: the path as given for the root, otherwise the
/// final component.
pub fn display_name(path: &Path, depth: usize) -> String {
    if depth == 0 {
        return path.display().to_string();
    }
    path.file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}
