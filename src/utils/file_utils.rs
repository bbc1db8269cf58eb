//! File system helpers for dataset folders
//!
//! Images and masks are paired through the numeric identifier embedded in
//! parentheses in their file names, e.g. `Oil (263).jpg` and `Oil (263).png`.

use std::fs;
use std::path::{Path, PathBuf};
use lazy_static::lazy_static;
use regex::Regex;

use crate::errors::DatasetResult;

lazy_static! {
    static ref IDENTIFIER_PATTERN: Regex = Regex::new(r"\(([^)]*)\)").expect("valid identifier pattern");
}

/// Extract the identifier inside the first pair of parentheses
///
/// # Returns
/// `Some("263")` for `Oil (263).jpg`, `None` when the name has no parentheses
pub fn extract_identifier(file_name: &str) -> Option<&str> {
    IDENTIFIER_PATTERN.captures(file_name)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
        .filter(|id| !id.is_empty())
}

/// Mask file name for an identifier, as in `Oil (263).png`
pub fn mask_file_name(prefix: &str, identifier: &str) -> String {
    format!("{} ({}).png", prefix, identifier)
}

/// Check a path's extension case-insensitively
pub fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy().eq_ignore_ascii_case(extension.trim_start_matches('.')))
        .unwrap_or(false)
}

/// List the files of `dir` with the given extension, sorted by name
pub fn list_files_with_extension(dir: &Path, extension: &str) -> DatasetResult<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && has_extension(&path, extension) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// List every regular file of `dir`, sorted by name
pub fn list_files(dir: &Path) -> DatasetResult<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Create a directory and its parents if missing
pub fn ensure_dir(dir: &Path) -> DatasetResult<()> {
    fs::create_dir_all(dir)?;
    Ok(())
}

/// Create the parent directory of `path` if missing
pub fn ensure_parent_dir(path: &Path) -> DatasetResult<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => ensure_dir(parent),
        _ => Ok(()),
    }
}

/// File stem as a string, or an empty string if there is none
pub fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().to_string())
        .unwrap_or_default()
}
