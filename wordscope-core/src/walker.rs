// Document discovery
//
// Equivalent of globbing `<root>/**/*.<extension>`: files directly in a
// directory come before files in its subdirectories. Entries are visited in
// name order so repeated runs print reports in the same order.

use crate::error::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Recursively collect regular files under `root` whose name ends in
/// `.<extension>`.
///
/// A missing root yields no files. Directories whose names match the
/// pattern are descended into, never returned. Symlinked directories are
/// not followed. Directories that cannot be listed are logged and skipped.
pub fn find_documents(root: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    let mut found = Vec::new();
    if !root.is_dir() {
        debug!(root = %root.display(), "document root missing, nothing to scan");
        return Ok(found);
    }
    let suffix = format!(".{extension}");
    walk(root, &suffix, &mut found);
    Ok(found)
}

fn walk(dir: &Path, suffix: &str, found: &mut Vec<PathBuf>) {
    // Unlistable directories are skipped, like a glob would
    let mut entries: Vec<fs::DirEntry> = match fs::read_dir(dir).and_then(|iter| iter.collect()) {
        Ok(entries) => entries,
        Err(e) => {
            warn!(dir = %dir.display(), error = %e, "cannot list directory, skipping");
            return;
        }
    };
    entries.sort_by_key(|entry| entry.file_name());

    let mut subdirs = Vec::new();
    for entry in entries {
        let path = entry.path();
        let file_type = match entry.file_type() {
            Ok(file_type) => file_type,
            Err(e) => {
                debug!(path = %path.display(), error = %e, "cannot stat entry, skipping");
                continue;
            }
        };

        if file_type.is_dir() {
            subdirs.push(path);
        } else if matches_suffix(&path, suffix) && path.is_file() {
            debug!(path = %path.display(), "found document");
            found.push(path);
        }
    }

    for subdir in subdirs {
        walk(&subdir, suffix, found);
    }
}

fn matches_suffix(path: &Path, suffix: &str) -> bool {
    path.file_name()
        .map(|name| name.as_encoded_bytes().ends_with(suffix.as_bytes()))
        .unwrap_or(false)
}
