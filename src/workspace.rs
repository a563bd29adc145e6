//! Workspace file discovery
//!
//! Recursively scans a directory for script files the outliner understands,
//! producing the kind of deterministic file list an editor shows in its
//! project sidebar.

use log::warn;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::language::Language;

/// Collect every supported script file under `root`, sorted by path.
///
/// Unreadable directory entries are skipped with a warning; the scan itself
/// never fails. Symlinks are not followed.
pub fn collect_script_files(root: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    for entry in WalkDir::new(root).follow_links(false) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                warn!(
                    "Skipping unreadable entry under '{}': {}",
                    root.display(),
                    err
                );
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.into_path();
        if Language::from_path(&path).is_some() {
            files.push(path);
        }
    }
    files.sort();
    files
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
