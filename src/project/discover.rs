//! Project file discovery.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::project::source::PROJECT_EXTENSION;

/// Collect the project files under `root`.
///
/// Anything that is not a directory is returned as-is, whatever its
/// extension and even if it does not exist, so reading it reports the
/// failure. A directory is walked recursively for `*.ldtk` files, returned
/// sorted by path.
pub fn find_project_files(root: &Path) -> Vec<PathBuf> {
    if !root.is_dir() {
        return vec![root.to_path_buf()];
    }

    let mut files: Vec<PathBuf> = WalkDir::new(root)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| {
            entry
                .path()
                .extension()
                .map_or(false, |ext| ext == PROJECT_EXTENSION)
        })
        .map(|entry| entry.path().to_path_buf())
        .collect();

    files.sort();
    files
}
