use log::{debug, warn};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

use super::error::ScanError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileInfo {
    pub path: PathBuf,
}

/// Files found by a walk, plus the directories that could not be listed.
#[derive(Debug, Default)]
pub struct ScanOutcome {
    pub files: Vec<FileInfo>,
    pub warnings: Vec<ScanError>,
}

pub struct FileScanner;

impl FileScanner {
    pub fn new() -> Self {
        Self
    }

    /// Walks `root_path` top-down, pruning every directory whose basename is in
    /// `excluded_dirs` and keeping files whose name ends in `.{extension}`.
    ///
    /// Unlistable directories are logged and skipped; the walk carries on with
    /// their siblings.
    pub fn scan_directory(
        &self,
        root_path: &Path,
        excluded_dirs: &BTreeSet<String>,
        extension: &str,
    ) -> ScanOutcome {
        let suffix = format!(".{}", extension.trim_start_matches('.'));
        let mut outcome = ScanOutcome::default();

        let walker = WalkDir::new(root_path)
            .follow_links(false)
            .into_iter()
            .filter_entry(|entry| !is_excluded(entry, excluded_dirs));

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    let path = err
                        .path()
                        .map(Path::to_path_buf)
                        .unwrap_or_else(|| root_path.to_path_buf());
                    let err = ScanError::DirectoryAccess { path, source: err };
                    warn!("Skipping: {err}");
                    outcome.warnings.push(err);
                    continue;
                }
            };

            if entry.file_type().is_dir() {
                continue;
            }

            let matches = entry
                .file_name()
                .to_str()
                .map_or(false, |name| name.ends_with(&suffix));
            if matches && entry.path().is_file() {
                outcome.files.push(FileInfo {
                    path: entry.into_path(),
                });
            }
        }

        debug!(
            "Walk of {} found {} candidate files",
            root_path.display(),
            outcome.files.len()
        );
        outcome
    }
}

impl Default for FileScanner {
    fn default() -> Self {
        Self::new()
    }
}

// The root itself is never pruned, only directories found beneath it.
fn is_excluded(entry: &DirEntry, excluded_dirs: &BTreeSet<String>) -> bool {
    entry.depth() > 0
        && entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .map_or(false, |name| excluded_dirs.contains(name))
}
