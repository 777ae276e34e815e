use log::{debug, warn};
use rayon::prelude::*;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use super::error::ScanError;
use super::scanner::FileInfo;
use crate::parsers::ImportParser;

/// File path to the imports it declares, in declaration order.
///
/// Keys are exactly the files that were read successfully. Iteration is
/// ordered by path so repeated runs over the same tree agree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DependencyIndex {
    entries: BTreeMap<PathBuf, Vec<String>>,
}

impl DependencyIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, path: PathBuf, imports: Vec<String>) {
        self.entries.insert(path, imports);
    }

    pub fn get(&self, path: &Path) -> Option<&[String]> {
        self.entries.get(path).map(Vec::as_slice)
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.entries.contains_key(path)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn paths(&self) -> impl Iterator<Item = &Path> {
        self.entries.keys().map(PathBuf::as_path)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Path, &[String])> {
        self.entries
            .iter()
            .map(|(path, imports)| (path.as_path(), imports.as_slice()))
    }

    /// Every import of every file, repeats included.
    pub fn all_imports(&self) -> impl Iterator<Item = &str> {
        self.entries.values().flatten().map(String::as_str)
    }
}

impl FromIterator<(PathBuf, Vec<String>)> for DependencyIndex {
    fn from_iter<I: IntoIterator<Item = (PathBuf, Vec<String>)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Result of indexing: the index plus the files left out of it.
#[derive(Debug, Default)]
pub struct IndexOutcome {
    pub index: DependencyIndex,
    pub skipped: Vec<ScanError>,
}

/// Runs `parser` over every file. A file that cannot be read or decoded is
/// logged, recorded in `skipped` and omitted from the index.
pub fn build_index(
    files: &[FileInfo],
    parser: &(dyn ImportParser + Send + Sync),
    parallel: bool,
) -> IndexOutcome {
    let results: Vec<(PathBuf, Result<Vec<String>, ScanError>)> = if parallel {
        files
            .par_iter()
            .map(|file| (file.path.clone(), parser.parse_file(&file.path)))
            .collect()
    } else {
        files
            .iter()
            .map(|file| (file.path.clone(), parser.parse_file(&file.path)))
            .collect()
    };

    let mut outcome = IndexOutcome::default();
    for (path, result) in results {
        match result {
            Ok(imports) => {
                debug!("{}: {} imports", path.display(), imports.len());
                outcome.index.insert(path, imports);
            }
            Err(err) => {
                warn!("Skipping file: {err}");
                outcome.skipped.push(err);
            }
        }
    }
    outcome
}
