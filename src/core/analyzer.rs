use log::info;
use std::path::{Component, Path, PathBuf};

use super::classifier::{classify, Classification};
use super::config::ScanConfig;
use super::error::{Result, ScanError};
use super::graph::{reduce_edges, ImportEdge};
use super::index::{build_index, DependencyIndex};
use super::scanner::FileScanner;
use crate::parsers::{default_parser, ImportParser};

/// Everything one run produces. Skipped entries are listed separately and
/// never appear in the index, classification or edges.
#[derive(Debug)]
pub struct Analysis {
    pub root: PathBuf,
    pub index: DependencyIndex,
    pub classification: Classification,
    pub edges: Vec<ImportEdge>,
    pub skipped_dirs: Vec<ScanError>,
    pub skipped_files: Vec<ScanError>,
}

pub struct CodebaseAnalyzer {
    config: ScanConfig,
    file_scanner: FileScanner,
    parser: Box<dyn ImportParser + Send + Sync>,
}

impl CodebaseAnalyzer {
    pub fn new(config: ScanConfig) -> Self {
        Self {
            config,
            file_scanner: FileScanner::new(),
            parser: default_parser(),
        }
    }

    pub fn with_parser(mut self, parser: Box<dyn ImportParser + Send + Sync>) -> Self {
        self.parser = parser;
        self
    }

    /// Runs walk, index, classify and reduce. Fails only when the configuration
    /// is unusable, and then before touching the tree.
    pub fn analyze(&self) -> Result<Analysis> {
        self.config.validate()?;
        let root = absolute_root(&self.config.root)?;

        info!(
            "Scanning {} for {} imports",
            root.display(),
            self.parser.language_name()
        );
        let scan = self.file_scanner.scan_directory(
            &root,
            &self.config.exclude,
            self.config.normalized_extension(),
        );
        info!(
            "Found {} .{} files",
            scan.files.len(),
            self.config.normalized_extension()
        );

        let indexed = build_index(&scan.files, self.parser.as_ref(), self.config.parallel);
        let classification = classify(&indexed.index, &self.config.project_prefix);
        let edges = reduce_edges(&indexed.index, &self.config.project_prefix);
        info!(
            "Indexed {} files ({} skipped): {} first-party, {} third-party imports, {} edges",
            indexed.index.len(),
            indexed.skipped.len(),
            classification.first_party.len(),
            classification.third_party.len(),
            edges.len()
        );

        Ok(Analysis {
            root,
            index: indexed.index,
            classification,
            edges,
            skipped_dirs: scan.warnings,
            skipped_files: indexed.skipped,
        })
    }
}

// Absolute without resolving symlinks, so reported paths stay under the given root.
fn absolute_root(root: &Path) -> Result<PathBuf> {
    if root.is_absolute() {
        return Ok(normalize_path(root));
    }
    let cwd = std::env::current_dir().map_err(|err| {
        ScanError::Configuration(format!("cannot resolve working directory: {err}"))
    })?;
    Ok(normalize_path(&cwd.join(root)))
}

/// Lexically drops `.` segments and folds `..` into its parent.
///
/// No filesystem access: `a/link/..` becomes `a` even if `link` is a symlink.
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                let last = normalized.components().next_back();
                let at_name = matches!(last, Some(Component::Normal(_)));
                let at_root = matches!(last, Some(Component::RootDir | Component::Prefix(_)));
                if at_name {
                    normalized.pop();
                } else if !at_root {
                    normalized.push(Component::ParentDir);
                }
            }
            other => normalized.push(other),
        }
    }
    normalized
}
