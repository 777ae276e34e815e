use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use super::error::{Result, ScanError};

/// Directory basenames skipped by default: tooling, config, build, content and binary dirs.
pub const DEFAULT_EXCLUDED_DIRS: [&str; 6] = ["_Tiled", ".config", ".bin", "Content", "python", "obj"];
pub const DEFAULT_EXTENSION: &str = "cs";
pub const DEFAULT_PROJECT_PREFIX: &str = "ThroneGame";

/// Everything a scan needs, passed explicitly to each stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScanConfig {
    /// Root of the source tree to walk
    pub root: PathBuf,
    /// Exact directory basenames pruned at any depth
    pub exclude: BTreeSet<String>,
    /// Target file extension, with or without the leading dot
    pub extension: String,
    /// Namespace prefix marking first-party imports
    pub project_prefix: String,
    /// Read and parse files on the rayon pool
    pub parallel: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            exclude: DEFAULT_EXCLUDED_DIRS.iter().map(|d| d.to_string()).collect(),
            extension: DEFAULT_EXTENSION.to_string(),
            project_prefix: DEFAULT_PROJECT_PREFIX.to_string(),
            parallel: true,
        }
    }
}

impl ScanConfig {
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    pub fn with_exclude<I, S>(mut self, dirs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude = dirs.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    pub fn with_project_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.project_prefix = prefix.into();
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn from_toml_str(source: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(source)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let source = fs::read_to_string(path).map_err(|err| ScanError::ConfigFile {
            path: path.to_path_buf(),
            message: err.to_string(),
        })?;
        Self::from_toml_str(&source).map_err(|err| ScanError::ConfigFile {
            path: path.to_path_buf(),
            message: err.to_string(),
        })
    }

    /// Extension without its leading dot, e.g. `cs`.
    pub fn normalized_extension(&self) -> &str {
        self.extension.trim_start_matches('.')
    }

    /// Checks the preconditions that must hold before any traversal starts.
    pub fn validate(&self) -> Result<()> {
        if !self.root.exists() {
            return Err(ScanError::Configuration(format!(
                "root directory {} does not exist",
                self.root.display()
            )));
        }
        if !self.root.is_dir() {
            return Err(ScanError::Configuration(format!(
                "root {} is not a directory",
                self.root.display()
            )));
        }
        if self.normalized_extension().is_empty() {
            return Err(ScanError::Configuration(
                "target extension must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
