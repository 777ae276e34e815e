use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ScanError>;

/// Errors raised while scanning a source tree.
///
/// Only [`ScanError::Configuration`] and [`ScanError::ConfigFile`] abort a run.
/// Everything else is tied to a single directory or file and is recovered by
/// logging it and leaving that entry out of the results.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("cannot list directory {}: {source}", .path.display())]
    DirectoryAccess {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("cannot read {}: {source}", .path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} is not valid UTF-8 text: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: std::string::FromUtf8Error,
    },

    #[error("invalid configuration: {0}")]
    Configuration(String),

    #[error("cannot load config file {}: {message}", .path.display())]
    ConfigFile { path: PathBuf, message: String },
}

impl ScanError {
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            ScanError::Configuration(_) | ScanError::ConfigFile { .. }
        )
    }

    /// Path of the directory or file the error refers to, if any.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            ScanError::DirectoryAccess { path, .. }
            | ScanError::FileRead { path, .. }
            | ScanError::Decode { path, .. }
            | ScanError::ConfigFile { path, .. } => Some(path),
            ScanError::Configuration(_) => None,
        }
    }
}
