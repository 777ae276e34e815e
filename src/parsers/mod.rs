pub mod common;
pub mod csharp;

use std::path::Path;

use crate::core::error::Result;

/// Extracts the ordered import targets declared by one source file.
pub trait ImportParser {
    fn parse_file(&self, file_path: &Path) -> Result<Vec<String>>;
    fn language_name(&self) -> &str;
}

/// Parser used when none is supplied explicitly.
pub fn default_parser() -> Box<dyn ImportParser + Send + Sync> {
    Box::new(csharp::UsingExtractor::new())
}
