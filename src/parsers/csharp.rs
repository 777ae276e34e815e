use regex::Regex;
use std::path::Path;
use std::sync::OnceLock;

use super::common::read_source;
use super::ImportParser;
use crate::core::error::Result;

/// A line that, after leading whitespace, reads `using <dotted.name>;`.
///
/// Resource blocks (`using (var x = ...)`), aliases (`using X = Y;`) and
/// `using static A.B;` never take this shape and are not captured.
/// Lines may end in `\n`, `\r\n` or a lone `\r`.
const USING_PATTERN: &str = r"(?mR)^\s*using\s+([\w.]+);";

fn using_regex() -> &'static Regex {
    static USING: OnceLock<Regex> = OnceLock::new();
    USING.get_or_init(|| Regex::new(USING_PATTERN).expect("using pattern is a valid regex"))
}

/// Lexical extractor for C# `using` directives.
pub struct UsingExtractor {
    pattern: &'static Regex,
}

impl UsingExtractor {
    pub fn new() -> Self {
        Self {
            pattern: using_regex(),
        }
    }

    /// Returns every directive target in file order, duplicates included.
    pub fn extract_imports(&self, content: &str) -> Vec<String> {
        self.pattern
            .captures_iter(content)
            .filter_map(|caps| caps.get(1))
            .map(|target| target.as_str().to_string())
            .collect()
    }
}

impl Default for UsingExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl ImportParser for UsingExtractor {
    fn parse_file(&self, file_path: &Path) -> Result<Vec<String>> {
        let source = read_source(file_path)?;
        Ok(self.extract_imports(&source))
    }

    fn language_name(&self) -> &str {
        "csharp"
    }
}
