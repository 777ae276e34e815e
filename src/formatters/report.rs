use std::fmt::Write as _;

use crate::core::{Analysis, Classification, DependencyIndex};

/// Human-readable console report.
pub struct ReportFormatter {
    include_summary: bool,
}

impl ReportFormatter {
    pub fn new() -> Self {
        Self {
            include_summary: true,
        }
    }

    pub fn with_summary(mut self, include_summary: bool) -> Self {
        self.include_summary = include_summary;
        self
    }

    pub fn format(&self, analysis: &Analysis) -> String {
        let mut out = self.format_index(&analysis.index);
        if self.include_summary {
            out.push('\n');
            out.push_str(&self.format_summary(&analysis.classification));
        }
        out
    }

    /// One `path: ["A", "B"]` line per file with its unfiltered imports.
    pub fn format_index(&self, index: &DependencyIndex) -> String {
        let mut out = String::new();
        for (path, imports) in index.iter() {
            let _ = writeln!(out, "{}: {:?}", path.display(), imports);
        }
        out
    }

    pub fn format_summary(&self, classification: &Classification) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "First-party dependencies ({}):",
            classification.first_party.len()
        );
        for import in &classification.first_party {
            let _ = writeln!(out, "  {import}");
        }
        let _ = writeln!(
            out,
            "Third-party dependencies ({}):",
            classification.third_party.len()
        );
        for import in &classification.third_party {
            let _ = writeln!(out, "  {import}");
        }
        out
    }
}

impl Default for ReportFormatter {
    fn default() -> Self {
        Self::new()
    }
}
