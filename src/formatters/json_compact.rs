use anyhow::Result;
use serde_json::json;
use std::fs;
use std::path::Path;

use crate::core::Analysis;

/// JSON dump of a run for programmatic consumers
pub struct JsonCompactFormatter {
    /// Omit the per-file import lists
    minimal: bool,
}

impl JsonCompactFormatter {
    pub fn new() -> Self {
        Self { minimal: false }
    }

    pub fn minimal(mut self, minimal: bool) -> Self {
        self.minimal = minimal;
        self
    }

    pub fn format_to_file(&self, analysis: &Analysis, output_path: &Path) -> Result<()> {
        let json_content = self.format_analysis(analysis)?;
        fs::write(output_path, json_content)?;
        Ok(())
    }

    pub fn format_analysis(&self, analysis: &Analysis) -> Result<String> {
        // Edges as bare [source, target] pairs, in emission order
        let edges: Vec<[&str; 2]> = analysis
            .edges
            .iter()
            .map(|edge| [edge.source.as_str(), edge.target.as_str()])
            .collect();

        let skipped: Vec<String> = analysis
            .skipped_files
            .iter()
            .chain(&analysis.skipped_dirs)
            .filter_map(|err| err.path())
            .map(|path| path.to_string_lossy().into_owned())
            .collect();

        let mut output = json!({
            "meta": {
                "root": analysis.root.to_string_lossy(),
                "files": analysis.index.len(),
                "edges": analysis.edges.len(),
                "skipped": skipped.len(),
                "format": if self.minimal { "compact" } else { "full" }
            },
            "first_party": analysis.classification.first_party,
            "third_party": analysis.classification.third_party,
            "edges": edges,
            "skipped": skipped
        });

        if !self.minimal {
            output["files"] = serde_json::to_value(&analysis.index)?;
        }

        Ok(serde_json::to_string(&output)?)
    }
}

impl Default for JsonCompactFormatter {
    fn default() -> Self {
        Self::new()
    }
}
