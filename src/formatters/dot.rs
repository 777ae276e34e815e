//! Graphviz DOT output.
//!
//! Nodes are declared first, in the order they were first seen, then one
//! `"a" -> "b";` statement per edge. No attributes or styling are emitted;
//! layout and rendering belong to Graphviz (`dot -Tpng deps.dot -o deps.png`).

use anyhow::Result;
use petgraph::visit::EdgeRef;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use crate::core::{build_graph, DependencyGraph, ImportEdge};

pub struct DotFormatter {
    graph_name: String,
}

impl DotFormatter {
    pub fn new() -> Self {
        Self {
            graph_name: "dependencies".to_string(),
        }
    }

    pub fn with_graph_name(mut self, name: impl Into<String>) -> Self {
        self.graph_name = name.into();
        self
    }

    pub fn format_to_file(&self, edges: &[ImportEdge], output_path: &Path) -> Result<()> {
        fs::write(output_path, self.format_edges(edges))?;
        Ok(())
    }

    pub fn format_edges(&self, edges: &[ImportEdge]) -> String {
        self.format_graph(&build_graph(edges))
    }

    pub fn format_graph(&self, graph: &DependencyGraph) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "digraph {} {{", quote(&self.graph_name));

        for idx in graph.node_indices() {
            let _ = writeln!(out, "    {};", quote(&graph[idx]));
        }

        for edge in graph.edge_references() {
            let _ = writeln!(
                out,
                "    {} -> {};",
                quote(&graph[edge.source()]),
                quote(&graph[edge.target()])
            );
        }

        out.push_str("}\n");
        out
    }
}

impl Default for DotFormatter {
    fn default() -> Self {
        Self::new()
    }
}

fn quote(id: &str) -> String {
    format!("\"{}\"", id.replace('\\', "\\\\").replace('"', "\\\""))
}
