use petgraph::{graph::NodeIndex, Directed, Graph};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

use super::classifier::is_first_party;
use super::index::DependencyIndex;

/// Directed edge "file `source` imports namespace `target`".
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct ImportEdge {
    pub source: String,
    pub target: String,
}

impl ImportEdge {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }
}

/// Node name for a file: its final path segment cut at the first `.`.
///
/// `My.Widget.cs` becomes `My`, so distinct files can share a node.
pub fn source_node(file_path: &Path) -> String {
    let file_name = file_path
        .file_name()
        .map(|name| name.to_string_lossy())
        .unwrap_or_default();
    file_name
        .split('.')
        .next()
        .unwrap_or_default()
        .to_string()
}

/// Node name for an import: its last dotted segment.
pub fn target_node(import: &str) -> String {
    import.rsplit('.').next().unwrap_or(import).to_string()
}

/// Turns every first-party import of every file into an edge.
///
/// Files are visited in index order and imports in declaration order. Duplicate
/// edges, self edges and cycles are all kept.
pub fn reduce_edges(index: &DependencyIndex, project_prefix: &str) -> Vec<ImportEdge> {
    let mut edges = Vec::new();
    for (path, imports) in index.iter() {
        let source = source_node(path);
        edges.extend(
            imports
                .iter()
                .filter(|import| is_first_party(import, project_prefix))
                .map(|import| ImportEdge::new(source.clone(), target_node(import))),
        );
    }
    edges
}

/// Multigraph over node names; parallel edges are preserved.
pub type DependencyGraph = Graph<String, ImportEdge, Directed>;

pub struct GraphBuilder {
    graph: DependencyGraph,
    node_map: HashMap<String, NodeIndex>,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self {
            graph: Graph::new(),
            node_map: HashMap::new(),
        }
    }

    /// Returns the existing node for `name` or adds one.
    pub fn add_node(&mut self, name: &str) -> NodeIndex {
        if let Some(&index) = self.node_map.get(name) {
            return index;
        }
        let index = self.graph.add_node(name.to_string());
        self.node_map.insert(name.to_string(), index);
        index
    }

    pub fn add_edge(&mut self, edge: ImportEdge) -> petgraph::graph::EdgeIndex {
        let source_idx = self.add_node(&edge.source);
        let target_idx = self.add_node(&edge.target);
        self.graph.add_edge(source_idx, target_idx, edge)
    }

    pub fn extend<I: IntoIterator<Item = ImportEdge>>(&mut self, edges: I) {
        for edge in edges {
            self.add_edge(edge);
        }
    }

    pub fn build(self) -> DependencyGraph {
        self.graph
    }

    pub fn get_node_index(&self, name: &str) -> Option<NodeIndex> {
        self.node_map.get(name).copied()
    }
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn build_graph(edges: &[ImportEdge]) -> DependencyGraph {
    let mut builder = GraphBuilder::new();
    builder.extend(edges.iter().cloned());
    builder.build()
}
