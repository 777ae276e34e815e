pub mod analyzer;
pub mod classifier;
pub mod config;
pub mod error;
pub mod graph;
pub mod index;
pub mod scanner;

pub use analyzer::{normalize_path, Analysis, CodebaseAnalyzer};
pub use classifier::{classify, is_first_party, Classification};
pub use config::ScanConfig;
pub use error::ScanError;
pub use graph::{
    build_graph, reduce_edges, source_node, target_node, DependencyGraph, GraphBuilder,
    ImportEdge,
};
pub use index::{build_index, DependencyIndex, IndexOutcome};
pub use scanner::{FileInfo, FileScanner, ScanOutcome};
