//! # USINGMAP
//!
//! Maps `using` dependencies across a C# source tree.
//!
//! A run walks the tree (pruning excluded directory names), pulls every
//! `using A.B.C;` directive out of each source file with a line-anchored
//! pattern, splits the imports into first-party and third-party by the
//! project's namespace prefix, and reduces first-party imports to
//! `file -> namespace` edges for a directed graph.
//!
//! This is a lexical scan, not a parser: aliases, `using static` and
//! conditional compilation are not understood.
//!
//! ## Output Formats
//!
//! - **Report**: `path: [imports]` per file plus the first/third-party summary
//! - **DOT**: Graphviz digraph of first-party edges
//! - **JSON**: index, classification and edges for programmatic consumption

pub mod core;
pub mod formatters;
pub mod parsers;
