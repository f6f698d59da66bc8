//! labeled-digraph — a small in-memory directed graph.
//!
//! Nodes carry an arbitrary value and a set of outgoing edges. Graphs can be
//! written to and read from a line-oriented text format, and compared by
//! treating node values as unique labels.

pub mod format;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use format::{read_from, read_from_file, read_graph, write_graph, write_to, write_to_file};
pub use graph::{labeled_eq, Graph, GraphBuilder};
pub use types::{GraphError, GraphResult, Node, NodeId, Side, Successors, ABSENT_VALUE};
