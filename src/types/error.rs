//! Error types for the labeled-digraph library.

use thiserror::Error;

use super::NodeId;

/// Which operand of a two-graph comparison an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// The left-hand graph.
    First,
    /// The right-hand graph.
    Second,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::First => write!(f, "first"),
            Self::Second => write!(f, "second"),
        }
    }
}

/// All errors that can occur in the labeled-digraph library.
#[derive(Error, Debug)]
pub enum GraphError {
    /// The edge is already present in the tail's adjacency set.
    #[error("Duplicate edge {tail} -> {head}")]
    DuplicateEdge { tail: NodeId, head: NodeId },

    /// Node is not a member of this graph.
    #[error("Node {0} not found")]
    NodeNotFound(NodeId),

    /// Edge does not exist.
    #[error("Edge {tail} -> {head} not found")]
    EdgeNotFound { tail: NodeId, head: NodeId },

    /// Malformed line or unparsable value in a text document.
    #[error("Format error on line {line}: {message}")]
    Format { line: usize, message: String },

    /// Labeled equality is undefined when node values repeat.
    #[error("Node labels are not unique in the {0} graph")]
    AmbiguousLabels(Side),

    /// A node value cannot be written as a single token.
    #[error("Node {node} cannot be written: {reason}")]
    Unrepresentable { node: NodeId, reason: &'static str },

    /// Builder was given the same label twice.
    #[error("Duplicate node label: {0}")]
    DuplicateLabel(String),

    /// Builder edge references a label no node carries.
    #[error("Unknown node label: {0}")]
    UnknownLabel(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl GraphError {
    /// True for both node and edge lookup failures.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NodeNotFound(_) | Self::EdgeNotFound { .. })
    }
}

/// Convenience result type for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;
