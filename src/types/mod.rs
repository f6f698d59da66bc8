//! Core data types for the labeled-digraph library.

pub mod error;
pub mod node;

pub use error::{GraphError, GraphResult, Side};
pub use node::{Node, NodeId, Successors};

/// Token separator used when writing the text format.
pub const FIELD_SEPARATOR: char = ' ';

/// Value token standing for an unlabeled node in the text format.
///
/// The reader maps it back to "no value" without calling the parser, so no
/// labeled node may render as this token.
pub const ABSENT_VALUE: &str = "-";
