//! In-memory graph operations — the core data structure.

pub mod builder;
pub mod digraph;
pub mod equality;

pub use builder::GraphBuilder;
pub use digraph::Graph;
pub use equality::labeled_eq;
