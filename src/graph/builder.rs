//! Fluent API for building small labeled graphs.

use std::collections::HashMap;
use std::fmt::Display;
use std::hash::Hash;

use crate::types::{GraphError, GraphResult, NodeId};

use super::Graph;

/// Fluent builder for constructing a [`Graph`] by label.
///
/// Edges name their endpoints by value, so every label must be unique.
pub struct GraphBuilder<T> {
    nodes: Vec<T>,
    edges: Vec<(T, T)>,
}

impl<T> GraphBuilder<T>
where
    T: Clone + Eq + Hash + Display,
{
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Add a node carrying `value`.
    pub fn node(mut self, value: T) -> Self {
        self.nodes.push(value);
        self
    }

    /// Add several nodes at once.
    pub fn nodes(mut self, values: impl IntoIterator<Item = T>) -> Self {
        self.nodes.extend(values);
        self
    }

    /// Add an edge between the nodes labeled `tail` and `head`.
    pub fn edge(mut self, tail: T, head: T) -> Self {
        self.edges.push((tail, head));
        self
    }

    /// Build the final graph.
    ///
    /// # Errors
    ///
    /// - [`GraphError::DuplicateLabel`] if two nodes share a value.
    /// - [`GraphError::UnknownLabel`] if an edge names a missing label.
    /// - [`GraphError::DuplicateEdge`] if an edge is listed twice.
    pub fn build(self) -> GraphResult<Graph<T>> {
        let mut graph = Graph::new();
        let mut ids: HashMap<T, NodeId> = HashMap::with_capacity(self.nodes.len());
        for value in self.nodes {
            if ids.contains_key(&value) {
                return Err(GraphError::DuplicateLabel(value.to_string()));
            }
            let id = graph.add_node(value.clone());
            ids.insert(value, id);
        }

        let lookup = |label: &T| {
            ids.get(label)
                .copied()
                .ok_or_else(|| GraphError::UnknownLabel(label.to_string()))
        };
        for (tail, head) in &self.edges {
            graph.add_edge(lookup(tail)?, lookup(head)?)?;
        }
        Ok(graph)
    }
}

impl<T> Default for GraphBuilder<T>
where
    T: Clone + Eq + Hash + Display,
{
    fn default() -> Self {
        Self::new()
    }
}
