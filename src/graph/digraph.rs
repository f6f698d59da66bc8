//! Core graph structure — nodes keyed by handle, adjacency held by each node.

use std::collections::HashMap;
use std::fmt;

use crate::types::{GraphError, GraphResult, Node, NodeId};

/// A directed graph whose nodes carry a value of type `T`.
///
/// The graph owns every node it creates. Edges have no data of their own:
/// an edge `tail -> head` exists exactly when `head` is in `tail`'s
/// adjacency set.
pub struct Graph<T> {
    /// All nodes, indexed by handle.
    nodes: HashMap<NodeId, Node<T>>,
    /// Total number of edges across all adjacency sets.
    edge_count: usize,
}

impl<T> Graph<T> {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self {
            nodes: HashMap::new(),
            edge_count: 0,
        }
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Get a node by handle.
    pub fn node(&self, id: NodeId) -> Option<&Node<T>> {
        self.nodes.get(&id)
    }

    /// Get a node by handle for value mutation.
    ///
    /// Adjacency cannot be changed through the returned reference.
    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut Node<T>> {
        self.nodes.get_mut(&id)
    }

    pub fn contains_node(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Whether the edge `tail -> head` exists.
    pub fn has_edge(&self, tail: NodeId, head: NodeId) -> bool {
        self.nodes.get(&tail).is_some_and(|n| n.contains(head))
    }

    /// All nodes in unspecified order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node<T>> + '_ {
        self.nodes.values()
    }

    /// All node handles in unspecified order.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.keys().copied()
    }

    /// All edges as `(tail, head)` pairs in unspecified order.
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        self.nodes
            .values()
            .flat_map(|n| n.iter().map(move |head| (n.id(), head)))
    }

    /// Add a node carrying `value`, returns its handle.
    pub fn add_node(&mut self, value: T) -> NodeId {
        self.insert(Node::new(Some(value)))
    }

    /// Add a node with no value, returns its handle.
    pub fn add_unlabeled_node(&mut self) -> NodeId {
        self.insert(Node::new(None))
    }

    fn insert(&mut self, node: Node<T>) -> NodeId {
        let id = node.id();
        self.nodes.insert(id, node);
        log::debug!("added node {id}");
        id
    }

    /// Remove a node and every edge to or from it, returning its value.
    pub fn remove_node(&mut self, id: NodeId) -> GraphResult<Option<T>> {
        let removed = self.nodes.remove(&id).ok_or(GraphError::NodeNotFound(id))?;

        let mut dropped = removed.len();
        for node in self.nodes.values_mut() {
            if node.unlink(id) {
                dropped += 1;
            }
        }
        self.edge_count -= dropped;

        log::debug!("removed node {id} and {dropped} incident edges");
        Ok(removed.into_value())
    }

    /// Add the edge `tail -> head`.
    ///
    /// Fails if the edge already exists or either endpoint is not in this graph.
    pub fn add_edge(&mut self, tail: NodeId, head: NodeId) -> GraphResult<()> {
        if !self.nodes.contains_key(&head) {
            return Err(GraphError::NodeNotFound(head));
        }
        let node = self
            .nodes
            .get_mut(&tail)
            .ok_or(GraphError::NodeNotFound(tail))?;

        if !node.link(head) {
            return Err(GraphError::DuplicateEdge { tail, head });
        }
        self.edge_count += 1;
        log::debug!("added edge {tail} -> {head}");
        Ok(())
    }

    /// Remove the edge `tail -> head`.
    pub fn remove_edge(&mut self, tail: NodeId, head: NodeId) -> GraphResult<()> {
        let node = self
            .nodes
            .get_mut(&tail)
            .ok_or(GraphError::NodeNotFound(tail))?;

        if !node.unlink(head) {
            return Err(GraphError::EdgeNotFound { tail, head });
        }
        self.edge_count -= 1;
        log::debug!("removed edge {tail} -> {head}");
        Ok(())
    }
}

impl<T> Default for Graph<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Display for Graph<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Graph with {} nodes>", self.nodes.len())
    }
}

impl<T: fmt::Debug> fmt::Debug for Graph<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{self}")?;
        f.debug_set().entries(self.nodes.values()).finish()
    }
}
