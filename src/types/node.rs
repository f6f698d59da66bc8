//! Node handles and the node container.

use std::collections::hash_set;
use std::collections::HashSet;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Identity of a node.
///
/// Handles are drawn from a process-wide counter, so two nodes never share a
/// handle even when they live in different graphs or carry equal values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u64);

impl NodeId {
    /// Allocate a fresh handle.
    pub(crate) fn next() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// The raw handle number.
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A value plus the set of nodes it points to.
///
/// Nodes are created by [`Graph`](crate::graph::Graph) and only the graph can
/// change their adjacency. The value is free to change at any time.
pub struct Node<T> {
    id: NodeId,
    value: Option<T>,
    adjacency: HashSet<NodeId>,
}

impl<T> Node<T> {
    pub(crate) fn new(value: Option<T>) -> Self {
        Self {
            id: NodeId::next(),
            value,
            adjacency: HashSet::new(),
        }
    }

    /// This node's handle.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// The stored value, `None` if the node is unlabeled.
    pub fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// Mutable access to the stored value.
    pub fn value_mut(&mut self) -> Option<&mut T> {
        self.value.as_mut()
    }

    /// Replace the value, returning the previous one.
    pub fn set_value(&mut self, value: T) -> Option<T> {
        self.value.replace(value)
    }

    /// Clear the value, leaving the node unlabeled.
    pub fn take_value(&mut self) -> Option<T> {
        self.value.take()
    }

    /// Direct successors in unspecified order.
    pub fn iter(&self) -> Successors<'_> {
        Successors {
            inner: self.adjacency.iter(),
        }
    }

    /// Out-degree.
    pub fn len(&self) -> usize {
        self.adjacency.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Whether `other` is a direct successor.
    pub fn contains(&self, other: NodeId) -> bool {
        self.adjacency.contains(&other)
    }

    pub(crate) fn into_value(self) -> Option<T> {
        self.value
    }

    /// Returns false if the edge was already there.
    pub(crate) fn link(&mut self, head: NodeId) -> bool {
        self.adjacency.insert(head)
    }

    /// Returns false if there was no such edge.
    pub(crate) fn unlink(&mut self, head: NodeId) -> bool {
        self.adjacency.remove(&head)
    }
}

impl<T: fmt::Debug> fmt::Debug for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(v) => write!(f, "<Node {v:?} {}>", self.id),
            None => write!(f, "<Node None {}>", self.id),
        }
    }
}

/// Renders as `<Node value>`, or `<Node None>` when unlabeled.
impl<T: fmt::Display> fmt::Display for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(v) => write!(f, "<Node {v}>"),
            None => write!(f, "<Node None>"),
        }
    }
}

/// Iterator over a node's successors.
pub struct Successors<'a> {
    inner: hash_set::Iter<'a, NodeId>,
}

impl Iterator for Successors<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        self.inner.next().copied()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Successors<'_> {}

impl<'a, T> IntoIterator for &'a Node<T> {
    type Item = NodeId;
    type IntoIter = Successors<'a>;

    fn into_iter(self) -> Successors<'a> {
        self.iter()
    }
}
