//! Structural equality for graphs whose values act as unique labels.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use crate::types::{GraphError, GraphResult, Node, Side};

use super::Graph;

/// Compare two graphs by label.
///
/// Node values are treated as labels and must be unique within each graph
/// (an unlabeled node counts as the label `None`). The graphs are equal when
/// they carry the same labels and every label has the same set of neighbor
/// labels on both sides.
///
/// This is a one-hop check: it does not look past each node's immediate
/// neighbors, so it is weaker than full isomorphism when labels repeat
/// structure. With unique labels the two coincide.
///
/// # Errors
///
/// [`GraphError::AmbiguousLabels`] if either graph has two nodes with the same
/// value, whatever the shape of the other graph.
pub fn labeled_eq<T: Eq + Hash>(g1: &Graph<T>, g2: &Graph<T>) -> GraphResult<bool> {
    let labels1 = label_map(g1, Side::First)?;
    let labels2 = label_map(g2, Side::Second)?;

    if g1.node_count() != g2.node_count() {
        return Ok(false);
    }
    if labels1.len() != labels2.len() || labels1.keys().any(|l| !labels2.contains_key(l)) {
        return Ok(false);
    }

    for (label, node1) in &labels1 {
        let node2 = labels2[label];
        if neighbor_labels(g1, node1) != neighbor_labels(g2, node2) {
            log::debug!("graphs differ at neighbors of a label");
            return Ok(false);
        }
    }
    Ok(true)
}

fn label_map<T: Eq + Hash>(
    graph: &Graph<T>,
    side: Side,
) -> GraphResult<HashMap<Option<&T>, &Node<T>>> {
    let mut labels = HashMap::with_capacity(graph.node_count());
    for node in graph.nodes() {
        if labels.insert(node.value(), node).is_some() {
            return Err(GraphError::AmbiguousLabels(side));
        }
    }
    Ok(labels)
}

fn neighbor_labels<'g, T: Eq + Hash>(
    graph: &'g Graph<T>,
    node: &Node<T>,
) -> HashSet<Option<&'g T>> {
    node.iter()
        .filter_map(|id| graph.node(id))
        .map(Node::value)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain(labels: &[&'static str]) -> Graph<&'static str> {
        let mut g = Graph::new();
        let ids: Vec<_> = labels.iter().map(|l| g.add_node(*l)).collect();
        for pair in ids.windows(2) {
            g.add_edge(pair[0], pair[1]).unwrap();
        }
        g
    }

    #[test]
    fn empty_graphs_are_equal() {
        let g1: Graph<u8> = Graph::new();
        let g2: Graph<u8> = Graph::new();
        assert!(labeled_eq(&g1, &g2).unwrap());
    }

    #[test]
    fn direction_matters() {
        let g1 = chain(&["a", "b"]);
        let g2 = chain(&["b", "a"]);
        assert!(!labeled_eq(&g1, &g2).unwrap());
    }

    #[test]
    fn different_sizes_are_unequal() {
        assert!(!labeled_eq(&chain(&["a", "b"]), &chain(&["a", "b", "c"])).unwrap());
    }

    #[test]
    fn different_labels_are_unequal() {
        assert!(!labeled_eq(&chain(&["a", "b"]), &chain(&["a", "c"])).unwrap());
    }

    #[test]
    fn unlabeled_node_is_a_label() {
        let mut g1 = chain(&["a"]);
        let mut g2 = chain(&["a"]);
        let n1 = g1.add_unlabeled_node();
        let n2 = g2.add_unlabeled_node();
        assert!(labeled_eq(&g1, &g2).unwrap());

        let a1 = g1.node_ids().find(|&id| id != n1).unwrap();
        g1.add_edge(a1, n1).unwrap();
        assert!(!labeled_eq(&g1, &g2).unwrap());
        let a2 = g2.node_ids().find(|&id| id != n2).unwrap();
        g2.add_edge(a2, n2).unwrap();
        assert!(labeled_eq(&g1, &g2).unwrap());
    }

    #[test]
    fn duplicates_reported_by_side() {
        let dup = chain(&["a", "a"]);
        let ok = chain(&["a", "b", "c"]);
        assert!(matches!(
            labeled_eq(&ok, &dup),
            Err(GraphError::AmbiguousLabels(Side::Second))
        ));
        assert!(matches!(
            labeled_eq(&dup, &ok),
            Err(GraphError::AmbiguousLabels(Side::First))
        ));
    }
}
