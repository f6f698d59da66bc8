//! Reads graphs from the line-oriented text format.

use std::collections::HashMap;
use std::fmt::Display;
use std::io::BufRead;
use std::path::Path;

use crate::graph::Graph;
use crate::types::{GraphError, GraphResult, NodeId, ABSENT_VALUE};

/// Build a graph from lines of text.
///
/// Each line is `<node_id> <value> <neighbor_id>*`. Ids are only meaningful
/// within one document. A node first seen as a neighbor is created unlabeled
/// and stays that way unless a later line gives it a value. `parse` turns the
/// value token into a `T`; the [`ABSENT_VALUE`] token leaves the node
/// unlabeled without calling `parse`.
///
/// # Errors
///
/// - [`GraphError::Format`] for a line with fewer than two tokens or a value
///   `parse` rejects.
/// - [`GraphError::DuplicateEdge`] if the document lists the same edge twice.
pub fn read_graph<T, E, F, I, S>(lines: I, mut parse: F) -> GraphResult<Graph<T>>
where
    F: FnMut(&str) -> Result<T, E>,
    E: Display,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut graph = Graph::new();
    let mut ids: HashMap<String, NodeId> = HashMap::new();

    for (index, line) in lines.into_iter().enumerate() {
        let line_no = index + 1;
        let mut tokens = line.as_ref().split_whitespace();

        let (Some(node_token), Some(value_token)) = (tokens.next(), tokens.next()) else {
            return Err(GraphError::Format {
                line: line_no,
                message: "expected `<node_id> <value> [<neighbor_id> ...]`".into(),
            });
        };

        let value = if value_token == ABSENT_VALUE {
            None
        } else {
            let value = parse(value_token).map_err(|e| GraphError::Format {
                line: line_no,
                message: format!("invalid value {value_token:?}: {e}"),
            })?;
            Some(value)
        };

        let tail = resolve(&mut graph, &mut ids, node_token);
        if let Some(node) = graph.node_mut(tail) {
            match value {
                Some(value) => node.set_value(value),
                None => node.take_value(),
            };
        }

        for neighbor_token in tokens {
            let head = resolve(&mut graph, &mut ids, neighbor_token);
            graph.add_edge(tail, head)?;
        }
        log::trace!("line {line_no}: node {node_token} -> {tail}");
    }

    log::debug!(
        "read {} nodes and {} edges",
        graph.node_count(),
        graph.edge_count()
    );
    Ok(graph)
}

/// Read a graph from any buffered reader.
pub fn read_from<T, E, F>(reader: impl BufRead, parse: F) -> GraphResult<Graph<T>>
where
    F: FnMut(&str) -> Result<T, E>,
    E: Display,
{
    let lines = reader.lines().collect::<Result<Vec<_>, _>>()?;
    read_graph(lines, parse)
}

/// Read a graph from a file.
pub fn read_from_file<T, E, F>(path: &Path, parse: F) -> GraphResult<Graph<T>>
where
    F: FnMut(&str) -> Result<T, E>,
    E: Display,
{
    let file = std::fs::File::open(path)?;
    read_from(std::io::BufReader::new(file), parse)
}

/// Look up the node for an id token, creating an unlabeled one on first use.
fn resolve<T>(graph: &mut Graph<T>, ids: &mut HashMap<String, NodeId>, token: &str) -> NodeId {
    if let Some(&id) = ids.get(token) {
        return id;
    }
    let id = graph.add_unlabeled_node();
    ids.insert(token.to_owned(), id);
    id
}
