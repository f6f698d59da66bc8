//! Writes graphs in the line-oriented text format.
//!
//! Each node becomes one line: `<node_id> <value> <neighbor_id>*`. Node ids
//! are dense integers assigned per call in the graph's iteration order, so
//! two writes of the same graph may differ byte for byte.

use std::collections::HashMap;
use std::fmt::Display;
use std::io::Write;
use std::path::Path;

use crate::graph::Graph;
use crate::types::{GraphError, GraphResult, NodeId, ABSENT_VALUE, FIELD_SEPARATOR};

/// Write a graph to a string.
///
/// Unlabeled nodes are written with the [`ABSENT_VALUE`] token.
///
/// # Errors
///
/// [`GraphError::Unrepresentable`] if a value renders as an empty string,
/// contains whitespace, or equals [`ABSENT_VALUE`].
pub fn write_graph<T: Display>(graph: &Graph<T>) -> GraphResult<String> {
    let mut buf = Vec::new();
    write_to(graph, &mut buf)?;
    // Every byte written came from `str` formatting.
    String::from_utf8(buf).map_err(|e| GraphError::Io(std::io::Error::other(e)))
}

/// Write a graph to a file, replacing any existing contents.
pub fn write_to_file<T: Display>(graph: &Graph<T>, path: &Path) -> GraphResult<()> {
    let file = std::fs::File::create(path)?;
    let mut writer = std::io::BufWriter::new(file);
    write_to(graph, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Write a graph to any writer.
///
/// Values are validated before anything is written, so a failed call leaves
/// `writer` untouched.
pub fn write_to<T: Display>(graph: &Graph<T>, writer: &mut impl Write) -> GraphResult<()> {
    // Step 1: Render values and assign ids
    let mut ids: HashMap<NodeId, usize> = HashMap::with_capacity(graph.node_count());
    let mut lines: Vec<(NodeId, String)> = Vec::with_capacity(graph.node_count());
    for (index, node) in graph.nodes().enumerate() {
        let token = match node.value() {
            Some(value) => {
                let token = value.to_string();
                check_token(node.id(), &token)?;
                token
            }
            None => ABSENT_VALUE.to_owned(),
        };
        ids.insert(node.id(), index);
        lines.push((node.id(), token));
    }

    // Step 2: Emit one line per node
    for (index, (id, token)) in lines.iter().enumerate() {
        write!(writer, "{index}{FIELD_SEPARATOR}{token}")?;
        if let Some(node) = graph.node(*id) {
            for head in node {
                write!(writer, "{FIELD_SEPARATOR}{}", ids[&head])?;
            }
        }
        writeln!(writer)?;
    }

    log::debug!(
        "wrote {} nodes and {} edges",
        graph.node_count(),
        graph.edge_count()
    );
    Ok(())
}

fn check_token(node: NodeId, token: &str) -> GraphResult<()> {
    if token.is_empty() {
        return Err(GraphError::Unrepresentable {
            node,
            reason: "value renders as an empty string",
        });
    }
    if token == ABSENT_VALUE {
        return Err(GraphError::Unrepresentable {
            node,
            reason: "value collides with the absent-value token",
        });
    }
    if token.chars().any(char::is_whitespace) {
        return Err(GraphError::Unrepresentable {
            node,
            reason: "value contains whitespace",
        });
    }
    Ok(())
}
