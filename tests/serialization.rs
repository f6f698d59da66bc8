//! Text format tests: writer, reader, round trips through files.

use std::collections::HashSet;
use std::convert::Infallible;
use std::io::Cursor;

use labeled_digraph::format::{read_from, read_from_file, read_graph, write_graph, write_to_file};
use labeled_digraph::graph::{labeled_eq, Graph, GraphBuilder};
use labeled_digraph::types::GraphError;

use rand::Rng;
use tempfile::NamedTempFile;

// ==================== Helper ====================

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn ident(s: &str) -> Result<String, Infallible> {
    Ok(s.to_owned())
}

fn test_graph() -> Graph<String> {
    GraphBuilder::new()
        .nodes(["A", "B", "C", "D"].map(String::from))
        .edge("A".into(), "A".into())
        .edge("A".into(), "B".into())
        .edge("A".into(), "C".into())
        .edge("C".into(), "B".into())
        .build()
        .unwrap()
}

/// Neighbor labels of the node labeled `label`.
fn neighbors_of(g: &Graph<String>, label: &str) -> HashSet<String> {
    let node = g
        .nodes()
        .find(|n| n.value().map(String::as_str) == Some(label))
        .unwrap();
    node.iter()
        .map(|id| g.node(id).unwrap().value().unwrap().clone())
        .collect()
}

fn set(labels: &[&str]) -> HashSet<String> {
    labels.iter().map(|s| s.to_string()).collect()
}

// ==================== Reader Tests ====================

#[test]
fn test_read_handwritten_document() {
    let text = "0 A 0 1 2\n    1 B\n    2 C 1\n    3 D";
    let g = read_from(Cursor::new(text), ident).unwrap();
    assert!(labeled_eq(&g, &test_graph()).unwrap());
}

#[test]
fn test_read_arbitrary_id_tokens() {
    let g = read_graph(["x A x y z", "y B", "z C y", "w D"], ident).unwrap();
    assert!(labeled_eq(&g, &test_graph()).unwrap());
}

#[test]
fn test_read_typed_values() {
    let g = read_graph(["0 10 1", "1 20"], str::parse::<u32>).unwrap();
    let mut values: Vec<u32> = g.nodes().filter_map(|n| n.value().copied()).collect();
    values.sort_unstable();
    assert_eq!(values, [10, 20]);
}

#[test]
fn test_read_invalid_value() {
    let err = read_graph(["0 ten"], str::parse::<u32>).unwrap_err();
    assert!(matches!(err, GraphError::Format { line: 1, .. }));
}

#[test]
fn test_read_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = read_from_file(&dir.path().join("absent.txt"), ident).unwrap_err();
    assert!(matches!(err, GraphError::Io(_)));
}

// ==================== Writer Tests ====================

#[test]
fn test_written_lines_have_expected_shape() {
    let text = write_graph(&test_graph()).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(text.ends_with('\n'));

    let mut degrees: Vec<usize> = lines
        .iter()
        .map(|l| l.split_whitespace().count() - 2)
        .collect();
    degrees.sort_unstable();
    assert_eq!(degrees, [0, 0, 1, 3]);
}

#[test]
fn test_write_neighbor_only_node() {
    let g = read_graph(["0 A 1"], ident).unwrap();
    let text = write_graph(&g).unwrap();
    assert!(text.lines().any(|l| l.split_whitespace().nth(1) == Some("-")));

    let back = read_graph(text.lines(), ident).unwrap();
    assert_eq!(back.node_count(), 2);
    assert_eq!(back.nodes().filter(|n| n.value().is_none()).count(), 1);
    assert!(labeled_eq(&g, &back).unwrap());
}

#[test]
fn test_file_round_trip_with_unlabeled_node() {
    let tmp = NamedTempFile::new().unwrap();
    std::fs::write(tmp.path(), "0 A 1\n").unwrap();
    let g = read_from_file(tmp.path(), ident).unwrap();

    let out = NamedTempFile::new().unwrap();
    write_to_file(&g, out.path()).unwrap();
    let back = read_from_file(out.path(), ident).unwrap();
    assert!(labeled_eq(&g, &back).unwrap());
}

// ==================== Round Trip Tests ====================

#[test]
fn test_scenario_round_trip_neighbors() {
    let g = test_graph();
    let text = write_graph(&g).unwrap();
    let back = read_graph(text.lines(), ident).unwrap();

    assert_eq!(neighbors_of(&back, "A"), set(&["A", "B", "C"]));
    assert_eq!(neighbors_of(&back, "C"), set(&["B"]));
    assert!(neighbors_of(&back, "B").is_empty());
    assert!(neighbors_of(&back, "D").is_empty());
    assert!(labeled_eq(&back, &g).unwrap());
}

#[test]
fn test_file_round_trip() {
    let g = test_graph();
    let tmp = NamedTempFile::new().unwrap();
    write_to_file(&g, tmp.path()).unwrap();

    let back = read_from_file(tmp.path(), ident).unwrap();
    assert_eq!(back.node_count(), 4);
    assert_eq!(back.edge_count(), 4);
    assert!(labeled_eq(&g, &back).unwrap());
}

#[test]
fn test_random_round_trip() {
    init_logger();
    let mut rng = rand::thread_rng();
    for _ in 0..20 {
        let n = rng.gen_range(1..40);
        let mut g = Graph::new();
        let ids: Vec<_> = (0..n).map(|i| g.add_node(format!("n{}", i))).collect();
        for &tail in &ids {
            for &head in &ids {
                if rng.gen_bool(0.1) {
                    g.add_edge(tail, head).unwrap();
                }
            }
        }

        let back = read_graph(write_graph(&g).unwrap().lines(), ident).unwrap();
        assert_eq!(back.node_count(), g.node_count());
        assert_eq!(back.edge_count(), g.edge_count());
        assert!(labeled_eq(&g, &back).unwrap());
    }
}
