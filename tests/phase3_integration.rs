//! Phase 3 tests: edge-list reader, reports, sample graphs, CLI commands.

use std::io::{Cursor, Write};
use std::path::Path;

use tempfile::NamedTempFile;

use graphkit::cli::commands::{self, MatrixKind};
use graphkit::engine::{samples, GraphReport};
use graphkit::format::EdgeListReader;
use graphkit::graph::{WalkKind, WeightedGraph};
use graphkit::types::error::GraphError;
use graphkit::types::{Edge, INFINITY};

const SAMPLE: &str = "\
# first sample graph
6 undirected
1 3 1
1 5 1
2 4 1
2 5 2   # heavier edge
3 4 1

4 6 1
5 6 1
";

fn write_temp(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

// ==================== Edge-list reader ====================

#[test]
fn test_reader_matches_builder() {
    let parsed = EdgeListReader::read_from_str(SAMPLE).unwrap();
    assert_eq!(parsed, samples::first().unwrap());
}

#[test]
fn test_reader_from_file_and_reader() {
    let file = write_temp(SAMPLE);
    let from_file = EdgeListReader::read_from_file(file.path()).unwrap();
    let from_reader = EdgeListReader::read_from(&mut Cursor::new(SAMPLE)).unwrap();
    assert_eq!(from_file, from_reader);
    assert_eq!(from_file.edge_count(), 14);
}

#[test]
fn test_reader_directed_header_and_override() {
    let graph = EdgeListReader::read_from_str("3 directed\n1 2 4\n2 3 1 undirected\n").unwrap();
    assert_eq!(graph.edges_from(0), &[Edge::new(1, 4)]);
    assert_eq!(graph.edges_from(1), &[Edge::new(2, 1)]);
    assert_eq!(graph.edges_from(2), &[Edge::new(1, 1)]);
}

#[test]
fn test_reader_empty_graph() {
    let graph = EdgeListReader::read_from_str("0\n").unwrap();
    assert_eq!(graph.vertex_count(), 0);
}

#[test]
fn test_reader_missing_header() {
    assert!(matches!(
        EdgeListReader::read_from_str("# nothing here\n\n"),
        Err(GraphError::Parse { .. })
    ));
}

#[test]
fn test_reader_negative_vertex_count() {
    assert!(matches!(
        EdgeListReader::read_from_str("-2\n"),
        Err(GraphError::InvalidArgument(_))
    ));
}

#[test]
fn test_reader_huge_vertex_count() {
    assert!(matches!(
        EdgeListReader::read_from_str("9223372036854775807\n"),
        Err(GraphError::InvalidArgument(_))
    ));
}

#[test]
fn test_reader_bad_labels() {
    assert!(matches!(
        EdgeListReader::read_from_str("3\n1 4 1\n"),
        Err(GraphError::IndexOutOfRange { index: 4, .. })
    ));
    assert!(matches!(
        EdgeListReader::read_from_str("3\n0 1 1\n"),
        Err(GraphError::IndexOutOfRange { index: 0, .. })
    ));
    assert!(matches!(
        EdgeListReader::read_from_str("3\n-1 1 1\n"),
        Err(GraphError::IndexOutOfRange { index: -1, .. })
    ));
}

#[test]
fn test_reader_reports_line_numbers() {
    match EdgeListReader::read_from_str("3\n1 2 1\n\n2 x 1\n") {
        Err(GraphError::Parse { line, message }) => {
            assert_eq!(line, 4);
            assert!(message.contains("vertex label"), "{message}");
        }
        other => panic!("expected parse error, got {:?}", other),
    }
    match EdgeListReader::read_from_str("3\n1 2 1 sideways\n") {
        Err(GraphError::Parse { line, .. }) => assert_eq!(line, 2),
        other => panic!("expected parse error, got {:?}", other),
    }
}

#[test]
fn test_reader_missing_file() {
    let result = EdgeListReader::read_from_file(Path::new("/nonexistent/graph.txt"));
    assert!(matches!(result, Err(GraphError::Io(_))));
}

// ==================== Sample graphs ====================

#[test]
fn test_samples_sizes() {
    let graphs = samples::all().unwrap();
    let sizes: Vec<(usize, usize)> = graphs
        .iter()
        .map(|g| (g.vertex_count(), g.edge_count()))
        .collect();
    assert_eq!(sizes, vec![(6, 14), (6, 22), (8, 24)]);
    let degrees: Vec<usize> = graphs.iter().map(|g| g.edge_chromatic_number()).collect();
    assert_eq!(degrees, vec![3, 5, 5]);
}

// ==================== Reports ====================

#[test]
fn test_report_bundles_every_analysis() {
    let graph = samples::first().unwrap();
    let report = GraphReport::build(&graph, 0).unwrap();
    assert_eq!(report.vertex_count, 6);
    assert_eq!(report.edge_count, 14);
    assert_eq!(report.adjacency_matrix, graph.adjacency_matrix().to_rows());
    assert_eq!(report.incidence_matrix.len(), 6);
    assert_eq!(report.incidence_matrix[0].len(), 14);
    assert_eq!(report.chromatic_number, 6);
    assert_eq!(report.edge_chromatic_number, 3);
    assert_eq!(report.eulerian_walks.len(), 6);
    assert_eq!(report.dfs_order, vec![0, 2, 3, 1, 4, 5]);
    assert_eq!(report.distances.distances, vec![0, 3, 1, 2, 1, 2]);
}

#[test]
fn test_report_text_uses_labels() {
    let graph = EdgeListReader::read_from_str("3\n1 2 4\n").unwrap();
    let text = GraphReport::build(&graph, 0).unwrap().render_text();
    assert!(text.contains("Adjacency matrix:\n0 1 0\n1 0 0\n0 0 0\n"));
    assert!(text.contains("Chromatic number: 3"));
    assert!(text.contains("Edge chromatic number: 1"));
    assert!(text.contains("Depth-first search:\n1 2\n"));
    assert!(text.contains("Vertex 2: distance = 4"));
    assert!(text.contains("Vertex 3: distance = inf"));
    assert!(text.contains("path     3\n"));
}

#[test]
fn test_report_json_shape() {
    let graph = samples::second().unwrap();
    let report = GraphReport::build(&graph, 0).unwrap();
    let value = serde_json::to_value(&report).unwrap();
    assert_eq!(value["vertex_count"], 6);
    assert_eq!(value["distances"]["distances"][1], 7);
    assert_eq!(value["eulerian_walks"][2]["kind"], "circuit");
    assert_eq!(report.eulerian_walks[2].kind, WalkKind::Circuit);
}

#[test]
fn test_report_unreachable_serializes_sentinel() {
    let graph = WeightedGraph::new(2);
    let report = GraphReport::build(&graph, 1).unwrap();
    assert_eq!(report.distances.distances, vec![INFINITY, 0]);
    let value = serde_json::to_value(&report).unwrap();
    assert_eq!(value["distances"]["distances"][0], INFINITY);
}

#[test]
fn test_report_rejects_bad_start() {
    assert!(GraphReport::build(&WeightedGraph::new(0), 0).is_err());
    assert!(GraphReport::build(&WeightedGraph::new(2), 5).is_err());
}

// ==================== CLI commands ====================

#[test]
fn test_index_of_label() {
    let graph = WeightedGraph::new(3);
    assert_eq!(graph.index_of_label(1).unwrap(), 0);
    assert_eq!(graph.index_of_label(3).unwrap(), 2);
    assert!(graph.index_of_label(0).is_err());
    assert!(graph.index_of_label(4).is_err());
}

#[test]
fn test_matrix_kind_names() {
    assert_eq!(MatrixKind::from_name("adj"), Some(MatrixKind::Adjacency));
    assert_eq!(MatrixKind::from_name("Incidence"), Some(MatrixKind::Incidence));
    assert_eq!(MatrixKind::from_name("laplacian"), None);
}

#[test]
fn test_commands_run_on_file() {
    let file = write_temp(SAMPLE);
    let path = file.path();
    for json in [false, true] {
        commands::cmd_info(path, json).unwrap();
        commands::cmd_matrix(path, MatrixKind::Adjacency, json).unwrap();
        commands::cmd_matrix(path, MatrixKind::Incidence, json).unwrap();
        commands::cmd_degrees(path, json).unwrap();
        commands::cmd_dfs(path, 2, json).unwrap();
        commands::cmd_dijkstra(path, 6, json).unwrap();
        commands::cmd_euler(path, json).unwrap();
        commands::cmd_report(path, 1, json).unwrap();
    }
    commands::cmd_demo(false).unwrap();
    commands::cmd_demo(true).unwrap();
}

#[test]
fn test_commands_surface_errors() {
    let file = write_temp(SAMPLE);
    assert!(matches!(
        commands::cmd_dfs(file.path(), 7, false),
        Err(GraphError::IndexOutOfRange { index: 7, .. })
    ));
    assert!(matches!(
        commands::cmd_dijkstra(file.path(), 0, false),
        Err(GraphError::IndexOutOfRange { .. })
    ));

    let broken = write_temp("4\n1 2\n");
    assert!(matches!(
        commands::cmd_euler(broken.path(), false),
        Err(GraphError::Parse { line: 2, .. })
    ));
}
