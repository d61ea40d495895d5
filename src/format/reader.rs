//! Reads plain-text edge lists into an in-memory graph.
//!
//! ```text
//! # six vertices, undirected unless stated otherwise
//! 6 undirected
//! 1 3 1
//! 2 5 2 directed
//! ```

use std::io::Read;
use std::path::Path;

use crate::graph::WeightedGraph;
use crate::types::{EdgeKind, GraphError, GraphResult};

/// Reader for edge-list text files.
pub struct EdgeListReader;

/// One parsed edge line, labels still 1-based and unchecked.
#[derive(Debug, PartialEq, Eq)]
struct EdgeLine {
    v: i64,
    w: i64,
    weight: i64,
    kind: Option<EdgeKind>,
}

impl EdgeListReader {
    /// Read an edge-list file into a WeightedGraph.
    pub fn read_from_file(path: &Path) -> GraphResult<WeightedGraph> {
        let text = std::fs::read_to_string(path)?;
        log::debug!("Read {} bytes from {}", text.len(), path.display());
        Self::read_from_str(&text)
    }

    /// Read from any reader into a WeightedGraph.
    pub fn read_from(reader: &mut impl Read) -> GraphResult<WeightedGraph> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        Self::read_from_str(&text)
    }

    /// Parse edge-list text into a WeightedGraph.
    pub fn read_from_str(text: &str) -> GraphResult<WeightedGraph> {
        let mut lines = text
            .lines()
            .enumerate()
            .map(|(i, line)| (i + 1, strip_comment(line)))
            .filter(|(_, line)| !line.is_empty());

        let (header_line, header) = lines
            .next()
            .ok_or_else(|| parse_error(0, "missing vertex count header"))?;
        let (vertex_count, default_kind) = parse_header(header_line, header)?;
        let mut graph = WeightedGraph::try_new(vertex_count)?;

        for (line_no, line) in lines {
            let edge = parse_edge_line(line_no, line)?;
            let v = to_label(edge.v, &graph)?;
            let w = to_label(edge.w, &graph)?;
            graph.add_edge(v, w, edge.weight, edge.kind.unwrap_or(default_kind))?;
        }

        log::debug!(
            "Parsed graph with {} vertices and {} adjacency entries",
            graph.vertex_count(),
            graph.edge_count()
        );
        Ok(graph)
    }
}

fn strip_comment(line: &str) -> &str {
    match line.find('#') {
        Some(pos) => line[..pos].trim(),
        None => line.trim(),
    }
}

fn parse_error(line: usize, message: impl Into<String>) -> GraphError {
    GraphError::Parse {
        line,
        message: message.into(),
    }
}

fn parse_int(line: usize, field: &str, token: &str) -> GraphResult<i64> {
    token
        .parse()
        .map_err(|_| parse_error(line, format!("invalid {}: {:?}", field, token)))
}

fn parse_kind(line: usize, token: &str) -> GraphResult<EdgeKind> {
    EdgeKind::from_name(token)
        .ok_or_else(|| parse_error(line, format!("unknown edge kind: {:?}", token)))
}

fn parse_header(line: usize, text: &str) -> GraphResult<(i64, EdgeKind)> {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    match tokens.as_slice() {
        [count] => Ok((parse_int(line, "vertex count", count)?, EdgeKind::Undirected)),
        [count, kind] => Ok((
            parse_int(line, "vertex count", count)?,
            parse_kind(line, kind)?,
        )),
        _ => Err(parse_error(
            line,
            "header must be `<vertex_count> [directed|undirected]`",
        )),
    }
}

fn parse_edge_line(line: usize, text: &str) -> GraphResult<EdgeLine> {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    let (v, w, weight, kind) = match tokens.as_slice() {
        [v, w, weight] => (v, w, weight, None),
        [v, w, weight, kind] => (v, w, weight, Some(parse_kind(line, kind)?)),
        _ => {
            return Err(parse_error(
                line,
                "edge must be `<v> <w> <weight> [directed|undirected]`",
            ))
        }
    };
    Ok(EdgeLine {
        v: parse_int(line, "vertex label", v)?,
        w: parse_int(line, "vertex label", w)?,
        weight: parse_int(line, "weight", weight)?,
        kind,
    })
}

/// Negative labels cannot name a vertex; report them like any other bad label.
fn to_label(label: i64, graph: &WeightedGraph) -> GraphResult<usize> {
    usize::try_from(label).map_err(|_| GraphError::IndexOutOfRange {
        index: label,
        min: 1,
        max: graph.vertex_count() as i64,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_comment() {
        assert_eq!(strip_comment("  1 2 3  # trailing"), "1 2 3");
        assert_eq!(strip_comment("# whole line"), "");
        assert_eq!(strip_comment("4 5 6"), "4 5 6");
    }

    #[test]
    fn test_parse_header_default_kind() {
        assert_eq!(parse_header(1, "6").unwrap(), (6, EdgeKind::Undirected));
        assert_eq!(
            parse_header(1, "3 directed").unwrap(),
            (3, EdgeKind::Directed)
        );
        assert!(parse_header(1, "3 sideways").is_err());
        assert!(parse_header(1, "x").is_err());
    }

    #[test]
    fn test_parse_edge_line() {
        assert_eq!(
            parse_edge_line(2, "1 3 7").unwrap(),
            EdgeLine {
                v: 1,
                w: 3,
                weight: 7,
                kind: None
            }
        );
        assert_eq!(
            parse_edge_line(2, "2 1 -4 d").unwrap().kind,
            Some(EdgeKind::Directed)
        );
        match parse_edge_line(9, "1 2") {
            Err(GraphError::Parse { line, .. }) => assert_eq!(line, 9),
            other => panic!("expected parse error, got {:?}", other),
        }
    }
}
