//! Full per-graph analysis, bundled for display or JSON export.

use std::fmt;

use serde::Serialize;

use crate::graph::{DistanceMap, EulerianWalk, Matrix, VisitedSet, WeightedGraph};
use crate::types::{GraphResult, INFINITY};

/// Every derived view and algorithm result for one graph.
///
/// Vertex indices are stored 0-based; `render_text` prints 1-based labels.
#[derive(Debug, Clone, Serialize)]
pub struct GraphReport {
    /// Number of vertices.
    pub vertex_count: usize,
    /// Number of stored adjacency entries.
    pub edge_count: usize,
    /// V×V adjacency matrix rows.
    pub adjacency_matrix: Vec<Vec<u8>>,
    /// V×E incidence matrix rows.
    pub incidence_matrix: Vec<Vec<u8>>,
    /// Placeholder chromatic number (always the vertex count).
    pub chromatic_number: usize,
    /// Maximum out-degree, reported as the edge chromatic number.
    pub edge_chromatic_number: usize,
    /// One Eulerian walk per start vertex.
    pub eulerian_walks: Vec<EulerianWalk>,
    /// Vertex the DFS and Dijkstra runs started from.
    pub start: usize,
    /// DFS first-visit order from `start` with a fresh visited set.
    pub dfs_order: Vec<usize>,
    /// Shortest distances from `start`.
    pub distances: DistanceMap,
}

impl GraphReport {
    /// Run every analysis on `graph`, using `start` (0-based) for DFS and Dijkstra.
    pub fn build(graph: &WeightedGraph, start: usize) -> GraphResult<Self> {
        let mut visited = VisitedSet::for_graph(graph);
        let dfs_order = graph.depth_first_search(start, &mut visited)?;
        let distances = graph.dijkstra_shortest_path(start)?;

        Ok(Self {
            vertex_count: graph.vertex_count(),
            edge_count: graph.edge_count(),
            adjacency_matrix: graph.adjacency_matrix().to_rows(),
            incidence_matrix: graph.incidence_matrix().to_rows(),
            chromatic_number: graph.chromatic_number(),
            edge_chromatic_number: graph.edge_chromatic_number(),
            eulerian_walks: graph.find_eulerian_circuits_and_paths(),
            start,
            dfs_order,
            distances,
        })
    }

    /// Human-readable multi-section text.
    pub fn render_text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for GraphReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Adjacency matrix:")?;
        f.write_str(&render_rows(&self.adjacency_matrix))?;
        writeln!(f, "\nIncidence matrix:")?;
        f.write_str(&render_rows(&self.incidence_matrix))?;
        writeln!(f, "\nChromatic number: {}", self.chromatic_number)?;
        writeln!(f, "Edge chromatic number: {}", self.edge_chromatic_number)?;
        writeln!(f, "\nEulerian circuits and paths:")?;
        f.write_str(&render_walks(&self.eulerian_walks))?;
        writeln!(f, "\nDepth-first search:")?;
        writeln!(f, "{}", render_labels(&self.dfs_order))?;
        writeln!(f, "\nShortest paths from vertex {}:", self.start + 1)?;
        f.write_str(&render_distances(&self.distances))
    }
}

/// Space-separated 1-based labels.
pub fn render_labels(vertices: &[usize]) -> String {
    vertices
        .iter()
        .map(|v| (v + 1).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// One line per row, cells separated by spaces.
pub fn render_rows(rows: &[Vec<u8>]) -> String {
    rows.iter()
        .map(|row| {
            let cells: Vec<String> = row.iter().map(u8::to_string).collect();
            format!("{}\n", cells.join(" "))
        })
        .collect()
}

/// Render a matrix the same way as `render_rows`.
pub fn render_matrix(matrix: &Matrix) -> String {
    render_rows(&matrix.to_rows())
}

/// One line per walk: kind, then the labels.
pub fn render_walks(walks: &[EulerianWalk]) -> String {
    walks
        .iter()
        .map(|walk| format!("{:<8} {}\n", walk.kind.name(), render_labels(&walk.vertices)))
        .collect()
}

/// One line per vertex; unreachable vertices show `inf`.
pub fn render_distances(distances: &DistanceMap) -> String {
    distances
        .iter()
        .map(|(vertex, dist)| {
            if dist == INFINITY {
                format!("Vertex {}: distance = inf\n", vertex + 1)
            } else {
                format!("Vertex {}: distance = {}\n", vertex + 1, dist)
            }
        })
        .collect()
}
