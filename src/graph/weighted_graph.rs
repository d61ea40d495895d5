//! Core graph structure: a fixed vertex set with per-vertex adjacency lists.

use std::fmt;

use crate::types::{Edge, EdgeKind, GraphError, GraphResult};

/// A weighted graph over a fixed set of vertices `0..V`.
///
/// Edges are added through 1-based labels and stored under 0-based indices.
/// Each adjacency list keeps insertion order, which traversal output depends on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeightedGraph {
    /// Outgoing edges, indexed by origin vertex.
    adjacency: Vec<Vec<Edge>>,
}

impl WeightedGraph {
    /// Create a graph with `vertex_count` vertices and no edges.
    pub fn new(vertex_count: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); vertex_count],
        }
    }

    /// Create a graph from a signed vertex count, rejecting negative values
    /// and counts whose adjacency table cannot be allocated.
    pub fn try_new(vertex_count: i64) -> GraphResult<Self> {
        let count = usize::try_from(vertex_count).map_err(|_| {
            GraphError::InvalidArgument(format!(
                "vertex count must be non-negative, got {}",
                vertex_count
            ))
        })?;

        let mut adjacency = Vec::new();
        adjacency.try_reserve_exact(count).map_err(|e| {
            GraphError::InvalidArgument(format!(
                "cannot allocate {} vertices: {}",
                vertex_count, e
            ))
        })?;
        adjacency.resize_with(count, Vec::new);
        Ok(Self { adjacency })
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of stored adjacency entries (an undirected edge counts twice).
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    /// Outgoing edges of a vertex, in insertion order.
    pub fn edges_from(&self, vertex: usize) -> &[Edge] {
        self.adjacency.get(vertex).map(Vec::as_slice).unwrap_or(&[])
    }

    /// All adjacency lists, indexed by origin vertex.
    pub fn adjacency(&self) -> &[Vec<Edge>] {
        &self.adjacency
    }

    /// Number of outgoing entries stored for a vertex.
    pub fn out_degree(&self, vertex: usize) -> usize {
        self.edges_from(vertex).len()
    }

    /// Add an edge stored in both directions. `v` and `w` are 1-based labels.
    pub fn add_edge_undirected(&mut self, v: usize, w: usize, weight: i64) -> GraphResult<()> {
        self.add_edge(v, w, weight, EdgeKind::Undirected)
    }

    /// Add an edge stored only on `v`. `v` and `w` are 1-based labels.
    pub fn add_edge_directed(&mut self, v: usize, w: usize, weight: i64) -> GraphResult<()> {
        self.add_edge(v, w, weight, EdgeKind::Directed)
    }

    /// Add an edge of the given kind between two 1-based labels.
    pub fn add_edge(
        &mut self,
        v: usize,
        w: usize,
        weight: i64,
        kind: EdgeKind,
    ) -> GraphResult<()> {
        // Both endpoints are checked before anything is stored.
        let from = self.index_of_label(v)?;
        let to = self.index_of_label(w)?;

        if weight < 0 {
            log::warn!(
                "Negative weight {} on edge {} -> {}; shortest paths will be unreliable",
                weight,
                v,
                w
            );
        }

        self.adjacency[from].push(Edge::new(to, weight));
        if kind == EdgeKind::Undirected {
            self.adjacency[to].push(Edge::new(from, weight));
        }

        log::debug!("Added {} edge {} -> {} ({})", kind, v, w, weight);
        Ok(())
    }

    /// Check that a 0-based index names a vertex of this graph.
    pub fn check_vertex(&self, index: usize) -> GraphResult<()> {
        if index < self.vertex_count() {
            Ok(())
        } else {
            Err(GraphError::index_out_of_range(index, self.vertex_count()))
        }
    }

    /// Convert a 1-based label into a 0-based vertex index.
    pub fn index_of_label(&self, label: usize) -> GraphResult<usize> {
        match label.checked_sub(1) {
            Some(index) if index < self.vertex_count() => Ok(index),
            _ => Err(GraphError::label_out_of_range(label, self.vertex_count())),
        }
    }

    /// Placeholder chromatic number: always the vertex count.
    ///
    /// No colouring is attempted. The value is an upper bound that is only tight
    /// for complete graphs, so callers must not rely on it for colouring.
    pub fn chromatic_number(&self) -> usize {
        self.vertex_count()
    }

    /// Edge chromatic number approximated by the maximum out-degree.
    ///
    /// This is the lower bound from Vizing's theorem on simple undirected graphs,
    /// not a computed edge colouring. Returns 0 for a graph without vertices.
    pub fn edge_chromatic_number(&self) -> usize {
        self.adjacency.iter().map(Vec::len).max().unwrap_or(0)
    }
}

/// Adjacency-list listing with 1-based labels, one line per vertex:
/// `Vertex 1: 3(1) 5(1)`.
impl fmt::Display for WeightedGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, edges) in self.adjacency.iter().enumerate() {
            write!(f, "Vertex {}:", index + 1)?;
            for edge in edges {
                write!(f, " {}({})", edge.to + 1, edge.weight)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
