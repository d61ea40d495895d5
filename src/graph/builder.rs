//! Fluent API for building WeightedGraph instances from edge lists.

use crate::types::{EdgeKind, GraphResult};

use super::WeightedGraph;

/// A pending edge, kept with its 1-based labels until `build`.
#[derive(Debug, Clone, Copy)]
struct PendingEdge {
    v: usize,
    w: usize,
    weight: i64,
    kind: EdgeKind,
}

/// Fluent builder for constructing a WeightedGraph.
///
/// Labels are validated when the graph is built, so a chain of calls reports
/// the first bad edge instead of failing part-way through.
pub struct GraphBuilder {
    vertex_count: usize,
    edges: Vec<PendingEdge>,
}

impl GraphBuilder {
    /// Create a new builder for a graph with `vertex_count` vertices.
    pub fn new(vertex_count: usize) -> Self {
        Self {
            vertex_count,
            edges: Vec::new(),
        }
    }

    /// Add an undirected edge between two 1-based labels.
    pub fn edge(&mut self, v: usize, w: usize, weight: i64) -> &mut Self {
        self.link(v, w, weight, EdgeKind::Undirected)
    }

    /// Add a directed edge from `v` to `w` (1-based labels).
    pub fn arc(&mut self, v: usize, w: usize, weight: i64) -> &mut Self {
        self.link(v, w, weight, EdgeKind::Directed)
    }

    /// Add an edge of an explicit kind.
    pub fn link(&mut self, v: usize, w: usize, weight: i64, kind: EdgeKind) -> &mut Self {
        self.edges.push(PendingEdge { v, w, weight, kind });
        self
    }

    /// Add a batch of undirected `(v, w, weight)` triples.
    pub fn edges(&mut self, triples: &[(usize, usize, i64)]) -> &mut Self {
        for &(v, w, weight) in triples {
            self.edge(v, w, weight);
        }
        self
    }

    /// Number of edges queued so far.
    pub fn pending(&self) -> usize {
        self.edges.len()
    }

    /// Build the final WeightedGraph, inserting edges in the order they were added.
    pub fn build(&self) -> GraphResult<WeightedGraph> {
        let mut graph = WeightedGraph::new(self.vertex_count);
        for edge in &self.edges {
            graph.add_edge(edge.v, edge.w, edge.weight, edge.kind)?;
        }
        Ok(graph)
    }
}
