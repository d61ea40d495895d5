//! Built-in sample graphs used by `gkit demo` and the benchmarks.

use crate::graph::{GraphBuilder, WeightedGraph};
use crate::types::GraphResult;

/// Six vertices, seven undirected edges, mostly unit weights.
pub fn first() -> GraphResult<WeightedGraph> {
    GraphBuilder::new(6)
        .edges(&[
            (1, 3, 1),
            (1, 5, 1),
            (2, 4, 1),
            (2, 5, 2),
            (3, 4, 1),
            (4, 6, 1),
            (5, 6, 1),
        ])
        .build()
}

/// Six vertices, eleven undirected edges; vertex 1 touches every other vertex.
pub fn second() -> GraphResult<WeightedGraph> {
    GraphBuilder::new(6)
        .edges(&[
            (1, 2, 7),
            (1, 3, 2),
            (1, 4, 4),
            (1, 5, 8),
            (1, 6, 2),
            (2, 4, 3),
            (2, 5, 3),
            (3, 6, 5),
            (4, 5, 7),
            (4, 6, 8),
            (5, 6, 3),
        ])
        .build()
}

/// Eight vertices, twelve undirected edges with mixed weights.
pub fn third() -> GraphResult<WeightedGraph> {
    GraphBuilder::new(8)
        .edges(&[
            (1, 2, 3),
            (1, 5, 3),
            (1, 8, 1),
            (2, 3, 11),
            (2, 4, 4),
            (2, 8, 5),
            (4, 5, 2),
            (4, 8, 6),
            (5, 6, 4),
            (6, 7, 5),
            (6, 8, 12),
            (7, 8, 1),
        ])
        .build()
}

/// All sample graphs, in order.
pub fn all() -> GraphResult<Vec<WeightedGraph>> {
    Ok(vec![first()?, second()?, third()?])
}
