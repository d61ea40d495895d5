//! graphkit: in-memory weighted graph toolkit.
//!
//! Builds a graph over a fixed vertex set from edge lists, derives adjacency and
//! incidence matrices, and runs depth-first search, Dijkstra shortest paths and
//! an Eulerian walk analysis over it.

pub mod cli;
pub mod engine;
pub mod format;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use engine::GraphReport;
pub use format::EdgeListReader;
pub use graph::{
    DistanceMap, EulerianWalk, GraphBuilder, Matrix, VisitedSet, WalkKind, WeightedGraph,
};
pub use types::{Edge, EdgeKind, GraphError, GraphResult, INFINITY};
