//! In-memory graph operations: the core data structure and its algorithms.

pub mod builder;
pub mod matrix;
pub mod shortest_path;
pub mod traversal;
pub mod weighted_graph;

pub use builder::GraphBuilder;
pub use matrix::Matrix;
pub use shortest_path::DistanceMap;
pub use traversal::{EulerianWalk, VisitedSet, WalkKind};
pub use weighted_graph::WeightedGraph;
