//! All data types for the graphkit library.

pub mod edge;
pub mod error;

pub use edge::{Edge, EdgeKind};
pub use error::{GraphError, GraphResult};

/// Distance reported for vertices a shortest-path query cannot reach.
pub const INFINITY: i64 = i64::MAX;
