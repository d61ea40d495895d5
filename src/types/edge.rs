//! Edge kinds and the stored edge struct.

use serde::Serialize;

/// How an inserted edge is stored in the adjacency lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeKind {
    /// Stored once, on the origin vertex.
    Directed,
    /// Stored twice, once on each endpoint.
    Undirected,
}

impl EdgeKind {
    /// Return a human-readable name for this edge kind.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Directed => "directed",
            Self::Undirected => "undirected",
        }
    }

    /// Parse an edge kind from a string name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "directed" | "d" => Some(Self::Directed),
            "undirected" | "u" => Some(Self::Undirected),
            _ => None,
        }
    }
}

impl std::fmt::Display for EdgeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// One adjacency-list entry: the destination vertex and the edge weight.
///
/// The origin is implied by the list the entry lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Edge {
    /// Destination vertex (0-based).
    pub to: usize,
    /// Edge weight. Shortest-path queries assume it is non-negative.
    pub weight: i64,
}

impl Edge {
    /// Create a new adjacency entry.
    pub fn new(to: usize, weight: i64) -> Self {
        Self { to, weight }
    }
}
