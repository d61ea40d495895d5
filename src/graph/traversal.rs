//! Graph traversal algorithms (DFS and Eulerian walk enumeration).
//!
//! Both walks are depth-first and use an explicit frame stack instead of
//! recursion, so deep graphs cannot overflow the call stack. Each frame records
//! the vertex and the position of the next adjacency entry to inspect, which
//! reproduces the recursive visit order exactly.

use serde::Serialize;

use crate::types::{GraphError, GraphResult};

use super::WeightedGraph;

/// Caller-owned record of which vertices a traversal has reached.
///
/// The graph never resets it. Reusing one set across several
/// `depth_first_search` calls continues the previous traversal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisitedSet {
    marks: Vec<bool>,
}

impl VisitedSet {
    /// A set with nothing visited, sized for `vertex_count` vertices.
    pub fn new(vertex_count: usize) -> Self {
        Self {
            marks: vec![false; vertex_count],
        }
    }

    /// A fresh set sized for `graph`.
    pub fn for_graph(graph: &WeightedGraph) -> Self {
        Self::new(graph.vertex_count())
    }

    /// Number of vertices the set was sized for.
    pub fn capacity(&self) -> usize {
        self.marks.len()
    }

    /// Whether `vertex` has been visited. Out-of-range vertices never are.
    pub fn contains(&self, vertex: usize) -> bool {
        self.marks.get(vertex).copied().unwrap_or(false)
    }

    /// Mark `vertex`; returns true if it was not marked before.
    pub fn insert(&mut self, vertex: usize) -> bool {
        match self.marks.get_mut(vertex) {
            Some(mark) if !*mark => {
                *mark = true;
                true
            }
            _ => false,
        }
    }

    /// Number of visited vertices.
    pub fn count(&self) -> usize {
        self.marks.iter().filter(|&&m| m).count()
    }

    /// True when every vertex is marked.
    pub fn is_complete(&self) -> bool {
        self.marks.iter().all(|&m| m)
    }

    /// Clear all marks.
    pub fn clear(&mut self) {
        self.marks.fill(false);
    }
}

/// Classification of one Eulerian walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WalkKind {
    /// First and last vertex match and every vertex was reached.
    Circuit,
    /// Anything else.
    Path,
}

impl WalkKind {
    /// Return a human-readable name for this walk kind.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Circuit => "circuit",
            Self::Path => "path",
        }
    }
}

/// The post-order vertex sequence produced from one start vertex.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EulerianWalk {
    /// Vertex the walk started from.
    pub start: usize,
    /// Vertices in the order their walk frames finished.
    pub vertices: Vec<usize>,
    /// Circuit or path.
    pub kind: WalkKind,
}

impl EulerianWalk {
    /// True for walks classified as circuits.
    pub fn is_circuit(&self) -> bool {
        self.kind == WalkKind::Circuit
    }
}

/// Stack frame: a vertex and the index of its next adjacency entry.
struct Frame {
    vertex: usize,
    next: usize,
}

impl Frame {
    fn new(vertex: usize) -> Self {
        Self { vertex, next: 0 }
    }
}

/// Advance `frame` to its next unvisited neighbour, marking it.
fn next_unvisited(
    graph: &WeightedGraph,
    frame: &mut Frame,
    visited: &mut VisitedSet,
) -> Option<usize> {
    let edges = graph.edges_from(frame.vertex);
    while frame.next < edges.len() {
        let to = edges[frame.next].to;
        frame.next += 1;
        if visited.insert(to) {
            return Some(to);
        }
    }
    None
}

impl WeightedGraph {
    /// Depth-first search from `start`, returning vertices in first-visit order.
    ///
    /// `start` is always emitted and marked, even if `visited` already holds it.
    /// Neighbours are explored in adjacency-list order and skipped once marked.
    pub fn depth_first_search(
        &self,
        start: usize,
        visited: &mut VisitedSet,
    ) -> GraphResult<Vec<usize>> {
        self.check_vertex(start)?;
        self.check_visited(visited)?;

        visited.insert(start);
        let mut order = vec![start];
        let mut stack = vec![Frame::new(start)];

        while let Some(frame) = stack.last_mut() {
            match next_unvisited(self, frame, visited) {
                Some(next) => {
                    order.push(next);
                    stack.push(Frame::new(next));
                }
                None => {
                    stack.pop();
                }
            }
        }

        log::debug!("DFS from {} visited {} vertices", start, order.len());
        Ok(order)
    }

    /// One walk per start vertex, in vertex order.
    ///
    /// From each start a depth-first walk runs with a fresh visited set in which
    /// the start itself is not pre-marked, so the walk may re-enter it once. A
    /// vertex is appended after all of its neighbours have been explored. The
    /// sequence is a circuit when its ends match and every vertex got marked,
    /// otherwise a path.
    ///
    /// Edges are never consumed, so this is a reachability trace rather than a
    /// true Eulerian circuit search: a "circuit" does not imply every edge is
    /// used exactly once.
    pub fn find_eulerian_circuits_and_paths(&self) -> Vec<EulerianWalk> {
        let walks: Vec<EulerianWalk> = (0..self.vertex_count())
            .map(|start| self.walk_from(start))
            .collect();
        log::debug!(
            "Eulerian analysis: {} walks, {} circuits",
            walks.len(),
            walks.iter().filter(|w| w.is_circuit()).count()
        );
        walks
    }

    /// The single walk `find_eulerian_circuits_and_paths` produces for `start`.
    pub fn eulerian_walk(&self, start: usize) -> GraphResult<EulerianWalk> {
        self.check_vertex(start)?;
        Ok(self.walk_from(start))
    }

    fn walk_from(&self, start: usize) -> EulerianWalk {
        let mut visited = VisitedSet::for_graph(self);
        let mut vertices = Vec::new();
        let mut stack = vec![Frame::new(start)];

        while let Some(frame) = stack.last_mut() {
            match next_unvisited(self, frame, &mut visited) {
                Some(next) => stack.push(Frame::new(next)),
                None => {
                    vertices.push(frame.vertex);
                    stack.pop();
                }
            }
        }

        let closed = vertices.first() == vertices.last();
        let kind = if closed && visited.is_complete() {
            WalkKind::Circuit
        } else {
            WalkKind::Path
        };

        EulerianWalk {
            start,
            vertices,
            kind,
        }
    }

    fn check_visited(&self, visited: &VisitedSet) -> GraphResult<()> {
        if visited.capacity() == self.vertex_count() {
            Ok(())
        } else {
            Err(GraphError::InvalidArgument(format!(
                "visited set sized for {} vertices, graph has {}",
                visited.capacity(),
                self.vertex_count()
            )))
        }
    }
}
