//! Single-source shortest paths (Dijkstra, array-scan variant).

use serde::Serialize;

use crate::types::{GraphResult, INFINITY};

use super::WeightedGraph;

/// Distances from one source vertex.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DistanceMap {
    /// The source vertex (0-based).
    pub source: usize,
    /// Distance per vertex; `INFINITY` for unreachable vertices.
    pub distances: Vec<i64>,
    /// Vertices in the order they were selected as the current minimum.
    pub settle_order: Vec<usize>,
}

impl DistanceMap {
    /// Distance to `vertex`, or `None` if it is unreachable or out of range.
    pub fn get(&self, vertex: usize) -> Option<i64> {
        self.distances.get(vertex).copied().filter(|&d| d != INFINITY)
    }

    /// Whether `vertex` is reachable from the source.
    pub fn is_reachable(&self, vertex: usize) -> bool {
        self.get(vertex).is_some()
    }

    /// Iterate over `(vertex, distance)` pairs, sentinel included.
    pub fn iter(&self) -> impl Iterator<Item = (usize, i64)> + '_ {
        self.distances.iter().copied().enumerate()
    }

    /// Number of vertices covered.
    pub fn len(&self) -> usize {
        self.distances.len()
    }

    /// True when the map covers no vertices.
    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }
}

/// Pick the unvisited vertex with the smallest distance.
///
/// The scan is ascending with a non-strict comparison, so among equal minima
/// the highest index wins. Unreachable vertices still qualify because every
/// distance is `<= INFINITY`.
fn min_distance(dist: &[i64], settled: &[bool]) -> Option<usize> {
    let mut min = INFINITY;
    let mut min_index = None;
    for (v, &d) in dist.iter().enumerate() {
        if !settled[v] && d <= min {
            min = d;
            min_index = Some(v);
        }
    }
    min_index
}

impl WeightedGraph {
    /// Shortest distances from `source` to every vertex.
    ///
    /// Runs `V - 1` selection rounds over a plain distance array, which is
    /// `O(V^2 + E)`. Weights must be non-negative: negative weights do not
    /// raise an error but the distances are then meaningless. Sums that would
    /// overflow are treated as no improvement.
    pub fn dijkstra_shortest_path(&self, source: usize) -> GraphResult<DistanceMap> {
        self.check_vertex(source)?;

        let n = self.vertex_count();
        let mut dist = vec![INFINITY; n];
        let mut settled = vec![false; n];
        let mut settle_order = Vec::with_capacity(n.saturating_sub(1));
        dist[source] = 0;

        for _ in 1..n {
            let Some(u) = min_distance(&dist, &settled) else {
                break;
            };
            settled[u] = true;
            settle_order.push(u);

            if dist[u] == INFINITY {
                continue;
            }
            for edge in self.edges_from(u) {
                if settled[edge.to] {
                    continue;
                }
                if let Some(candidate) = dist[u].checked_add(edge.weight) {
                    if candidate < dist[edge.to] {
                        dist[edge.to] = candidate;
                    }
                }
            }
        }

        log::debug!(
            "Dijkstra from {}: {} of {} vertices reachable",
            source,
            dist.iter().filter(|&&d| d != INFINITY).count(),
            n
        );

        Ok(DistanceMap {
            source,
            distances: dist,
            settle_order,
        })
    }
}
