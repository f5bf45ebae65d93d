//! Dijkstra's Shortest Paths
//!
//! Single-source distances over non-negative edge weights.
//!
//! # Algorithm
//!
//! 1. Every vertex starts at distance +inf except the source at 0.
//! 2. Pop the unsettled vertex with the smallest tentative distance from a
//!    binary heap. Equal distances pop in slot order, so runs are
//!    deterministic.
//! 3. Settle it and relax each outgoing edge to an unsettled vertex:
//!    `dist[u] + w < dist[v]` lowers `dist[v]` and records `u` as the
//!    predecessor of `v`.
//! 4. Stop when the heap is empty. Whatever was never reached stays +inf.
//!
//! Stale heap entries (a vertex pushed again after its distance improved)
//! are skipped when popped, giving `O((V + E) log V)` overall.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use indexmap::IndexMap;
use serde::Serialize;
use tracing::{debug, trace};

use super::adjacency::{Graph, VertexId, Weight};
use crate::error::Result;
use crate::trace::{NoTrace, Step, StepSink};

/// Distances from one source to every vertex of a graph.
#[derive(Debug, Clone, Serialize)]
pub struct ShortestPaths<V: VertexId> {
    source: V,
    /// `None` marks a vertex the source cannot reach.
    distances: IndexMap<V, Option<Weight>>,
    #[serde(skip)]
    predecessors: Vec<Option<usize>>,
}

impl<V: VertexId> ShortestPaths<V> {
    pub fn source(&self) -> &V {
        &self.source
    }

    /// Distance to `vertex`, or `None` when it is unreachable or unknown.
    pub fn distance(&self, vertex: &V) -> Option<Weight> {
        self.distances.get(vertex).copied().flatten()
    }

    pub fn is_reachable(&self, vertex: &V) -> bool {
        self.distance(vertex).is_some()
    }

    /// Every vertex with its distance, in graph insertion order.
    pub fn distances(&self) -> &IndexMap<V, Option<Weight>> {
        &self.distances
    }

    /// Vertices along a shortest path from the source to `target`,
    /// both ends included.
    pub fn path_to(&self, target: &V) -> Option<Vec<V>> {
        let mut slot = self.distances.get_index_of(target)?;
        if self.distances.get_index(slot)?.1.is_none() {
            return None;
        }

        let mut path = Vec::new();
        loop {
            let (vertex, _) = self.distances.get_index(slot)?;
            path.push(vertex.clone());
            match self.predecessors.get(slot).copied().flatten() {
                Some(prev) => slot = prev,
                None => break,
            }
        }
        path.reverse();
        Some(path)
    }
}

/// Shortest distances from `source` to every vertex.
///
/// Weights are unsigned, so the non-negativity precondition always holds.
/// Sums that would overflow saturate at `u64::MAX`.
pub fn shortest_paths<V: VertexId>(graph: &Graph<V>, source: &V) -> Result<ShortestPaths<V>> {
    shortest_paths_traced(graph, source, &mut NoTrace)
}

/// [`shortest_paths`], reporting each settled vertex and each successful
/// relaxation.
pub fn shortest_paths_traced<V: VertexId, S: StepSink>(
    graph: &Graph<V>,
    source: &V,
    sink: &mut S,
) -> Result<ShortestPaths<V>> {
    let source_slot = graph.require_slot(source)?;
    let n = graph.vertex_count();
    let mut dist: Vec<Option<Weight>> = vec![None; n];
    let mut prev: Vec<Option<usize>> = vec![None; n];
    let mut settled = vec![false; n];
    let mut heap = BinaryHeap::new();

    dist[source_slot] = Some(0);
    heap.push(Reverse((0, source_slot)));

    while let Some(Reverse((d, u))) = heap.pop() {
        if settled[u] || dist[u].is_some_and(|best| d > best) {
            continue;
        }
        settled[u] = true;
        sink.emit(Step::Settle { slot: u, distance: d });

        for edge in graph.out_edges(u) {
            let v = edge.to;
            if settled[v] {
                continue;
            }
            let candidate = d.saturating_add(edge.weight);
            if dist[v].map_or(true, |current| candidate < current) {
                dist[v] = Some(candidate);
                prev[v] = Some(u);
                heap.push(Reverse((candidate, v)));
                trace!(from = u, to = v, distance = candidate, "relax");
                sink.emit(Step::Relax {
                    from: u,
                    to: v,
                    distance: candidate,
                });
            }
        }
    }

    let unreachable = dist.iter().filter(|d| d.is_none()).count();
    debug!(source = source_slot, vertices = n, unreachable, "dijkstra complete");

    let distances = graph.vertices().cloned().zip(dist).collect();
    Ok(ShortestPaths {
        source: source.clone(),
        distances,
        predecessors: prev,
    })
}

/// Length and vertices of one shortest path from `source` to `target`,
/// or `None` when `target` is unreachable.
pub fn shortest_path_to<V: VertexId>(
    graph: &Graph<V>,
    source: &V,
    target: &V,
) -> Result<Option<(Weight, Vec<V>)>> {
    graph.require_slot(target)?;
    let paths = shortest_paths(graph, source)?;
    Ok(paths
        .distance(target)
        .and_then(|d| paths.path_to(target).map(|path| (d, path))))
}
