//! Breadth-first and depth-first traversal.
//!
//! Both return the visitation order of the component reachable from the
//! start vertex. Vertices outside that component are simply absent.

use std::collections::VecDeque;

use tracing::debug;

use super::adjacency::{Graph, VertexId};
use crate::error::Result;
use crate::trace::{NoTrace, Step, StepSink};

/// Breadth-first visitation order from `start`.
pub fn bfs<V: VertexId>(graph: &Graph<V>, start: &V) -> Result<Vec<V>> {
    bfs_traced(graph, start, &mut NoTrace)
}

/// Breadth-first traversal with a FIFO frontier.
///
/// A vertex counts as visited when it is dequeued, not when it is enqueued,
/// so the frontier may briefly hold the same vertex twice; the second copy
/// is skipped when it reaches the front.
pub fn bfs_traced<V: VertexId, S: StepSink>(
    graph: &Graph<V>,
    start: &V,
    sink: &mut S,
) -> Result<Vec<V>> {
    let start = graph.require_slot(start)?;
    let mut visited = vec![false; graph.vertex_count()];
    let mut order = Vec::new();
    let mut queue = VecDeque::new();

    queue.push_back(start);
    sink.emit(Step::Enqueue { slot: start });

    while let Some(slot) = queue.pop_front() {
        if visited[slot] {
            continue;
        }
        visited[slot] = true;
        order.push(slot);
        sink.emit(Step::VisitVertex { slot });

        for edge in graph.out_edges(slot) {
            if !visited[edge.to] {
                queue.push_back(edge.to);
                sink.emit(Step::Enqueue { slot: edge.to });
            }
        }
    }

    debug!(start, visited = order.len(), "bfs complete");
    Ok(resolve(graph, &order))
}

/// Depth-first visitation order from `start`.
pub fn dfs<V: VertexId>(graph: &Graph<V>, start: &V) -> Result<Vec<V>> {
    dfs_traced(graph, start, &mut NoTrace)
}

/// Depth-first pre-order traversal.
///
/// Uses an explicit stack but visits vertices in exactly the order the
/// recursive formulation would: neighbors are pushed in reverse so the
/// first-inserted edge is explored first, and visited vertices are skipped
/// as they are popped.
pub fn dfs_traced<V: VertexId, S: StepSink>(
    graph: &Graph<V>,
    start: &V,
    sink: &mut S,
) -> Result<Vec<V>> {
    let start = graph.require_slot(start)?;
    let mut visited = vec![false; graph.vertex_count()];
    let mut order = Vec::new();
    let mut stack = vec![start];

    while let Some(slot) = stack.pop() {
        if visited[slot] {
            continue;
        }
        visited[slot] = true;
        order.push(slot);
        sink.emit(Step::VisitVertex { slot });

        stack.extend(
            graph
                .out_edges(slot)
                .iter()
                .rev()
                .map(|edge| edge.to)
                .filter(|&to| !visited[to]),
        );
    }

    debug!(start, visited = order.len(), "dfs complete");
    Ok(resolve(graph, &order))
}

fn resolve<V: VertexId>(graph: &Graph<V>, slots: &[usize]) -> Vec<V> {
    slots
        .iter()
        .filter_map(|&slot| graph.vertex_at(slot).cloned())
        .collect()
}
