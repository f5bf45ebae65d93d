//! Adjacency Lists
//!
//! The graph storage shared by the traversal and shortest-path engines.

use std::fmt::Debug;
use std::hash::Hash;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::{EngineError, Result};

/// Edge weight. Non-negative by construction.
pub type Weight = u64;

/// Bounds a vertex identifier must satisfy.
pub trait VertexId: Clone + Eq + Hash + Debug {}

impl<T: Clone + Eq + Hash + Debug> VertexId for T {}

/// An edge as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge<V> {
    pub from: V,
    pub to: V,
    /// Defaults to 1 when omitted.
    #[serde(default = "default_weight")]
    pub weight: Weight,
}

fn default_weight() -> Weight {
    1
}

impl<V> Edge<V> {
    pub fn new(from: V, to: V, weight: Weight) -> Self {
        Self { from, to, weight }
    }

    /// An edge of weight 1.
    pub fn unweighted(from: V, to: V) -> Self {
        Self::new(from, to, default_weight())
    }
}

/// An outgoing edge as stored, pointing at the target's slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct OutEdge {
    pub to: usize,
    pub weight: Weight,
}

/// Serializable description of a whole graph.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphDef<V> {
    pub vertices: Vec<V>,
    #[serde(default = "Vec::new")]
    pub edges: Vec<Edge<V>>,
    /// Insert every edge in both directions.
    #[serde(default)]
    pub undirected: bool,
}

/// A graph stored as ordered adjacency lists.
///
/// Vertices keep the order in which they were added; that position is the
/// vertex's *slot*. Outgoing edges keep their insertion order too, which is
/// the order traversals explore them in.
#[derive(Debug, Clone)]
pub struct Graph<V> {
    adjacency: IndexMap<V, SmallVec<[OutEdge; 4]>>,
    edge_count: usize,
}

impl<V: VertexId> Graph<V> {
    pub fn new() -> Self {
        Self {
            adjacency: IndexMap::new(),
            edge_count: 0,
        }
    }

    /// Build a directed graph. Every edge endpoint must be listed in
    /// `vertices`.
    pub fn from_edges(
        vertices: impl IntoIterator<Item = V>,
        edges: impl IntoIterator<Item = Edge<V>>,
    ) -> Result<Self> {
        let mut graph = Self::new();
        for vertex in vertices {
            graph.add_vertex(vertex);
        }
        for edge in edges {
            graph.add_edge(edge.from, edge.to, edge.weight)?;
        }
        Ok(graph)
    }

    /// Add a vertex, returning its slot. Adding an existing vertex is a
    /// no-op that returns the slot it already has.
    pub fn add_vertex(&mut self, vertex: V) -> usize {
        match self.adjacency.get_index_of(&vertex) {
            Some(slot) => slot,
            None => self.adjacency.insert_full(vertex, SmallVec::new()).0,
        }
    }

    /// Add a directed edge. Both endpoints must already exist.
    pub fn add_edge(&mut self, from: V, to: V, weight: Weight) -> Result<()> {
        let to_slot = self.require_slot(&to)?;
        let from_slot = self.require_slot(&from)?;
        if let Some((_, edges)) = self.adjacency.get_index_mut(from_slot) {
            edges.push(OutEdge {
                to: to_slot,
                weight,
            });
            self.edge_count += 1;
        }
        Ok(())
    }

    /// Add an edge in each direction.
    pub fn add_undirected_edge(&mut self, a: V, b: V, weight: Weight) -> Result<()> {
        self.add_edge(a.clone(), b.clone(), weight)?;
        self.add_edge(b, a, weight)
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of directed edges stored.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn contains(&self, vertex: &V) -> bool {
        self.adjacency.contains_key(vertex)
    }

    pub fn slot_of(&self, vertex: &V) -> Option<usize> {
        self.adjacency.get_index_of(vertex)
    }

    pub fn vertex_at(&self, slot: usize) -> Option<&V> {
        self.adjacency.get_index(slot).map(|(vertex, _)| vertex)
    }

    /// Vertices in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = &V> {
        self.adjacency.keys()
    }

    /// Outgoing neighbors of `vertex` with edge weights, in insertion order.
    /// Empty when the vertex is unknown.
    pub fn neighbors<'a>(&'a self, vertex: &V) -> impl Iterator<Item = (&'a V, Weight)> + 'a {
        let edges = self
            .adjacency
            .get(vertex)
            .map(|edges| edges.as_slice())
            .unwrap_or_default();
        edges.iter().filter_map(move |edge| {
            self.vertex_at(edge.to).map(|target| (target, edge.weight))
        })
    }

    pub(crate) fn out_edges(&self, slot: usize) -> &[OutEdge] {
        self.adjacency
            .get_index(slot)
            .map(|(_, edges)| edges.as_slice())
            .unwrap_or_default()
    }

    pub(crate) fn require_slot(&self, vertex: &V) -> Result<usize> {
        self.slot_of(vertex)
            .ok_or_else(|| EngineError::InvalidVertex(format!("{vertex:?}")))
    }
}

impl<V: VertexId> Default for Graph<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: VertexId> TryFrom<GraphDef<V>> for Graph<V> {
    type Error = EngineError;

    fn try_from(def: GraphDef<V>) -> Result<Self> {
        let mut graph = Self::new();
        for vertex in def.vertices {
            graph.add_vertex(vertex);
        }
        for edge in def.edges {
            if def.undirected {
                graph.add_undirected_edge(edge.from, edge.to, edge.weight)?;
            } else {
                graph.add_edge(edge.from, edge.to, edge.weight)?;
            }
        }
        Ok(graph)
    }
}
