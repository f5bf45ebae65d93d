//! Graph Engines
//!
//! Adjacency-list graphs plus the algorithms that run over them: breadth-
//! and depth-first traversal and Dijkstra's single-source shortest paths.
//!
//! # Overview
//!
//! A [`Graph`] maps each vertex identifier to an ordered list of outgoing
//! edges. Identifiers are opaque: small integers, strings, anything that is
//! `Clone + Eq + Hash + Debug`.
//!
//! # Design Decisions
//!
//! 1. Vertices live in an insertion-ordered map, so each vertex has a stable
//!    *slot*. Algorithms work on slots internally (plain `Vec<bool>` visited
//!    sets, `Vec` distance tables) and translate back to identifiers only
//!    when producing results.
//!
//! 2. Edge lists keep insertion order. That order decides ties during
//!    traversal, and slot order decides ties between equal distances.
//!
//! 3. A graph is never mutated by an algorithm. Each run takes `&Graph`
//!    and allocates its own working state.

mod adjacency;
mod dijkstra;
mod traversal;

pub use adjacency::{Edge, Graph, GraphDef, VertexId, Weight};
pub use dijkstra::{shortest_path_to, shortest_paths, shortest_paths_traced, ShortestPaths};
pub use traversal::{bfs, bfs_traced, dfs, dfs_traced};
