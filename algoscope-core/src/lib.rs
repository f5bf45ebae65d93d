//! Algoscope Core
//!
//! This crate provides the algorithm engines behind the Algoscope
//! data-structure visualizer. It implements:
//!
//! - Search trees (plain BST and AVL) with the three depth-first traversals
//! - Graph traversal (BFS, DFS) and Dijkstra's shortest paths
//! - A linear-probing hash table
//! - A binary heap whose max/min ordering is chosen per call
//! - Stack, queue, linked list, array search and bubble sort
//!
//! Every engine is synchronous, owns only the data the caller hands it and
//! performs no I/O. Rendering, pacing and persistence belong to the caller.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - `tree`: BST and AVL trees, traversal iterators
//! - `graph`: adjacency-list graphs, BFS/DFS, Dijkstra
//! - `hashing`: open-addressing hash table
//! - `heap`: implicit binary heap
//! - `linear`: stack, queue, linked list
//! - `search`, `sort`: array algorithms
//! - `trace`: step records that let a caller animate any operation
//! - `grading`: scoring rules for practice-problem results
//! - `config`: JSON-loadable engine defaults
//!
//! # Example
//!
//! ```rust
//! use algoscope_core::trace::{Step, Trace};
//! use algoscope_core::tree::{AvlTree, Rotation, TraversalOrder};
//!
//! let mut tree = AvlTree::new();
//! tree.insert(10);
//! tree.insert(20);
//!
//! // Record what happens so it can be replayed step by step.
//! let mut trace = Trace::new();
//! let outcome = tree.insert_traced(30, &mut trace);
//!
//! assert_eq!(outcome.rotations.as_slice(), &[Rotation::Left]);
//! assert!(trace.steps().contains(&Step::Rotate { rotation: Rotation::Left, pivot: 10 }));
//!
//! let sorted: Vec<i64> = tree.traverse(TraversalOrder::Inorder).collect();
//! assert_eq!(sorted, vec![10, 20, 30]);
//! ```

pub mod config;
pub mod error;
pub mod grading;
pub mod graph;
pub mod hashing;
pub mod heap;
pub mod input;
pub mod linear;
pub mod search;
pub mod sort;
pub mod trace;
pub mod tree;

pub use config::EngineConfig;
pub use error::{EngineError, Result};
pub use trace::{NoTrace, Step, StepSink, Trace};
