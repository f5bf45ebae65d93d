//! Heap Engine
//!
//! A binary heap over an implicit array. Insertion appends and sifts up;
//! extraction moves the last value to the root and sifts down. Both are
//! `O(log n)`.
//!
//! The max/min ordering is a parameter of each call rather than of the
//! heap, so a visualizer can flip between the two. Flipping does not
//! rebuild anything by itself; see [`Heap`] for what that implies.

mod binary;

pub use binary::{left, parent, right, Heap, HeapKind};
