//! Search Trees
//!
//! Two ordered binary trees over integers:
//!
//! - [`Bst`]: plain binary search tree with insert, delete and lookup.
//!   Equal values are routed to the right subtree.
//! - [`AvlTree`]: the height-balanced variant. Every node records its
//!   height and insertions rebalance with single or double rotations.
//!   Equal values are ignored.
//!
//! Both expose the three depth-first orders through [`Traversal`], a lazy
//! iterator that can be restarted simply by asking the tree for a new one.
//!
//! # Ownership
//!
//! Parents own their children through `Option<Box<_>>`. There are no parent
//! pointers: every algorithm here walks top-down, and restructuring is done
//! by taking a subtree out of its link, rebuilding it, and putting the new
//! root back.

mod avl;
mod bst;
mod traversal;

pub use avl::{AvlInsert, AvlNode, AvlTree, Rotation};
pub use bst::{Bst, BstNode};
pub use traversal::{BinaryNode, Traversal, TraversalOrder};
