//! AVL Tree
//!
//! A search tree that stores the height of every node and restores
//! `|height(left) - height(right)| <= 1` with rotations on the way back up
//! from each insertion.
//!
//! # Rotations
//!
//! Subtree roots are moved by value: each rotation takes ownership of the
//! unbalanced node, rewires at most three links and hands back the new
//! subtree root for the parent to store. Only the two nodes that changed
//! position get their heights recomputed.
//!
//! ```text
//!       y                x
//!      / \   right      / \
//!     x   C  ------>   A   y
//!    / \     <------      / \
//!   A   B     left       B   C
//! ```
//!
//! # Duplicates
//!
//! Inserting a value that is already present leaves the tree untouched and
//! reports `inserted: false`.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::debug;

use super::traversal::{BinaryNode, Traversal, TraversalOrder};
use crate::trace::{NoTrace, Step, StepSink};

/// Direction of a single rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rotation {
    Left,
    Right,
}

/// Outcome of [`AvlTree::insert`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AvlInsert {
    /// False when the value was already present.
    pub inserted: bool,
    /// Rotations in the order they were applied. At most two per insert.
    pub rotations: SmallVec<[Rotation; 2]>,
}

/// A node of an [`AvlTree`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvlNode {
    value: i64,
    height: u32,
    left: Option<Box<AvlNode>>,
    right: Option<Box<AvlNode>>,
}

impl AvlNode {
    fn leaf(value: i64) -> Self {
        Self {
            value,
            height: 1,
            left: None,
            right: None,
        }
    }

    /// Recorded height. A leaf has height 1.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// `height(left) - height(right)`.
    pub fn balance(&self) -> i64 {
        i64::from(height(&self.left)) - i64::from(height(&self.right))
    }

    fn update_height(&mut self) {
        self.height = 1 + height(&self.left).max(height(&self.right));
    }
}

impl BinaryNode for AvlNode {
    fn value(&self) -> i64 {
        self.value
    }

    fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }
}

fn height(link: &Option<Box<AvlNode>>) -> u32 {
    link.as_ref().map_or(0, |node| node.height)
}

/// Height-balanced binary search tree over integers.
#[derive(Debug, Clone, Default)]
pub struct AvlTree {
    root: Option<Box<AvlNode>>,
    len: usize,
}

struct InsertCtx<'s, S> {
    sink: &'s mut S,
    outcome: AvlInsert,
}

impl AvlTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a tree by inserting `values` in order.
    pub fn from_values(values: impl IntoIterator<Item = i64>) -> Self {
        let mut tree = Self::new();
        for value in values {
            tree.insert(value);
        }
        tree
    }

    pub fn root(&self) -> Option<&AvlNode> {
        self.root.as_deref()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Height of the root, 0 for an empty tree.
    pub fn height(&self) -> u32 {
        height(&self.root)
    }

    pub fn insert(&mut self, value: i64) -> AvlInsert {
        self.insert_traced(value, &mut NoTrace)
    }

    /// Insert, reporting the descent and any rotations to `sink`.
    pub fn insert_traced<S: StepSink>(&mut self, value: i64, sink: &mut S) -> AvlInsert {
        let mut ctx = InsertCtx {
            sink,
            outcome: AvlInsert::default(),
        };
        self.root = Some(insert_at(self.root.take(), value, &mut ctx));
        if ctx.outcome.inserted {
            self.len += 1;
        }
        ctx.outcome
    }

    pub fn contains(&self, value: i64) -> bool {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match value.cmp(&node.value) {
                Ordering::Equal => return true,
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
            };
        }
        false
    }

    pub fn traverse(&self, order: TraversalOrder) -> Traversal<'_, AvlNode> {
        Traversal::new(self.root(), order)
    }

    /// Recompute every height from scratch and check it against the
    /// recorded one, along with the balance bound and search ordering.
    pub fn check_invariants(&self) -> bool {
        fn check(node: Option<&AvlNode>, low: Option<i64>, high: Option<i64>) -> Option<u32> {
            let Some(node) = node else {
                return Some(0);
            };
            if low.is_some_and(|low| node.value <= low)
                || high.is_some_and(|high| node.value >= high)
            {
                return None;
            }
            let left = check(node.left(), low, Some(node.value))?;
            let right = check(node.right(), Some(node.value), high)?;
            let actual = 1 + left.max(right);
            (actual == node.height && left.abs_diff(right) <= 1).then_some(actual)
        }
        check(self.root(), None, None).is_some()
    }
}

fn insert_at<S: StepSink>(
    link: Option<Box<AvlNode>>,
    value: i64,
    ctx: &mut InsertCtx<'_, S>,
) -> Box<AvlNode> {
    let Some(mut node) = link else {
        ctx.outcome.inserted = true;
        return Box::new(AvlNode::leaf(value));
    };
    ctx.sink.emit(Step::VisitNode { value: node.value });

    match value.cmp(&node.value) {
        Ordering::Less => node.left = Some(insert_at(node.left.take(), value, ctx)),
        Ordering::Greater => node.right = Some(insert_at(node.right.take(), value, ctx)),
        Ordering::Equal => return node,
    }

    node.update_height();
    rebalance(node, value, ctx)
}

fn rebalance<S: StepSink>(
    mut node: Box<AvlNode>,
    value: i64,
    ctx: &mut InsertCtx<'_, S>,
) -> Box<AvlNode> {
    let balance = node.balance();

    if balance > 1 {
        if let Some(left_value) = node.left.as_ref().map(|l| l.value) {
            if value > left_value {
                // Left-right: straighten the kink first.
                node.left = node.left.take().map(|left| rotate_left(left, ctx));
            }
            return rotate_right(node, ctx);
        }
    }

    if balance < -1 {
        if let Some(right_value) = node.right.as_ref().map(|r| r.value) {
            if value < right_value {
                // Right-left.
                node.right = node.right.take().map(|right| rotate_right(right, ctx));
            }
            return rotate_left(node, ctx);
        }
    }

    node
}

fn rotate_right<S: StepSink>(mut y: Box<AvlNode>, ctx: &mut InsertCtx<'_, S>) -> Box<AvlNode> {
    let Some(mut x) = y.left.take() else {
        return y;
    };
    record(Rotation::Right, y.value, ctx);

    y.left = x.right.take();
    y.update_height();
    x.right = Some(y);
    x.update_height();
    x
}

fn rotate_left<S: StepSink>(mut x: Box<AvlNode>, ctx: &mut InsertCtx<'_, S>) -> Box<AvlNode> {
    let Some(mut y) = x.right.take() else {
        return x;
    };
    record(Rotation::Left, x.value, ctx);

    x.right = y.left.take();
    x.update_height();
    y.left = Some(x);
    y.update_height();
    y
}

fn record<S: StepSink>(rotation: Rotation, pivot: i64, ctx: &mut InsertCtx<'_, S>) {
    debug!(?rotation, pivot, "avl rotation");
    ctx.outcome.rotations.push(rotation);
    ctx.sink.emit(Step::Rotate { rotation, pivot });
}
