//! Binary Search Tree
//!
//! Unbalanced search tree. Values equal to a node go to its right subtree,
//! so duplicates are kept rather than rejected.

use std::cmp::Ordering;
use std::fmt;

use tracing::trace;

use super::traversal::{BinaryNode, Traversal, TraversalOrder};
use crate::trace::{NoTrace, Step, StepSink};

/// A node of a [`Bst`]. Each node owns its children.
pub struct BstNode {
    value: i64,
    left: Option<Box<BstNode>>,
    right: Option<Box<BstNode>>,
}

impl BstNode {
    fn leaf(value: i64) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }
}

impl fmt::Debug for BstNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BstNode")
            .field("value", &self.value)
            .field("left", &self.left.as_ref().map(|n| n.value))
            .field("right", &self.right.as_ref().map(|n| n.value))
            .finish()
    }
}

impl BinaryNode for BstNode {
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

/// Binary search tree over integers.
///
/// Nothing here recurses per level: sorted input builds a chain as deep as
/// the input, and every walk, delete and drop stays iterative.
#[derive(Default)]
pub struct Bst {
    root: Option<Box<BstNode>>,
    len: usize,
}

impl Bst {
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

    pub fn root(&self) -> Option<&BstNode> {
        self.root.as_deref()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Insert a value at the first empty child found by descent.
    pub fn insert(&mut self, value: i64) {
        self.insert_traced(value, &mut NoTrace);
    }

    /// Insert, reporting every node passed on the way down.
    pub fn insert_traced<S: StepSink>(&mut self, value: i64, sink: &mut S) {
        let mut link = &mut self.root;
        while let Some(node) = link {
            sink.emit(Step::VisitNode { value: node.value });
            link = if value < node.value {
                &mut node.left
            } else {
                &mut node.right
            };
        }
        *link = Some(Box::new(BstNode::leaf(value)));
        self.len += 1;
        trace!(value, len = self.len, "bst insert");
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

    /// Remove one occurrence of `value`. Returns whether anything was removed.
    ///
    /// A node with two children takes the value of its inorder successor,
    /// which is then unlinked from the right subtree.
    pub fn delete(&mut self, value: i64) -> bool {
        let removed = remove_from(&mut self.root, value);
        if removed {
            self.len -= 1;
            trace!(value, len = self.len, "bst delete");
        }
        removed
    }

    /// Number of nodes on the longest root-to-leaf path.
    pub fn height(&self) -> usize {
        let mut deepest = 0;
        let mut stack: Vec<(&BstNode, usize)> =
            self.root().map(|n| (n, 1)).into_iter().collect();
        while let Some((node, depth)) = stack.pop() {
            deepest = deepest.max(depth);
            stack.extend(node.left().map(|n| (n, depth + 1)));
            stack.extend(node.right().map(|n| (n, depth + 1)));
        }
        deepest
    }

    pub fn traverse(&self, order: TraversalOrder) -> Traversal<'_, BstNode> {
        Traversal::new(self.root(), order)
    }
}

impl fmt::Debug for Bst {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Bst")
            .field("len", &self.len)
            .field("inorder", &self.traverse(TraversalOrder::Inorder).collect::<Vec<_>>())
            .finish()
    }
}

impl Drop for Bst {
    fn drop(&mut self) {
        // Detach children before each node drops so no drop recurses.
        let mut stack: Vec<Box<BstNode>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

fn remove_from(mut link: &mut Option<Box<BstNode>>, value: i64) -> bool {
    loop {
        let ordering = match link.as_deref() {
            Some(node) => value.cmp(&node.value),
            None => return false,
        };
        if ordering == Ordering::Equal {
            break;
        }
        if let Some(node) = link {
            link = if ordering == Ordering::Less {
                &mut node.left
            } else {
                &mut node.right
            };
        }
    }

    let Some(mut node) = link.take() else {
        return false;
    };
    *link = match (node.left.take(), node.right.take()) {
        (None, None) => None,
        (Some(child), None) | (None, Some(child)) => Some(child),
        (Some(left), Some(right)) => {
            let mut right = Some(right);
            if let Some(successor) = take_min(&mut right) {
                node.value = successor;
            }
            node.left = Some(left);
            node.right = right;
            Some(node)
        }
    };
    true
}

/// Unlink the leftmost node under `link` and return its value.
fn take_min(mut link: &mut Option<Box<BstNode>>) -> Option<i64> {
    while link.as_ref()?.left.is_some() {
        link = &mut link.as_mut()?.left;
    }
    let mut node = link.take()?;
    *link = node.right.take();
    Some(node.value)
}
