//! Tree Traversal
//!
//! Depth-first traversals over any binary node type, driven by an explicit
//! stack so deep (unbalanced) trees cannot overflow the call stack.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::trace::{Step, StepSink};

/// Read-only view of a node in a binary tree.
pub trait BinaryNode {
    fn value(&self) -> i64;
    fn left(&self) -> Option<&Self>;
    fn right(&self) -> Option<&Self>;
}

/// The three classical depth-first orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TraversalOrder {
    /// Left, node, right. Ascending on a search tree.
    Inorder,
    /// Node, left, right.
    Preorder,
    /// Left, right, node.
    Postorder,
}

impl fmt::Display for TraversalOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Inorder => "inorder",
            Self::Preorder => "preorder",
            Self::Postorder => "postorder",
        };
        f.write_str(name)
    }
}

impl FromStr for TraversalOrder {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "inorder" => Ok(Self::Inorder),
            "preorder" => Ok(Self::Preorder),
            "postorder" => Ok(Self::Postorder),
            _ => Err(EngineError::InvalidValue(s.to_string())),
        }
    }
}

enum Frame<'a, N> {
    /// Subtree not yet expanded.
    Enter(&'a N),
    /// Node whose value is due next.
    Emit(&'a N),
}

/// Lazy iterator over node values in a chosen order.
///
/// The iterator borrows the tree; calling `traverse` again starts over.
pub struct Traversal<'a, N> {
    order: TraversalOrder,
    stack: Vec<Frame<'a, N>>,
}

impl<'a, N: BinaryNode> Traversal<'a, N> {
    pub fn new(root: Option<&'a N>, order: TraversalOrder) -> Self {
        Self {
            order,
            stack: root.map(Frame::Enter).into_iter().collect(),
        }
    }

    pub fn order(&self) -> TraversalOrder {
        self.order
    }

    /// Drain the traversal, reporting each visit to `sink`.
    pub fn collect_traced<S: StepSink>(self, sink: &mut S) -> Vec<i64> {
        self.inspect(|value| sink.emit(Step::VisitNode { value: *value }))
            .collect()
    }
}

impl<'a, N: BinaryNode> Iterator for Traversal<'a, N> {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        loop {
            match self.stack.pop()? {
                Frame::Emit(node) => return Some(node.value()),
                Frame::Enter(node) => {
                    // Frames are pushed in reverse of the order they pop.
                    let left = node.left().map(Frame::Enter);
                    let right = node.right().map(Frame::Enter);
                    match self.order {
                        TraversalOrder::Preorder => {
                            self.stack.extend(right);
                            self.stack.extend(left);
                            self.stack.push(Frame::Emit(node));
                        }
                        TraversalOrder::Inorder => {
                            self.stack.extend(right);
                            self.stack.push(Frame::Emit(node));
                            self.stack.extend(left);
                        }
                        TraversalOrder::Postorder => {
                            self.stack.push(Frame::Emit(node));
                            self.stack.extend(right);
                            self.stack.extend(left);
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trace::Trace;

    struct Leafy {
        value: i64,
        left: Option<Box<Leafy>>,
        right: Option<Box<Leafy>>,
    }

    impl BinaryNode for Leafy {
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

    fn node(value: i64, left: Option<Leafy>, right: Option<Leafy>) -> Leafy {
        Leafy {
            value,
            left: left.map(Box::new),
            right: right.map(Box::new),
        }
    }

    //      4
    //     / \
    //    2   6
    //   / \
    //  1   3
    fn sample() -> Leafy {
        node(
            4,
            Some(node(2, Some(node(1, None, None)), Some(node(3, None, None)))),
            Some(node(6, None, None)),
        )
    }

    #[test]
    fn three_orders() {
        let root = sample();
        let inorder: Vec<_> = Traversal::new(Some(&root), TraversalOrder::Inorder).collect();
        let preorder: Vec<_> = Traversal::new(Some(&root), TraversalOrder::Preorder).collect();
        let postorder: Vec<_> = Traversal::new(Some(&root), TraversalOrder::Postorder).collect();

        assert_eq!(inorder, vec![1, 2, 3, 4, 6]);
        assert_eq!(preorder, vec![4, 2, 1, 3, 6]);
        assert_eq!(postorder, vec![1, 3, 2, 6, 4]);
    }

    #[test]
    fn empty_tree_yields_nothing() {
        let mut walk = Traversal::<Leafy>::new(None, TraversalOrder::Inorder);
        assert_eq!(walk.next(), None);
    }

    #[test]
    fn traced_collection_reports_each_visit() {
        let root = sample();
        let mut trace = Trace::new();
        let values =
            Traversal::new(Some(&root), TraversalOrder::Preorder).collect_traced(&mut trace);
        assert_eq!(values.len(), 5);
        assert_eq!(trace.steps()[0], Step::VisitNode { value: 4 });
    }

    #[test]
    fn order_parses_from_text() {
        assert_eq!("InOrder".parse::<TraversalOrder>().unwrap(), TraversalOrder::Inorder);
        assert_eq!(TraversalOrder::Postorder.to_string(), "postorder");
        assert!("levelorder".parse::<TraversalOrder>().is_err());
    }
}
