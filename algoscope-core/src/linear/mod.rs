//! Linear Structures
//!
//! Stack, queue and singly linked list. Removing from an empty container
//! is reported as [`EngineError::EmptyStructure`](crate::EngineError),
//! never as a sentinel value.

mod linked_list;
mod queue;
mod stack;

pub use linked_list::{Iter, LinkedList};
pub use queue::Queue;
pub use stack::Stack;
