//! LIFO stack.

use crate::error::{EngineError, Result};

/// Last-in, first-out stack backed by a `Vec`. The top is the last element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn push(&mut self, value: T) {
        self.items.push(value);
    }

    /// Remove the top value.
    pub fn pop(&mut self) -> Result<T> {
        self.items.pop().ok_or(EngineError::EmptyStructure("stack"))
    }

    pub fn peek(&self) -> Option<&T> {
        self.items.last()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Bottom to top.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}
