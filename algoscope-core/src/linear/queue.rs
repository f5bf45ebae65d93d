//! FIFO queue.

use std::collections::VecDeque;

use crate::error::{EngineError, Result};

/// First-in, first-out queue backed by a ring buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Queue<T> {
    items: VecDeque<T>,
}

impl<T> Queue<T> {
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }

    pub fn enqueue(&mut self, value: T) {
        self.items.push_back(value);
    }

    /// Remove the front value.
    pub fn dequeue(&mut self) -> Result<T> {
        self.items
            .pop_front()
            .ok_or(EngineError::EmptyStructure("queue"))
    }

    pub fn front(&self) -> Option<&T> {
        self.items.front()
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

    /// Front to back.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}
