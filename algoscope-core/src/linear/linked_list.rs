//! Singly linked list of integers.

use crate::error::{EngineError, Result};
use crate::trace::{NoTrace, Step, StepSink};

#[derive(Debug)]
struct ListNode {
    value: i64,
    next: Link,
}

type Link = Option<Box<ListNode>>;

/// Singly linked list. Head operations are `O(1)`; the tail is reached by
/// walking the chain.
#[derive(Debug, Default)]
pub struct LinkedList {
    head: Link,
    len: usize,
}

impl LinkedList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn head(&self) -> Option<i64> {
        self.head.as_ref().map(|node| node.value)
    }

    pub fn insert_head(&mut self, value: i64) {
        let next = self.head.take();
        self.head = Some(Box::new(ListNode { value, next }));
        self.len += 1;
    }

    pub fn insert_tail(&mut self, value: i64) {
        let mut link = &mut self.head;
        while let Some(node) = link {
            link = &mut node.next;
        }
        *link = Some(Box::new(ListNode { value, next: None }));
        self.len += 1;
    }

    pub fn delete_head(&mut self) -> Result<i64> {
        let node = self
            .head
            .take()
            .ok_or(EngineError::EmptyStructure("linked list"))?;
        self.head = node.next;
        self.len -= 1;
        Ok(node.value)
    }

    /// Position of the first node holding `value`.
    pub fn search(&self, value: i64) -> Option<usize> {
        self.search_traced(value, &mut NoTrace)
    }

    pub fn search_traced<S: StepSink>(&self, value: i64, sink: &mut S) -> Option<usize> {
        for (index, current) in self.iter().enumerate() {
            sink.emit(Step::Probe { index });
            if current == value {
                sink.emit(Step::Found { index });
                return Some(index);
            }
        }
        None
    }

    /// Values from head to tail.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            next: self.head.as_deref(),
        }
    }

    pub fn to_vec(&self) -> Vec<i64> {
        self.iter().collect()
    }
}

impl Drop for LinkedList {
    fn drop(&mut self) {
        // Unlink iteratively so long lists do not recurse through Box drops.
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
    }
}

impl FromIterator<i64> for LinkedList {
    fn from_iter<I: IntoIterator<Item = i64>>(iter: I) -> Self {
        let mut list = Self::new();
        for value in iter {
            list.insert_tail(value);
        }
        list
    }
}

pub struct Iter<'a> {
    next: Option<&'a ListNode>,
}

impl Iterator for Iter<'_> {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        let node = self.next?;
        self.next = node.next.as_deref();
        Some(node.value)
    }
}
