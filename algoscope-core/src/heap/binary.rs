//! Implicit Binary Heap
//!
//! Values live in a `Vec` read as a complete binary tree:
//! `parent(i) = (i - 1) / 2`, `left(i) = 2i + 1`, `right(i) = 2i + 2`.

use serde::{Deserialize, Serialize};
use tracing::{trace, warn};

use crate::error::{EngineError, Result};
use crate::trace::{NoTrace, Step, StepSink};

/// Which end of the ordering sits at the root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeapKind {
    /// Largest value at the root.
    #[default]
    Max,
    /// Smallest value at the root.
    Min,
}

impl HeapKind {
    /// Whether `a` belongs above `b`.
    #[inline]
    pub fn outranks(self, a: i64, b: i64) -> bool {
        match self {
            Self::Max => a > b,
            Self::Min => a < b,
        }
    }
}

/// Index of the parent of `i`. The root has no parent, so `i` must be
/// greater than zero.
#[inline]
pub fn parent(i: usize) -> usize {
    debug_assert!(i > 0, "the root has no parent");
    (i - 1) / 2
}

#[inline]
pub fn left(i: usize) -> usize {
    2 * i + 1
}

#[inline]
pub fn right(i: usize) -> usize {
    2 * i + 2
}

/// A binary heap of integers whose ordering is chosen per call.
///
/// The heap does not re-order itself when a call uses a different kind
/// than the previous one. If the stored array no longer satisfies the
/// requested order, results follow the stale layout until [`Heap::heapify`]
/// is called; the mismatch is logged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Heap {
    items: Vec<i64>,
    default_kind: HeapKind,
    last_kind: Option<HeapKind>,
}

impl Heap {
    /// An empty max-heap.
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty heap whose [`push`](Heap::push) and [`pop`](Heap::pop) use
    /// `kind`.
    pub fn with_default_kind(kind: HeapKind) -> Self {
        Self {
            default_kind: kind,
            ..Self::default()
        }
    }

    pub fn default_kind(&self) -> HeapKind {
        self.default_kind
    }

    /// The backing array, root first.
    pub fn as_slice(&self) -> &[i64] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn peek(&self) -> Option<i64> {
        self.items.first().copied()
    }

    /// Insert with the default kind.
    pub fn push(&mut self, value: i64) {
        self.insert(value, self.default_kind);
    }

    /// Extract the root with the default kind.
    pub fn pop(&mut self) -> Result<i64> {
        self.extract_root(self.default_kind)
    }

    pub fn insert(&mut self, value: i64, kind: HeapKind) {
        self.insert_traced(value, kind, &mut NoTrace);
    }

    /// Append `value` and sift it up while it outranks its parent.
    pub fn insert_traced<S: StepSink>(&mut self, value: i64, kind: HeapKind, sink: &mut S) {
        self.note_kind(kind);
        self.items.push(value);
        let mut current = self.items.len() - 1;

        while current > 0 {
            let up = parent(current);
            sink.emit(Step::Compare {
                left: current,
                right: up,
            });
            if !kind.outranks(self.items[current], self.items[up]) {
                break;
            }
            self.items.swap(current, up);
            sink.emit(Step::Swap {
                left: current,
                right: up,
            });
            current = up;
        }
        trace!(value, index = current, "heap insert");
    }

    pub fn extract_root(&mut self, kind: HeapKind) -> Result<i64> {
        self.extract_root_traced(kind, &mut NoTrace)
    }

    /// Remove the root, move the last value into its place and sift it down.
    pub fn extract_root_traced<S: StepSink>(
        &mut self,
        kind: HeapKind,
        sink: &mut S,
    ) -> Result<i64> {
        if self.items.is_empty() {
            return Err(EngineError::EmptyHeap);
        }
        self.note_kind(kind);
        let root = self.items.swap_remove(0);
        self.sift_down(0, kind, sink);
        trace!(root, len = self.items.len(), "heap extract");
        Ok(root)
    }

    /// Rebuild the heap order for `kind` from the bottom up.
    pub fn heapify(&mut self, kind: HeapKind) {
        self.heapify_traced(kind, &mut NoTrace);
    }

    pub fn heapify_traced<S: StepSink>(&mut self, kind: HeapKind, sink: &mut S) {
        for i in (0..self.items.len() / 2).rev() {
            self.sift_down(i, kind, sink);
        }
        self.last_kind = Some(kind);
    }

    /// Whether every parent outranks or ties each of its children.
    pub fn is_valid(&self, kind: HeapKind) -> bool {
        (1..self.items.len()).all(|i| !kind.outranks(self.items[i], self.items[parent(i)]))
    }

    /// Extract every value, root first.
    pub fn drain_ordered(&mut self, kind: HeapKind) -> Vec<i64> {
        let mut out = Vec::with_capacity(self.items.len());
        while let Ok(value) = self.extract_root(kind) {
            out.push(value);
        }
        out
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.last_kind = None;
    }

    fn sift_down<S: StepSink>(&mut self, start: usize, kind: HeapKind, sink: &mut S) {
        let size = self.items.len();
        let mut current = start;

        loop {
            let mut target = current;
            for child in [left(current), right(current)] {
                if child < size {
                    sink.emit(Step::Compare {
                        left: child,
                        right: target,
                    });
                    if kind.outranks(self.items[child], self.items[target]) {
                        target = child;
                    }
                }
            }
            if target == current {
                break;
            }
            self.items.swap(current, target);
            sink.emit(Step::Swap {
                left: current,
                right: target,
            });
            current = target;
        }
    }

    fn note_kind(&mut self, kind: HeapKind) {
        if self.last_kind.is_some_and(|last| last != kind) && !self.is_valid(kind) {
            warn!(
                ?kind,
                len = self.items.len(),
                "heap order does not hold for this kind; heapify to repair"
            );
        }
        self.last_kind = Some(kind);
    }
}

impl FromIterator<i64> for Heap {
    /// Collect into a max-heap by repeated insertion.
    fn from_iter<I: IntoIterator<Item = i64>>(iter: I) -> Self {
        let mut heap = Self::new();
        for value in iter {
            heap.push(value);
        }
        heap
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trace::Trace;

    #[test]
    fn index_arithmetic() {
        assert_eq!(parent(1), 0);
        assert_eq!(parent(2), 0);
        assert_eq!(parent(6), 2);
        assert_eq!(left(2), 5);
        assert_eq!(right(2), 6);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "the root has no parent")]
    fn root_has_no_parent() {
        parent(0);
    }

    #[test]
    fn max_heap_extracts_descending() {
        let mut heap = Heap::new();
        for v in [5, 3, 8, 1] {
            heap.insert(v, HeapKind::Max);
        }
        assert_eq!(heap.as_slice(), &[8, 3, 5, 1]);
        assert!(heap.is_valid(HeapKind::Max));
        assert_eq!(heap.drain_ordered(HeapKind::Max), vec![8, 5, 3, 1]);
        assert!(heap.is_empty());
    }

    #[test]
    fn min_heap_extracts_ascending() {
        let mut heap = Heap::with_default_kind(HeapKind::Min);
        for v in [5, 3, 8, 1, 9, 2] {
            heap.push(v);
        }
        assert_eq!(heap.peek(), Some(1));
        let mut out = Vec::new();
        while let Ok(v) = heap.pop() {
            out.push(v);
        }
        assert_eq!(out, vec![1, 2, 3, 5, 8, 9]);
    }

    #[test]
    fn empty_heap_reports_empty() {
        let mut heap = Heap::new();
        assert!(matches!(heap.extract_root(HeapKind::Max), Err(EngineError::EmptyHeap)));
        assert_eq!(heap.peek(), None);
    }

    #[test]
    fn duplicates_are_kept() {
        let mut heap: Heap = [4, 4, 1, 4].into_iter().collect();
        assert_eq!(heap.drain_ordered(HeapKind::Max), vec![4, 4, 4, 1]);
    }

    #[test]
    fn switching_kind_keeps_stale_order_until_heapify() {
        let mut heap = Heap::new();
        for v in [5, 3, 8, 1] {
            heap.insert(v, HeapKind::Max);
        }
        assert!(!heap.is_valid(HeapKind::Min));
        // The root is still the max-heap root.
        assert_eq!(heap.peek(), Some(8));

        heap.heapify(HeapKind::Min);
        assert!(heap.is_valid(HeapKind::Min));
        assert_eq!(heap.drain_ordered(HeapKind::Min), vec![1, 3, 5, 8]);
    }

    #[test]
    fn stale_order_leaks_into_extraction() {
        let mut heap = Heap::new();
        for v in [5, 3, 8, 1] {
            heap.insert(v, HeapKind::Max);
        }
        // Extracting as a min-heap without heapify returns the max-heap root.
        assert_eq!(heap.extract_root(HeapKind::Min).unwrap(), 8);
    }

    #[test]
    fn sift_up_is_traced() {
        let mut heap = Heap::new();
        heap.insert(1, HeapKind::Max);
        let mut trace = Trace::new();
        heap.insert_traced(9, HeapKind::Max, &mut trace);
        assert_eq!(
            trace.steps(),
            &[Step::Compare { left: 1, right: 0 }, Step::Swap { left: 1, right: 0 }]
        );
        assert_eq!(heap.as_slice(), &[9, 1]);
    }

    #[test]
    fn heapify_builds_valid_heap_from_any_layout() {
        let mut heap: Heap = Heap::new();
        for v in [1, 2, 3, 4, 5, 6, 7] {
            heap.insert(v, HeapKind::Min);
        }
        heap.heapify(HeapKind::Max);
        assert_eq!(heap.peek(), Some(7));
        assert!(heap.is_valid(HeapKind::Max));
    }
}
