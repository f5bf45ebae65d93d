//! Bubble Sort
//!
//! The in-place sort used by the sorting lesson, with every comparison and
//! swap reported so bars can be highlighted as they move.

use serde::Serialize;
use tracing::debug;

use crate::trace::{Step, StepSink};

/// Work done by one sort.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SortStats {
    pub comparisons: usize,
    pub swaps: usize,
}

/// Sort ascending with adjacent compare-and-swap passes.
///
/// After pass `i` the element at `n - 1 - i` is final and reported as
/// sorted; index 0 is reported last. Every pass runs to completion.
pub fn bubble_sort<S: StepSink>(values: &mut [i64], sink: &mut S) -> SortStats {
    let n = values.len();
    let mut stats = SortStats::default();
    if n == 0 {
        return stats;
    }

    for i in 0..n - 1 {
        for j in 0..n - i - 1 {
            stats.comparisons += 1;
            sink.emit(Step::Compare {
                left: j,
                right: j + 1,
            });
            if values[j] > values[j + 1] {
                values.swap(j, j + 1);
                stats.swaps += 1;
                sink.emit(Step::Swap {
                    left: j,
                    right: j + 1,
                });
            }
        }
        sink.emit(Step::MarkSorted { index: n - i - 1 });
    }
    sink.emit(Step::MarkSorted { index: 0 });

    debug!(len = n, comparisons = stats.comparisons, swaps = stats.swaps, "bubble sort");
    stats
}
