//! Array Search
//!
//! Linear and binary search over integer slices, reporting each probed
//! index so the scan can be animated.

use std::cmp::Ordering;

use crate::trace::{Step, StepSink};

/// Index of the first element equal to `target`.
pub fn linear_search<S: StepSink>(values: &[i64], target: i64, sink: &mut S) -> Option<usize> {
    for (index, &value) in values.iter().enumerate() {
        sink.emit(Step::Probe { index });
        if value == target {
            sink.emit(Step::Found { index });
            return Some(index);
        }
    }
    None
}

/// Index of an element equal to `target` in an ascending slice.
///
/// Probes the lower midpoint `(lo + hi) / 2` of the inclusive window
/// `[lo, hi]` each round.
/// On an unsorted slice the result is unspecified but the search still
/// terminates.
pub fn binary_search<S: StepSink>(values: &[i64], target: i64, sink: &mut S) -> Option<usize> {
    let mut lo = 0;
    let mut hi = values.len();

    while lo < hi {
        // `hi` is exclusive here, so the inclusive upper bound is `hi - 1`.
        let mid = lo + (hi - 1 - lo) / 2;
        sink.emit(Step::Probe { index: mid });
        match values[mid].cmp(&target) {
            Ordering::Equal => {
                sink.emit(Step::Found { index: mid });
                return Some(mid);
            }
            Ordering::Less => lo = mid + 1,
            Ordering::Greater => hi = mid,
        }
    }
    None
}
