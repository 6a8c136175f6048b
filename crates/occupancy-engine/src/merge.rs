//! Collapse overlapping occupancy intervals.
//!
//! Records are grouped by `(unit, kind)` and merged with a single sorted sweep.
//! Intervals are half-open, so a record starting exactly on the previous
//! record's end leaves no vacant day between them and is merged.
//! A reservation and a block never merge with each other, even when their
//! dates overlap.

use crate::interval::Interval;

/// Merge intervals into the minimal set of non-overlapping, non-touching runs
/// per `(unit, kind)`.
///
/// The result is sorted by unit, kind, then start date. The merge is total:
/// an empty input yields an empty output.
pub fn merge_intervals(intervals: impl IntoIterator<Item = Interval>) -> Vec<Interval> {
    let mut sorted: Vec<Interval> = intervals.into_iter().collect();
    sorted.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));

    let mut merged: Vec<Interval> = Vec::with_capacity(sorted.len());
    for interval in sorted {
        if let Some(open) = merged.last_mut() {
            if open.same_group(&interval) && interval.start <= open.end {
                // Overlapping or touching: extend, never shrink.
                open.end = open.end.max(interval.end);
                continue;
            }
        }
        merged.push(interval);
    }

    merged
}
