//! Property-based tests for the interval merge using proptest.
//!
//! These check invariants that must hold for *any* list of well-formed
//! records, not just the scenarios in `merge_tests.rs`.

use chrono::{Duration, NaiveDate};
use occupancy_engine::interval::{Interval, Kind};
use occupancy_engine::merge::merge_intervals;
use proptest::prelude::*;

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

fn arb_unit() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("A1".to_string()),
        Just("A2".to_string()),
        Just("B".to_string()),
    ]
}

fn arb_kind() -> impl Strategy<Value = Kind> {
    prop_oneof![Just(Kind::Reservation), Just(Kind::Block)]
}

/// Records within a 90-day window starting 2024-01-01, up to 14 nights long.
fn arb_interval() -> impl Strategy<Value = Interval> {
    (arb_unit(), arb_kind(), 0i64..90, 0i64..=14).prop_map(|(unit, kind, offset, nights)| {
        let base = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let start = base + Duration::days(offset);
        Interval::new(unit, kind, start, start + Duration::days(nights))
    })
}

fn arb_intervals() -> impl Strategy<Value = Vec<Interval>> {
    prop::collection::vec(arb_interval(), 0..40)
}

/// Every day covered by `intervals` for one group, as a sorted list.
fn covered_days(intervals: &[Interval], unit: &str, kind: Kind) -> Vec<NaiveDate> {
    let mut days: Vec<NaiveDate> = intervals
        .iter()
        .filter(|i| i.unit == unit && i.kind == kind)
        .flat_map(|i| i.start.iter_days().take_while(move |d| *d < i.end))
        .collect();
    days.sort();
    days.dedup();
    days
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn every_output_interval_is_ordered(input in arb_intervals()) {
        for interval in merge_intervals(input) {
            prop_assert!(interval.start <= interval.end);
        }
    }

    #[test]
    fn same_group_outputs_neither_overlap_nor_touch(input in arb_intervals()) {
        let merged = merge_intervals(input);
        for (i, a) in merged.iter().enumerate() {
            for b in merged.iter().skip(i + 1) {
                if a.unit == b.unit && a.kind == b.kind {
                    prop_assert!(
                        a.end < b.start || b.end < a.start,
                        "{:?} and {:?} should have been merged", a, b
                    );
                }
            }
        }
    }

    #[test]
    fn merge_is_idempotent(input in arb_intervals()) {
        let once = merge_intervals(input);
        let twice = merge_intervals(once.clone());
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn merge_ignores_input_order(input in arb_intervals()) {
        let mut reversed = input.clone();
        reversed.reverse();
        let mut rotated = input.clone();
        if !rotated.is_empty() {
            let mid = rotated.len() / 2;
            rotated.rotate_left(mid);
        }

        let expected = merge_intervals(input);
        prop_assert_eq!(&merge_intervals(reversed), &expected);
        prop_assert_eq!(&merge_intervals(rotated), &expected);
    }

    #[test]
    fn merge_preserves_covered_days(input in arb_intervals()) {
        let merged = merge_intervals(input.clone());
        for unit in ["A1", "A2", "B"] {
            for kind in [Kind::Reservation, Kind::Block] {
                prop_assert_eq!(
                    covered_days(&merged, unit, kind),
                    covered_days(&input, unit, kind)
                );
            }
        }
    }

    #[test]
    fn output_never_exceeds_input_size(input in arb_intervals()) {
        let len = input.len();
        prop_assert!(merge_intervals(input).len() <= len);
    }
}
