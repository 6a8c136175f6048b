//! Occupancy interval records.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// What kind of occupancy an interval represents.
///
/// Variant order matches the lexicographic order of the serialized names
/// (`"block" < "reservation"`), so the derived `Ord` sorts the same way the
/// string form would.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    /// Owner use, maintenance, cleaning, or any other unavailability.
    Block,
    /// A paying stay.
    Reservation,
}

impl Kind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::Block => "block",
            Kind::Reservation => "reservation",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A half-open date range `[start, end)` occupied on one unit.
///
/// Serializes as `{"unit", "kind", "start", "end"}` with ISO `YYYY-MM-DD` dates.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Interval {
    pub unit: String,
    pub kind: Kind,
    /// First occupied day (inclusive).
    pub start: NaiveDate,
    /// First free day again (exclusive).
    pub end: NaiveDate,
}

impl Interval {
    pub fn new(unit: impl Into<String>, kind: Kind, start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            unit: unit.into(),
            kind,
            start,
            end,
        }
    }

    /// Sort key used by the merger: unit, then kind, then chronological.
    pub(crate) fn sort_key(&self) -> (&str, Kind, NaiveDate, NaiveDate) {
        (self.unit.as_str(), self.kind, self.start, self.end)
    }

    /// Whether `other` belongs to the same `(unit, kind)` group.
    pub(crate) fn same_group(&self, other: &Interval) -> bool {
        self.kind == other.kind && self.unit == other.unit
    }
}
