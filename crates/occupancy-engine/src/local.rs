//! Reader for the hand-maintained `local_sources.json` list.
//!
//! The file is a JSON array of records:
//!
//! ```json
//! [{"unit": "A1", "start": "2024-01-01", "end": "2024-01-05", "kind": "reservation"}]
//! ```
//!
//! `kind` is optional (absent, `null` or `""`) and defaults to `block`. Note
//! this is the opposite of [`classify_kind`](crate::classify::classify_kind),
//! which defaults to `reservation`: entries typed in by hand are usually owner
//! blocks.

use std::path::Path;

use chrono::NaiveDate;
use serde::de::IntoDeserializer;
use serde::{Deserialize, Deserializer};

use crate::error::{OccupancyError, Result};
use crate::interval::{Interval, Kind};
use crate::read_if_exists;

#[derive(Debug, Deserialize)]
struct LocalRecord {
    unit: String,
    start: NaiveDate,
    end: NaiveDate,
    #[serde(default, deserialize_with = "blank_kind")]
    kind: Option<Kind>,
}

/// Treat `""` like an omitted kind.
fn blank_kind<'de, D>(deserializer: D) -> std::result::Result<Option<Kind>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref() {
        None | Some("") => Ok(None),
        Some(text) => {
            let text: serde::de::value::StrDeserializer<'_, D::Error> = text.into_deserializer();
            Kind::deserialize(text).map(Some)
        }
    }
}

impl From<LocalRecord> for Interval {
    fn from(record: LocalRecord) -> Self {
        Interval {
            unit: record.unit,
            kind: record.kind.unwrap_or(Kind::Block),
            start: record.start,
            end: record.end,
        }
    }
}

/// Load intervals from a local sources file.
///
/// A missing file yields an empty list. Malformed JSON, a missing `unit`,
/// `start` or `end`, or a date not in `YYYY-MM-DD` form is an error.
pub fn load_local(path: &Path) -> Result<Vec<Interval>> {
    let Some(bytes) = read_if_exists(path)? else {
        return Ok(Vec::new());
    };

    let records: Vec<LocalRecord> =
        serde_json::from_slice(&bytes).map_err(|err| OccupancyError::json(path, err))?;

    Ok(records.into_iter().map(Interval::from).collect())
}
