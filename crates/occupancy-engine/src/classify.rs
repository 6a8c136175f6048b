//! Classify calendar entry summaries into occupancy kinds.
//!
//! Channel feeds rarely say what an entry is; owners and platforms write
//! things like "Not available", "Owner stay" or "Čiščenje" for blocked days.
//! Anything matching one of the block keywords is a [`Kind::Block`], every
//! other summary is treated as a [`Kind::Reservation`].

use std::sync::LazyLock;

use regex::Regex;

use crate::interval::Kind;

static BLOCK_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(block|not\s*available|clean|owner|maintenance|zapora|čiš|servis|internal)")
        .expect("block keyword pattern is valid")
});

/// Classify a free-text summary.
///
/// Empty or absent summaries default to [`Kind::Reservation`].
pub fn classify_kind(summary: Option<&str>) -> Kind {
    match summary {
        Some(text) if BLOCK_PATTERN.is_match(text) => Kind::Block,
        _ => Kind::Reservation,
    }
}
