//! # occupancy-engine
//!
//! Builds a single merged occupancy timeline for rental units out of several
//! calendar sources: a hand-maintained local list and per-channel calendar
//! feeds (`.ics`).
//!
//! Every source is flattened into [`Interval`] records tagged with a unit and a
//! [`Kind`]; [`merge_intervals`] then collapses overlapping or touching records
//! of the same `(unit, kind)` into maximal half-open runs.
//!
//! ## Modules
//!
//! - [`interval`]: `Interval` record and `Kind` classification
//! - [`classify`]: Free-text summary → `Kind`
//! - [`local`]: `local_sources.json` reader
//! - [`feed`]: Minimal `VEVENT` scanner for calendar feeds
//! - [`channels`]: Channel configuration and per-channel feed loading
//! - [`merge`]: The interval merge sweep
//! - [`config`]: Run configuration (root directory, file names, flags)
//! - [`driver`]: Orchestrates readers, merge, and output
//! - [`error`]: Error types

pub mod channels;
pub mod classify;
pub mod config;
pub mod driver;
pub mod error;
pub mod feed;
pub mod interval;
pub mod local;
pub mod merge;

pub use channels::{Channel, ChannelConfig, ChannelsFile, FeedEntry};
pub use classify::classify_kind;
pub use config::OccupancyConfig;
pub use driver::{build_timeline, collect, run, RunReport};
pub use error::OccupancyError;
pub use feed::{parse_feed, read_feed, FeedPolicy};
pub use interval::{Interval, Kind};
pub use local::load_local;
pub use merge::merge_intervals;

use std::path::Path;

/// Read a whole file, treating a missing file as an absent source.
pub(crate) fn read_if_exists(path: &Path) -> error::Result<Option<Vec<u8>>> {
    match std::fs::read(path) {
        Ok(bytes) => Ok(Some(bytes)),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "source file missing, treating as empty");
            Ok(None)
        }
        Err(err) => Err(OccupancyError::io(path, err)),
    }
}
