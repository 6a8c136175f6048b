//! Orchestrates one occupancy run: read every source, merge, then write or
//! report.
//!
//! Sources are read in a fixed order (local list, then each channel in
//! [`Channel::ALL`] order). Any reader error aborts the run before the output
//! file is touched.

use serde::Serialize;

use crate::channels::{Channel, ChannelsFile};
use crate::config::OccupancyConfig;
use crate::error::{OccupancyError, Result};
use crate::interval::Interval;
use crate::local::load_local;
use crate::merge::merge_intervals;

/// Status of a completed run, printed as JSON by the CLI.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RunReport {
    /// Nothing was written; `target` is where the timeline would go.
    DryRun {
        ok: bool,
        dry_run: bool,
        target: String,
        intervals: usize,
    },
    /// The timeline was written to `written`.
    Written {
        ok: bool,
        written: String,
        intervals: usize,
    },
}

impl RunReport {
    /// Number of merged intervals in the timeline.
    pub fn intervals(&self) -> usize {
        match self {
            RunReport::DryRun { intervals, .. } | RunReport::Written { intervals, .. } => {
                *intervals
            }
        }
    }
}

/// Read every source and concatenate the raw, unmerged records.
pub fn collect(config: &OccupancyConfig) -> Result<Vec<Interval>> {
    let mut all = load_local(&config.local_sources_path())?;
    tracing::info!(records = all.len(), "local");

    let channels = ChannelsFile::load(&config.channels_path())?;
    for channel in Channel::ALL {
        let records = channels.load_channel(channel, config.root())?;
        tracing::info!(records = records.len(), "{channel}");
        all.extend(records);
    }

    Ok(all)
}

/// Read every source and return the merged timeline.
pub fn build_timeline(config: &OccupancyConfig) -> Result<Vec<Interval>> {
    Ok(merge_intervals(collect(config)?))
}

/// Run the whole pipeline and write the timeline when `config.write` is set.
pub fn run(config: &OccupancyConfig) -> Result<RunReport> {
    tracing::debug!(
        root = %config.root.display(),
        horizon_months = config.horizon_months,
        write = config.write,
        "starting occupancy run"
    );

    let merged = build_timeline(config)?;
    let target = config.target_path();
    tracing::info!(intervals = merged.len(), "merged");

    if !config.write {
        return Ok(RunReport::DryRun {
            ok: true,
            dry_run: true,
            target: target.display().to_string(),
            intervals: merged.len(),
        });
    }

    let json =
        serde_json::to_string_pretty(&merged).map_err(|err| OccupancyError::json(&target, err))?;
    std::fs::write(&target, json).map_err(|err| OccupancyError::io(&target, err))?;
    tracing::info!(path = %target.display(), "wrote occupancy timeline");

    Ok(RunReport::Written {
        ok: true,
        written: target.display().to_string(),
        intervals: merged.len(),
    })
}
