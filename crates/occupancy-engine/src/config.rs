//! Run configuration for the occupancy driver.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Data directory used when none is given.
pub const DEFAULT_ROOT: &str = "/var/www/html/app/common/data/json";

/// Everything a run needs to know: where the data lives and what to do with
/// the result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OccupancyConfig {
    /// Root data directory. All file names below resolve against it.
    pub root: PathBuf,
    pub local_sources_file: String,
    pub channels_file: String,
    pub output_file: String,
    /// Planning horizon in months. Accepted for compatibility with existing
    /// schedulers; no reader or merge step consults it.
    pub horizon_months: u32,
    /// Write the merged timeline instead of only reporting it.
    pub write: bool,
}

impl Default for OccupancyConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from(DEFAULT_ROOT),
            local_sources_file: "local_sources.json".to_string(),
            channels_file: "channels.json".to_string(),
            output_file: "occupancy.json".to_string(),
            horizon_months: 12,
            write: false,
        }
    }
}

impl OccupancyConfig {
    /// Default configuration rooted at `root`.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    pub fn local_sources_path(&self) -> PathBuf {
        self.root.join(&self.local_sources_file)
    }

    pub fn channels_path(&self) -> PathBuf {
        self.root.join(&self.channels_file)
    }

    /// Where the merged timeline is written.
    pub fn target_path(&self) -> PathBuf {
        self.root.join(&self.output_file)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}
