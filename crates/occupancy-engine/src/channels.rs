//! Channel configuration and per-channel feed loading.
//!
//! `channels.json` maps a channel name to its settings:
//!
//! ```json
//! {
//!   "booking": {"enabled": true, "units": [{"unit": "A1", "ics_path": "feeds/a1-booking.ics"}]},
//!   "airbnb":  {"enabled": false, "units": []}
//! }
//! ```
//!
//! Unknown channel names are ignored. Relative feed paths resolve against the
//! data root.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{OccupancyError, Result};
use crate::feed::{read_feed, FeedPolicy};
use crate::interval::Interval;
use crate::read_if_exists;

/// An external booking platform exporting one calendar feed per unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    /// Exports only booked nights.
    Booking,
    /// Mixes stays with "Not available" and owner blocks.
    Airbnb,
}

impl Channel {
    /// Channels in the order the driver reads them.
    pub const ALL: [Channel; 2] = [Channel::Booking, Channel::Airbnb];

    /// Key of this channel in `channels.json`.
    pub fn key(self) -> &'static str {
        match self {
            Channel::Booking => "booking",
            Channel::Airbnb => "airbnb",
        }
    }

    pub fn policy(self) -> FeedPolicy {
        match self {
            Channel::Booking => FeedPolicy::Reservation,
            Channel::Airbnb => FeedPolicy::Auto,
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// One unit's feed on a channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedEntry {
    pub unit: String,
    #[serde(alias = "ics")]
    pub ics_path: PathBuf,
}

/// Settings for a single channel.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChannelConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub units: Vec<FeedEntry>,
}

/// Parsed `channels.json`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChannelsFile {
    #[serde(default)]
    pub booking: Option<ChannelConfig>,
    #[serde(default)]
    pub airbnb: Option<ChannelConfig>,
}

impl ChannelsFile {
    /// Load channel settings. A missing file means every channel is absent.
    pub fn load(path: &Path) -> Result<Self> {
        let Some(bytes) = read_if_exists(path)? else {
            return Ok(Self::default());
        };
        serde_json::from_slice(&bytes).map_err(|err| OccupancyError::json(path, err))
    }

    pub fn channel(&self, channel: Channel) -> Option<&ChannelConfig> {
        match channel {
            Channel::Booking => self.booking.as_ref(),
            Channel::Airbnb => self.airbnb.as_ref(),
        }
    }

    /// Read every feed of `channel`, in the order its units are listed.
    ///
    /// Absent or disabled channels contribute nothing.
    pub fn load_channel(&self, channel: Channel, root: &Path) -> Result<Vec<Interval>> {
        let Some(config) = self.channel(channel).filter(|c| c.enabled) else {
            tracing::debug!(%channel, "channel absent or disabled");
            return Ok(Vec::new());
        };

        let mut intervals = Vec::new();
        for entry in &config.units {
            let path = root.join(&entry.ics_path);
            let events = read_feed(&path, &entry.unit, channel.policy())?;
            tracing::debug!(
                %channel,
                unit = %entry.unit,
                path = %path.display(),
                events = events.len(),
                "read channel feed"
            );
            intervals.extend(events);
        }
        Ok(intervals)
    }
}
