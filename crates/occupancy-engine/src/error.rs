//! Error types for occupancy-engine operations.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort an occupancy run.
///
/// Missing input files are not errors; readers treat them as empty sources.
#[derive(Error, Debug)]
pub enum OccupancyError {
    /// A file exists but could not be read, or the output could not be written.
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A JSON input was malformed or lacked a required field.
    #[error("Malformed data in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl OccupancyError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Json {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, OccupancyError>;
