//! Umbrella error for the extraction pipeline.

use std::error::Error;
use std::fmt;
use std::io;

use crate::config::ConfigError;
use crate::grid::GridError;
use sonde_core::ComputeError;
use sonde_snapshot::SnapshotError;

/// Any failure the pipeline can surface.
///
/// Every stage's error converts into this via `From`, so [`run`](crate::run)
/// is a single `?` chain. All variants are fatal: the pipeline writes
/// either every row or an error, never a partial grid.
#[derive(Debug)]
pub enum ExtractError {
    /// Argument parsing or validation failed.
    Config(ConfigError),
    /// Grid planning failed.
    Grid(GridError),
    /// Snapshot restore failed.
    Snapshot(SnapshotError),
    /// A derived-field computation failed.
    Compute(ComputeError),
    /// Writing rows to the sink failed.
    Io(io::Error),
}

impl fmt::Display for ExtractError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "configuration error: {e}"),
            Self::Grid(e) => write!(f, "grid error: {e}"),
            Self::Snapshot(e) => write!(f, "snapshot error: {e}"),
            Self::Compute(e) => write!(f, "compute error: {e}"),
            Self::Io(e) => write!(f, "output error: {e}"),
        }
    }
}

impl Error for ExtractError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Grid(e) => Some(e),
            Self::Snapshot(e) => Some(e),
            Self::Compute(e) => Some(e),
            Self::Io(e) => Some(e),
        }
    }
}

impl From<ConfigError> for ExtractError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<GridError> for ExtractError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

impl From<SnapshotError> for ExtractError {
    fn from(e: SnapshotError) -> Self {
        Self::Snapshot(e)
    }
}

impl From<ComputeError> for ExtractError {
    fn from(e: ComputeError) -> Self {
        Self::Compute(e)
    }
}

impl From<io::Error> for ExtractError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
