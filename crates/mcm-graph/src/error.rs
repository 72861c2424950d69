//! Graph-subsystem error type.
//!
//! Queries never return these.  They come from the CSV loaders and from the
//! opt-in [`MetroNetwork::validate`](crate::MetroNetwork::validate) check.

use thiserror::Error;

use mcm_core::{BuildingId, TrackId};

/// Errors produced by `mcm-graph`.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("building {0} supplied more than once")]
    DuplicateBuilding(BuildingId),

    #[error("track {0} supplied more than once")]
    DuplicateTrack(TrackId),

    #[error("track {track} references unknown building {building}")]
    DanglingTrack { track: TrackId, building: BuildingId },

    #[error("track {track} has negative capacity {capacity}")]
    NegativeCapacity { track: TrackId, capacity: i32 },

    #[error("track {track} has non-positive cost {cost}")]
    NonPositiveCost { track: TrackId, cost: i32 },

    #[error("network parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type GraphResult<T> = Result<T, GraphError>;
