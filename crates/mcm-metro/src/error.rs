//! Errors surfaced by the fallible `McMetro` constructors and loaders.

use mcm_graph::GraphError;
use mcm_schedule::ScheduleError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MetroError {
    /// Building/track input was rejected or could not be read.
    #[error("network error: {0}")]
    Network(#[from] GraphError),

    #[error("schedule error: {0}")]
    Schedule(#[from] ScheduleError),
}

pub type MetroResult<T> = Result<T, MetroError>;
