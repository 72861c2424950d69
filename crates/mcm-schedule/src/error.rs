//! Shift-schedule error type.
//!
//! Only the loader can fail; the interval routines accept any input.

use thiserror::Error;

/// Errors produced by `mcm-schedule`.
#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error("shift schedule parse error: {0}")]
    Parse(String),

    #[error("I/O error reading shift schedule: {0}")]
    Io(#[from] std::io::Error),
}

pub type ScheduleResult<T> = Result<T, ScheduleError>;
