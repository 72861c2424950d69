//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant via `From` where they parse identifiers.

use thiserror::Error;

/// Errors produced while constructing core values from text.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid {kind}: {input:?} is not an integer")]
    InvalidId {
        kind:  &'static str,
        input: String,
    },
}

/// Shorthand result type for `mcm-core`.
pub type CoreResult<T> = Result<T, CoreError>;
