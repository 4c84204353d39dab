//! Error types for recommendation resolution.

use thiserror::Error;

/// Errors that can occur while resolving a selection.
///
/// Resolution errors are per-interaction: the session that triggered them
/// keeps serving, only the failed pass is discarded.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ResolveError {
    /// A selected track name has no row in the table.
    ///
    /// The whole resolve fails fast; callers decide whether to show an empty
    /// state or surface the error.
    #[error("Track not found: {name}")]
    TrackNotFound { name: String },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, ResolveError>;
