//! Error taxonomy for the resolution pipeline.

use thiserror::Error;

/// Failure of a single remote request.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("service returned status {0}")]
    Status(reqwest::StatusCode),
    #[error("malformed payload: {0}")]
    Malformed(String),
}

/// Errors surfaced by [`crate::resolver::Resolver::resolve`].
///
/// Only the top-level search request can fail the whole operation.
/// Per-article listing failures and per-candidate resolution failures are
/// recovered internally and degrade to fewer results.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The search request failed or returned an unparseable payload.
    /// No partial results exist when this is returned.
    #[error("search unavailable: {0}")]
    SearchUnavailable(#[source] FetchError),
}
