//! Error types for the chart input boundary.

use thiserror::Error;

/// Errors raised while turning raw chart payloads into a [`Chart`](crate::Chart).
///
/// Only malformed JSON is fatal; missing or unrecognised chart fields
/// degrade into unresolved placements instead.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChartError {
    /// Payload is not valid JSON or does not have the chart shape.
    #[error("invalid chart JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// Top-level payload is valid JSON but not an object.
    #[error("chart payload must be a JSON object, got {0}")]
    NotAnObject(&'static str),
}
