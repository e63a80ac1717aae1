//! Facade error type.

use kundli_chart::ChartError;
use thiserror::Error;

/// Errors from the JSON entry points.
///
/// The engines themselves never fail; errors only come from the input and
/// output boundaries.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum KundliError {
    #[error(transparent)]
    Chart(#[from] ChartError),
    /// Ascendant required by the caller but absent or unrecognised.
    #[error("chart has no recognisable ascendant")]
    MissingAscendant,
    #[error("failed to serialise report: {0}")]
    Output(#[source] serde_json::Error),
}
