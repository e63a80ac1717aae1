//! Convenience facade for the kundli rule engines.
//!
//! Parses a chart document once and runs the career and dosha engines over
//! it. Callers that only need one engine can use the `*_json` helpers.
//!
//! # Quick start
//!
//! ```rust
//! let json = r#"{
//!     "ascendant": "Aries",
//!     "planets": [{ "name": "Mars", "house": 4 }, { "name": "Saturn", "house": 10 }]
//! }"#;
//! let report = kundli_rs::analyze_json(json).unwrap();
//! assert!(report.doshas.mangal_dosha.present);
//! assert_eq!(report.career.tenth_lord_analysis.lord, "Saturn");
//! ```

pub mod error;
pub mod report;

use serde::Serialize;
use tracing::info;

pub use error::KundliError;
pub use report::{ChartSummary, KundliReport, PlanetSummary};

pub use kundli_base::{
    DignityKind, Graha, Nakshatra, Rashi, dignity_by_name, house_sign, house_sign_name,
    ruler_name_of, ruler_of,
};
pub use kundli_career::{CareerAnalysis, analyze_career};
pub use kundli_chart::{Chart, ChartError, PlanetPosition};
pub use kundli_dosha::{DoshaAnalysis, DoshaReport, Severity, analyze_doshas, analyze_doshas_and_defects};

/// How strictly chart documents are accepted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Reject charts whose ascendant cannot be resolved.
    pub require_ascendant: bool,
}

/// Parse a chart document under `options`.
pub fn parse_chart(json: &str, options: ParseOptions) -> Result<Chart, KundliError> {
    let chart = Chart::from_json_str(json)?;
    if options.require_ascendant && chart.ascendant().is_none() {
        return Err(KundliError::MissingAscendant);
    }
    Ok(chart)
}

/// Run both engines over a resolved chart.
pub fn analyze(chart: &Chart) -> KundliReport {
    let report = KundliReport {
        chart: ChartSummary::from(chart),
        career: analyze_career(chart),
        doshas: analyze_doshas(chart),
    };
    info!(
        planets = report.chart.planets.len(),
        unresolved = report.chart.unresolved.len(),
        doshas_present = report.doshas.present_names().len(),
        "kundli report built"
    );
    report
}

/// Full report from a chart document.
pub fn analyze_json(json: &str) -> Result<KundliReport, KundliError> {
    Ok(analyze(&parse_chart(json, ParseOptions::default())?))
}

/// Career report from a chart document.
pub fn career_json(json: &str) -> Result<CareerAnalysis, KundliError> {
    Ok(analyze_career(&parse_chart(json, ParseOptions::default())?))
}

/// Dosha report from a chart document.
pub fn doshas_json(json: &str) -> Result<DoshaReport, KundliError> {
    Ok(analyze_doshas(&parse_chart(json, ParseOptions::default())?))
}

/// Serialise any report, optionally pretty-printed.
pub fn to_json<T: Serialize>(value: &T, pretty: bool) -> Result<String, KundliError> {
    if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
    .map_err(KundliError::Output)
}
