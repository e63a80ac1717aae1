//! Combined report and per-planet dignity summary.

use kundli_base::{DignityKind, Graha, dignity_of, is_planet_strong};
use kundli_career::CareerAnalysis;
use kundli_chart::{Chart, PlanetPosition};
use kundli_dosha::DoshaReport;
use serde::Serialize;

/// One resolved placement with its dignity.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanetSummary {
    pub name: String,
    pub house: u8,
    pub sign: Option<String>,
    pub nakshatra: Option<String>,
    pub dignity: Option<DignityKind>,
    pub retrograde: bool,
    /// In its exaltation house.
    pub strong: bool,
}

impl From<&PlanetPosition> for PlanetSummary {
    fn from(p: &PlanetPosition) -> Self {
        Self {
            name: p.graha.english_name().to_owned(),
            house: p.house,
            sign: p.sign.map(|s| s.name().to_owned()),
            nakshatra: p.nakshatra.map(|n| n.name().to_owned()),
            dignity: p.sign.map(|s| dignity_of(p.graha, s)),
            retrograde: p.retrograde,
            strong: is_planet_strong(p.graha, p.house),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSummary {
    pub ascendant: Option<String>,
    pub moon_sign: Option<String>,
    pub sun_sign: Option<String>,
    pub planets: Vec<PlanetSummary>,
    /// Grahas with no resolvable placement.
    pub unresolved: Vec<String>,
}

impl From<&Chart> for ChartSummary {
    fn from(chart: &Chart) -> Self {
        Self {
            ascendant: chart.ascendant().map(|r| r.name().to_owned()),
            moon_sign: chart.moon_sign().map(|r| r.name().to_owned()),
            sun_sign: chart.sun_sign().map(|r| r.name().to_owned()),
            planets: chart.planets().map(PlanetSummary::from).collect(),
            unresolved: chart
                .unresolved()
                .into_iter()
                .map(Graha::english_name)
                .map(str::to_owned)
                .collect(),
        }
    }
}

/// Everything the engines produce for one chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KundliReport {
    pub chart: ChartSummary,
    pub career: CareerAnalysis,
    pub doshas: DoshaReport,
}
