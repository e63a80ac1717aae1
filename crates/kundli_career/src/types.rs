//! Career report types.
//!
//! Field names serialise in camelCase; that JSON shape is what the front
//! end reads.

use serde::Serialize;

use kundli_base::DignityKind;

/// Strength tier of a chart factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StrengthTier {
    Strong,
    Moderate,
    Weak,
    /// Required chart data was missing.
    Unknown,
}

/// Full career report.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerAnalysis {
    pub lagna_analysis: LagnaAnalysis,
    pub tenth_lord_analysis: TenthLordAnalysis,
    pub saturn_analysis: SaturnAnalysis,
    pub planetary_influence: PlanetaryInfluence,
    pub career_yogas: Vec<CareerYoga>,
    pub job_vs_business: JobVsBusiness,
    pub foreign_career: ForeignCareer,
    pub timeline: CareerTimeline,
    pub remedies: CareerRemedies,
}

/// Ascendant lord placement and strength.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LagnaAnalysis {
    pub sign: String,
    pub lord: String,
    pub lord_sign: String,
    /// 0 when the lord's placement is unknown.
    pub lord_house: u8,
    pub dignity: Option<DignityKind>,
    pub strength: StrengthTier,
    pub analysis: String,
}

/// 10th lord placement and the profession table row it selects.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TenthLordAnalysis {
    pub tenth_sign: String,
    pub lord: String,
    /// 0 when the 10th lord's placement is unknown.
    pub house: u8,
    pub house_analysis: String,
    pub career_direction: String,
    pub professions: Vec<String>,
}

/// Saturn as karma karaka.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaturnAnalysis {
    /// 0 when Saturn is absent.
    pub house: u8,
    pub sign: Option<String>,
    pub dignity: Option<DignityKind>,
    /// Co-tenant names (lowercase), non-neutral dignity, `ketu_nakshatra`.
    pub combinations: Vec<String>,
    pub ketu_nakshatra: bool,
    pub role: String,
    pub specific_influence: Vec<String>,
    pub career_impact: String,
}

/// Planets in angular/trinal houses and what they push toward.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanetaryInfluence {
    pub dominant_planets: Vec<String>,
    pub career_fields: Vec<String>,
    pub work_style: String,
}

/// Outcome of a yoga check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum YogaStatus {
    Detected,
    NotDetected,
    /// No detection logic exists for this yoga; the entry is informational.
    NotEvaluated,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerYoga {
    pub name: String,
    pub status: YogaStatus,
    pub description: String,
}

/// Employment preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkMode {
    Job,
    Business,
    Both,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobVsBusiness {
    pub sixth_house_strength: u8,
    pub seventh_house_strength: u8,
    pub tenth_house_strength: u8,
    pub recommendation: WorkMode,
    pub reasoning: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ForeignCareer {
    pub potential: bool,
    pub indicators: Vec<String>,
    pub timing: String,
}

/// Static career phases; real timing needs dasha periods.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerTimeline {
    pub early_career: String,
    pub mid_career: String,
    pub later_career: String,
    pub note: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerRemedies {
    pub saturn: Vec<String>,
    pub tenth_lord: Vec<String>,
    pub general: Vec<String>,
}
