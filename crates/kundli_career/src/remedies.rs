//! Career remedies.

use crate::tables::{GENERAL_REMEDIES, SATURN_REMEDIES, tenth_lord_remedies};
use crate::types::{CareerRemedies, SaturnAnalysis};
use kundli_base::Graha;

/// Tokens that switch on Saturn remedies.
///
/// Saturn's combination list only ever carries dignity names, so "weak"
/// never matches; only "debilitated" can fire.
pub const SATURN_AFFLICTION_TOKENS: [&str; 2] = ["weak", "debilitated"];

pub fn saturn_afflicted(saturn: &SaturnAnalysis) -> bool {
    saturn
        .combinations
        .iter()
        .any(|c| SATURN_AFFLICTION_TOKENS.contains(&c.as_str()))
}

pub fn career_remedies(saturn: &SaturnAnalysis, tenth_lord: Option<Graha>) -> CareerRemedies {
    let saturn_lines = if saturn_afflicted(saturn) {
        SATURN_REMEDIES.iter().map(|s| (*s).to_owned()).collect()
    } else {
        Vec::new()
    };
    CareerRemedies {
        saturn: saturn_lines,
        tenth_lord: tenth_lord_remedies(tenth_lord),
        general: GENERAL_REMEDIES.iter().map(|s| (*s).to_owned()).collect(),
    }
}
