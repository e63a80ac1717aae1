//! Coarse strength heuristics built on sign dignity.

use kundli_base::{DignityKind, Graha, dignity_of, rashi_lord};
use kundli_chart::Chart;

use crate::types::StrengthTier;

/// Score used when a house ruler's placement is unknown.
pub const MISSING_RULER_SCORE: u8 = 5;

/// Dignity → strength tier for the lagna lord.
pub const fn strength_tier(dignity: DignityKind) -> StrengthTier {
    match dignity {
        DignityKind::Exalted | DignityKind::OwnSign => StrengthTier::Strong,
        DignityKind::Debilitated | DignityKind::Enemy => StrengthTier::Weak,
        DignityKind::Friendly | DignityKind::Neutral => StrengthTier::Moderate,
    }
}

/// Dignity → 1-10 score.
pub const fn dignity_score(dignity: DignityKind) -> u8 {
    match dignity {
        DignityKind::Exalted => 10,
        DignityKind::OwnSign => 9,
        DignityKind::Friendly => 7,
        DignityKind::Enemy => 4,
        DignityKind::Debilitated => 3,
        DignityKind::Neutral => 6,
    }
}

/// Dignity of a graha in the sign it occupies, if both are known.
pub fn placed_dignity(chart: &Chart, graha: Graha) -> Option<DignityKind> {
    chart.sign_of(graha).map(|sign| dignity_of(graha, sign))
}

/// 1-10 strength of a house, scored from its ruler's dignity.
pub fn house_strength(chart: &Chart, house: u8) -> u8 {
    chart
        .house_sign(house)
        .map(rashi_lord)
        .and_then(|ruler| placed_dignity(chart, ruler))
        .map_or(MISSING_RULER_SCORE, dignity_score)
}
