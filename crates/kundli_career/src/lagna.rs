//! Lagna-lord and 10th-lord analysis.

use kundli_base::{Graha, rashi_lord};
use kundli_chart::Chart;

use crate::strength::{placed_dignity, strength_tier};
use crate::tables::tenth_lord_entry;
use crate::types::{LagnaAnalysis, StrengthTier, TenthLordAnalysis};

const UNKNOWN: &str = "Unknown";

/// Canned sentence per lagna strength tier.
fn lagna_narrative(tier: StrengthTier) -> &'static str {
    match tier {
        StrengthTier::Strong => {
            "A strong lagna lord gives confidence, stamina and a clear professional identity."
        }
        StrengthTier::Moderate => {
            "A moderately placed lagna lord supports steady career growth through sustained effort."
        }
        StrengthTier::Weak => {
            "A weak lagna lord calls for patience; self-belief and direction grow through disciplined effort."
        }
        StrengthTier::Unknown => "Lagna strength cannot be assessed: ascendant lord data unavailable.",
    }
}

/// Ascendant lord, its dignity where it sits, and the resulting strength tier.
pub fn analyze_lagna(chart: &Chart) -> LagnaAnalysis {
    let Some(ascendant) = chart.ascendant() else {
        return LagnaAnalysis {
            sign: UNKNOWN.to_owned(),
            lord: UNKNOWN.to_owned(),
            lord_sign: UNKNOWN.to_owned(),
            lord_house: 0,
            dignity: None,
            strength: StrengthTier::Unknown,
            analysis: "Ascendant data unavailable; lagna strength cannot be assessed.".to_owned(),
        };
    };

    let lord = rashi_lord(ascendant);
    let dignity = placed_dignity(chart, lord);
    let strength = dignity.map_or(StrengthTier::Unknown, strength_tier);

    LagnaAnalysis {
        sign: ascendant.name().to_owned(),
        lord: lord.english_name().to_owned(),
        lord_sign: chart
            .sign_of(lord)
            .map_or(UNKNOWN, |r| r.name())
            .to_owned(),
        lord_house: chart.house_of(lord).unwrap_or(0),
        dignity,
        strength,
        analysis: lagna_narrative(strength).to_owned(),
    }
}

/// Ruler of the 10th house, if the 10th sign is known.
pub fn tenth_lord(chart: &Chart) -> Option<Graha> {
    chart.house_sign(10).map(rashi_lord)
}

/// Where the 10th lord sits, read through the 12-row profession table.
pub fn analyze_tenth_lord(chart: &Chart) -> TenthLordAnalysis {
    let Some(tenth_sign) = chart.house_sign(10) else {
        return TenthLordAnalysis {
            tenth_sign: UNKNOWN.to_owned(),
            lord: UNKNOWN.to_owned(),
            house: 0,
            house_analysis: "10th house data unavailable: ascendant unknown.".to_owned(),
            career_direction: UNKNOWN.to_owned(),
            professions: Vec::new(),
        };
    };

    let lord = rashi_lord(tenth_sign);
    let entry = chart.house_of(lord).and_then(|h| tenth_lord_entry(h).map(|e| (h, e)));

    match entry {
        Some((house, row)) => TenthLordAnalysis {
            tenth_sign: tenth_sign.name().to_owned(),
            lord: lord.english_name().to_owned(),
            house,
            house_analysis: row.analysis.to_owned(),
            career_direction: row.direction.to_owned(),
            professions: row.professions.iter().map(|p| (*p).to_owned()).collect(),
        },
        None => TenthLordAnalysis {
            tenth_sign: tenth_sign.name().to_owned(),
            lord: lord.english_name().to_owned(),
            house: 0,
            house_analysis: format!(
                "10th lord {} position unavailable; placement analysis skipped.",
                lord.english_name()
            ),
            career_direction: UNKNOWN.to_owned(),
            professions: Vec::new(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kundli_base::{DignityKind, Rashi};

    #[test]
    fn strong_lagna_lord_in_own_sign() {
        // Simha lagna, Sun in the 1st (Simha).
        let chart = Chart::new(Some(Rashi::Simha)).with_house(Graha::Surya, 1);
        let lagna = analyze_lagna(&chart);
        assert_eq!(lagna.lord, "Sun");
        assert_eq!(lagna.dignity, Some(DignityKind::OwnSign));
        assert_eq!(lagna.strength, StrengthTier::Strong);
        assert_eq!(lagna.lord_house, 1);
    }

    #[test]
    fn weak_lagna_lord_debilitated() {
        // Simha lagna, Sun in the 3rd (Tula).
        let chart = Chart::new(Some(Rashi::Simha)).with_house(Graha::Surya, 3);
        assert_eq!(analyze_lagna(&chart).strength, StrengthTier::Weak);
    }

    #[test]
    fn lagna_without_ascendant() {
        let lagna = analyze_lagna(&Chart::new(None));
        assert_eq!(lagna.sign, "Unknown");
        assert_eq!(lagna.strength, StrengthTier::Unknown);
    }

    #[test]
    fn tenth_lord_table_row() {
        // Mesha lagna: 10th Makara, lord Saturn in the 10th.
        let chart = Chart::new(Some(Rashi::Mesha)).with_house(Graha::Shani, 10);
        let tenth = analyze_tenth_lord(&chart);
        assert_eq!(tenth.tenth_sign, "Makara");
        assert_eq!(tenth.lord, "Saturn");
        assert_eq!(tenth.house, 10);
        assert_eq!(tenth.career_direction, "Authority and administration");
        assert!(!tenth.professions.is_empty());
    }

    #[test]
    fn tenth_lord_missing() {
        let chart = Chart::new(Some(Rashi::Mesha)).with_house(Graha::Surya, 1);
        let tenth = analyze_tenth_lord(&chart);
        assert_eq!(tenth.house, 0);
        assert!(tenth.house_analysis.contains("unavailable"));
        assert!(tenth.professions.is_empty());
    }
}
