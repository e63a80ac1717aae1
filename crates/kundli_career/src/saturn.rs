//! Saturn (karma karaka) combination analysis.
//!
//! Saturn's co-tenants, its non-neutral dignity, and a Ketu-nakshatra
//! marker form a token set. An ordered rule list maps that set to one
//! career-impact narrative; the first matching rule wins.

use kundli_base::{DignityKind, Graha, dignity_of, is_kendra};
use kundli_chart::Chart;

use crate::tables::saturn_token_influence;
use crate::types::SaturnAnalysis;

/// Token added when Saturn occupies a Ketu-ruled nakshatra.
pub const KETU_NAKSHATRA_TOKEN: &str = "ketu_nakshatra";

/// Role text when Saturn has no placement.
pub const SATURN_UNKNOWN_ROLE: &str = "Saturn position unknown";

/// A predicate over the combination tokens and the narrative it selects.
pub struct ComboRule {
    pub name: &'static str,
    pub matches: fn(&[String]) -> bool,
    pub impact: &'static str,
}

fn has(tokens: &[String], token: &str) -> bool {
    tokens.iter().any(|t| t == token)
}

/// Saturn combination → career impact, in priority order.
pub const SATURN_IMPACT_RULES: [ComboRule; 4] = [
    ComboRule {
        name: "ketu",
        matches: |t| has(t, "ketu") || has(t, KETU_NAKSHATRA_TOKEN),
        impact: "Research, engineering, occult sciences or spiritual vocations; success through depth and detachment.",
    },
    ComboRule {
        name: "jupiter",
        matches: |t| has(t, "jupiter"),
        impact: "Law, finance, teaching or advisory careers; slow but respected rise to seniority.",
    },
    ComboRule {
        name: "rahu",
        matches: |t| has(t, "rahu"),
        impact: "Technology, foreign companies, politics or mass-market industries; ambition meets sudden change.",
    },
    ComboRule {
        name: "sun",
        matches: |t| has(t, "sun"),
        impact: "Government service or administration after early friction with authority figures.",
    },
];

/// Impact when no combination rule matches.
pub const DEFAULT_SATURN_IMPACT: &str =
    "Steady, structured work in organisations; recognition grows with time and persistence.";

/// First matching rule's impact text.
pub fn saturn_career_impact(tokens: &[String]) -> &'static str {
    SATURN_IMPACT_RULES
        .iter()
        .find(|rule| (rule.matches)(tokens))
        .map_or(DEFAULT_SATURN_IMPACT, |rule| rule.impact)
}

fn saturn_role(house: u8) -> String {
    let theme = if is_kendra(house) {
        "grants lasting professional authority"
    } else if matches!(house, 6 | 8 | 12) {
        "brings delays that reward persistence"
    } else {
        "shapes a disciplined approach to work"
    };
    format!("Saturn, the karma karaka, in house {house} {theme}")
}

/// Saturn's combinations, influence lines and career impact.
pub fn analyze_saturn(chart: &Chart) -> SaturnAnalysis {
    let Some(saturn) = chart.planet(Graha::Shani) else {
        return SaturnAnalysis {
            house: 0,
            sign: None,
            dignity: None,
            combinations: Vec::new(),
            ketu_nakshatra: false,
            role: SATURN_UNKNOWN_ROLE.to_owned(),
            specific_influence: Vec::new(),
            career_impact: DEFAULT_SATURN_IMPACT.to_owned(),
        };
    };

    let mut combinations: Vec<String> = chart
        .occupants(saturn.house)
        .into_iter()
        .filter(|g| *g != Graha::Shani)
        .map(|g| g.english_name().to_lowercase())
        .collect();

    let dignity = saturn.sign.map(|sign| dignity_of(Graha::Shani, sign));
    if let Some(d) = dignity.filter(|d| *d != DignityKind::Neutral) {
        combinations.push(d.as_str().to_owned());
    }

    let ketu_nakshatra = saturn
        .nakshatra
        .is_some_and(|n| n.lord() == Graha::Ketu);
    if ketu_nakshatra {
        combinations.push(KETU_NAKSHATRA_TOKEN.to_owned());
    }

    let specific_influence = combinations
        .iter()
        .filter_map(|t| saturn_token_influence(t))
        .map(str::to_owned)
        .collect();

    SaturnAnalysis {
        house: saturn.house,
        sign: saturn.sign.map(|s| s.name().to_owned()),
        dignity,
        career_impact: saturn_career_impact(&combinations).to_owned(),
        combinations,
        ketu_nakshatra,
        role: saturn_role(saturn.house),
        specific_influence,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kundli_base::{Nakshatra, Rashi};
    use kundli_chart::PlanetPosition;

    fn tokens(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| (*s).to_owned()).collect()
    }

    #[test]
    fn priority_order() {
        assert_eq!(
            saturn_career_impact(&tokens(&["sun", "rahu", "jupiter", "ketu"])),
            SATURN_IMPACT_RULES[0].impact
        );
        assert_eq!(
            saturn_career_impact(&tokens(&["sun", "rahu", "jupiter"])),
            SATURN_IMPACT_RULES[1].impact
        );
        assert_eq!(
            saturn_career_impact(&tokens(&["sun", "rahu"])),
            SATURN_IMPACT_RULES[2].impact
        );
        assert_eq!(saturn_career_impact(&tokens(&["sun"])), SATURN_IMPACT_RULES[3].impact);
        assert_eq!(saturn_career_impact(&tokens(&["mars"])), DEFAULT_SATURN_IMPACT);
        assert_eq!(saturn_career_impact(&[]), DEFAULT_SATURN_IMPACT);
    }

    #[test]
    fn ketu_nakshatra_triggers_ketu_rule() {
        assert_eq!(
            saturn_career_impact(&tokens(&[KETU_NAKSHATRA_TOKEN])),
            SATURN_IMPACT_RULES[0].impact
        );
    }

    #[test]
    fn co_tenants_and_dignity_tokens() {
        // Mesha lagna: house 7 is Tula, Saturn exalted there with Sun.
        let chart = Chart::new(Some(Rashi::Mesha))
            .with_house(Graha::Shani, 7)
            .with_house(Graha::Surya, 7);
        let saturn = analyze_saturn(&chart);
        assert_eq!(saturn.combinations, tokens(&["sun", "exalted"]));
        assert_eq!(saturn.specific_influence.len(), 2);
        assert_eq!(saturn.career_impact, SATURN_IMPACT_RULES[3].impact);
    }

    #[test]
    fn neutral_dignity_not_a_token() {
        // Saturn in Dhanu: lord Jupiter is neutral to Saturn.
        let chart = Chart::new(Some(Rashi::Mesha)).with_house(Graha::Shani, 9);
        let saturn = analyze_saturn(&chart);
        assert_eq!(saturn.dignity, Some(DignityKind::Neutral));
        assert!(saturn.combinations.is_empty());
    }

    #[test]
    fn magha_saturn_flags_ketu() {
        let chart = Chart::new(Some(Rashi::Mesha)).with_planet(
            PlanetPosition::in_house(Graha::Shani, 5).with_nakshatra(Nakshatra::Magha),
        );
        let saturn = analyze_saturn(&chart);
        assert!(saturn.ketu_nakshatra);
        assert!(saturn.combinations.contains(&KETU_NAKSHATRA_TOKEN.to_owned()));
    }

    #[test]
    fn absent_saturn() {
        let saturn = analyze_saturn(&Chart::new(Some(Rashi::Mesha)));
        assert_eq!(saturn.role, SATURN_UNKNOWN_ROLE);
        assert!(saturn.combinations.is_empty());
        assert!(saturn.specific_influence.is_empty());
        assert_eq!(saturn.house, 0);
    }
}
