//! Mangal and Shani doshas: a malefic in a sensitive house, softened by a
//! Jupiter or Venus drishti.

use kundli_base::{Graha, is_aspecting};
use kundli_chart::Chart;
use tracing::debug;

use crate::remedies::{MANGAL_REMEDIES, SHANI_REMEDIES};
use crate::types::{DoshaAnalysis, Severity};

/// Mars houses that form Mangal dosha.
pub const MANGAL_HOUSES: [u8; 6] = [1, 2, 4, 7, 8, 12];

/// Saturn houses that form Shani dosha.
pub const SHANI_HOUSES: [u8; 6] = [1, 2, 5, 7, 8, 12];

/// Benefics whose drishti cancels a placement dosha.
pub const CANCELLING_BENEFICS: [Graha; 2] = [Graha::Guru, Graha::Shukra];

/// Benefics that aspect `house`, as readable lines.
pub fn benefic_aspects(chart: &Chart, house: u8) -> Vec<String> {
    CANCELLING_BENEFICS
        .into_iter()
        .filter_map(|benefic| {
            let from = chart.house_of(benefic)?;
            is_aspecting(from, house).then(|| {
                format!("{} in house {from} aspects house {house}", benefic.english_name())
            })
        })
        .collect()
}

struct PlacementRule {
    dosha: &'static str,
    graha: Graha,
    houses: [u8; 6],
    cancelled: Severity,
    remedies: &'static [&'static str],
}

fn placement_dosha(chart: &Chart, rule: &PlacementRule) -> DoshaAnalysis {
    let name = rule.graha.english_name();
    let Some(house) = chart.house_of(rule.graha) else {
        debug!(dosha = rule.dosha, "position unavailable");
        return DoshaAnalysis::absent(format!(
            "{name} position unavailable; {} dosha cannot be assessed.",
            rule.dosha
        ));
    };
    if !rule.houses.contains(&house) {
        debug!(dosha = rule.dosha, house, "outside dosha houses");
        return DoshaAnalysis::absent(format!(
            "{name} in house {house} does not form {} dosha.",
            rule.dosha
        ));
    }

    let cancellations = benefic_aspects(chart, house);
    let severity = if cancellations.is_empty() {
        Severity::Strong
    } else {
        rule.cancelled
    };

    let mut explanation = format!("{name} in house {house} forms {} dosha.", rule.dosha);
    if !cancellations.is_empty() {
        explanation.push_str(&format!(" Softened by: {}.", cancellations.join("; ")));
    }
    explanation.push_str(&format!(" Severity: {severity}."));

    debug!(dosha = rule.dosha, house, %severity, "dosha present");
    DoshaAnalysis::present(severity, explanation, rule.remedies).with_cancellations(cancellations)
}

pub fn mangal_dosha(chart: &Chart) -> DoshaAnalysis {
    placement_dosha(
        chart,
        &PlacementRule {
            dosha: "Mangal",
            graha: Graha::Mangal,
            houses: MANGAL_HOUSES,
            cancelled: Severity::Mild,
            remedies: &MANGAL_REMEDIES,
        },
    )
}

pub fn shani_dosha(chart: &Chart) -> DoshaAnalysis {
    placement_dosha(
        chart,
        &PlacementRule {
            dosha: "Shani",
            graha: Graha::Shani,
            houses: SHANI_HOUSES,
            cancelled: Severity::Moderate,
            remedies: &SHANI_REMEDIES,
        },
    )
}
