//! Kaal Sarp dosha: the planets hemmed between the lunar nodes.

use kundli_base::Graha;
use kundli_chart::Chart;
use tracing::debug;

use crate::remedies::KAAL_SARP_REMEDIES;
use crate::types::{DoshaAnalysis, Severity};

/// Planets that must all sit inside one node-to-node arc.
pub const HEMMED_GRAHAS: [Graha; 5] = [
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Buddh,
    Graha::Shani,
];

/// Benefics that break the serpent when they sit outside the arc.
pub const BREAKER_GRAHAS: [Graha; 2] = [Graha::Guru, Graha::Shukra];

/// True when `house` lies strictly inside the arc walking forward from
/// `start` to `end`. The node houses themselves are outside.
pub fn strictly_between(start: u8, end: u8, house: u8) -> bool {
    let span = (end as i16 - start as i16).rem_euclid(12);
    let offset = (house as i16 - start as i16).rem_euclid(12);
    offset > 0 && offset < span
}

pub fn kaal_sarp_dosha(chart: &Chart) -> DoshaAnalysis {
    let (Some(rahu), Some(ketu)) = (chart.house_of(Graha::Rahu), chart.house_of(Graha::Ketu))
    else {
        debug!(dosha = "Kaal Sarp", "node positions unavailable");
        return DoshaAnalysis::absent(
            "Rahu or Ketu position unavailable; Kaal Sarp dosha cannot be assessed.",
        );
    };

    let hemmed: Vec<u8> = HEMMED_GRAHAS
        .into_iter()
        .filter_map(|g| chart.house_of(g))
        .collect();
    if hemmed.is_empty() {
        debug!(dosha = "Kaal Sarp", "no hemmed planet resolved");
        return DoshaAnalysis::absent(
            "Planet positions unavailable; Kaal Sarp dosha cannot be assessed.",
        );
    }

    let inside = |start: u8, end: u8| hemmed.iter().all(|h| strictly_between(start, end, *h));
    let arc = if inside(rahu, ketu) {
        Some((rahu, ketu, "Rahu", "Ketu"))
    } else if inside(ketu, rahu) {
        Some((ketu, rahu, "Ketu", "Rahu"))
    } else {
        None
    };
    let Some((start, end, from, to)) = arc else {
        debug!(dosha = "Kaal Sarp", rahu, ketu, "planets on both sides of the nodes");
        return DoshaAnalysis::absent(
            "Planets fall on both sides of the Rahu-Ketu axis; no Kaal Sarp dosha.",
        );
    };

    let breakers: Vec<String> = BREAKER_GRAHAS
        .into_iter()
        .filter(|g| {
            chart
                .house_of(*g)
                .is_some_and(|h| !strictly_between(start, end, h))
        })
        .map(|g| g.english_name().to_owned())
        .collect();

    let severity = if breakers.is_empty() {
        Severity::Complete
    } else {
        Severity::Partial
    };

    let mut explanation = format!(
        "All planets lie between {from} (house {start}) and {to} (house {end}): Kaal Sarp dosha is formed."
    );
    if !breakers.is_empty() {
        explanation.push_str(&format!(
            " {} outside the axis breaks the pattern, making it partial.",
            breakers.join(" and ")
        ));
    }

    debug!(dosha = "Kaal Sarp", rahu, ketu, %severity, "dosha present");
    DoshaAnalysis::present(severity, explanation, &KAAL_SARP_REMEDIES).with_breakers(breakers)
}
