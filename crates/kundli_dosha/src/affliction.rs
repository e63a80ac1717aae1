//! Pitra and Graha doshas: counted afflictions mapped onto a severity scale.

use kundli_base::{Graha, is_conjunction_or_aspect, is_planet_strong, rashi_lord};
use kundli_chart::Chart;
use tracing::debug;

use crate::remedies::{GRAHA_REMEDIES, PITRA_REMEDIES};
use crate::types::{DoshaAnalysis, Severity};

fn same_house(chart: &Chart, a: Graha, b: Graha) -> bool {
    matches!((chart.house_of(a), chart.house_of(b)), (Some(x), Some(y)) if x == y)
}

/// Ancestral afflictions around the Sun and the 9th house.
pub fn pitra_afflictions(chart: &Chart) -> Vec<String> {
    let mut found = Vec::new();

    if same_house(chart, Graha::Surya, Graha::Rahu) {
        found.push("Sun conjunct Rahu".to_owned());
    }
    if same_house(chart, Graha::Surya, Graha::Ketu) {
        found.push("Sun conjunct Ketu".to_owned());
    }
    if let (Some(saturn), Some(sun)) = (chart.house_of(Graha::Shani), chart.house_of(Graha::Surya)) {
        if is_conjunction_or_aspect(saturn, sun) {
            found.push("Saturn conjunct or aspecting the Sun".to_owned());
        }
    }
    if chart.house_of(Graha::Rahu) == Some(9) {
        found.push("Rahu in the 9th house".to_owned());
    }
    if let Some(lord) = chart.house_sign(9).map(rashi_lord) {
        for node in [Graha::Rahu, Graha::Ketu] {
            if same_house(chart, lord, node) {
                found.push(format!(
                    "9th lord {} conjunct {}",
                    lord.english_name(),
                    node.english_name()
                ));
            }
        }
    }
    found
}

pub fn pitra_dosha(chart: &Chart) -> DoshaAnalysis {
    let afflictions = pitra_afflictions(chart);
    if afflictions.is_empty() {
        debug!(dosha = "Pitra", "no afflictions");
        return DoshaAnalysis::absent("No affliction to the Sun or 9th house: no Pitra dosha.");
    }

    let mut severity = Severity::from_count(afflictions.len());
    let sun_strong = chart
        .house_of(Graha::Surya)
        .is_some_and(|h| is_planet_strong(Graha::Surya, h));
    if sun_strong {
        severity = severity.milder();
    }

    let mut explanation = format!("Pitra dosha from {}.", afflictions.join(", "));
    if sun_strong {
        explanation.push_str(" A strong Sun reduces its effect.");
    }
    explanation.push_str(&format!(" Severity: {severity}."));

    debug!(dosha = "Pitra", count = afflictions.len(), %severity, "dosha present");
    DoshaAnalysis::present(severity, explanation, &PITRA_REMEDIES).with_afflictions(afflictions)
}

/// Planets that suffer from a malefic co-tenant.
pub const AFFLICTABLE_GRAHAS: [Graha; 5] = [
    Graha::Surya,
    Graha::Chandra,
    Graha::Buddh,
    Graha::Guru,
    Graha::Shukra,
];

/// Co-tenants that afflict.
pub const MALEFIC_GRAHAS: [Graha; 4] = [Graha::Shani, Graha::Mangal, Graha::Rahu, Graha::Ketu];

pub fn graha_dosha(chart: &Chart) -> DoshaAnalysis {
    let afflictions: Vec<String> = AFFLICTABLE_GRAHAS
        .into_iter()
        .filter_map(|graha| {
            let malefics: Vec<&str> = MALEFIC_GRAHAS
                .into_iter()
                .filter(|m| same_house(chart, graha, *m))
                .map(Graha::english_name)
                .collect();
            (!malefics.is_empty())
                .then(|| format!("{} with {}", graha.english_name(), malefics.join(", ")))
        })
        .collect();

    if afflictions.is_empty() {
        debug!(dosha = "Graha", "no afflictions");
        return DoshaAnalysis::absent("No benefic or luminary shares a house with a malefic.");
    }

    let severity = Severity::from_count(afflictions.len());
    let explanation = format!(
        "Graha dosha from {} afflicted planet(s): {}. Severity: {severity}.",
        afflictions.len(),
        afflictions.join("; ")
    );
    debug!(dosha = "Graha", count = afflictions.len(), %severity, "dosha present");
    DoshaAnalysis::present(severity, explanation, &GRAHA_REMEDIES).with_afflictions(afflictions)
}
