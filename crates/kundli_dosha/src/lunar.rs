//! Kemadruma (unsupported Moon) and Guru Chandal (Jupiter with a node).

use kundli_base::{Graha, is_kendra, nth_house_from};
use kundli_chart::Chart;
use tracing::debug;

use crate::remedies::{GURU_CHANDAL_REMEDIES, KEMADRUMA_REMEDIES};
use crate::types::{DoshaAnalysis, Severity};

/// Benefics whose presence around the Moon prevents Kemadruma.
pub const MOON_SUPPORTS: [Graha; 3] = [Graha::Guru, Graha::Shukra, Graha::Buddh];

pub fn kemadruma_dosha(chart: &Chart) -> DoshaAnalysis {
    let Some(moon) = chart.house_of(Graha::Chandra) else {
        debug!(dosha = "Kemadruma", "moon position unavailable");
        return DoshaAnalysis::absent("Moon position unavailable; Kemadruma dosha cannot be assessed.");
    };

    let around = [moon, nth_house_from(moon, 2), nth_house_from(moon, 12)];
    let support: Vec<String> = MOON_SUPPORTS
        .into_iter()
        .filter_map(|g| {
            let h = chart.house_of(g)?;
            around
                .contains(&h)
                .then(|| format!("{} in house {h} supports the Moon", g.english_name()))
        })
        .collect();

    if !support.is_empty() {
        debug!(dosha = "Kemadruma", moon, supports = support.len(), "moon supported");
        return DoshaAnalysis::absent(format!(
            "The Moon in house {moon} is supported: {}. No Kemadruma dosha.",
            support.join("; ")
        ))
        .with_cancellations(support);
    }

    let severity = if is_kendra(moon) {
        Severity::Mild
    } else {
        Severity::Strong
    };
    let mut explanation = format!(
        "No Jupiter, Venus or Mercury with the Moon (house {moon}) or in the houses on either side: Kemadruma dosha."
    );
    if is_kendra(moon) {
        explanation.push_str(" The Moon in a kendra lessens it.");
    }

    debug!(dosha = "Kemadruma", moon, %severity, "dosha present");
    DoshaAnalysis::present(severity, explanation, &KEMADRUMA_REMEDIES)
}

pub fn guru_chandal_dosha(chart: &Chart) -> DoshaAnalysis {
    let Some(jupiter) = chart.house_of(Graha::Guru) else {
        debug!(dosha = "Guru Chandal", "jupiter position unavailable");
        return DoshaAnalysis::absent(
            "Jupiter position unavailable; Guru Chandal dosha cannot be assessed.",
        );
    };

    let with = |node: Graha| chart.house_of(node) == Some(jupiter);
    let (node, severity) = if with(Graha::Rahu) {
        (Graha::Rahu, Severity::Strong)
    } else if with(Graha::Ketu) {
        (Graha::Ketu, Severity::Moderate)
    } else {
        debug!(dosha = "Guru Chandal", jupiter, "jupiter free of nodes");
        return DoshaAnalysis::absent("Jupiter is not joined by Rahu or Ketu: no Guru Chandal dosha.");
    };

    debug!(dosha = "Guru Chandal", jupiter, %severity, "dosha present");
    DoshaAnalysis::present(
        severity,
        format!(
            "Jupiter with {} in house {jupiter} forms Guru Chandal dosha. Severity: {severity}.",
            node.english_name()
        ),
        &GURU_CHANDAL_REMEDIES,
    )
    .with_afflictions(vec![format!("Jupiter conjunct {}", node.english_name())])
}
