//! Dominant planets and career yogas.

use kundli_base::{Graha, is_kendra, is_trikona};
use kundli_chart::Chart;

use crate::tables::{BALANCED_WORK_STYLE, WORK_STYLE_PRIORITY, career_fields};
use crate::types::{CareerYoga, PlanetaryInfluence, YogaStatus};

/// Lagna, kendras and trikonas: houses whose occupants count as dominant.
pub const fn is_dominant_house(house: u8) -> bool {
    is_kendra(house) || is_trikona(house)
}

/// Natural benefics that form Amala yoga from the 10th.
pub const AMALA_BENEFICS: [Graha; 4] = [Graha::Guru, Graha::Shukra, Graha::Buddh, Graha::Chandra];

/// Grahas sitting in a dominant house, in traditional order.
pub fn dominant_grahas(chart: &Chart) -> Vec<Graha> {
    chart
        .planets()
        .filter(|p| is_dominant_house(p.house))
        .map(|p| p.graha)
        .collect()
}

pub fn analyze_influence(chart: &Chart) -> PlanetaryInfluence {
    let dominant = dominant_grahas(chart);

    let mut fields: Vec<String> = Vec::new();
    for graha in &dominant {
        for field in career_fields(*graha) {
            if !fields.iter().any(|f| f.as_str() == *field) {
                fields.push((*field).to_owned());
            }
        }
    }

    let work_style = WORK_STYLE_PRIORITY
        .iter()
        .find(|(graha, _)| dominant.contains(graha))
        .map_or(BALANCED_WORK_STYLE, |(_, style)| *style);

    PlanetaryInfluence {
        dominant_planets: dominant.iter().map(|g| g.english_name().to_owned()).collect(),
        career_fields: fields,
        work_style: work_style.to_owned(),
    }
}

fn yoga(name: &str, status: YogaStatus, description: &str) -> CareerYoga {
    CareerYoga {
        name: name.to_owned(),
        status,
        description: description.to_owned(),
    }
}

/// Career yogas. Only Amala is evaluated; the rest are listed for reference.
pub fn career_yogas(chart: &Chart) -> Vec<CareerYoga> {
    let amala = chart
        .occupants(10)
        .into_iter()
        .find(|g| AMALA_BENEFICS.contains(g));

    let amala_entry = match amala {
        Some(graha) => yoga(
            "Amala Yoga",
            YogaStatus::Detected,
            &format!(
                "{} in the 10th house gives a reputable career and lasting good name",
                graha.english_name()
            ),
        ),
        None => yoga(
            "Amala Yoga",
            YogaStatus::NotDetected,
            "No natural benefic occupies the 10th house",
        ),
    };

    vec![
        amala_entry,
        yoga(
            "Raja Yoga",
            YogaStatus::NotEvaluated,
            "Kendra and trikona lords in association bring authority and status",
        ),
        yoga(
            "Dhana Yoga",
            YogaStatus::NotEvaluated,
            "Links between the 2nd, 5th, 9th and 11th lords bring wealth through work",
        ),
        yoga(
            "Vipareeth Raja Yoga",
            YogaStatus::NotEvaluated,
            "Dusthana lords in dusthanas turn adversity into professional gain",
        ),
    ]
}
