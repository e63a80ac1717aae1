//! Job-vs-business scoring, foreign-career indicators, and the timeline.

use kundli_base::Graha;
use kundli_chart::Chart;

use crate::strength::house_strength;
use crate::types::{CareerTimeline, ForeignCareer, JobVsBusiness, WorkMode};

/// 10th-house score a business recommendation needs to exceed.
pub const BUSINESS_TENTH_THRESHOLD: u8 = 6;

/// 9th-house score above which fortune abroad counts as an indicator.
pub const FOREIGN_NINTH_THRESHOLD: u8 = 7;

/// Pick job, business or both from the 6th/7th/10th house scores.
pub fn work_mode(sixth: u8, seventh: u8, tenth: u8) -> WorkMode {
    if sixth > seventh && sixth > tenth {
        WorkMode::Job
    } else if seventh > sixth && tenth > BUSINESS_TENTH_THRESHOLD {
        WorkMode::Business
    } else {
        WorkMode::Both
    }
}

pub fn analyze_job_vs_business(chart: &Chart) -> JobVsBusiness {
    let sixth = house_strength(chart, 6);
    let seventh = house_strength(chart, 7);
    let tenth = house_strength(chart, 10);
    let recommendation = work_mode(sixth, seventh, tenth);

    let reasoning = match recommendation {
        WorkMode::Job => format!(
            "The 6th house of service ({sixth}/10) outweighs the 7th ({seventh}/10) and 10th ({tenth}/10): salaried employment suits best."
        ),
        WorkMode::Business => format!(
            "The 7th house of trade ({seventh}/10) is stronger than the 6th ({sixth}/10) and the 10th is well supported ({tenth}/10): business suits best."
        ),
        WorkMode::Both => format!(
            "Scores for service ({sixth}/10), trade ({seventh}/10) and career ({tenth}/10) are balanced: either path can work."
        ),
    };

    JobVsBusiness {
        sixth_house_strength: sixth,
        seventh_house_strength: seventh,
        tenth_house_strength: tenth,
        recommendation,
        reasoning,
    }
}

const FOREIGN_TIMING_LIKELY: &str =
    "Foreign opportunities are likely during Rahu or 12th-lord periods, often after the late twenties.";
const FOREIGN_TIMING_UNLIKELY: &str =
    "Career opportunities are primarily domestic; short foreign assignments remain possible.";

pub fn analyze_foreign_career(chart: &Chart) -> ForeignCareer {
    let rahu = chart.house_of(Graha::Rahu);
    let mut indicators = Vec::new();

    if let Some(house @ (7 | 12)) = rahu {
        indicators.push(format!("Rahu in house {house} favours work abroad"));
    }
    let ninth = house_strength(chart, 9);
    if ninth > FOREIGN_NINTH_THRESHOLD {
        indicators.push(format!("Strong 9th house ({ninth}/10) supports long-distance fortune"));
    }
    // House-number proximity, not a true conjunction.
    if let (Some(moon), Some(rahu)) = (chart.house_of(Graha::Chandra), rahu) {
        if moon.abs_diff(rahu) <= 1 {
            indicators.push("Moon close to Rahu brings restlessness for foreign lands".to_owned());
        }
    }

    let potential = !indicators.is_empty();
    ForeignCareer {
        potential,
        indicators,
        timing: if potential {
            FOREIGN_TIMING_LIKELY
        } else {
            FOREIGN_TIMING_UNLIKELY
        }
        .to_owned(),
    }
}

/// Static phases; no chart data is read.
pub fn career_timeline() -> CareerTimeline {
    CareerTimeline {
        early_career: "Ages 18-30: learning, experimentation and building foundational skills.".to_owned(),
        mid_career: "Ages 30-45: consolidation, growing responsibility and recognition.".to_owned(),
        later_career: "Ages 45 onward: leadership, mentoring and harvesting accumulated expertise.".to_owned(),
        note: "Precise timing requires dasha periods calculated from birth time and current date.".to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kundli_base::Rashi;

    #[test]
    fn work_mode_rules() {
        assert_eq!(work_mode(9, 6, 6), WorkMode::Job);
        assert_eq!(work_mode(5, 7, 7), WorkMode::Business);
        // 10th not above the threshold.
        assert_eq!(work_mode(5, 7, 6), WorkMode::Both);
        // Tie on the 6th is not "greater".
        assert_eq!(work_mode(7, 7, 3), WorkMode::Both);
        assert_eq!(work_mode(5, 5, 5), WorkMode::Both);
    }

    #[test]
    fn empty_chart_scores_five() {
        let jvb = analyze_job_vs_business(&Chart::new(Some(Rashi::Mesha)));
        assert_eq!(jvb.sixth_house_strength, 5);
        assert_eq!(jvb.recommendation, WorkMode::Both);
    }

    #[test]
    fn rahu_in_twelfth_is_foreign() {
        let chart = Chart::new(Some(Rashi::Mesha)).with_house(Graha::Rahu, 12);
        let foreign = analyze_foreign_career(&chart);
        assert!(foreign.potential);
        assert_eq!(foreign.timing, FOREIGN_TIMING_LIKELY);
    }

    #[test]
    fn moon_rahu_proximity() {
        let chart = Chart::new(Some(Rashi::Mesha))
            .with_house(Graha::Rahu, 3)
            .with_house(Graha::Chandra, 4);
        let foreign = analyze_foreign_career(&chart);
        assert_eq!(foreign.indicators.len(), 1);
    }

    #[test]
    fn no_indicators() {
        let chart = Chart::new(Some(Rashi::Mesha))
            .with_house(Graha::Rahu, 3)
            .with_house(Graha::Chandra, 6);
        let foreign = analyze_foreign_career(&chart);
        assert!(!foreign.potential);
        assert_eq!(foreign.timing, FOREIGN_TIMING_UNLIKELY);
    }

    #[test]
    fn timeline_mentions_birth_time() {
        assert!(career_timeline().note.contains("birth time"));
    }
}
