use kundli_chart::Chart;
use tracing::debug;

use crate::influence::{analyze_influence, career_yogas};
use crate::lagna::{analyze_lagna, analyze_tenth_lord, tenth_lord};
use crate::prospects::{analyze_foreign_career, analyze_job_vs_business, career_timeline};
use crate::remedies::career_remedies;
use crate::saturn::analyze_saturn;
use crate::types::CareerAnalysis;

/// Build the full career report. Missing chart data degrades individual
/// sections to sentinels; the call itself never fails.
pub fn analyze_career(chart: &Chart) -> CareerAnalysis {
    let lagna_analysis = analyze_lagna(chart);
    let tenth_lord_analysis = analyze_tenth_lord(chart);
    let saturn_analysis = analyze_saturn(chart);
    let remedies = career_remedies(&saturn_analysis, tenth_lord(chart));
    let job_vs_business = analyze_job_vs_business(chart);

    debug!(
        lagna = %lagna_analysis.sign,
        tenth_lord = %tenth_lord_analysis.lord,
        saturn_house = saturn_analysis.house,
        recommendation = ?job_vs_business.recommendation,
        "career analysis complete"
    );

    CareerAnalysis {
        lagna_analysis,
        tenth_lord_analysis,
        saturn_analysis,
        planetary_influence: analyze_influence(chart),
        career_yogas: career_yogas(chart),
        job_vs_business,
        foreign_career: analyze_foreign_career(chart),
        timeline: career_timeline(),
        remedies,
    }
}
