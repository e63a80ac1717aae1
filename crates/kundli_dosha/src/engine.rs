use kundli_chart::Chart;
use serde_json::Value;
use tracing::debug;

use crate::affliction::{graha_dosha, pitra_dosha};
use crate::kaal_sarp::kaal_sarp_dosha;
use crate::lunar::{guru_chandal_dosha, kemadruma_dosha};
use crate::placeholder::{
    DARIDRA_NOTE, MATRU_NOTE, PAAP_KARTARI_NOTE, PUNARPHOO_NOTE, RAHU_KETU_NOTE, SHAKATA_NOTE,
    not_evaluated,
};
use crate::placement::{mangal_dosha, shani_dosha};
use crate::types::DoshaReport;

/// Run every dosha check against a resolved chart.
pub fn analyze_doshas(chart: &Chart) -> DoshaReport {
    let report = DoshaReport {
        mangal_dosha: mangal_dosha(chart),
        shani_dosha: shani_dosha(chart),
        kaal_sarp_dosha: kaal_sarp_dosha(chart),
        pitra_dosha: pitra_dosha(chart),
        graha_dosha: graha_dosha(chart),
        kemadruma_dosha: kemadruma_dosha(chart),
        guru_chandal_dosha: guru_chandal_dosha(chart),
        matru_dosha: not_evaluated(MATRU_NOTE),
        shakata_dosha: not_evaluated(SHAKATA_NOTE),
        daridra_dosha: not_evaluated(DARIDRA_NOTE),
        paap_kartari_dosha: not_evaluated(PAAP_KARTARI_NOTE),
        punarphoo_dosha: not_evaluated(PUNARPHOO_NOTE),
        rahu_ketu_dosha: not_evaluated(RAHU_KETU_NOTE),
    };
    debug!(present = ?report.present_names(), "dosha analysis complete");
    report
}

/// Dosha report from raw request pieces.
///
/// `planets` may be an array of records or an object keyed by planet name;
/// `houses` may be null. Unrecognised input yields absent doshas.
pub fn analyze_doshas_and_defects(planets: &Value, houses: &Value, ascendant: &str) -> DoshaReport {
    analyze_doshas(&Chart::from_parts(planets, houses, ascendant))
}
