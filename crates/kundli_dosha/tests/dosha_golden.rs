//! Dosha reports from raw request payloads.

use kundli_dosha::{Severity, analyze_doshas_and_defects};
use serde_json::{Value, json};

#[test]
fn mars_fourth_without_aspect_is_strong() {
    let report = analyze_doshas_and_defects(
        &json!([{ "name": "Mars", "house": 4 }, { "name": "Jupiter", "house": 3 }]),
        &Value::Null,
        "Aries",
    );
    assert!(report.mangal_dosha.present);
    assert_eq!(report.mangal_dosha.severity, Severity::Strong);
}

#[test]
fn jupiter_eighth_makes_mangal_mild() {
    let report = analyze_doshas_and_defects(
        &json!([{ "name": "Mars", "house": 4 }, { "name": "Jupiter", "house": 8 }]),
        &Value::Null,
        "Aries",
    );
    assert_eq!(report.mangal_dosha.severity, Severity::Mild);
}

#[test]
fn mars_third_never_present() {
    for other in 1..=12 {
        let report = analyze_doshas_and_defects(
            &json!([
                { "name": "Mars", "house": 3 },
                { "name": "Jupiter", "house": other },
                { "name": "Venus", "house": other }
            ]),
            &Value::Null,
            "Aries",
        );
        assert!(!report.mangal_dosha.present);
    }
}

#[test]
fn kaal_sarp_partial_with_jupiter_ninth() {
    let planets = json!({
        "Rahu": { "house": 1 },
        "Ketu": { "house": 7 },
        "Sun": { "house": 2 },
        "Moon": { "house": 3 },
        "Mars": { "house": 4 },
        "Mercury": { "house": 5 },
        "Venus": { "house": 6 },
        "Saturn": { "house": 6 },
        "Jupiter": { "house": 9 }
    });
    let report = analyze_doshas_and_defects(&planets, &Value::Null, "Aries");
    let kaal_sarp = &report.kaal_sarp_dosha;
    assert!(kaal_sarp.present);
    assert_eq!(kaal_sarp.severity, Severity::Partial);
    assert_eq!(kaal_sarp.breakers, vec!["Jupiter"]);
}

#[test]
fn map_and_array_inputs_agree() {
    let map = analyze_doshas_and_defects(
        &json!({ "Sun": { "house": 1 }, "Mars": { "house": 4 } }),
        &Value::Null,
        "Aries",
    );
    let array = analyze_doshas_and_defects(
        &json!([{ "name": "Sun", "house": 1 }, { "name": "Mars", "house": 4 }]),
        &Value::Null,
        "Aries",
    );
    assert_eq!(map, array);
}

#[test]
fn hindi_names_resolve() {
    let report = analyze_doshas_and_defects(
        &json!([{ "planet": "गुरु", "house": 5 }, { "planet_name": "राहु", "house": 5 }]),
        &Value::Null,
        "Mesha",
    );
    assert!(report.guru_chandal_dosha.present);
    assert_eq!(report.guru_chandal_dosha.severity, Severity::Strong);
}

#[test]
fn garbage_input_is_all_absent() {
    let report = analyze_doshas_and_defects(&json!("nonsense"), &json!(42), "");
    assert!(report.present_names().is_empty());
    for (_, dosha) in report.entries() {
        assert_eq!(dosha.severity, Severity::None);
        assert!(dosha.remedies.is_empty());
    }
}

#[test]
fn report_shape() {
    let report = analyze_doshas_and_defects(&json!([]), &Value::Null, "Aries");
    let value = serde_json::to_value(&report).unwrap();
    let object = value.as_object().unwrap();
    assert_eq!(object.len(), 13);
    for key in [
        "mangalDosha",
        "kaalSarpDosha",
        "guruChandalDosha",
        "paapKartariDosha",
        "rahuKetuDosha",
    ] {
        assert_eq!(object[key]["present"], false);
    }
    assert!(
        object["matruDosha"]["explanation"]
            .as_str()
            .unwrap()
            .contains("not evaluated")
    );
}

#[test]
fn deterministic_explanations() {
    let planets = json!([
        { "name": "Sun", "house": 9 },
        { "name": "Rahu", "house": 9 },
        { "name": "Saturn", "house": 5 },
        { "name": "Moon", "house": 3 }
    ]);
    let a = analyze_doshas_and_defects(&planets, &Value::Null, "Leo");
    let b = analyze_doshas_and_defects(&planets, &Value::Null, "Leo");
    assert_eq!(a, b);
    assert!(a.pitra_dosha.present);
}
