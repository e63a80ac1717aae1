//! Raw chart payloads and planet-record normalization.
//!
//! Upstream services hand over planets either as an array of records or as
//! an object keyed by planet name, and name the planet under `name`,
//! `planet` or `planet_name`. Everything is flattened into [`PlanetRecord`]s
//! here, before any rule sees the data.

use serde_json::{Map, Value};
use tracing::debug;

use kundli_base::{ALL_GRAHAS, Graha, normalize_house};

/// Field names that may carry a planet's name, checked in this order.
pub const NAME_FIELDS: [&str; 3] = ["name", "planet", "planet_name"];

/// Chart payload as received on the wire. Every field is optional.
#[derive(Debug, Clone, Default)]
pub struct ChartInput {
    /// Array of planet records or object keyed by planet name.
    pub planets: Value,
    /// Ascendant sign, as a string or an object with a `sign` field.
    pub ascendant: Value,
    pub moon_sign: Value,
    pub sun_sign: Value,
    /// House number → sign, as an object, a 12-element array, or records.
    pub houses: Value,
}

impl ChartInput {
    /// Pick the known fields out of a chart document.
    ///
    /// Each field may be spelled several ways; the first spelling present
    /// wins, so a document carrying both `moon_sign` and `moonSign` is
    /// accepted. Unknown keys are ignored.
    pub fn from_object(obj: &Map<String, Value>) -> Self {
        let field = |keys: &[&str]| {
            keys.iter()
                .find_map(|k| obj.get(*k))
                .cloned()
                .unwrap_or(Value::Null)
        };
        Self {
            planets: field(&["planets"]),
            ascendant: field(&["ascendant", "lagna"]),
            moon_sign: field(&["moon_sign", "moonSign"]),
            sun_sign: field(&["sun_sign", "sunSign"]),
            houses: field(&["houses"]),
        }
    }
}

/// One planet entry after shape normalization, before alias resolution.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlanetRecord {
    /// Candidate names in lookup order (`name`, `planet`, `planet_name`), or the
    /// map key when none of those is present.
    pub names: Vec<String>,
    pub house: Option<u8>,
    pub sign: Option<String>,
    pub nakshatra: Option<String>,
    pub longitude: Option<f64>,
    pub retrograde: bool,
}

impl PlanetRecord {
    /// True if any candidate name resolves to `graha`.
    pub fn names_graha(&self, graha: Graha) -> bool {
        self.names
            .iter()
            .any(|n| Graha::from_alias(n) == Some(graha))
    }
}

/// Flatten an array-or-object planets payload into records.
///
/// Object form `{ "Mars": { "house": 4 } }` becomes a record named by its
/// key unless the record carries its own name field. Object entries keep
/// document order. Entries that are not objects are skipped.
pub fn normalize_planets(planets: &Value) -> Vec<PlanetRecord> {
    match planets {
        Value::Array(items) => items
            .iter()
            .filter_map(|item| item.as_object().map(|obj| record_from_object(obj, None)))
            .collect(),
        Value::Object(map) => map
            .iter()
            .filter_map(|(key, item)| {
                item.as_object()
                    .map(|obj| record_from_object(obj, Some(key.as_str())))
            })
            .collect(),
        Value::Null => Vec::new(),
        other => {
            debug!(kind = json_kind(other), "planets payload ignored");
            Vec::new()
        }
    }
}

/// Pick the first record naming each of the 9 grahas, indexed by `Graha::index()`.
pub fn resolve_planets(records: &[PlanetRecord]) -> [Option<&PlanetRecord>; 9] {
    let mut resolved = [None; 9];
    for graha in ALL_GRAHAS {
        resolved[graha.index() as usize] = records.iter().find(|r| r.names_graha(graha));
    }
    for record in records {
        if !ALL_GRAHAS.iter().any(|g| record.names_graha(*g)) {
            debug!(names = ?record.names, "unrecognised planet record");
        }
    }
    resolved
}

fn record_from_object(obj: &Map<String, Value>, key: Option<&str>) -> PlanetRecord {
    let mut names: Vec<String> = NAME_FIELDS
        .iter()
        .filter_map(|field| obj.get(*field).and_then(Value::as_str))
        .map(str::to_owned)
        .collect();
    if names.is_empty() {
        names.extend(key.map(str::to_owned));
    }

    PlanetRecord {
        names,
        house: obj.get("house").and_then(house_number),
        sign: ["sign", "rashi"]
            .iter()
            .find_map(|f| obj.get(*f).and_then(sign_text)),
        nakshatra: obj
            .get("nakshatra")
            .and_then(sign_text),
        longitude: ["longitude", "fullDegree"]
            .iter()
            .find_map(|f| obj.get(*f).and_then(number)),
        retrograde: ["retrograde", "isRetrograde", "isRetro"]
            .iter()
            .find_map(|f| obj.get(*f).and_then(flag))
            .unwrap_or(false),
    }
}

/// Parse a house number from an integer, float or numeric string.
///
/// Values above 12 wrap onto 1-12; zero, negatives and non-numbers are
/// unresolved.
pub fn house_number(value: &Value) -> Option<u8> {
    let n = number(value)?;
    if !n.is_finite() || n < 1.0 {
        return None;
    }
    Some(normalize_house(n.trunc() as i64))
}

/// Sign/nakshatra text from a string or an object carrying `sign`/`name`/`rashi`.
pub fn sign_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_owned()),
        Value::Object(obj) => ["sign", "name", "rashi"]
            .iter()
            .find_map(|f| obj.get(*f).and_then(sign_text)),
        _ => None,
    }
}

fn number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn flag(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::String(s) => match s.trim().to_lowercase().as_str() {
            "true" | "yes" | "r" => Some(true),
            "false" | "no" | "" => Some(false),
            _ => None,
        },
        Value::Number(n) => n.as_i64().map(|v| v != 0),
        _ => None,
    }
}

pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
