//! Resolved, read-only birth chart consumed by the rule engines.

use std::collections::BTreeMap;

use serde_json::Value;
use tracing::{debug, warn};

use kundli_base::{ALL_GRAHAS, Graha, Nakshatra, Rashi, house_of_rashi, house_rashi, normalize_house};

use crate::error::ChartError;
use crate::input::{
    ChartInput, PlanetRecord, house_number, json_kind, normalize_planets, resolve_planets,
    sign_text,
};

/// Placement of one graha.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanetPosition {
    pub graha: Graha,
    /// Whole-sign house from the ascendant (1-12).
    pub house: u8,
    /// Occupied rashi, when supplied or derivable.
    pub sign: Option<Rashi>,
    pub nakshatra: Option<Nakshatra>,
    /// Sidereal longitude in degrees, when supplied.
    pub longitude: Option<f64>,
    pub retrograde: bool,
}

impl PlanetPosition {
    /// Placement with only a house known.
    pub fn in_house(graha: Graha, house: u8) -> Self {
        Self {
            graha,
            house: normalize_house(house as i64),
            sign: None,
            nakshatra: None,
            longitude: None,
            retrograde: false,
        }
    }

    pub fn with_sign(mut self, sign: Rashi) -> Self {
        self.sign = Some(sign);
        self
    }

    pub fn with_nakshatra(mut self, nakshatra: Nakshatra) -> Self {
        self.nakshatra = Some(nakshatra);
        self
    }
}

/// Birth chart with every graha resolved to at most one placement.
///
/// Built once per request and never mutated; engines only borrow it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Chart {
    planets: [Option<PlanetPosition>; 9],
    ascendant: Option<Rashi>,
    moon_sign: Option<Rashi>,
    sun_sign: Option<Rashi>,
    houses: BTreeMap<u8, Rashi>,
}

impl Chart {
    /// Empty chart with a known (or unknown) ascendant.
    pub fn new(ascendant: Option<Rashi>) -> Self {
        Self {
            ascendant,
            ..Self::default()
        }
    }

    /// Add or replace one placement.
    ///
    /// When the ascendant is known and the placement carries no sign, the
    /// sign is derived from the house.
    pub fn with_planet(mut self, mut position: PlanetPosition) -> Self {
        if position.sign.is_none() {
            position.sign = self.ascendant.map(|asc| house_rashi(asc, position.house as i32));
        }
        self.planets[position.graha.index() as usize] = Some(position);
        self
    }

    /// Shorthand for `with_planet(PlanetPosition::in_house(graha, house))`.
    pub fn with_house(self, graha: Graha, house: u8) -> Self {
        self.with_planet(PlanetPosition::in_house(graha, house))
    }

    /// Parse a JSON chart document.
    pub fn from_json_str(json: &str) -> Result<Self, ChartError> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(value)
    }

    /// Build from an already-parsed JSON value.
    pub fn from_value(value: Value) -> Result<Self, ChartError> {
        let Value::Object(obj) = &value else {
            return Err(ChartError::NotAnObject(json_kind(&value)));
        };
        Ok(Self::from_input(&ChartInput::from_object(obj)))
    }

    /// Build from the separate pieces a dosha request carries.
    pub fn from_parts(planets: &Value, houses: &Value, ascendant: &str) -> Self {
        let input = ChartInput {
            planets: planets.clone(),
            ascendant: Value::String(ascendant.to_owned()),
            houses: houses.clone(),
            ..ChartInput::default()
        };
        Self::from_input(&input)
    }

    /// Resolve a raw payload. Never fails: unresolvable pieces stay empty.
    pub fn from_input(input: &ChartInput) -> Self {
        let houses = parse_houses(&input.houses);
        let named = sign_text(&input.ascendant)
            .as_deref()
            .and_then(Rashi::from_name);
        if named.is_none() && !input.ascendant.is_null() {
            warn!(ascendant = %input.ascendant, "unrecognised ascendant");
        }
        let ascendant = named.or_else(|| houses.get(&1).copied());

        let records = normalize_planets(&input.planets);
        let resolved = resolve_planets(&records);

        let mut chart = Chart {
            ascendant,
            houses,
            ..Chart::default()
        };
        for graha in ALL_GRAHAS {
            if let Some(record) = resolved[graha.index() as usize] {
                chart.planets[graha.index() as usize] =
                    position_from_record(graha, record, ascendant);
            }
        }

        chart.moon_sign = sign_text(&input.moon_sign)
            .as_deref()
            .and_then(Rashi::from_name)
            .or_else(|| chart.sign_of(Graha::Chandra));
        chart.sun_sign = sign_text(&input.sun_sign)
            .as_deref()
            .and_then(Rashi::from_name)
            .or_else(|| chart.sign_of(Graha::Surya));

        debug!(
            resolved = chart.planets().count(),
            ascendant = ?chart.ascendant.map(Rashi::name),
            "chart resolved"
        );
        chart
    }

    pub fn ascendant(&self) -> Option<Rashi> {
        self.ascendant
    }

    pub fn moon_sign(&self) -> Option<Rashi> {
        self.moon_sign
    }

    pub fn sun_sign(&self) -> Option<Rashi> {
        self.sun_sign
    }

    /// Placement of a graha, if resolved.
    pub fn planet(&self, graha: Graha) -> Option<&PlanetPosition> {
        self.planets[graha.index() as usize].as_ref()
    }

    /// House of a graha, if resolved.
    pub fn house_of(&self, graha: Graha) -> Option<u8> {
        self.planet(graha).map(|p| p.house)
    }

    /// Rashi of a graha, if supplied or derivable.
    pub fn sign_of(&self, graha: Graha) -> Option<Rashi> {
        self.planet(graha).and_then(|p| p.sign)
    }

    /// All resolved placements in traditional graha order.
    pub fn planets(&self) -> impl Iterator<Item = &PlanetPosition> {
        self.planets.iter().flatten()
    }

    /// Grahas occupying `house`, in traditional order.
    pub fn occupants(&self, house: u8) -> Vec<Graha> {
        self.planets()
            .filter(|p| p.house == house)
            .map(|p| p.graha)
            .collect()
    }

    /// Grahas with no resolved placement.
    pub fn unresolved(&self) -> Vec<Graha> {
        ALL_GRAHAS
            .into_iter()
            .filter(|g| self.planet(*g).is_none())
            .collect()
    }

    /// Sign on a house: offset from the ascendant, else the explicit houses table.
    pub fn house_sign(&self, house: u8) -> Option<Rashi> {
        let house = normalize_house(house as i64);
        self.ascendant
            .map(|asc| house_rashi(asc, house as i32))
            .or_else(|| self.houses.get(&house).copied())
    }
}

fn position_from_record(
    graha: Graha,
    record: &PlanetRecord,
    ascendant: Option<Rashi>,
) -> Option<PlanetPosition> {
    let sign = record
        .sign
        .as_deref()
        .and_then(Rashi::from_name)
        .or_else(|| record.longitude.map(rashi_from_longitude));

    let house = record
        .house
        .or_else(|| Some(house_of_rashi(ascendant?, sign?)));
    let Some(house) = house else {
        warn!(graha = graha.english_name(), "planet has no resolvable house");
        return None;
    };

    Some(PlanetPosition {
        graha,
        house,
        sign: sign.or_else(|| ascendant.map(|asc| house_rashi(asc, house as i32))),
        nakshatra: record.nakshatra.as_deref().and_then(Nakshatra::from_name),
        longitude: record.longitude,
        retrograde: record.retrograde,
    })
}

fn rashi_from_longitude(lon: f64) -> Rashi {
    let r = lon.rem_euclid(360.0);
    Rashi::from_index(((r / 30.0).floor() as u8).min(11))
}

fn parse_houses(houses: &Value) -> BTreeMap<u8, Rashi> {
    let mut table = BTreeMap::new();
    match houses {
        Value::Object(map) => {
            for (key, sign) in map {
                let house = key.trim().parse::<i64>().ok().filter(|h| *h >= 1);
                let rashi = sign_text(sign).as_deref().and_then(Rashi::from_name);
                if let (Some(h), Some(r)) = (house, rashi) {
                    table.insert(normalize_house(h), r);
                }
            }
        }
        Value::Array(items) => {
            for (i, item) in items.iter().enumerate() {
                let house = item
                    .get("house")
                    .and_then(house_number)
                    .or_else(|| (i < 12).then_some(i as u8 + 1));
                let rashi = sign_text(item).as_deref().and_then(Rashi::from_name);
                if let (Some(h), Some(r)) = (house, rashi) {
                    table.insert(h, r);
                }
            }
        }
        _ => {}
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn sign_derived_from_house_and_ascendant() {
        let chart = Chart::new(Some(Rashi::Mesha)).with_house(Graha::Shani, 10);
        assert_eq!(chart.sign_of(Graha::Shani), Some(Rashi::Makara));
    }

    #[test]
    fn house_derived_from_sign_and_ascendant() {
        let chart = Chart::from_value(json!({
            "ascendant": "Leo",
            "planets": [{ "name": "Sun", "sign": "Aries" }]
        }))
        .unwrap();
        assert_eq!(chart.house_of(Graha::Surya), Some(9));
    }

    #[test]
    fn sign_derived_from_longitude() {
        let chart = Chart::from_value(json!({
            "planets": [{ "name": "Moon", "house": 3, "longitude": 45.5 }]
        }))
        .unwrap();
        assert_eq!(chart.sign_of(Graha::Chandra), Some(Rashi::Vrishabha));
        assert_eq!(chart.moon_sign(), Some(Rashi::Vrishabha));
    }

    #[test]
    fn planet_without_house_is_unresolved() {
        let chart = Chart::from_value(json!({
            "planets": [{ "name": "Mars", "sign": "Aries" }]
        }))
        .unwrap();
        assert!(chart.planet(Graha::Mangal).is_none());
        assert_eq!(chart.unresolved().len(), 9);
    }

    #[test]
    fn houses_object_and_array() {
        let obj = parse_houses(&json!({ "1": "Aries", "10": "Capricorn", "x": "Leo" }));
        assert_eq!(obj.get(&1), Some(&Rashi::Mesha));
        assert_eq!(obj.get(&10), Some(&Rashi::Makara));
        assert_eq!(obj.len(), 2);

        let arr = parse_houses(&json!(["Taurus", "Gemini"]));
        assert_eq!(arr.get(&2), Some(&Rashi::Mithuna));

        let records = parse_houses(&json!([{ "house": 7, "sign": "Libra" }]));
        assert_eq!(records.get(&7), Some(&Rashi::Tula));
    }

    #[test]
    fn house_sign_prefers_ascendant_offset() {
        let chart = Chart::from_value(json!({
            "ascendant": "Aries",
            "houses": { "10": "Aquarius" }
        }))
        .unwrap();
        assert_eq!(chart.house_sign(10), Some(Rashi::Makara));
        assert_eq!(chart.house_sign(4), Some(Rashi::Karka));
    }

    #[test]
    fn ascendant_from_first_house_entry() {
        let chart = Chart::from_value(json!({ "houses": ["Scorpio"] })).unwrap();
        assert_eq!(chart.ascendant(), Some(Rashi::Vrischika));
    }

    #[test]
    fn house_table_used_without_ascendant() {
        let chart = Chart::from_value(json!({ "houses": { "10": "Aquarius" } })).unwrap();
        assert_eq!(chart.house_sign(10), Some(Rashi::Kumbha));
        assert_eq!(chart.house_sign(4), None);
    }

    #[test]
    fn rejects_non_object_payload() {
        assert!(matches!(
            Chart::from_value(json!([1, 2])),
            Err(ChartError::NotAnObject("array"))
        ));
        assert!(Chart::from_json_str("{not json").is_err());
    }

    #[test]
    fn occupants_in_order() {
        let chart = Chart::new(None)
            .with_house(Graha::Shani, 5)
            .with_house(Graha::Surya, 5)
            .with_house(Graha::Guru, 6);
        assert_eq!(chart.occupants(5), vec![Graha::Surya, Graha::Shani]);
    }
}
