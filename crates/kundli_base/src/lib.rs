//! Static jyotish vocabulary shared by the career and dosha engines.
//!
//! This crate provides:
//! - Graha, Rashi and Nakshatra enums with alias-tolerant name resolution
//! - Rashi lordship and the graha dignity table
//! - Whole-sign house arithmetic and house-offset drishti
//!
//! Everything here is a pure function over immutable tables.

pub mod bhava;
pub mod dignity;
pub mod drishti;
pub mod graha;
pub mod nakshatra;
pub mod rashi;

pub use bhava::{
    exaltation_house, house_of_rashi, house_rashi, house_sign, house_sign_name, is_kendra,
    is_planet_strong, is_trikona, normalize_house, nth_house_from,
};
pub use dignity::{
    DignityKind, NaisargikaMaitri, debilitation_rashi, dignity_by_name, dignity_of,
    exaltation_rashi, naisargika_maitri, own_signs,
};
pub use drishti::{DRISHTI_OFFSETS, aspected_houses, is_aspecting, is_conjunction_or_aspect};
pub use graha::{
    ALL_GRAHAS, Graha, SAPTA_GRAHAS, rashi_lord, rashi_lord_by_index, ruler_name_of, ruler_of,
};
pub use nakshatra::{ALL_NAKSHATRAS, Nakshatra};
pub use rashi::{ALL_RASHIS, Rashi};
