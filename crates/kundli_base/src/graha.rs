//! Vedic planet (graha) enum, name aliases and rashi lordship.
//!
//! The 9 grahas form the foundation of every rule in the career and dosha
//! engines. Each rashi has a planetary lord, which is a universal Vedic
//! convention (BPHS).
//!
//! Chart data arrives from several front ends that spell planets in
//! English, in Sanskrit transliteration, or in Devanagari. All of those
//! spellings resolve through a single alias table.

use crate::rashi::{ALL_RASHIS, Rashi};

/// The 9 Vedic grahas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Graha {
    Surya,
    Chandra,
    Mangal,
    Buddh,
    Guru,
    Shukra,
    Shani,
    Rahu,
    Ketu,
}

/// All 9 grahas in traditional order.
pub const ALL_GRAHAS: [Graha; 9] = [
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Buddh,
    Graha::Guru,
    Graha::Shukra,
    Graha::Shani,
    Graha::Rahu,
    Graha::Ketu,
];

/// The 7 classical grahas (sapta grahas), excluding Rahu and Ketu.
pub const SAPTA_GRAHAS: [Graha; 7] = [
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Buddh,
    Graha::Guru,
    Graha::Shukra,
    Graha::Shani,
];

/// Alias spellings accepted for each graha, lowercase.
///
/// English first, then Sanskrit/Hindi transliterations, then Devanagari.
const GRAHA_ALIASES: &[(&str, Graha)] = &[
    ("sun", Graha::Surya),
    ("surya", Graha::Surya),
    ("soorya", Graha::Surya),
    ("ravi", Graha::Surya),
    ("सूर्य", Graha::Surya),
    ("moon", Graha::Chandra),
    ("chandra", Graha::Chandra),
    ("chandrama", Graha::Chandra),
    ("soma", Graha::Chandra),
    ("चंद्र", Graha::Chandra),
    ("चन्द्र", Graha::Chandra),
    ("चंद्रमा", Graha::Chandra),
    ("mars", Graha::Mangal),
    ("mangal", Graha::Mangal),
    ("mangala", Graha::Mangal),
    ("kuja", Graha::Mangal),
    ("मंगल", Graha::Mangal),
    ("mercury", Graha::Buddh),
    ("budh", Graha::Buddh),
    ("buddh", Graha::Buddh),
    ("budha", Graha::Buddh),
    ("बुध", Graha::Buddh),
    ("jupiter", Graha::Guru),
    ("guru", Graha::Guru),
    ("brihaspati", Graha::Guru),
    ("गुरु", Graha::Guru),
    ("बृहस्पति", Graha::Guru),
    ("venus", Graha::Shukra),
    ("shukra", Graha::Shukra),
    ("sukra", Graha::Shukra),
    ("शुक्र", Graha::Shukra),
    ("saturn", Graha::Shani),
    ("shani", Graha::Shani),
    ("sani", Graha::Shani),
    ("शनि", Graha::Shani),
    ("rahu", Graha::Rahu),
    ("राहु", Graha::Rahu),
    ("ketu", Graha::Ketu),
    ("केतु", Graha::Ketu),
];

impl Graha {
    /// Sanskrit name of the graha.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Surya => "Surya",
            Self::Chandra => "Chandra",
            Self::Mangal => "Mangal",
            Self::Buddh => "Buddh",
            Self::Guru => "Guru",
            Self::Shukra => "Shukra",
            Self::Shani => "Shani",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    /// English name of the graha.
    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Surya => "Sun",
            Self::Chandra => "Moon",
            Self::Mangal => "Mars",
            Self::Buddh => "Mercury",
            Self::Guru => "Jupiter",
            Self::Shukra => "Venus",
            Self::Shani => "Saturn",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    /// 0-based index into ALL_GRAHAS.
    pub const fn index(self) -> u8 {
        match self {
            Self::Surya => 0,
            Self::Chandra => 1,
            Self::Mangal => 2,
            Self::Buddh => 3,
            Self::Guru => 4,
            Self::Shukra => 5,
            Self::Shani => 6,
            Self::Rahu => 7,
            Self::Ketu => 8,
        }
    }

    /// True for the lunar nodes.
    pub const fn is_node(self) -> bool {
        matches!(self, Self::Rahu | Self::Ketu)
    }

    /// Resolve any accepted spelling (English, Sanskrit, Devanagari).
    ///
    /// Matching is case-insensitive and ignores surrounding whitespace.
    pub fn from_alias(name: &str) -> Option<Graha> {
        let key = name.trim().to_lowercase();
        GRAHA_ALIASES
            .iter()
            .find(|(alias, _)| *alias == key)
            .map(|(_, graha)| *graha)
    }
}

impl std::fmt::Display for Graha {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.english_name())
    }
}

/// Get the planetary lord of a rashi.
///
/// - Mesha/Vrischika → Mangal (Mars)
/// - Vrishabha/Tula → Shukra (Venus)
/// - Mithuna/Kanya → Buddh (Mercury)
/// - Karka → Chandra (Moon)
/// - Simha → Surya (Sun)
/// - Dhanu/Meena → Guru (Jupiter)
/// - Makara/Kumbha → Shani (Saturn)
pub const fn rashi_lord(rashi: Rashi) -> Graha {
    match rashi {
        Rashi::Mesha => Graha::Mangal,
        Rashi::Vrishabha => Graha::Shukra,
        Rashi::Mithuna => Graha::Buddh,
        Rashi::Karka => Graha::Chandra,
        Rashi::Simha => Graha::Surya,
        Rashi::Kanya => Graha::Buddh,
        Rashi::Tula => Graha::Shukra,
        Rashi::Vrischika => Graha::Mangal,
        Rashi::Dhanu => Graha::Guru,
        Rashi::Makara => Graha::Shani,
        Rashi::Kumbha => Graha::Shani,
        Rashi::Meena => Graha::Guru,
    }
}

/// Get the lord of a rashi by 0-based index.
///
/// Returns None if index >= 12.
pub fn rashi_lord_by_index(rashi_index: u8) -> Option<Graha> {
    if rashi_index >= 12 {
        return None;
    }
    Some(rashi_lord(ALL_RASHIS[rashi_index as usize]))
}

/// Ruling graha of a sign given by any accepted name.
pub fn ruler_of(sign: &str) -> Option<Graha> {
    Rashi::from_name(sign).map(rashi_lord)
}

/// English name of the ruling graha, or `"Unknown"` for unrecognised input.
pub fn ruler_name_of(sign: &str) -> &'static str {
    ruler_of(sign).map_or("Unknown", Graha::english_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn graha_indices_sequential() {
        for (i, g) in ALL_GRAHAS.iter().enumerate() {
            assert_eq!(g.index() as usize, i);
        }
    }

    #[test]
    fn every_graha_resolves_from_its_own_names() {
        for g in ALL_GRAHAS {
            assert_eq!(Graha::from_alias(g.name()), Some(g));
            assert_eq!(Graha::from_alias(g.english_name()), Some(g));
        }
    }

    #[test]
    fn devanagari_aliases() {
        assert_eq!(Graha::from_alias("मंगल"), Some(Graha::Mangal));
        assert_eq!(Graha::from_alias("शनि"), Some(Graha::Shani));
        assert_eq!(Graha::from_alias("गुरु"), Some(Graha::Guru));
    }

    #[test]
    fn alias_matching_ignores_case_and_whitespace() {
        assert_eq!(Graha::from_alias("  JUPITER "), Some(Graha::Guru));
        assert_eq!(Graha::from_alias("budha"), Some(Graha::Buddh));
        assert_eq!(Graha::from_alias("Pluto"), None);
        assert_eq!(Graha::from_alias(""), None);
    }

    #[test]
    fn rashi_lordship_dual_ruled() {
        assert_eq!(rashi_lord(Rashi::Mesha), Graha::Mangal);
        assert_eq!(rashi_lord(Rashi::Vrischika), Graha::Mangal);
        assert_eq!(rashi_lord(Rashi::Makara), Graha::Shani);
        assert_eq!(rashi_lord(Rashi::Kumbha), Graha::Shani);
    }

    #[test]
    fn rashi_lord_by_index_invalid() {
        assert_eq!(rashi_lord_by_index(4), Some(Graha::Surya));
        assert_eq!(rashi_lord_by_index(12), None);
    }

    #[test]
    fn ruler_of_every_sign_is_classical() {
        for r in ALL_RASHIS {
            for name in [r.name(), r.western_name()] {
                let lord = ruler_of(name).expect("known sign");
                assert!(SAPTA_GRAHAS.contains(&lord), "{name} -> {lord}");
                assert_ne!(ruler_name_of(name), "Unknown");
            }
        }
    }

    #[test]
    fn ruler_of_unknown_sign() {
        assert_eq!(ruler_of("Ophiuchus"), None);
        assert_eq!(ruler_name_of("Ophiuchus"), "Unknown");
    }
}
