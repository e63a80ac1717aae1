//! Graha dignity table.
//!
//! Exaltation/debilitation rashis, own signs and natural (naisargika)
//! friendship for the sapta grahas, combined into a single sign-level
//! dignity classification.
//!
//! Rahu and Ketu carry no entries: classical texts disagree on node
//! dignity, so every node placement reports `Neutral`.

use serde::{Deserialize, Serialize};

use crate::graha::{Graha, rashi_lord};
use crate::rashi::Rashi;

// ---------------------------------------------------------------------------
// Exaltation & Debilitation
// ---------------------------------------------------------------------------

/// Exaltation rashi for sapta grahas. Returns None for Rahu/Ketu.
///
/// Sun Mesha, Moon Vrishabha, Mars Makara, Mercury Kanya,
/// Jupiter Karka, Venus Meena, Saturn Tula.
pub const fn exaltation_rashi(graha: Graha) -> Option<Rashi> {
    match graha {
        Graha::Surya => Some(Rashi::Mesha),
        Graha::Chandra => Some(Rashi::Vrishabha),
        Graha::Mangal => Some(Rashi::Makara),
        Graha::Buddh => Some(Rashi::Kanya),
        Graha::Guru => Some(Rashi::Karka),
        Graha::Shukra => Some(Rashi::Meena),
        Graha::Shani => Some(Rashi::Tula),
        Graha::Rahu | Graha::Ketu => None,
    }
}

/// Debilitation rashi = seventh from exaltation. Returns None for Rahu/Ketu.
pub const fn debilitation_rashi(graha: Graha) -> Option<Rashi> {
    match exaltation_rashi(graha) {
        Some(r) => Some(Rashi::from_index(r.index() + 6)),
        None => None,
    }
}

/// Own-sign rashis for sapta grahas. Returns empty slice for Rahu/Ketu.
pub fn own_signs(graha: Graha) -> &'static [Rashi] {
    match graha {
        Graha::Surya => &[Rashi::Simha],
        Graha::Chandra => &[Rashi::Karka],
        Graha::Mangal => &[Rashi::Mesha, Rashi::Vrischika],
        Graha::Buddh => &[Rashi::Mithuna, Rashi::Kanya],
        Graha::Guru => &[Rashi::Dhanu, Rashi::Meena],
        Graha::Shukra => &[Rashi::Vrishabha, Rashi::Tula],
        Graha::Shani => &[Rashi::Makara, Rashi::Kumbha],
        Graha::Rahu | Graha::Ketu => &[],
    }
}

// ---------------------------------------------------------------------------
// Natural Friendship (Naisargika Maitri)
// ---------------------------------------------------------------------------

/// Natural relationship between two grahas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NaisargikaMaitri {
    Friend,
    Enemy,
    Neutral,
}

/// Natural (naisargika) friendship between two sapta grahas (BPHS table).
/// Returns Neutral for any pairing involving Rahu/Ketu.
pub const fn naisargika_maitri(graha: Graha, other: Graha) -> NaisargikaMaitri {
    use Graha::*;
    use NaisargikaMaitri::*;

    match (graha, other) {
        (Rahu | Ketu, _) | (_, Rahu | Ketu) => Neutral,

        (Surya, Chandra | Mangal | Guru) => Friend,
        (Surya, Shukra | Shani) => Enemy,

        (Chandra, Surya | Buddh) => Friend,

        (Mangal, Surya | Chandra | Guru) => Friend,
        (Mangal, Buddh) => Enemy,

        (Buddh, Surya | Shukra) => Friend,
        (Buddh, Chandra) => Enemy,

        (Guru, Surya | Chandra | Mangal) => Friend,
        (Guru, Buddh | Shukra) => Enemy,

        (Shukra, Buddh | Shani) => Friend,
        (Shukra, Surya | Chandra) => Enemy,

        (Shani, Buddh | Shukra) => Friend,
        (Shani, Surya | Chandra | Mangal) => Enemy,

        _ => Neutral,
    }
}

// ---------------------------------------------------------------------------
// Dignity Determination
// ---------------------------------------------------------------------------

/// Sign-level dignity of a graha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DignityKind {
    Exalted,
    OwnSign,
    Friendly,
    Neutral,
    Enemy,
    Debilitated,
}

impl DignityKind {
    /// Wire name (`exalted`, `own_sign`, ...).
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Exalted => "exalted",
            Self::OwnSign => "own_sign",
            Self::Friendly => "friendly",
            Self::Neutral => "neutral",
            Self::Enemy => "enemy",
            Self::Debilitated => "debilitated",
        }
    }
}

impl std::fmt::Display for DignityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Dignity of a graha placed in a rashi.
///
/// Priority: exaltation > debilitation > own sign > natural friendship
/// with the rashi lord. Rahu/Ketu are always Neutral.
pub fn dignity_of(graha: Graha, rashi: Rashi) -> DignityKind {
    if graha.is_node() {
        return DignityKind::Neutral;
    }
    if exaltation_rashi(graha) == Some(rashi) {
        return DignityKind::Exalted;
    }
    if debilitation_rashi(graha) == Some(rashi) {
        return DignityKind::Debilitated;
    }
    if own_signs(graha).contains(&rashi) {
        return DignityKind::OwnSign;
    }
    match naisargika_maitri(graha, rashi_lord(rashi)) {
        NaisargikaMaitri::Friend => DignityKind::Friendly,
        NaisargikaMaitri::Enemy => DignityKind::Enemy,
        NaisargikaMaitri::Neutral => DignityKind::Neutral,
    }
}

/// Dignity lookup by names; any unresolvable name yields Neutral.
pub fn dignity_by_name(planet: &str, sign: &str) -> DignityKind {
    match (Graha::from_alias(planet), Rashi::from_name(sign)) {
        (Some(g), Some(r)) => dignity_of(g, r),
        _ => DignityKind::Neutral,
    }
}
