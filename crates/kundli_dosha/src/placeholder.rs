//! Doshas that are reported but not evaluated.
//!
//! These always come back absent with a fixed note. They are listed so the
//! report keeps its full shape; callers must not read them as analysis.

use crate::types::DoshaAnalysis;

pub const MATRU_NOTE: &str =
    "Matru dosha (affliction to the Moon and 4th house) is not evaluated by this engine.";
pub const SHAKATA_NOTE: &str =
    "Shakata dosha (Moon in the 6th or 8th from Jupiter) is not evaluated by this engine.";
pub const DARIDRA_NOTE: &str =
    "Daridra dosha (11th lord in a dusthana) is not evaluated by this engine.";
pub const PAAP_KARTARI_NOTE: &str =
    "Paap Kartari dosha (malefics hemming a house) is not evaluated by this engine.";
pub const PUNARPHOO_NOTE: &str =
    "Punarphoo dosha (Saturn-Moon association) is not evaluated by this engine.";
pub const RAHU_KETU_NOTE: &str =
    "Rahu-Ketu dosha (nodal axis on sensitive houses) is not evaluated by this engine.";

pub fn not_evaluated(note: &'static str) -> DoshaAnalysis {
    DoshaAnalysis::absent(note)
}
