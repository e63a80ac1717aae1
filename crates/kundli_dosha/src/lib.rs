//! Dosha checks over a resolved birth chart.
//!
//! Seven doshas carry real rules (Mangal, Shani, Kaal Sarp, Pitra, Graha,
//! Kemadruma, Guru Chandal). The remaining six are always reported absent
//! with a fixed note. Every check is a pure function of the [`Chart`]
//! and never fails.
//!
//! [`Chart`]: kundli_chart::Chart

pub mod affliction;
pub mod engine;
pub mod kaal_sarp;
pub mod lunar;
pub mod placeholder;
pub mod placement;
pub mod remedies;
pub mod types;

pub use engine::{analyze_doshas, analyze_doshas_and_defects};
pub use types::{DoshaAnalysis, DoshaReport, Severity};
