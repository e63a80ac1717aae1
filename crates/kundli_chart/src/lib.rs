//! Birth-chart input boundary.
//!
//! Accepts the loosely shaped chart payloads produced by upstream ephemeris
//! services and resolves them into a [`Chart`]: one optional placement per
//! graha, an optional ascendant, and an optional explicit houses table.
//! Nothing past this crate deals with aliases or alternate field names.

pub mod chart;
pub mod error;
pub mod input;

pub use chart::{Chart, PlanetPosition};
pub use error::ChartError;
pub use input::{ChartInput, NAME_FIELDS, PlanetRecord, normalize_planets, resolve_planets};
