//! Rule-based career analysis of a resolved birth chart.
//!
//! Every section reads the [`Chart`](kundli_chart::Chart) independently
//! and degrades to sentinel values ("Unknown", house 0) when the data it
//! needs is missing.

pub mod engine;
pub mod influence;
pub mod lagna;
pub mod prospects;
pub mod remedies;
pub mod saturn;
pub mod strength;
pub mod tables;
pub mod types;

pub use engine::analyze_career;
pub use strength::{dignity_score, house_strength};
pub use types::{
    CareerAnalysis, CareerRemedies, CareerTimeline, CareerYoga, ForeignCareer, JobVsBusiness,
    LagnaAnalysis, PlanetaryInfluence, SaturnAnalysis, StrengthTier, TenthLordAnalysis, WorkMode,
    YogaStatus,
};
