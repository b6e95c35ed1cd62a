//! Skill quality scoring.
//!
//! Pure functions over a `ParsedSkill`: no I/O, no shared state, safe to
//! call from any number of threads at once.

pub mod policy;
pub mod score;

pub use policy::{PresencePolicy, ScoringOptions};
pub use score::{
    COMPLETENESS_MAX, DOCUMENTATION_MAX, FRESHNESS_PLACEHOLDER, QualityBreakdown, QualityGrade,
    SCHEMA_MAX, TOTAL_MAX, calculate_quality_score, calculate_quality_score_with,
    completeness_score, documentation_score, freshness_score, schema_score,
};
