//! Skillhub Core - Skill document parsing, quality scoring and catalog indexing.
//!
//! This crate provides the logic behind the skill marketplace:
//! - `skill/` - Parses SKILL.md frontmatter + markdown and renders canonical text
//! - `quality/` - Deterministic 0–100 quality score with a per-dimension breakdown
//! - `catalog/` - Scans skill directories, builds index records, diffs indexes
//!
//! # Architecture
//!
//! ```text
//! skillhub-core/src/
//! ├── lib.rs              # Main module and exports
//! ├── error.rs            # SkillError
//! ├── frontmatter.rs      # `---` block splitting and YAML decoding
//! ├── skill/              # SkillFrontmatter, ParsedSkill, parse, serialize
//! ├── quality/            # QualityBreakdown, scoring dimensions, PresencePolicy
//! └── catalog/            # SkillRecord, CatalogScanner, IndexDiff
//! ```
//!
//! # Usage
//!
//! ```
//! use skillhub_core::{calculate_quality_score, parse};
//!
//! let skill = parse("---\nname: \"Foo\"\n---\n\nHello").unwrap();
//! let quality = calculate_quality_score(&skill);
//! assert_eq!(quality.schema, 5);
//! assert_eq!(quality.freshness, 15);
//! assert_eq!(quality.total, 20);
//! ```

// ============================================================================
// Module Declarations
// ============================================================================

pub mod catalog;
pub mod error;
pub mod frontmatter;
pub mod quality;
pub mod skill;

// ============================================================================
// Re-exports
// ============================================================================

pub use catalog::{
    CatalogScan, CatalogScanner, DEFAULT_SKILL_FILE_NAME, IndexDiff, ScanFailure, SkillRecord,
    calculate_index_diff, content_hash, read_index, slugify, sort_leaderboard, write_index,
};
pub use error::{Result, SkillError};
pub use frontmatter::{FrontmatterSplit, parse_matter, split_frontmatter};
pub use quality::{
    COMPLETENESS_MAX, DOCUMENTATION_MAX, FRESHNESS_PLACEHOLDER, PresencePolicy, QualityBreakdown,
    QualityGrade, SCHEMA_MAX, ScoringOptions, TOTAL_MAX, calculate_quality_score,
    calculate_quality_score_with,
};
pub use skill::{
    DEFAULT_LICENSE, DEFAULT_VERSION, ExplicitFields, ListField, ParsedSkill, ScalarField,
    SkillFrontmatter, parse, parse_file, serialize,
};

// ============================================================================
// JSON Schema Generation
// ============================================================================

/// Generate JSON Schema for `SkillFrontmatter`.
#[must_use]
pub fn skill_frontmatter_schema() -> String {
    let schema = schemars::schema_for!(SkillFrontmatter);
    serde_json::to_string_pretty(&schema).unwrap_or_default()
}

/// Generate JSON Schema for `QualityBreakdown`.
#[must_use]
pub fn quality_breakdown_schema() -> String {
    let schema = schemars::schema_for!(QualityBreakdown);
    serde_json::to_string_pretty(&schema).unwrap_or_default()
}

/// Generate JSON Schema for `SkillRecord` (one entry of an index file).
#[must_use]
pub fn skill_record_schema() -> String {
    let schema = schemars::schema_for!(SkillRecord);
    serde_json::to_string_pretty(&schema).unwrap_or_default()
}

// ============================================================================
// Version
// ============================================================================

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
