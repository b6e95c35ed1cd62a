//! Quality Score - Point-based rating of a parsed skill.
//!
//! Four independently capped dimensions:
//!
//! | Dimension     | Cap | Source                                   |
//! |---------------|-----|------------------------------------------|
//! | schema        | 30  | scalar fields and key categorization     |
//! | documentation | 30  | body length and markdown structure       |
//! | completeness  | 25  | breadth of tags, testing types, agents   |
//! | freshness     | 15  | constant until timestamps are available  |
//!
//! The caps and the final `min(100, ..)` stay in place even where the
//! current weights cannot reach them.

use std::cmp::Ordering;
use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::policy::{PresencePolicy, ScoringOptions};
use crate::skill::{ParsedSkill, ScalarField};

/// Cap of the schema dimension.
pub const SCHEMA_MAX: u32 = 30;
/// Cap of the documentation dimension.
pub const DOCUMENTATION_MAX: u32 = 30;
/// Cap of the completeness dimension.
pub const COMPLETENESS_MAX: u32 = 25;
/// Freshness awarded to every skill.
pub const FRESHNESS_PLACEHOLDER: u32 = 15;
/// Cap of the total score.
pub const TOTAL_MAX: u32 = 100;

const MIN_DESCRIPTION_CHARS: usize = 20;
const BODY_LENGTH_STEPS: [usize; 3] = [100, 500, 1000];

// =============================================================================
// Quality Breakdown
// =============================================================================

/// Per-dimension score of a skill plus the capped total.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct QualityBreakdown {
    /// Frontmatter field coverage, 0..=30.
    pub schema: u32,
    /// Body richness, 0..=30.
    pub documentation: u32,
    /// Categorization breadth, 0..=25.
    pub completeness: u32,
    /// Age-based score, currently always 15.
    pub freshness: u32,
    /// `min(100, sum of dimensions)`.
    pub total: u32,
}

impl QualityBreakdown {
    /// Combine dimension scores, applying the total cap.
    #[must_use]
    pub fn from_dimensions(
        schema: u32,
        documentation: u32,
        completeness: u32,
        freshness: u32,
    ) -> Self {
        Self {
            schema,
            documentation,
            completeness,
            freshness,
            total: schema
                .saturating_add(documentation)
                .saturating_add(completeness)
                .saturating_add(freshness)
                .min(TOTAL_MAX),
        }
    }

    /// Letter grade for the total.
    #[must_use]
    pub fn grade(&self) -> QualityGrade {
        QualityGrade::from_total(self.total)
    }
}

impl Ord for QualityBreakdown {
    fn cmp(&self, other: &Self) -> Ordering {
        self.total
            .cmp(&other.total)
            .then(self.schema.cmp(&other.schema))
            .then(self.documentation.cmp(&other.documentation))
            .then(self.completeness.cmp(&other.completeness))
            .then(self.freshness.cmp(&other.freshness))
    }
}

impl PartialOrd for QualityBreakdown {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Display grade derived from the total score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum QualityGrade {
    /// 85 and above.
    A,
    /// 70..85
    B,
    /// 50..70
    C,
    /// Below 50.
    D,
}

impl QualityGrade {
    /// Letter grade for a total score.
    #[must_use]
    pub fn from_total(total: u32) -> Self {
        match total {
            85.. => Self::A,
            70..=84 => Self::B,
            50..=69 => Self::C,
            _ => Self::D,
        }
    }
}

impl fmt::Display for QualityGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
        };
        f.pad(letter)
    }
}

// =============================================================================
// Scoring
// =============================================================================

/// Score a skill with default options.
#[must_use]
pub fn calculate_quality_score(skill: &ParsedSkill) -> QualityBreakdown {
    calculate_quality_score_with(skill, &ScoringOptions::default())
}

/// Score a skill.
#[must_use]
pub fn calculate_quality_score_with(
    skill: &ParsedSkill,
    options: &ScoringOptions,
) -> QualityBreakdown {
    QualityBreakdown::from_dimensions(
        schema_score(skill, options.presence),
        documentation_score(&skill.content),
        completeness_score(skill),
        freshness_score(skill),
    )
}

/// Frontmatter field coverage.
#[must_use]
pub fn schema_score(skill: &ParsedSkill, presence: PresencePolicy) -> u32 {
    let fm = &skill.frontmatter;
    let present = |field: ScalarField| match presence {
        PresencePolicy::Explicit => skill.explicit.contains(field),
        PresencePolicy::Defaulted => !fm.scalar(field).is_empty(),
    };

    let mut score = 0;
    if present(ScalarField::Name) {
        score += 5;
    }
    if present(ScalarField::Description)
        && fm.description.chars().count() >= MIN_DESCRIPTION_CHARS
    {
        score += 5;
    }
    if present(ScalarField::Version) {
        score += 3;
    }
    if present(ScalarField::Author) {
        score += 3;
    }
    if present(ScalarField::License) {
        score += 2;
    }
    if !fm.testing_types.is_empty() {
        score += 4;
    }
    if !fm.frameworks.is_empty() {
        score += 3;
    }
    if !fm.languages.is_empty() {
        score += 3;
    }
    if !fm.domains.is_empty() {
        score += 2;
    }
    score.min(SCHEMA_MAX)
}

/// Body length and markdown structure.
#[must_use]
pub fn documentation_score(content: &str) -> u32 {
    let chars = content.chars().count();

    let mut score = 0;
    for step in BODY_LENGTH_STEPS {
        if chars > step {
            score += 5;
        }
    }
    if content.contains("## ") || content.contains("### ") {
        score += 5;
    }
    if content.contains("```") {
        score += 5;
    }
    if content.contains("- ") || content.contains("* ") {
        score += 3;
    }
    score.min(DOCUMENTATION_MAX)
}

/// Categorization breadth.
#[must_use]
pub fn completeness_score(skill: &ParsedSkill) -> u32 {
    let fm = &skill.frontmatter;

    let mut score = 0;
    if fm.tags.len() >= 3 {
        score += 5;
    }
    if !fm.testing_types.is_empty() {
        score += 5;
    }
    if !fm.frameworks.is_empty() {
        score += 5;
    }
    if fm.agents.len() >= 3 {
        score += 5;
    }
    if fm.agents.len() >= 10 {
        score += 5;
    }
    score.min(COMPLETENESS_MAX)
}

/// Freshness of the document.
///
/// Constant until creation/update timestamps reach the scorer.
#[must_use]
pub fn freshness_score(_skill: &ParsedSkill) -> u32 {
    FRESHNESS_PLACEHOLDER
}
