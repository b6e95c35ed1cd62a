//! Skill Record - The derived row stored for each published skill.
//!
//! A record is what the publishing flow keeps after parse → score: the
//! normalized frontmatter, the quality breakdown, and a content hash used
//! to skip re-indexing unchanged documents.

use std::path::Path;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::quality::{
    QualityBreakdown, QualityGrade, ScoringOptions, calculate_quality_score_with,
};
use crate::skill::{ParsedSkill, SkillFrontmatter};

/// One scored skill in a catalog index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SkillRecord {
    /// URL-safe identifier.
    pub slug: String,
    /// Document path relative to the catalog root.
    pub path: String,
    /// Normalized frontmatter.
    pub frontmatter: SkillFrontmatter,
    /// Quality breakdown at indexing time.
    pub quality: QualityBreakdown,
    /// Letter grade of `quality.total`.
    pub grade: QualityGrade,
    /// SHA-256 (hex) of the raw document.
    pub content_hash: String,
    /// Body length in characters.
    pub content_chars: usize,
}

impl SkillRecord {
    /// Score a parsed skill and build its record.
    #[must_use]
    pub fn from_parsed(
        parsed: &ParsedSkill,
        path: impl Into<String>,
        options: &ScoringOptions,
    ) -> Self {
        let path = path.into();
        let quality = calculate_quality_score_with(parsed, options);
        let content_hash = content_hash(&parsed.raw);

        let mut slug = slugify(&parsed.frontmatter.name);
        if slug.is_empty() {
            slug = Path::new(&path)
                .parent()
                .and_then(Path::file_name)
                .map(|dir| slugify(&dir.to_string_lossy()))
                .unwrap_or_default();
        }
        if slug.is_empty() {
            slug = format!("skill-{}", &content_hash[..12]);
        }

        Self {
            slug,
            path,
            frontmatter: parsed.frontmatter.clone(),
            quality,
            grade: quality.grade(),
            content_hash,
            content_chars: parsed.content_chars(),
        }
    }
}

/// Lowercase ASCII slug: alphanumerics kept, every other run collapsed to `-`.
///
/// ```
/// use skillhub_core::slugify;
///
/// assert_eq!(slugify("Playwright E2E Testing!"), "playwright-e2e-testing");
/// assert_eq!(slugify("  --  "), "");
/// ```
#[must_use]
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_dash = false;
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }
    slug
}

/// SHA-256 of a document as lowercase hex.
#[must_use]
pub fn content_hash(raw: &str) -> String {
    hex::encode(Sha256::digest(raw.as_bytes()))
}

/// Order records best-first: total score descending, then slug ascending.
pub fn sort_leaderboard(records: &mut [SkillRecord]) {
    records.sort_by(|a, b| {
        b.quality
            .total
            .cmp(&a.quality.total)
            .then_with(|| a.slug.cmp(&b.slug))
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::skill::parse;

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Writer"), "writer");
        assert_eq!(slugify("git  commit__helper"), "git-commit-helper");
        assert_eq!(slugify("-Lead and trail-"), "lead-and-trail");
        assert_eq!(slugify("日本語"), "");
    }

    #[test]
    fn test_content_hash_is_stable() {
        assert_eq!(content_hash("abc"), content_hash("abc"));
        assert_ne!(content_hash("abc"), content_hash("abd"));
        assert_eq!(content_hash("").len(), 64);
    }

    #[test]
    fn test_record_slug_falls_back_to_directory() {
        let parsed = parse("---\ndescription: no name here\n---\nbody").unwrap();
        let record = SkillRecord::from_parsed(
            &parsed,
            "Docker Helper/SKILL.md",
            &ScoringOptions::default(),
        );
        assert_eq!(record.slug, "docker-helper");
    }

    fn record_with(slug: &str, quality: QualityBreakdown) -> SkillRecord {
        SkillRecord {
            slug: slug.to_string(),
            path: format!("{slug}/SKILL.md"),
            frontmatter: SkillFrontmatter::default(),
            quality,
            grade: quality.grade(),
            content_hash: content_hash(slug),
            content_chars: 0,
        }
    }

    #[test]
    fn test_leaderboard_ties_break_on_slug() {
        let mut records = vec![
            record_with("zzz", QualityBreakdown::from_dimensions(7, 3, 0, 15)),
            record_with("aaa", QualityBreakdown::from_dimensions(5, 5, 0, 15)),
            record_with("top", QualityBreakdown::from_dimensions(10, 10, 10, 15)),
        ];
        sort_leaderboard(&mut records);

        let order: Vec<&str> = records.iter().map(|r| r.slug.as_str()).collect();
        assert_eq!(order, vec!["top", "aaa", "zzz"]);
        assert_eq!(records[1].quality.total, records[2].quality.total);
    }

    #[test]
    fn test_record_slug_falls_back_to_hash() {
        let parsed = parse("body only").unwrap();
        let record = SkillRecord::from_parsed(&parsed, "SKILL.md", &ScoringOptions::default());
        assert!(record.slug.starts_with("skill-"));
        assert_eq!(record.slug.len(), "skill-".len() + 12);
    }
}
