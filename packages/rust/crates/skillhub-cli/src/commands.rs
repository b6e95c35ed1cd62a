//! Command implementations.
//!
//! Each command returns the text it would print so the binary stays a thin
//! dispatcher and the output can be checked in tests.

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use skillhub_core::{
    COMPLETENESS_MAX, CatalogScan, CatalogScanner, DOCUMENTATION_MAX, ExplicitFields,
    FRESHNESS_PLACEHOLDER, IndexDiff, QualityBreakdown, QualityGrade, SCHEMA_MAX, ScoringOptions,
    SkillFrontmatter, TOTAL_MAX, calculate_index_diff, calculate_quality_score_with, parse_file,
    read_index, serialize, write_index,
};

/// How results are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

// =============================================================================
// parse
// =============================================================================

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ParseReport<'a> {
    frontmatter: &'a SkillFrontmatter,
    content: &'a str,
    explicit: &'a ExplicitFields,
    #[serde(skip_serializing_if = "Option::is_none")]
    raw: Option<&'a str>,
}

/// Parse a document and render it as JSON.
pub fn parse_command(path: &Path, include_raw: bool) -> Result<String> {
    let skill = parse_file(path)?;
    let report = ParseReport {
        frontmatter: &skill.frontmatter,
        content: &skill.content,
        explicit: &skill.explicit,
        raw: include_raw.then_some(skill.raw.as_str()),
    };
    serde_json::to_string_pretty(&report).context("failed to encode parsed skill")
}

// =============================================================================
// score
// =============================================================================

#[derive(Serialize)]
struct ScoreReport {
    path: String,
    #[serde(flatten)]
    quality: QualityBreakdown,
    grade: QualityGrade,
}

/// Score a single document.
pub fn score_command(
    path: &Path,
    options: &ScoringOptions,
    format: OutputFormat,
) -> Result<String> {
    let skill = parse_file(path)?;
    let quality = calculate_quality_score_with(&skill, options);
    tracing::debug!(path = %path.display(), total = quality.total, "scored skill");

    match format {
        OutputFormat::Json => {
            let report = ScoreReport {
                path: path.display().to_string(),
                quality,
                grade: quality.grade(),
            };
            serde_json::to_string_pretty(&report).context("failed to encode quality score")
        }
        OutputFormat::Text => Ok(render_breakdown(&quality)),
    }
}

fn render_breakdown(quality: &QualityBreakdown) -> String {
    let rows = [
        ("schema", quality.schema, SCHEMA_MAX),
        ("documentation", quality.documentation, DOCUMENTATION_MAX),
        ("completeness", quality.completeness, COMPLETENESS_MAX),
        ("freshness", quality.freshness, FRESHNESS_PLACEHOLDER),
    ];
    let mut out = String::new();
    for (label, value, max) in rows {
        let _ = writeln!(out, "{label:<14} {value:>3}/{max}");
    }
    let _ = write!(
        out,
        "{:<14} {:>3}/{TOTAL_MAX}  grade {}",
        "total",
        quality.total,
        quality.grade()
    );
    out
}

// =============================================================================
// format
// =============================================================================

/// Render the canonical form of a document, optionally rewriting it.
pub fn format_command(path: &Path, write: bool) -> Result<String> {
    let skill = parse_file(path)?;
    let canonical = serialize(&skill.frontmatter, &skill.content);
    if write {
        let dropped = dropped_on_format(&skill.frontmatter);
        if !dropped.is_empty() {
            tracing::warn!(
                path = %path.display(),
                fields = %dropped.join(", "),
                "canonical form has no token bounds; rewriting drops them"
            );
        }
        if canonical == skill.raw {
            tracing::debug!(path = %path.display(), "already canonical");
        } else {
            fs::write(path, &canonical)
                .with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!(path = %path.display(), "rewrote skill document");
        }
    }
    Ok(canonical)
}

/// Parsed fields the canonical form does not carry.
fn dropped_on_format(frontmatter: &SkillFrontmatter) -> Vec<&'static str> {
    let mut dropped = Vec::new();
    if frontmatter.min_tokens.is_some() {
        dropped.push("minTokens");
    }
    if frontmatter.max_tokens.is_some() {
        dropped.push("maxTokens");
    }
    dropped
}

// =============================================================================
// scan
// =============================================================================

/// Options of the `scan` command.
#[derive(Debug, Clone, Default)]
pub struct ScanRequest {
    pub format: OutputFormat,
    /// Write the JSON index here.
    pub output: Option<PathBuf>,
    /// Previous index to diff against.
    pub existing: Option<PathBuf>,
}

#[derive(Serialize)]
struct ScanReport<'a> {
    #[serde(flatten)]
    scan: &'a CatalogScan,
    #[serde(skip_serializing_if = "Option::is_none")]
    diff: Option<&'a IndexDiff>,
}

/// Scan a catalog directory and render the leaderboard.
pub fn scan_command(
    root: &Path,
    scanner: &CatalogScanner,
    request: &ScanRequest,
) -> Result<String> {
    if !root.is_dir() {
        anyhow::bail!("catalog directory not found: {}", root.display());
    }
    let scan = scanner.scan(root);

    let diff = match &request.existing {
        Some(existing_path) => {
            let existing = read_index(existing_path).with_context(|| {
                format!("failed to load existing index {}", existing_path.display())
            })?;
            Some(calculate_index_diff(scan.records.clone(), &existing))
        }
        None => None,
    };

    if let Some(output) = &request.output {
        write_index(output, &scan.records)?;
    }

    match request.format {
        OutputFormat::Json => serde_json::to_string_pretty(&ScanReport {
            scan: &scan,
            diff: diff.as_ref(),
        })
        .context("failed to encode scan report"),
        OutputFormat::Text => Ok(render_leaderboard(&scan, diff.as_ref())),
    }
}

fn render_leaderboard(scan: &CatalogScan, diff: Option<&IndexDiff>) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:>4}  {:>5}  {:<5}  {:<32}  path",
        "rank", "score", "grade", "slug"
    );
    for (rank, record) in scan.records.iter().enumerate() {
        let _ = writeln!(
            out,
            "{:>4}  {:>5}  {:<5}  {:<32}  {}",
            rank + 1,
            record.quality.total,
            record.grade,
            record.slug,
            record.path
        );
    }
    for failure in &scan.failures {
        let _ = writeln!(out, "failed  {}: {}", failure.path, failure.message);
    }
    let _ = write!(
        out,
        "{} skills indexed, {} failed",
        scan.records.len(),
        scan.failures.len()
    );
    if let Some(diff) = diff {
        let _ = write!(
            out,
            "\n{} added, {} updated, {} removed, {} unchanged",
            diff.added.len(),
            diff.updated.len(),
            diff.removed.len(),
            diff.unchanged_count
        );
        for slug in &diff.removed {
            let _ = write!(out, "\n  - {slug}");
        }
    }
    out
}

// =============================================================================
// schema
// =============================================================================

/// JSON Schemas for the frontmatter, the quality breakdown and index records.
pub fn schema_command() -> Result<String> {
    let schemas = serde_json::json!({
        "SkillFrontmatter": decode_schema(&skillhub_core::skill_frontmatter_schema())?,
        "QualityBreakdown": decode_schema(&skillhub_core::quality_breakdown_schema())?,
        "SkillRecord": decode_schema(&skillhub_core::skill_record_schema())?,
    });
    serde_json::to_string_pretty(&schemas).context("failed to encode schemas")
}

fn decode_schema(raw: &str) -> Result<serde_json::Value> {
    serde_json::from_str(raw).context("generated schema is not valid JSON")
}
