//! Catalog Scanner - Parses and scores every SKILL.md under a directory.
//!
//! Discovery walks the tree with `walkdir`; parsing and scoring run in
//! parallel with `rayon` since every document is independent.
//!
//! # Example
//!
//! ```ignore
//! use skillhub_core::CatalogScanner;
//!
//! let scan = CatalogScanner::new().scan(Path::new("assets/skills"));
//! for record in &scan.records {
//!     println!("{:>3}  {}", record.quality.total, record.slug);
//! }
//! ```

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use walkdir::WalkDir;

use super::record::{SkillRecord, sort_leaderboard};
use crate::error::{Result, SkillError};
use crate::quality::ScoringOptions;
use crate::skill::parse_file;

/// Default skill document file name.
pub const DEFAULT_SKILL_FILE_NAME: &str = "SKILL.md";

/// A document that could not be indexed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanFailure {
    /// Document path relative to the catalog root.
    pub path: String,
    /// Human-readable reason.
    pub message: String,
}

/// Outcome of a catalog scan.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CatalogScan {
    /// Indexed skills, best first.
    pub records: Vec<SkillRecord>,
    /// Documents that failed to parse or read.
    pub failures: Vec<ScanFailure>,
}

impl CatalogScan {
    /// True when at least one document failed.
    #[must_use]
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }
}

/// Catalog Scanner - Builds `SkillRecord`s for a directory of skills.
#[derive(Debug, Clone)]
pub struct CatalogScanner {
    skill_file_name: String,
    max_depth: Option<usize>,
    options: ScoringOptions,
}

impl Default for CatalogScanner {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogScanner {
    /// Scanner looking for `SKILL.md` at any depth with default scoring.
    #[must_use]
    pub fn new() -> Self {
        Self {
            skill_file_name: DEFAULT_SKILL_FILE_NAME.to_string(),
            max_depth: None,
            options: ScoringOptions::default(),
        }
    }

    /// Look for documents with another file name.
    #[must_use]
    pub fn with_skill_file_name(mut self, name: impl Into<String>) -> Self {
        self.skill_file_name = name.into();
        self
    }

    /// Limit directory depth (`None` = unlimited).
    #[must_use]
    pub fn with_max_depth(mut self, depth: Option<usize>) -> Self {
        self.max_depth = depth;
        self
    }

    /// Score records with these options.
    #[must_use]
    pub fn with_options(mut self, options: ScoringOptions) -> Self {
        self.options = options;
        self
    }

    /// Find skill documents under `root`, sorted by path.
    #[must_use]
    pub fn discover(&self, root: &Path) -> Vec<PathBuf> {
        let mut walker = WalkDir::new(root).follow_links(false);
        if let Some(depth) = self.max_depth {
            walker = walker.max_depth(depth);
        }

        let mut paths: Vec<PathBuf> = walker
            .into_iter()
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(error) => {
                    log::warn!("Skipping unreadable catalog entry: {error}");
                    None
                }
            })
            .filter(|entry| entry.file_type().is_file())
            .filter(|entry| entry.file_name() == self.skill_file_name.as_str())
            .map(walkdir::DirEntry::into_path)
            .collect();
        paths.sort();
        paths
    }

    /// Parse and score a single document.
    ///
    /// # Errors
    ///
    /// Returns the read or frontmatter error of the document.
    pub fn scan_file(&self, root: &Path, path: &Path) -> Result<SkillRecord> {
        let parsed = parse_file(path)?;
        Ok(SkillRecord::from_parsed(
            &parsed,
            relative_path(root, path),
            &self.options,
        ))
    }

    /// Scan every skill under `root`.
    ///
    /// Failing documents are collected in `failures`; they never abort the
    /// scan. A missing root gives an empty result.
    #[must_use]
    pub fn scan(&self, root: &Path) -> CatalogScan {
        if !root.exists() {
            log::warn!("Skills catalog directory not found: {}", root.display());
            return CatalogScan::default();
        }

        let paths = self.discover(root);
        let outcomes: Vec<(PathBuf, Result<SkillRecord>)> = paths
            .into_par_iter()
            .map(|path| {
                let outcome = self.scan_file(root, &path);
                (path, outcome)
            })
            .collect();

        let mut scan = CatalogScan::default();
        for (path, outcome) in outcomes {
            match outcome {
                Ok(record) => scan.records.push(record),
                Err(error) => {
                    log::warn!("Failed to index {}: {error}", path.display());
                    scan.failures.push(ScanFailure {
                        path: relative_path(root, &path),
                        message: error.to_string(),
                    });
                }
            }
        }

        assign_unique_slugs(&mut scan.records);
        sort_leaderboard(&mut scan.records);
        log::info!(
            "Scanned {} skills from {} ({} failed)",
            scan.records.len(),
            root.display(),
            scan.failures.len()
        );
        scan
    }
}

/// Give every record a distinct slug, in path order.
///
/// The first record keeps a contested slug; later ones get the lowest `-N`
/// suffix (N >= 2) that no record in the scan uses as its own slug.
fn assign_unique_slugs(records: &mut [SkillRecord]) {
    let mut taken: HashSet<String> = records.iter().map(|record| record.slug.clone()).collect();
    let mut issued: HashSet<String> = HashSet::with_capacity(records.len());

    for record in records.iter_mut() {
        if issued.insert(record.slug.clone()) {
            continue;
        }
        let mut suffix = 2;
        let mut candidate = format!("{}-{suffix}", record.slug);
        while taken.contains(&candidate) {
            suffix += 1;
            candidate = format!("{}-{suffix}", record.slug);
        }
        log::debug!("Slug '{}' already used; {} becomes '{candidate}'", record.slug, record.path);
        taken.insert(candidate.clone());
        issued.insert(candidate.clone());
        record.slug = candidate;
    }
}

fn relative_path(root: &Path, path: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .to_string_lossy()
        .into_owned()
}

// =============================================================================
// Index File
// =============================================================================

/// Write records as a pretty JSON index, creating parent directories.
///
/// # Errors
///
/// Returns [`SkillError::Io`] or [`SkillError::Index`] when writing fails.
pub fn write_index(path: &Path, records: &[SkillRecord]) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|e| SkillError::io(parent, e))?;
    }

    let json = serde_json::to_string_pretty(records).map_err(|source| SkillError::Index {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, json).map_err(|e| SkillError::io(path, e))?;

    log::info!(
        "Wrote skill index with {} skills to {}",
        records.len(),
        path.display()
    );
    Ok(())
}

/// Read a JSON index written by [`write_index`].
///
/// # Errors
///
/// Returns [`SkillError::Io`] or [`SkillError::Index`] when reading fails.
pub fn read_index(path: &Path) -> Result<Vec<SkillRecord>> {
    let raw = fs::read_to_string(path).map_err(|e| SkillError::io(path, e))?;
    serde_json::from_str(&raw).map_err(|source| SkillError::Index {
        path: path.to_path_buf(),
        source,
    })
}
