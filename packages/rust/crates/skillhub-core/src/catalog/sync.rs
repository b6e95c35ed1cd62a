//! Sync Module - Difference detection between a fresh scan and a stored index.
//!
//! ```text
//! scanned records (CatalogScanner) ──┐
//!                                    ├──> IndexDiff ──> re-persist changed rows only
//! existing records (index file) ─────┘
//! ```
//!
//! Records are matched by slug; `content_hash` decides whether a matched
//! record changed.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use super::record::SkillRecord;

/// Changes needed to bring an index up to date.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexDiff {
    /// Skills not present in the existing index.
    pub added: Vec<SkillRecord>,
    /// Skills whose document changed.
    pub updated: Vec<SkillRecord>,
    /// Slugs that disappeared from the catalog.
    pub removed: Vec<String>,
    /// Skills with an identical content hash.
    pub unchanged_count: usize,
}

impl IndexDiff {
    /// Check if any changes need to be applied.
    #[must_use]
    pub fn has_changes(&self) -> bool {
        !self.added.is_empty() || !self.updated.is_empty() || !self.removed.is_empty()
    }

    /// Total count of changed items.
    #[must_use]
    pub fn change_count(&self) -> usize {
        self.added.len() + self.updated.len() + self.removed.len()
    }
}

/// Compare scanned records against an existing index.
#[must_use]
pub fn calculate_index_diff(scanned: Vec<SkillRecord>, existing: &[SkillRecord]) -> IndexDiff {
    let existing_by_slug: HashMap<&str, &SkillRecord> = existing
        .iter()
        .map(|record| (record.slug.as_str(), record))
        .collect();

    let mut diff = IndexDiff::default();
    let mut seen: HashSet<String> = HashSet::with_capacity(scanned.len());

    for record in scanned {
        seen.insert(record.slug.clone());
        match existing_by_slug.get(record.slug.as_str()) {
            None => diff.added.push(record),
            Some(previous) if previous.content_hash == record.content_hash => {
                diff.unchanged_count += 1;
            }
            Some(_) => diff.updated.push(record),
        }
    }

    diff.removed = existing
        .iter()
        .filter(|record| !seen.contains(&record.slug))
        .map(|record| record.slug.clone())
        .collect();
    diff.removed.sort();

    log::debug!(
        "Index diff: {} added, {} updated, {} removed, {} unchanged",
        diff.added.len(),
        diff.updated.len(),
        diff.removed.len(),
        diff.unchanged_count
    );
    diff
}
