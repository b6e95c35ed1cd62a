//! Tests for catalog scanning and index files.

use std::fs;
use std::path::Path;

use skillhub_core::{
    CatalogScanner, PresencePolicy, ScoringOptions, SkillError, calculate_index_diff, read_index,
    write_index,
};
use tempfile::TempDir;

fn write_skill(root: &Path, dir: &str, content: &str) {
    let skill_dir = root.join(dir);
    fs::create_dir_all(&skill_dir).unwrap();
    fs::write(skill_dir.join("SKILL.md"), content).unwrap();
}

fn seed_catalog(root: &Path) {
    write_skill(
        root,
        "writer",
        "---\nname: Writer\ndescription: Writes polished release notes\nauthor: docs\n\
         frameworks: [markdown]\n---\n\n## Usage\n\n- Write notes\n",
    );
    write_skill(root, "git/commit", "---\nname: Git Commit\n---\nCommit helper\n");
    write_skill(root, "broken", "---\nname: x\n  bad: indentation: here\n---\n");
    fs::write(root.join("README.md"), "not a skill").unwrap();
}

/// Test scanning a directory yields one record per SKILL.md.
#[test]
fn test_scan_collects_records_and_failures() {
    let temp_dir = TempDir::new().unwrap();
    seed_catalog(temp_dir.path());

    let scan = CatalogScanner::new().scan(temp_dir.path());

    assert_eq!(scan.records.len(), 2);
    assert!(scan.has_failures());
    assert_eq!(scan.failures.len(), 1);
    assert_eq!(
        scan.failures[0].path,
        Path::new("broken").join("SKILL.md").to_string_lossy()
    );
    assert!(
        scan.failures[0]
            .message
            .starts_with("your skill document's frontmatter could not be parsed")
    );

    let slugs: Vec<&str> = scan.records.iter().map(|r| r.slug.as_str()).collect();
    assert_eq!(slugs, vec!["writer", "git-commit"]);
    assert!(scan.records[0].quality.total >= scan.records[1].quality.total);
}

/// Test record fields are filled from the parsed document.
#[test]
fn test_record_fields() {
    let temp_dir = TempDir::new().unwrap();
    seed_catalog(temp_dir.path());

    let scan = CatalogScanner::new().scan(temp_dir.path());
    let writer = scan.records.iter().find(|r| r.slug == "writer").unwrap();

    assert_eq!(writer.path, Path::new("writer").join("SKILL.md").to_string_lossy());
    assert_eq!(writer.frontmatter.author, "docs");
    assert_eq!(writer.content_hash.len(), 64);
    assert_eq!(writer.content_chars, "## Usage\n\n- Write notes".len());
    assert_eq!(writer.grade, writer.quality.grade());
}

/// Test scoring options reach every record.
#[test]
fn test_scan_with_defaulted_presence() {
    let temp_dir = TempDir::new().unwrap();
    write_skill(temp_dir.path(), "bare", "---\n---\n");

    let explicit = CatalogScanner::new().scan(temp_dir.path());
    let defaulted = CatalogScanner::new()
        .with_options(ScoringOptions::new().with_presence(PresencePolicy::Defaulted))
        .scan(temp_dir.path());

    assert_eq!(explicit.records[0].quality.schema, 0);
    assert_eq!(defaulted.records[0].quality.schema, 5);
}

/// Test max depth limits discovery.
#[test]
fn test_max_depth_limits_discovery() {
    let temp_dir = TempDir::new().unwrap();
    seed_catalog(temp_dir.path());

    let shallow = CatalogScanner::new().with_max_depth(Some(2));
    let paths = shallow.discover(temp_dir.path());
    assert_eq!(paths.len(), 2);
    assert!(paths.iter().all(|p| !p.to_string_lossy().contains("commit")));
}

/// Test a custom document name is honored.
#[test]
fn test_custom_skill_file_name() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("skill.markdown"), "---\nname: Custom\n---\n").unwrap();
    write_skill(temp_dir.path(), "ignored", "---\nname: Ignored\n---\n");

    let scan = CatalogScanner::new()
        .with_skill_file_name("skill.markdown")
        .scan(temp_dir.path());
    assert_eq!(scan.records.len(), 1);
    assert_eq!(scan.records[0].slug, "custom");
}

/// Test duplicate names get distinct slugs.
#[test]
fn test_duplicate_slugs_are_suffixed() {
    let temp_dir = TempDir::new().unwrap();
    write_skill(temp_dir.path(), "a", "---\nname: Same\n---\n");
    write_skill(temp_dir.path(), "b", "---\nname: Same\n---\n");

    let scan = CatalogScanner::new().scan(temp_dir.path());
    let mut slugs: Vec<&str> = scan.records.iter().map(|r| r.slug.as_str()).collect();
    slugs.sort_unstable();
    assert_eq!(slugs, vec!["same", "same-2"]);

    let second = scan.records.iter().find(|r| r.slug == "same-2").unwrap();
    assert!(second.path.starts_with('b'));
}

/// Test a suffix never lands on a slug another skill already owns.
#[test]
fn test_suffixed_slug_never_collides() {
    let temp_dir = TempDir::new().unwrap();
    write_skill(temp_dir.path(), "a", "---\nname: Same\n---\n");
    write_skill(temp_dir.path(), "b", "---\nname: Same\n---\n");
    write_skill(temp_dir.path(), "c", "---\nname: Same 2\n---\n");

    let scan = CatalogScanner::new().scan(temp_dir.path());
    let mut slugs: Vec<&str> = scan.records.iter().map(|r| r.slug.as_str()).collect();
    slugs.sort_unstable();
    assert_eq!(slugs, vec!["same", "same-2", "same-3"]);

    let slug_of = |dir: char| {
        scan.records
            .iter()
            .find(|r| r.path.starts_with(dir))
            .map(|r| r.slug.clone())
            .unwrap()
    };
    assert_eq!(slug_of('a'), "same");
    assert_eq!(slug_of('b'), "same-3");
    assert_eq!(slug_of('c'), "same-2");

    let diff = calculate_index_diff(scan.records.clone(), &scan.records);
    assert!(!diff.has_changes());
    assert_eq!(diff.unchanged_count, 3);
}

/// Test a missing directory is an empty scan.
#[test]
fn test_missing_root_is_empty() {
    let temp_dir = TempDir::new().unwrap();
    let scan = CatalogScanner::new().scan(&temp_dir.path().join("nope"));
    assert!(scan.records.is_empty());
    assert!(!scan.has_failures());
}

/// Test writing then reading an index file.
#[test]
fn test_index_file_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    seed_catalog(temp_dir.path());
    let scan = CatalogScanner::new().scan(temp_dir.path());

    let index_path = temp_dir.path().join("out").join("index.json");
    write_index(&index_path, &scan.records).unwrap();

    let raw = fs::read_to_string(&index_path).unwrap();
    assert!(raw.contains("\"contentHash\""));
    assert!(raw.contains("\"testingTypes\""));

    let loaded = read_index(&index_path).unwrap();
    assert_eq!(loaded, scan.records);
}

/// Test reading a corrupt index reports the path.
#[test]
fn test_read_corrupt_index() {
    let temp_dir = TempDir::new().unwrap();
    let index_path = temp_dir.path().join("index.json");
    fs::write(&index_path, "{not json").unwrap();

    let err = read_index(&index_path).unwrap_err();
    assert!(matches!(err, SkillError::Index { .. }));
    assert!(err.to_string().contains("index.json"));

    let missing = read_index(&temp_dir.path().join("missing.json")).unwrap_err();
    assert!(matches!(missing, SkillError::Io { .. }));
}

/// Test diffing a rescan against a stored index.
#[test]
fn test_rescan_diff() {
    let temp_dir = TempDir::new().unwrap();
    seed_catalog(temp_dir.path());
    let before = CatalogScanner::new().scan(temp_dir.path()).records;

    write_skill(temp_dir.path(), "writer", "---\nname: Writer\n---\nRewritten\n");
    fs::remove_dir_all(temp_dir.path().join("git")).unwrap();
    write_skill(temp_dir.path(), "lint", "---\nname: Lint\n---\nLint helper\n");

    let after = CatalogScanner::new().scan(temp_dir.path()).records;
    let diff = calculate_index_diff(after, &before);

    assert!(diff.has_changes());
    assert_eq!(diff.added.len(), 1);
    assert_eq!(diff.added[0].slug, "lint");
    assert_eq!(diff.updated.len(), 1);
    assert_eq!(diff.updated[0].slug, "writer");
    assert_eq!(diff.removed, vec!["git-commit".to_string()]);
    assert_eq!(diff.unchanged_count, 0);
    assert_eq!(diff.change_count(), 3);

    let json = serde_json::to_value(&diff).unwrap();
    assert_eq!(json["unchangedCount"], 0);
    assert_eq!(json["removed"][0], "git-commit");
}

/// Test an unchanged catalog has no diff.
#[test]
fn test_unchanged_rescan_has_no_changes() {
    let temp_dir = TempDir::new().unwrap();
    seed_catalog(temp_dir.path());
    let first = CatalogScanner::new().scan(temp_dir.path()).records;
    let second = CatalogScanner::new().scan(temp_dir.path()).records;

    let diff = calculate_index_diff(second, &first);
    assert!(!diff.has_changes());
    assert_eq!(diff.unchanged_count, 2);
}
