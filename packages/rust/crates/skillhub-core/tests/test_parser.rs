//! Tests for the skill parser.
//!
//! Covers list normalization, defaults, token bounds and parse failures.

use skillhub_core::{ListField, SkillError, SkillFrontmatter, parse, parse_file};
use std::fs;
use tempfile::TempDir;

/// Test parsing a skill with full frontmatter.
#[test]
fn test_parse_full_frontmatter() {
    let content = r#"---
name: "Playwright E2E"
description: "End-to-end browser testing with Playwright"
version: "2.1.0"
author: "qa-team"
license: "Apache-2.0"
tags: [testing, browser, e2e]
testingTypes:
  - e2e
  - visual
frameworks: playwright, jest
languages: typescript
domains:
  - web
agents: [claude, cursor, copilot]
minTokens: 500
maxTokens: 8000
---

# Playwright E2E

Use this skill when writing browser tests.
"#;

    let skill = parse(content).unwrap();
    let fm = &skill.frontmatter;

    assert_eq!(fm.name, "Playwright E2E");
    assert_eq!(fm.description, "End-to-end browser testing with Playwright");
    assert_eq!(fm.version, "2.1.0");
    assert_eq!(fm.author, "qa-team");
    assert_eq!(fm.license, "Apache-2.0");
    assert_eq!(fm.tags, vec!["testing", "browser", "e2e"]);
    assert_eq!(fm.testing_types, vec!["e2e", "visual"]);
    assert_eq!(fm.frameworks, vec!["playwright", "jest"]);
    assert_eq!(fm.languages, vec!["typescript"]);
    assert_eq!(fm.domains, vec!["web"]);
    assert_eq!(fm.agents, vec!["claude", "cursor", "copilot"]);
    assert_eq!(fm.min_tokens, Some(500.0));
    assert_eq!(fm.max_tokens, Some(8000.0));
    assert_eq!(
        skill.content,
        "# Playwright E2E\n\nUse this skill when writing browser tests."
    );
    assert_eq!(skill.raw, content);
    assert!(skill.explicit.license);
}

/// Comma-separated strings, blank strings, native lists and nulls all normalize.
#[test]
fn test_list_normalization_rules() {
    let skill = parse(
        "---\ntags: \"a, b, c\"\nframeworks: \"\"\nlanguages: \"   \"\nagents: [1, 2]\ndomains: ~\n---\n",
    )
    .unwrap();
    let fm = &skill.frontmatter;

    assert_eq!(fm.tags, vec!["a", "b", "c"]);
    assert!(fm.frameworks.is_empty());
    assert!(fm.languages.is_empty());
    assert_eq!(fm.agents, vec!["1", "2"]);
    assert!(fm.domains.is_empty());
    assert!(fm.testing_types.is_empty());
}

/// Non-list, non-string values produce empty lists.
#[test]
fn test_list_from_other_types_is_empty() {
    let skill = parse("---\ntags: 42\nagents: {claude: true}\nframeworks: true\n---\n").unwrap();
    for field in ListField::ALL {
        assert!(skill.frontmatter.list(field).is_empty(), "{field:?}");
    }
}

/// An empty frontmatter block yields every default.
#[test]
fn test_empty_block_defaults() {
    let skill = parse("---\n---\n").unwrap();
    let fm = &skill.frontmatter;

    assert_eq!(fm.version, "1.0.0");
    assert_eq!(fm.license, "MIT");
    assert_eq!(fm.name, "");
    assert_eq!(fm.description, "");
    assert_eq!(fm.author, "");
    assert_eq!(skill.content, "");
    assert_eq!(*fm, SkillFrontmatter::default());
}

/// Falsy scalar values fall back to defaults and are not marked explicit.
#[test]
fn test_falsy_scalars_use_defaults() {
    let skill = parse("---\nversion: \"\"\nlicense: null\nauthor: 0\n---\nbody").unwrap();
    assert_eq!(skill.frontmatter.version, "1.0.0");
    assert_eq!(skill.frontmatter.license, "MIT");
    assert_eq!(skill.frontmatter.author, "");
    assert!(!skill.explicit.version);
    assert!(!skill.explicit.license);
    assert!(!skill.explicit.author);
}

/// Numeric scalars are rendered as text.
#[test]
fn test_numeric_version_is_text() {
    let skill = parse("---\nversion: 2\n---\n").unwrap();
    assert_eq!(skill.frontmatter.version, "2");
    assert!(skill.explicit.version);
}

/// Token bounds are never coerced from strings.
#[test]
fn test_token_bounds_require_numbers() {
    let skill = parse("---\nminTokens: \"100\"\nmaxTokens: 2.5\n---\n").unwrap();
    assert_eq!(skill.frontmatter.min_tokens, None);
    assert_eq!(skill.frontmatter.max_tokens, Some(2.5));
}

/// A document without delimiters is all body.
#[test]
fn test_no_frontmatter_is_not_an_error() {
    let skill = parse("\n\n# Title\n\nText\n\n").unwrap();
    assert_eq!(skill.frontmatter, SkillFrontmatter::default());
    assert_eq!(skill.content, "# Title\n\nText");
}

/// Malformed YAML is a fatal, distinguishable error.
#[test]
fn test_malformed_yaml_is_frontmatter_error() {
    let err = parse("---\nname: test\n  bad: indentation: here\n---\nbody").unwrap_err();
    assert!(err.is_frontmatter());
    let message = err.to_string();
    assert!(message.starts_with("your skill document's frontmatter could not be parsed: "));
    assert!(message.len() > "your skill document's frontmatter could not be parsed: ".len());
}

/// Duplicate keys are rejected by the YAML decoder.
#[test]
fn test_duplicate_keys_fail() {
    let result = parse("---\nname: a\nname: b\n---\n");
    assert!(matches!(result, Err(SkillError::Frontmatter { .. })));
}

/// Reading from disk goes through the same parser.
#[test]
fn test_parse_file_reads_document() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("SKILL.md");
    fs::write(&path, "---\nname: disk\n---\nFrom disk\n").unwrap();

    let skill = parse_file(&path).unwrap();
    assert_eq!(skill.frontmatter.name, "disk");
    assert_eq!(skill.content, "From disk");
}
