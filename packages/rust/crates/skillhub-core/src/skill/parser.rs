//! Skill Parser - Turns SKILL.md text into a `ParsedSkill`.
//!
//! Missing fields are never an error: scalars fall back to their defaults
//! and lists to empty vectors. Only malformed YAML fails the parse.
//!
//! # Example
//!
//! ```
//! use skillhub_core::parse;
//!
//! let skill = parse("---\nname: \"Foo\"\ntags: a, b\n---\n\nHello").unwrap();
//! assert_eq!(skill.frontmatter.name, "Foo");
//! assert_eq!(skill.frontmatter.tags, vec!["a", "b"]);
//! assert_eq!(skill.frontmatter.version, "1.0.0");
//! assert_eq!(skill.content, "Hello");
//! ```

use std::fs;
use std::path::Path;

use serde_yaml::Mapping;

use super::normalize::{normalize_list, normalize_number, normalize_scalar};
use super::types::{ExplicitFields, ListField, ParsedSkill, ScalarField, SkillFrontmatter};
use crate::error::{Result, SkillError};
use crate::frontmatter::{parse_matter, split_frontmatter};

/// Parse a skill document.
///
/// `raw` is kept verbatim on the result; `content` is the trimmed body.
///
/// # Errors
///
/// Returns [`SkillError::Frontmatter`] when the frontmatter block is not valid YAML.
pub fn parse(raw: &str) -> Result<ParsedSkill> {
    let split = split_frontmatter(raw);
    let mapping = match split.matter {
        Some(matter) => parse_matter(matter)?,
        None => Mapping::new(),
    };

    let (frontmatter, explicit) = frontmatter_from_mapping(&mapping);
    let content = split.body.trim().to_string();

    log::debug!(
        "Parsed skill '{}' (v{}): {} body bytes, {} tags",
        frontmatter.name,
        frontmatter.version,
        content.len(),
        frontmatter.tags.len()
    );

    Ok(ParsedSkill {
        frontmatter,
        content,
        raw: raw.to_string(),
        explicit,
    })
}

/// Read and parse a skill document from disk.
///
/// # Errors
///
/// Returns [`SkillError::Io`] when the file cannot be read, or
/// [`SkillError::Frontmatter`] when its frontmatter is malformed.
pub fn parse_file(path: &Path) -> Result<ParsedSkill> {
    let raw = fs::read_to_string(path).map_err(|e| SkillError::io(path, e))?;
    parse(&raw)
}

/// Build normalized frontmatter from a decoded YAML mapping.
///
/// Also reports which scalar fields were actually given.
#[must_use]
pub fn frontmatter_from_mapping(mapping: &Mapping) -> (SkillFrontmatter, ExplicitFields) {
    let mut frontmatter = SkillFrontmatter::default();
    let mut explicit = ExplicitFields::default();

    for field in ScalarField::ALL {
        if let Some(value) = normalize_scalar(mapping.get(field.key())) {
            *frontmatter.scalar_mut(field) = value;
            explicit.insert(field);
        }
    }

    for field in ListField::ALL {
        *frontmatter.list_mut(field) = normalize_list(mapping.get(field.key()));
    }

    frontmatter.min_tokens = normalize_number(mapping.get("minTokens"));
    frontmatter.max_tokens = normalize_number(mapping.get("maxTokens"));

    (frontmatter, explicit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_name_only() {
        let skill = parse("---\nname: \"Foo\"\n---\n\nHello").unwrap();
        assert_eq!(skill.frontmatter.name, "Foo");
        assert_eq!(skill.frontmatter.description, "");
        assert_eq!(skill.frontmatter.version, "1.0.0");
        assert_eq!(skill.frontmatter.author, "");
        assert_eq!(skill.frontmatter.license, "MIT");
        assert!(skill.frontmatter.tags.is_empty());
        assert_eq!(skill.content, "Hello");
        assert!(skill.explicit.name);
        assert!(!skill.explicit.version);
    }

    #[test]
    fn test_parse_without_frontmatter() {
        let raw = "  # Writer Skill\n\nJust a skill without frontmatter.\n";
        let skill = parse(raw).unwrap();
        assert_eq!(skill.frontmatter, SkillFrontmatter::default());
        assert_eq!(skill.content, "# Writer Skill\n\nJust a skill without frontmatter.");
        assert_eq!(skill.raw, raw);
    }

    #[test]
    fn test_parse_token_bounds() {
        let skill = parse("---\nminTokens: 200\nmaxTokens: \"4000\"\n---\n").unwrap();
        assert_eq!(skill.frontmatter.min_tokens, Some(200.0));
        assert_eq!(skill.frontmatter.max_tokens, None);
    }

    #[test]
    fn test_parse_malformed_yaml_fails() {
        let result = parse("---\nname: \"unterminated\ntags: [a\n---\nbody");
        assert!(matches!(result, Err(SkillError::Frontmatter { .. })));
    }

    #[test]
    fn test_parse_file_missing() {
        let result = parse_file(Path::new("/definitely/not/here/SKILL.md"));
        assert!(matches!(result, Err(SkillError::Io { .. })));
    }
}
