//! Shared YAML Frontmatter Splitting
//!
//! Separates the `---` delimited YAML block at the top of a skill document
//! from its markdown body, and decodes the block into a YAML mapping.
//!
//! ```text
//! ---                <- opening delimiter (must be the very first line)
//! name: "writer"
//! tags: a, b
//! ---                <- first "\n---" after the opening line closes the block
//!
//! # Body
//! ```
//!
//! A document without an opening delimiter is all body. An opening
//! delimiter without a closing one turns the rest of the document into
//! matter and leaves the body empty.

use serde_yaml::{Mapping, Value};

use crate::error::Result;

/// Frontmatter delimiter line.
pub const DELIMITER: &str = "---";

const CLOSING: &str = "\n---";
const BOM: char = '\u{feff}';

/// A document cut into its frontmatter block and markdown body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrontmatterSplit<'a> {
    /// Text between the delimiters, `None` when the document has no block.
    pub matter: Option<&'a str>,
    /// Everything after the block (untrimmed).
    pub body: &'a str,
}

impl FrontmatterSplit<'_> {
    /// True when an opening delimiter was found.
    #[must_use]
    pub fn has_matter(&self) -> bool {
        self.matter.is_some()
    }
}

/// Split a document into frontmatter and body.
///
/// # Examples
///
/// ```
/// use skillhub_core::split_frontmatter;
///
/// let split = split_frontmatter("---\nname: demo\n---\n# Body\n");
/// assert_eq!(split.matter, Some("\nname: demo"));
/// assert_eq!(split.body, "# Body\n");
///
/// let plain = split_frontmatter("# Just markdown");
/// assert!(plain.matter.is_none());
/// ```
#[must_use]
pub fn split_frontmatter(raw: &str) -> FrontmatterSplit<'_> {
    let text = raw.strip_prefix(BOM).unwrap_or(raw);

    let Some(after_open) = text.strip_prefix(DELIMITER) else {
        return FrontmatterSplit {
            matter: None,
            body: text,
        };
    };

    // "----" is a thematic break, not a delimiter.
    if after_open.starts_with('-') {
        return FrontmatterSplit {
            matter: None,
            body: text,
        };
    }

    // Anything after `---` on the opening line is a language hint; only YAML is supported.
    let line_end = after_open.find('\n').unwrap_or(after_open.len());
    let rest = &after_open[line_end..];

    match rest.find(CLOSING) {
        Some(close) => {
            let mut body = &rest[close + CLOSING.len()..];
            body = body.strip_prefix('\r').unwrap_or(body);
            body = body.strip_prefix('\n').unwrap_or(body);
            FrontmatterSplit {
                matter: Some(&rest[..close]),
                body,
            }
        }
        None => FrontmatterSplit {
            matter: Some(rest),
            body: "",
        },
    }
}

/// Decode a frontmatter block into a YAML mapping.
///
/// Blocks holding only blank lines and `#` comments decode to an empty
/// mapping. A block whose root is not a mapping carries no fields and
/// also decodes to an empty mapping.
///
/// # Errors
///
/// Returns [`crate::SkillError::Frontmatter`] when the YAML is malformed.
pub fn parse_matter(matter: &str) -> Result<Mapping> {
    let meaningful = matter.lines().any(|line| {
        let line = line.trim();
        !line.is_empty() && !line.starts_with('#')
    });
    if !meaningful {
        return Ok(Mapping::new());
    }

    match serde_yaml::from_str::<Value>(matter)? {
        Value::Mapping(mapping) => Ok(mapping),
        Value::Tagged(tagged) => match tagged.value {
            Value::Mapping(mapping) => Ok(mapping),
            _ => Ok(Mapping::new()),
        },
        other => {
            log::debug!("Frontmatter root is not a mapping ({other:?}); ignoring its content");
            Ok(Mapping::new())
        }
    }
}
