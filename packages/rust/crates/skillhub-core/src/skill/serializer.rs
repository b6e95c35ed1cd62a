//! Canonical skill document rendering.
//!
//! ```text
//! ---
//! name: "<value>"
//! description: "<value>"
//! version: "<value>"
//! author: "<value>"
//! license: "<value>"
//! tags:
//!   - <item>
//! ---
//!
//! <body>
//! ```
//!
//! Scalars are always double-quoted; empty lists are left out. Token
//! bounds are not part of the canonical form.

use serde_yaml::Value;

use super::normalize::coerce_to_string;
use super::types::{ListField, ScalarField, SkillFrontmatter};
use crate::frontmatter::DELIMITER;

/// Render frontmatter and body as canonical document text.
///
/// Output is deterministic: equal inputs give byte-identical text.
#[must_use]
pub fn serialize(frontmatter: &SkillFrontmatter, content: &str) -> String {
    let mut out = String::with_capacity(content.len() + 256);
    out.push_str(DELIMITER);
    out.push('\n');

    for field in ScalarField::ALL {
        out.push_str(field.key());
        out.push_str(": ");
        out.push_str(&double_quote(frontmatter.scalar(field)));
        out.push('\n');
    }

    for field in ListField::ALL {
        let items = frontmatter.list(field);
        if items.is_empty() {
            continue;
        }
        out.push_str(field.key());
        out.push_str(":\n");
        for item in items {
            out.push_str("  - ");
            out.push_str(&list_item(item));
            out.push('\n');
        }
    }

    out.push_str(DELIMITER);
    out.push_str("\n\n");
    out.push_str(content);
    out.push('\n');
    out
}

/// YAML double-quoted scalar with backslash escapes.
#[must_use]
pub fn double_quote(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for c in value.chars() {
        match c {
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            '\t' => quoted.push_str("\\t"),
            '\u{85}' | '\u{2028}' | '\u{2029}' | '\u{feff}' => {
                quoted.push_str(&format!("\\u{:04X}", u32::from(c)));
            }
            c if c.is_control() => quoted.push_str(&format!("\\u{:04X}", u32::from(c))),
            c => quoted.push(c),
        }
    }
    quoted.push('"');
    quoted
}

/// Plain item when YAML reads it back as the same text, quoted otherwise.
fn list_item(item: &str) -> String {
    if reads_back_plain(item) {
        item.to_string()
    } else {
        double_quote(item)
    }
}

fn reads_back_plain(item: &str) -> bool {
    if item.is_empty() || item.chars().any(char::is_control) {
        return false;
    }
    match serde_yaml::from_str::<Value>(item) {
        Ok(value @ (Value::String(_) | Value::Number(_) | Value::Bool(_) | Value::Null)) => {
            coerce_to_string(&value) == item
        }
        _ => false,
    }
}
