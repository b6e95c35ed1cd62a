//! Permissive normalization of decoded frontmatter values.
//!
//! Frontmatter is user-written YAML, so a field may arrive as a list, a
//! comma-separated string, a number, or anything else. These helpers map
//! each shape onto the typed fields of `SkillFrontmatter` without failing.

use serde_yaml::Value;

/// Shape of a list-typed field before normalization.
#[derive(Debug, Clone, Copy)]
pub(crate) enum RawValue<'a> {
    List(&'a [Value]),
    Str(&'a str),
    Other,
}

impl<'a> RawValue<'a> {
    pub(crate) fn classify(value: Option<&'a Value>) -> Self {
        match value {
            Some(Value::Sequence(items)) => Self::List(items),
            Some(Value::String(text)) => Self::Str(text),
            Some(Value::Tagged(tagged)) => Self::classify(Some(&tagged.value)),
            _ => Self::Other,
        }
    }
}

/// Normalize a list-typed field.
///
/// Lists keep their order with every element coerced to text; strings are
/// split on commas with blank segments dropped; anything else is empty.
#[must_use]
pub fn normalize_list(value: Option<&Value>) -> Vec<String> {
    match RawValue::classify(value) {
        RawValue::List(items) => items.iter().map(coerce_to_string).collect(),
        RawValue::Str(text) => text
            .split(',')
            .map(str::trim)
            .filter(|segment| !segment.is_empty())
            .map(ToString::to_string)
            .collect(),
        RawValue::Other => Vec::new(),
    }
}

/// Render any YAML value as text.
#[must_use]
pub fn coerce_to_string(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(flag) => flag.to_string(),
        Value::Number(number) => number.to_string(),
        Value::String(text) => text.clone(),
        Value::Sequence(items) => items
            .iter()
            .map(coerce_to_string)
            .collect::<Vec<_>>()
            .join(","),
        Value::Mapping(_) => serde_json::to_string(value).unwrap_or_else(|_| {
            serde_yaml::to_string(value)
                .map(|text| text.trim_end().to_string())
                .unwrap_or_default()
        }),
        Value::Tagged(tagged) => coerce_to_string(&tagged.value),
    }
}

/// Normalize a scalar field, `None` meaning "use the default".
///
/// Only truthy strings, numbers and booleans count as given.
#[must_use]
pub fn normalize_scalar(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(text) if !text.is_empty() => Some(text.clone()),
        Value::Bool(true) => Some("true".to_string()),
        Value::Number(number) if number.as_f64().is_some_and(|n| n != 0.0 && !n.is_nan()) => {
            Some(number.to_string())
        }
        Value::Tagged(tagged) => normalize_scalar(Some(&tagged.value)),
        _ => None,
    }
}

/// Keep a value only when YAML already decoded it as a number.
#[must_use]
pub fn normalize_number(value: Option<&Value>) -> Option<f64> {
    match value? {
        Value::Number(number) => number.as_f64(),
        _ => None,
    }
}
