//! Scoring options.

use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// How the schema dimension decides that a scalar field is present.
///
/// `Explicit` only credits fields the document actually supplied.
/// `Defaulted` checks the post-default values, so fields with non-empty
/// defaults (`version`, `license`) always score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum PresencePolicy {
    /// Credit only fields present in the source document.
    #[default]
    Explicit,
    /// Credit every non-empty field after defaults were applied.
    Defaulted,
}

impl PresencePolicy {
    /// Setting / flag spelling.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Explicit => "explicit",
            Self::Defaulted => "defaulted",
        }
    }
}

impl fmt::Display for PresencePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PresencePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "explicit" => Ok(Self::Explicit),
            "defaulted" => Ok(Self::Defaulted),
            other => Err(format!(
                "unknown presence policy '{other}' (expected 'explicit' or 'defaulted')"
            )),
        }
    }
}

/// Knobs for [`crate::calculate_quality_score_with`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoringOptions {
    /// Presence rule for scalar fields.
    pub presence: PresencePolicy,
}

impl ScoringOptions {
    /// Options with the explicit presence policy.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the presence policy.
    #[must_use]
    pub fn with_presence(mut self, presence: PresencePolicy) -> Self {
        self.presence = presence;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_parse_and_display() {
        assert_eq!(
            "Defaulted".parse::<PresencePolicy>(),
            Ok(PresencePolicy::Defaulted)
        );
        assert_eq!(" explicit ".parse::<PresencePolicy>(), Ok(PresencePolicy::Explicit));
        assert!("sometimes".parse::<PresencePolicy>().is_err());
        assert_eq!(PresencePolicy::Defaulted.to_string(), "defaulted");
    }

    #[test]
    fn test_policy_yaml_spelling() {
        let policy: PresencePolicy = serde_yaml::from_str("defaulted").unwrap();
        assert_eq!(policy, PresencePolicy::Defaulted);
    }
}
