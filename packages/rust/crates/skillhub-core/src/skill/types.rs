//! Skill document types.
//!
//! `SkillFrontmatter` is the normalized metadata block, `ParsedSkill` bundles it
//! with the trimmed markdown body and the untouched source text.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::serializer::serialize;

/// Version assumed when the document does not declare one.
pub const DEFAULT_VERSION: &str = "1.0.0";

/// License assumed when the document does not declare one.
pub const DEFAULT_LICENSE: &str = "MIT";

// =============================================================================
// Field tables
// =============================================================================

/// Scalar frontmatter fields, in canonical output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarField {
    /// `name`
    Name,
    /// `description`
    Description,
    /// `version`
    Version,
    /// `author`
    Author,
    /// `license`
    License,
}

impl ScalarField {
    /// All scalar fields in canonical order.
    pub const ALL: [Self; 5] = [
        Self::Name,
        Self::Description,
        Self::Version,
        Self::Author,
        Self::License,
    ];

    /// YAML key of the field.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Description => "description",
            Self::Version => "version",
            Self::Author => "author",
            Self::License => "license",
        }
    }

    /// Value substituted when the document omits the field.
    #[must_use]
    pub fn default_value(self) -> &'static str {
        match self {
            Self::Version => DEFAULT_VERSION,
            Self::License => DEFAULT_LICENSE,
            Self::Name | Self::Description | Self::Author => "",
        }
    }
}

/// List frontmatter fields, in canonical output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListField {
    /// `tags`
    Tags,
    /// `testingTypes`
    TestingTypes,
    /// `frameworks`
    Frameworks,
    /// `languages`
    Languages,
    /// `domains`
    Domains,
    /// `agents`
    Agents,
}

impl ListField {
    /// All list fields in canonical order.
    pub const ALL: [Self; 6] = [
        Self::Tags,
        Self::TestingTypes,
        Self::Frameworks,
        Self::Languages,
        Self::Domains,
        Self::Agents,
    ];

    /// YAML key of the field.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Tags => "tags",
            Self::TestingTypes => "testingTypes",
            Self::Frameworks => "frameworks",
            Self::Languages => "languages",
            Self::Domains => "domains",
            Self::Agents => "agents",
        }
    }
}

// =============================================================================
// Skill Frontmatter
// =============================================================================

/// Normalized metadata block of a skill document.
///
/// Every list is always present (possibly empty) and every scalar holds
/// either the document's value or its documented default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct SkillFrontmatter {
    /// Display name.
    pub name: String,
    /// Short summary.
    pub description: String,
    /// Semantic version, `1.0.0` when absent.
    pub version: String,
    /// Author handle.
    pub author: String,
    /// License identifier, `MIT` when absent.
    pub license: String,
    /// Free-form tags.
    pub tags: Vec<String>,
    /// Kinds of testing the skill covers (e2e, unit, ...).
    pub testing_types: Vec<String>,
    /// Frameworks the skill targets.
    pub frameworks: Vec<String>,
    /// Programming languages the skill targets.
    pub languages: Vec<String>,
    /// Problem domains.
    pub domains: Vec<String>,
    /// Agents the skill can be installed into.
    pub agents: Vec<String>,
    /// Lower token bound, only kept when the document gave a number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_tokens: Option<f64>,
    /// Upper token bound, only kept when the document gave a number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<f64>,
}

impl Default for SkillFrontmatter {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            version: DEFAULT_VERSION.to_string(),
            author: String::new(),
            license: DEFAULT_LICENSE.to_string(),
            tags: Vec::new(),
            testing_types: Vec::new(),
            frameworks: Vec::new(),
            languages: Vec::new(),
            domains: Vec::new(),
            agents: Vec::new(),
            min_tokens: None,
            max_tokens: None,
        }
    }
}

impl SkillFrontmatter {
    /// Empty frontmatter with the default version and license.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Default frontmatter carrying only a name.
    #[must_use]
    pub fn with_name(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Value of a scalar field.
    #[must_use]
    pub fn scalar(&self, field: ScalarField) -> &str {
        match field {
            ScalarField::Name => &self.name,
            ScalarField::Description => &self.description,
            ScalarField::Version => &self.version,
            ScalarField::Author => &self.author,
            ScalarField::License => &self.license,
        }
    }

    pub(crate) fn scalar_mut(&mut self, field: ScalarField) -> &mut String {
        match field {
            ScalarField::Name => &mut self.name,
            ScalarField::Description => &mut self.description,
            ScalarField::Version => &mut self.version,
            ScalarField::Author => &mut self.author,
            ScalarField::License => &mut self.license,
        }
    }

    /// Items of a list field.
    #[must_use]
    pub fn list(&self, field: ListField) -> &[String] {
        match field {
            ListField::Tags => &self.tags,
            ListField::TestingTypes => &self.testing_types,
            ListField::Frameworks => &self.frameworks,
            ListField::Languages => &self.languages,
            ListField::Domains => &self.domains,
            ListField::Agents => &self.agents,
        }
    }

    pub(crate) fn list_mut(&mut self, field: ListField) -> &mut Vec<String> {
        match field {
            ListField::Tags => &mut self.tags,
            ListField::TestingTypes => &mut self.testing_types,
            ListField::Frameworks => &mut self.frameworks,
            ListField::Languages => &mut self.languages,
            ListField::Domains => &mut self.domains,
            ListField::Agents => &mut self.agents,
        }
    }
}

// =============================================================================
// Explicit Fields
// =============================================================================

/// Scalar fields whose value came from the document rather than a default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ExplicitFields {
    /// `name` was given.
    pub name: bool,
    /// `description` was given.
    pub description: bool,
    /// `version` was given.
    pub version: bool,
    /// `author` was given.
    pub author: bool,
    /// `license` was given.
    pub license: bool,
}

impl ExplicitFields {
    /// Every scalar field with a non-empty value counts as given.
    #[must_use]
    pub fn from_values(frontmatter: &SkillFrontmatter) -> Self {
        let mut explicit = Self::default();
        for field in ScalarField::ALL {
            if !frontmatter.scalar(field).is_empty() {
                explicit.insert(field);
            }
        }
        explicit
    }

    /// Whether the document set this scalar field itself.
    #[must_use]
    pub fn contains(&self, field: ScalarField) -> bool {
        match field {
            ScalarField::Name => self.name,
            ScalarField::Description => self.description,
            ScalarField::Version => self.version,
            ScalarField::Author => self.author,
            ScalarField::License => self.license,
        }
    }

    /// Mark a scalar field as set by the document.
    pub fn insert(&mut self, field: ScalarField) {
        match field {
            ScalarField::Name => self.name = true,
            ScalarField::Description => self.description = true,
            ScalarField::Version => self.version = true,
            ScalarField::Author => self.author = true,
            ScalarField::License => self.license = true,
        }
    }
}

// =============================================================================
// Parsed Skill
// =============================================================================

/// A skill document after parsing.
///
/// Built fresh on every parse and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ParsedSkill {
    /// Normalized frontmatter.
    pub frontmatter: SkillFrontmatter,
    /// Markdown body with surrounding whitespace trimmed.
    pub content: String,
    /// Original document text.
    pub raw: String,
    /// Provenance of the scalar fields.
    #[serde(default)]
    pub explicit: ExplicitFields,
}

impl ParsedSkill {
    /// Assemble a skill from parts instead of parsing a document.
    ///
    /// Non-empty scalars count as explicitly given and `raw` is the
    /// canonical serialization.
    #[must_use]
    pub fn new(frontmatter: SkillFrontmatter, content: impl Into<String>) -> Self {
        let content = content.into().trim().to_string();
        let raw = serialize(&frontmatter, &content);
        let explicit = ExplicitFields::from_values(&frontmatter);
        Self {
            frontmatter,
            content,
            raw,
            explicit,
        }
    }

    /// Number of characters in the body.
    #[must_use]
    pub fn content_chars(&self) -> usize {
        self.content.chars().count()
    }
}
