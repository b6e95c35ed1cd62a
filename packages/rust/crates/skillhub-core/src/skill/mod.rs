//! Skill document model, parser and serializer.
//!
//! ```text
//! raw text ──> parse ──> ParsedSkill ──> quality::calculate_quality_score
//!                 │
//!                 └── frontmatter ──> serialize ──> canonical text
//! ```

pub mod normalize;
pub mod parser;
pub mod serializer;
pub mod types;

pub use parser::{frontmatter_from_mapping, parse, parse_file};
pub use serializer::serialize;
pub use types::{
    DEFAULT_LICENSE, DEFAULT_VERSION, ExplicitFields, ListField, ParsedSkill, ScalarField,
    SkillFrontmatter,
};
