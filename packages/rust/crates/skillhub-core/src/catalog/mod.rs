//! Skill catalog: directory scanning, index records and index sync.

pub mod record;
pub mod scanner;
pub mod sync;

pub use record::{SkillRecord, content_hash, slugify, sort_leaderboard};
pub use scanner::{
    CatalogScan, CatalogScanner, DEFAULT_SKILL_FILE_NAME, ScanFailure, read_index, write_index,
};
pub use sync::{IndexDiff, calculate_index_diff};
