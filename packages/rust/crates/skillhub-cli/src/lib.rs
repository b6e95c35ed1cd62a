//! Skillhub CLI library: runtime settings and command implementations.
//!
//! The `skillhub` binary parses arguments, loads settings and dispatches to
//! the functions in [`commands`].

#![allow(missing_docs)]

pub mod commands;
pub mod settings;

pub use commands::{
    OutputFormat, ScanRequest, format_command, parse_command, scan_command, schema_command,
    score_command,
};
pub use settings::{
    CatalogSettings, OutputSettings, ScoringSettings, SkillhubSettings, load_settings,
    load_settings_from_paths, set_config_home_override, settings_paths,
};
