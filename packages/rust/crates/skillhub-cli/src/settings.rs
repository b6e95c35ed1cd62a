//! Runtime settings loader for the skillhub CLI.
//!
//! Loads and merges:
//! - System defaults: `<PRJ_ROOT>/packages/conf/settings.yaml`
//! - User overrides:  `<PRJ_CONFIG_HOME>/skillhub/settings.yaml`
//!
//! Merge precedence is user over system.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use serde::Deserialize;
use skillhub_core::{CatalogScanner, PresencePolicy, ScoringOptions};

use crate::commands::OutputFormat;

const DEFAULT_SYSTEM_SETTINGS_RELATIVE_PATH: &str = "packages/conf/settings.yaml";
const DEFAULT_USER_SETTINGS_RELATIVE_PATH: &str = "skillhub/settings.yaml";
const DEFAULT_CONFIG_HOME_RELATIVE_PATH: &str = ".config";
static CONFIG_HOME_OVERRIDE: OnceLock<PathBuf> = OnceLock::new();

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SkillhubSettings {
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub catalog: CatalogSettings,
    #[serde(default)]
    pub output: OutputSettings,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    pub presence: Option<PresencePolicy>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogSettings {
    pub skill_file_name: Option<String>,
    pub max_depth: Option<usize>,
    pub index_path: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OutputSettings {
    pub format: Option<OutputFormat>,
}

impl SkillhubSettings {
    fn merge(self, overlay: Self) -> Self {
        Self {
            scoring: self.scoring.merge(overlay.scoring),
            catalog: self.catalog.merge(overlay.catalog),
            output: self.output.merge(overlay.output),
        }
    }

    /// Scoring options, with a command-line presence flag taking precedence.
    #[must_use]
    pub fn scoring_options(&self, presence_flag: Option<PresencePolicy>) -> ScoringOptions {
        let presence = presence_flag
            .or(self.scoring.presence)
            .unwrap_or_default();
        ScoringOptions::new().with_presence(presence)
    }

    /// Catalog scanner configured from the `catalog` section.
    #[must_use]
    pub fn catalog_scanner(&self, options: ScoringOptions) -> CatalogScanner {
        let mut scanner = CatalogScanner::new()
            .with_max_depth(self.catalog.max_depth)
            .with_options(options);
        if let Some(name) = self
            .catalog
            .skill_file_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
        {
            scanner = scanner.with_skill_file_name(name);
        }
        scanner
    }

    /// Output format, falling back to text.
    #[must_use]
    pub fn output_format(&self, format_flag: Option<OutputFormat>) -> OutputFormat {
        format_flag.or(self.output.format).unwrap_or_default()
    }

    /// Default index file for `scan`, resolved against the project root.
    #[must_use]
    pub fn index_path(&self) -> Option<PathBuf> {
        self.catalog
            .index_path
            .as_deref()
            .map(str::trim)
            .filter(|path| !path.is_empty())
            .map(|path| absolutize(&project_root(), PathBuf::from(path)))
    }
}

impl ScoringSettings {
    fn merge(self, overlay: Self) -> Self {
        Self {
            presence: overlay.presence.or(self.presence),
        }
    }
}

impl CatalogSettings {
    fn merge(self, overlay: Self) -> Self {
        Self {
            skill_file_name: overlay.skill_file_name.or(self.skill_file_name),
            max_depth: overlay.max_depth.or(self.max_depth),
            index_path: overlay.index_path.or(self.index_path),
        }
    }
}

impl OutputSettings {
    fn merge(self, overlay: Self) -> Self {
        Self {
            format: overlay.format.or(self.format),
        }
    }
}

/// Load merged settings from the system and user files.
pub fn load_settings() -> SkillhubSettings {
    let (system_path, user_path) = settings_paths();
    load_settings_from_paths(&system_path, &user_path)
}

#[doc(hidden)]
pub fn settings_paths() -> (PathBuf, PathBuf) {
    let root = project_root();
    let system_path = root.join(DEFAULT_SYSTEM_SETTINGS_RELATIVE_PATH);
    let user_path = resolve_config_home(&root).join(DEFAULT_USER_SETTINGS_RELATIVE_PATH);
    (system_path, user_path)
}

#[doc(hidden)]
pub fn load_settings_from_paths(system: &Path, user: &Path) -> SkillhubSettings {
    load_one(system).merge(load_one(user))
}

fn load_one(path: &Path) -> SkillhubSettings {
    if !path.exists() {
        return SkillhubSettings::default();
    }
    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(error) => {
            tracing::warn!(
                path = %path.display(),
                error = %error,
                "failed to read settings file; ignoring"
            );
            return SkillhubSettings::default();
        }
    };
    if raw.trim().is_empty() {
        return SkillhubSettings::default();
    }
    match serde_yaml::from_str::<SkillhubSettings>(&raw) {
        Ok(value) => value,
        Err(error) => {
            tracing::warn!(
                path = %path.display(),
                error = %error,
                "failed to parse settings yaml; ignoring file"
            );
            SkillhubSettings::default()
        }
    }
}

fn project_root() -> PathBuf {
    std::env::var("PRJ_ROOT")
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
}

/// Set config-home override (used by CLI `--conf`).
///
/// The path can be absolute, or relative to `PRJ_ROOT`/cwd.
pub fn set_config_home_override(path: impl Into<PathBuf>) {
    let path = path.into();
    if path.as_os_str().is_empty() {
        return;
    }
    if CONFIG_HOME_OVERRIDE.set(path.clone()).is_err()
        && let Some(current) = CONFIG_HOME_OVERRIDE.get()
        && current != &path
    {
        tracing::warn!(
            current = %current.display(),
            ignored = %path.display(),
            "config home override already set; ignoring subsequent value"
        );
    }
}

fn resolve_config_home(project_root: &Path) -> PathBuf {
    if let Some(path) = CONFIG_HOME_OVERRIDE.get() {
        return absolutize(project_root, path.clone());
    }

    let configured = std::env::var("PRJ_CONFIG_HOME")
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| DEFAULT_CONFIG_HOME_RELATIVE_PATH.to_string());
    absolutize(project_root, PathBuf::from(configured))
}

fn absolutize(project_root: &Path, path: PathBuf) -> PathBuf {
    if path.is_absolute() {
        path
    } else {
        project_root.join(path)
    }
}
