//! Persistent CLI settings stored as TOML.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use roster_model::PagePolicy;
use roster_query::{DEFAULT_PAGE_SIZE, EXPORT_FILE_NAME, ExportFormat};
use serde::{Deserialize, Serialize};

/// Environment variable that overrides the configured data directory.
pub const DATA_DIR_ENV: &str = "ROSTER_DATA_DIR";

/// Directory used when neither flag, environment, settings nor the platform
/// provide one.
pub const FALLBACK_DATA_DIR: &str = ".roster";

fn project_dirs() -> Option<directories::ProjectDirs> {
    directories::ProjectDirs::from("", "", "roster")
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Where the roster is stored. Platform data dir when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,

    /// Candidates per page for `list`.
    pub page_size: usize,

    /// What happens to the page number when a filter or the sort changes.
    pub page_policy: PagePolicy,

    pub export: ExportSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_dir: None,
            page_size: DEFAULT_PAGE_SIZE,
            page_policy: PagePolicy::default(),
            export: ExportSettings::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportSettings {
    pub format: ExportFormat,
    /// File name used when `export` is given no `--output`.
    pub file_name: String,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            format: ExportFormat::default(),
            file_name: EXPORT_FILE_NAME.to_string(),
        }
    }
}

impl Settings {
    /// Load settings from `path`, falling back to defaults when the file is
    /// missing or unreadable.
    pub fn load_from(path: &Path) -> Self {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(_) => {
                tracing::debug!("No settings at {}, using defaults", path.display());
                return Self::default();
            }
        };
        match toml::from_str(&content) {
            Ok(settings) => settings,
            Err(error) => {
                tracing::warn!(path = %path.display(), %error, "ignoring malformed settings file");
                Self::default()
            }
        }
    }

    /// Save settings to `path`, creating its parent directory.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("failed to create config directory {}", parent.display())
            })?;
        }
        let content = toml::to_string_pretty(self).context("failed to serialize settings")?;
        std::fs::write(path, content)
            .with_context(|| format!("failed to write settings to {}", path.display()))
    }

    /// Default settings file location.
    pub fn config_path() -> PathBuf {
        project_dirs()
            .map(|dirs| dirs.config_dir().join("settings.toml"))
            .unwrap_or_else(|| PathBuf::from("settings.toml"))
    }

    /// Resolve the data directory: flag, then environment, then settings,
    /// then `platform`, then [`FALLBACK_DATA_DIR`].
    pub fn resolve_data_dir(
        &self,
        flag: Option<&Path>,
        env: Option<&str>,
        platform: Option<PathBuf>,
    ) -> PathBuf {
        if let Some(dir) = flag {
            return dir.to_path_buf();
        }
        if let Some(dir) = env.filter(|value| !value.trim().is_empty()) {
            return PathBuf::from(dir);
        }
        if let Some(dir) = &self.data_dir {
            return dir.clone();
        }
        platform.unwrap_or_else(|| PathBuf::from(FALLBACK_DATA_DIR))
    }

    /// Platform data directory for the roster, if one can be determined.
    pub fn platform_data_dir() -> Option<PathBuf> {
        project_dirs().map(|dirs| dirs.data_dir().to_path_buf())
    }
}
