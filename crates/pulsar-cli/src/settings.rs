//! CLI settings - optional TOML file.
//!
//! Looked up in the user's config directory unless `--config` names a file.
//! A missing default file means defaults; a malformed file is an error.

use std::path::{Path, PathBuf};

use pulsar_editor::OptionLabels;
use pulsar_model::{GeoEntry, default_geo_list};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while loading or saving settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings from {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse settings in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("failed to serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("failed to write settings to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Root settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub display: DisplaySettings,
    pub geo: GeoSettings,
    pub output: OutputSettings,
}

/// Option label settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Show ids next to app and job names.
    pub show_ids: bool,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self { show_ids: true }
    }
}

/// Geography list settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeoSettings {
    /// Entries appended to the built-in list.
    pub extra: Vec<GeoEntry>,
}

/// Output settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    pub format: OutputFormat,
}

/// How command results are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl Settings {
    /// Load from an explicit path, or from the default path if none is given.
    ///
    /// # Errors
    ///
    /// Returns an error if an explicit file cannot be read, or if any file
    /// that exists cannot be parsed.
    pub fn load(path: Option<&Path>) -> Result<Self, SettingsError> {
        match path {
            Some(path) => Self::load_from(path),
            None => {
                let path = Self::config_path();
                if path.is_file() {
                    Self::load_from(&path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Load settings from a specific path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        let content = std::fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Save settings to a specific path.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<(), SettingsError> {
        let write_err = |source| SettingsError::Write {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(write_err)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(write_err)
    }

    /// Get the default config file path.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("io", "Pulsar", "pulsar-query")
            .map(|dirs| dirs.config_dir().join("settings.toml"))
            .unwrap_or_else(|| PathBuf::from("settings.toml"))
    }

    pub fn labels(&self) -> OptionLabels {
        OptionLabels {
            show_ids: self.display.show_ids,
        }
    }

    /// Built-in geography list followed by configured extras.
    ///
    /// An extra entry whose code is already listed replaces the built-in name.
    pub fn geo_list(&self) -> Vec<GeoEntry> {
        let mut list = default_geo_list();
        for extra in &self.geo.extra {
            match list.iter_mut().find(|entry| entry.code == extra.code) {
                Some(entry) => entry.name.clone_from(&extra.name),
                None => list.push(extra.clone()),
            }
        }
        list
    }
}
