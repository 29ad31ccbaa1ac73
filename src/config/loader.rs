//! Settings Loader
//!
//! Loads the project-scoped settings document from a YAML file. Deployments
//! that fetch settings from a service instead construct [`ProjectSettings`]
//! themselves and wrap them with [`SettingsManager::from_settings`].

use std::path::{Path, PathBuf};

use tracing::debug;

use super::error::{ConfigResult, ConfigurationError};
use super::ProjectSettings;

/// Loaded project settings together with their origin.
pub struct SettingsManager {
    settings: ProjectSettings,
    settings_path: Option<PathBuf>,
}

impl SettingsManager {
    /// Load project settings from a YAML file.
    pub fn load_from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "Loading project settings");

        let content = std::fs::read_to_string(path).map_err(|source| ConfigurationError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let settings: ProjectSettings =
            serde_yaml::from_str(&content).map_err(|err| ConfigurationError::Parse {
                path: path.display().to_string(),
                reason: err.to_string(),
            })?;

        debug!(
            path = %path.display(),
            hosts = settings.hosts.len(),
            "Project settings loaded"
        );

        Ok(Self {
            settings,
            settings_path: Some(path.to_path_buf()),
        })
    }

    /// Wrap an already materialized settings tree.
    pub fn from_settings(settings: ProjectSettings) -> Self {
        Self {
            settings,
            settings_path: None,
        }
    }

    pub fn settings(&self) -> &ProjectSettings {
        &self.settings
    }

    /// File the settings came from, when loaded from disk.
    pub fn settings_path(&self) -> Option<&Path> {
        self.settings_path.as_deref()
    }

    /// Consume the manager, keeping only the settings tree.
    pub fn into_settings(self) -> ProjectSettings {
        self.settings
    }
}
