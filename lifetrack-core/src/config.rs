//! Global lifetrack configuration and data-directory resolution.

use std::path::{Path, PathBuf};

use config::{Config, File};
use serde::{Deserialize, Serialize};

use crate::error::{LifeTrackError, LifeTrackResult};

static DEFAULT_DATA_PATH: &str = "~/lifetrack";

fn default_data_path() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_PATH)
}

fn is_default_data_path(p: &PathBuf) -> bool {
    *p == default_data_path()
}

/// Global configuration at ~/.config/lifetrack/config.toml
#[derive(Serialize, Deserialize, Clone)]
pub struct LifetrackConfig {
    #[serde(default = "default_data_path", skip_serializing_if = "is_default_data_path")]
    pub data_dir: PathBuf,
}

impl LifetrackConfig {
    pub fn config_path() -> LifeTrackResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| LifeTrackError::Config("Could not determine config directory".into()))?
            .join("lifetrack");

        Ok(config_dir.join("config.toml"))
    }

    /// Save the current config to ~/.config/lifetrack/config.toml
    pub fn save(&self) -> LifeTrackResult<()> {
        let config_path = Self::config_path()?;

        let content =
            toml::to_string_pretty(self).map_err(|e| LifeTrackError::Config(e.to_string()))?;

        std::fs::write(&config_path, content)
            .map_err(|e| LifeTrackError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> LifeTrackResult<()> {
        let contents = format!(
            "\
# lifetrack configuration

# Where your journal and tables live:
# data_dir = \"{}\"
",
            DEFAULT_DATA_PATH
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                LifeTrackError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| LifeTrackError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}

/// Root handle: loads the global config and resolves data paths.
#[derive(Clone)]
pub struct Lifetrack {
    config: LifetrackConfig,
}

impl Lifetrack {
    pub fn load() -> LifeTrackResult<Self> {
        let config_path = LifetrackConfig::config_path()?;

        if !config_path.exists() {
            LifetrackConfig::create_default_config(&config_path)?;
        }

        let config: LifetrackConfig = Config::builder()
            .add_source(File::from(config_path).required(false))
            .build()
            .map_err(|e| LifeTrackError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| LifeTrackError::Config(e.to_string()))?;

        Ok(Lifetrack { config })
    }

    /// Point the data directory somewhere else and persist the change.
    pub fn set_data_dir(&mut self, dir: PathBuf) -> LifeTrackResult<()> {
        self.config.data_dir = dir;
        self.config.save()
    }

    pub fn data_path(&self) -> PathBuf {
        let full_path_str =
            shellexpand::tilde(&self.config.data_dir.to_string_lossy()).into_owned();

        PathBuf::from(full_path_str)
    }

    /// The data directory in display-friendly form, keeping `~` instead of
    /// expanding to the full home directory.
    pub fn display_path(&self) -> PathBuf {
        self.config.data_dir.clone()
    }

    /// Path of the journal document.
    pub fn journal_path(&self) -> PathBuf {
        self.data_path().join("lifetrack.json")
    }

    /// Directory holding the per-entity table files.
    pub fn tables_path(&self) -> PathBuf {
        self.data_path().join("tables")
    }
}
