use crate::errors::{AppError, AppResult};
use crate::models::Location;
use crate::utils::time::minutes;
use chrono::TimeDelta;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_directory")]
    pub directory: String,
    #[serde(default = "default_extension")]
    pub extension: String,
    /// Subtracted from sunrise and added to sunset.
    #[serde(default = "default_padding")]
    pub padding_minutes: u32,
    /// Half-width of the bw/bz windows around the padded events.
    #[serde(default = "default_window")]
    pub window_minutes: u32,
    #[serde(default)]
    pub location: Location,
}

fn default_directory() -> String {
    ".".to_string()
}
fn default_extension() -> String {
    "csv".to_string()
}
fn default_padding() -> u32 {
    5
}
fn default_window() -> u32 {
    5
}

impl Default for Config {
    fn default() -> Self {
        Self {
            directory: default_directory(),
            extension: default_extension(),
            padding_minutes: default_padding(),
            window_minutes: default_window(),
            location: Location::default(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".rsunblue")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rsunblue.conf")
    }

    /// Load the standard config file, or defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load an explicit config file; it must exist.
    pub fn load_from(path: &Path) -> AppResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| AppError::ConfigLoad(format!("{}: {}", path.display(), e)))?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::ConfigLoad(format!("{}: {}", path.display(), e)))
    }

    /// Write the defaults to `path` unless a file is already there.
    /// Returns true when a file was created.
    pub fn init_file(path: &Path) -> AppResult<bool> {
        if path.exists() {
            return Ok(false);
        }

        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }

        let yaml = Self::default().to_yaml()?;
        fs::write(path, yaml).map_err(|e| AppError::ConfigSave(format!("{}: {}", path.display(), e)))?;
        Ok(true)
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::ConfigSave(e.to_string()))
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.extension.trim_start_matches('.').is_empty() {
            return Err(AppError::Config("extension must not be empty".to_string()));
        }
        self.location.validate()
    }

    pub fn padding(&self) -> TimeDelta {
        minutes(self.padding_minutes)
    }

    pub fn inner_window(&self) -> TimeDelta {
        minutes(self.window_minutes)
    }

    pub fn directory_path(&self) -> PathBuf {
        crate::utils::path::expand_tilde(&self.directory)
    }
}
