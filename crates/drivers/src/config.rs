use std::fs;
use std::path::{Path, PathBuf};

use neptune_domain::{DomainError, GridSpec, PLACEHOLDER_ENTRY_COUNT};
use serde::Deserialize;
use thiserror::Error;

pub const CONFIG_ENV: &str = "NEPTUNE_CONFIG";
pub const DEFAULT_CONFIG_FILE: &str = "neptune.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub assets_dir: String,
    pub strings_path: String,
    pub state_path: String,
    pub catalog_dir: Option<String>,
    pub placeholder_entries: usize,
    pub columns: usize,
    pub window_width: f32,
    pub window_height: f32,
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            assets_dir: "assets".to_string(),
            strings_path: "assets/strings.json".to_string(),
            state_path: "cache/navigation.json".to_string(),
            catalog_dir: None,
            placeholder_entries: PLACEHOLDER_ENTRY_COUNT,
            columns: GridSpec::DEFAULT_COLUMNS,
            window_width: 425.0,
            window_height: 900.0,
            log_filter: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Explicit path, then `NEPTUNE_CONFIG`, then `neptune.toml` in the working
    /// directory if present, then defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load_from(path);
        }
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return Self::load_from(&PathBuf::from(path));
        }
        let local = Path::new(DEFAULT_CONFIG_FILE);
        if local.is_file() {
            return Self::load_from(local);
        }
        Ok(Self::default())
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        toml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    pub fn grid_spec(&self) -> Result<GridSpec, DomainError> {
        GridSpec::new(self.columns)
    }
}
