//! Configuration management

use crate::domain::DisplayOrder;
use crate::error::{NewsboardError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Name of the board's metadata directory
pub const BOARD_DIR: &str = ".newsboard";

pub const DEFAULT_PREVIEW_LENGTH: usize = 120;

fn default_preview_length() -> usize {
    DEFAULT_PREVIEW_LENGTH
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Characters of content shown in listings before truncating
    #[serde(default = "default_preview_length")]
    pub preview_length: usize,
    #[serde(default)]
    pub order: DisplayOrder,
    /// Write the migrated collection back as soon as it is loaded
    #[serde(default)]
    pub normalize_on_load: bool,
    pub created: DateTime<Utc>,
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}

impl Config {
    /// Create a new config with default values
    pub fn new() -> Self {
        Config {
            preview_length: DEFAULT_PREVIEW_LENGTH,
            order: DisplayOrder::default(),
            normalize_on_load: false,
            created: Utc::now(),
        }
    }

    /// Load config from .newsboard/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(BOARD_DIR).join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                NewsboardError::NotBoardDirectory(path.to_path_buf())
            } else {
                NewsboardError::Io(e)
            }
        })?;

        toml::from_str(&contents)
            .map_err(|e| NewsboardError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    /// Save config to .newsboard/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let board_dir = path.join(BOARD_DIR);
        let config_path = board_dir.join("config.toml");

        if !board_dir.exists() {
            fs::create_dir(&board_dir)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| NewsboardError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(&config_path, contents)?;

        Ok(())
    }
}
