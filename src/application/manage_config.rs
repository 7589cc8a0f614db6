//! Config management use case

use crate::domain::DisplayOrder;
use crate::error::{NewsboardError, Result};
use crate::infrastructure::{BoardRepository, Config, FileSystemRepository};
use std::str::FromStr;

const VALID_KEYS: &str = "preview_length, order, normalize_on_load";

/// Service for managing board configuration
pub struct ConfigService {
    repository: FileSystemRepository,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(repository: FileSystemRepository) -> Self {
        ConfigService { repository }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.repository.load_config()?;

        match key {
            "preview_length" => Ok(config.preview_length.to_string()),
            "order" => Ok(config.order.as_str().to_string()),
            "normalize_on_load" => Ok(config.normalize_on_load.to_string()),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(NewsboardError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: {}, created",
                key, VALID_KEYS
            ))),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.repository.load_config()?;

        match key {
            "preview_length" => {
                config.preview_length = value.parse().map_err(|_| {
                    NewsboardError::Config(format!(
                        "Invalid preview_length: '{}'. Expected a non-negative number",
                        value
                    ))
                })?;
            }
            "order" => {
                config.order = DisplayOrder::from_str(value).map_err(NewsboardError::Config)?;
            }
            "normalize_on_load" => {
                config.normalize_on_load = value.parse().map_err(|_| {
                    NewsboardError::Config(format!(
                        "Invalid normalize_on_load: '{}'. Expected true or false",
                        value
                    ))
                })?;
            }
            "created" => {
                return Err(NewsboardError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(NewsboardError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: {}",
                    key, VALID_KEYS
                )));
            }
        }

        self.repository.save_config(&config)?;
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.repository.load_config()
    }
}
