//! Configuration loader for YAML files

use std::fs;
use std::path::Path;

use crate::config::types::AppConfig;
use crate::errors::ClientBookError;

pub struct ConfigLoader;

impl ConfigLoader {
    /// Loads configuration from `path`, or the defaults if the file does not exist.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<AppConfig, ClientBookError> {
        let path = path.as_ref();
        if !path.exists() {
            log::info!(
                "Config file {} not found, using default settings",
                path.display()
            );
            return Ok(AppConfig::default());
        }

        let content = fs::read_to_string(path).map_err(|e| {
            ClientBookError::Config(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;
        Self::from_str(&content)
    }

    /// Loads configuration from a YAML string.
    pub fn from_str(content: &str) -> Result<AppConfig, ClientBookError> {
        // An empty document is a valid "all defaults" config.
        if content.trim().is_empty() {
            return Ok(AppConfig::default());
        }
        let config: AppConfig = serde_yaml::from_str(content).map_err(|e| {
            ClientBookError::Config(format!("Failed to parse YAML config: {}", e))
        })?;
        config.validate()?;
        Ok(config)
    }
}
