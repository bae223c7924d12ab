use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::errors::ClientBookError;

const LOG_LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_client_book_path")]
    pub client_book_path: PathBuf,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default = "default_log_file")]
    pub log_file: PathBuf,
}

fn default_client_book_path() -> PathBuf {
    PathBuf::from("data/clientbook.json")
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_file() -> PathBuf {
    PathBuf::from("clientbook.log")
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            client_book_path: default_client_book_path(),
            log_level: default_log_level(),
            log_file: default_log_file(),
        }
    }
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), ClientBookError> {
        if self.client_book_path.as_os_str().is_empty() {
            return Err(ClientBookError::Config(
                "client_book_path must not be empty".to_string(),
            ));
        }
        let level = self.log_level.to_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(ClientBookError::Config(format!(
                "Unknown log level '{}', expected one of: {}",
                self.log_level,
                LOG_LEVELS.join(", ")
            )));
        }
        Ok(())
    }
}
