//! JSON file storage.
//!
//! Field values are re-validated while deserializing, so a hand-edited file
//! with an invalid phone number or a repeated client is rejected as a whole
//! instead of loading a partially valid book.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::ClientBookStorage;
use crate::errors::ClientBookError;
use crate::model::{Client, ClientBook};

#[derive(Debug, Serialize, Deserialize)]
struct SerializableClientBook {
    clients: Vec<Client>,
}

pub struct JsonClientBookStorage {
    path: PathBuf,
}

impl JsonClientBookStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ClientBookStorage for JsonClientBookStorage {
    fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<Option<ClientBook>, ClientBookError> {
        if !self.path.exists() {
            log::info!("Data file not found: {}", self.path.display());
            return Ok(None);
        }
        let content = fs::read_to_string(&self.path)?;
        let stored: SerializableClientBook = serde_json::from_str(&content).map_err(|e| {
            ClientBookError::Storage(format!(
                "Failed to parse data file {}: {}",
                self.path.display(),
                e
            ))
        })?;
        let book = ClientBook::from_clients(stored.clients).map_err(|e| {
            ClientBookError::Storage(format!(
                "Illegal values in data file {}: {}",
                self.path.display(),
                e
            ))
        })?;
        log::info!("Loaded {} clients from {}", book.len(), self.path.display());
        Ok(Some(book))
    }

    fn save(&self, book: &ClientBook) -> Result<(), ClientBookError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let stored = SerializableClientBook {
            clients: book.clients().to_vec(),
        };
        fs::write(&self.path, serde_json::to_string_pretty(&stored)?)?;
        Ok(())
    }
}
