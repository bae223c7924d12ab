//! Command interpretation: parsing, execution and persistence of the result.

pub mod commands;
pub mod messages;
pub mod parser;

use crate::errors::ClientBookError;
use crate::model::{Client, ClientBook, Model, ModelManager};
use crate::storage::ClientBookStorage;
use commands::CommandResult;

/// Owns the model and the storage; the single call site that executes commands.
pub struct LogicManager {
    model: ModelManager,
    storage: Option<Box<dyn ClientBookStorage>>,
}

impl LogicManager {
    pub fn new(model: ModelManager, storage: Option<Box<dyn ClientBookStorage>>) -> Self {
        Self { model, storage }
    }

    /// Parses and executes one command line, then saves the client book if the
    /// command may have changed it.
    pub fn execute(&mut self, command_text: &str) -> Result<CommandResult, ClientBookError> {
        log::info!("----------------[USER COMMAND][{}]", command_text);

        let command = parser::parse_command(command_text)?;
        let result = command.execute(&mut self.model)?;

        if command.mutates_client_book() {
            if let Some(storage) = &self.storage {
                storage.save(self.model.client_book()).map_err(|e| {
                    ClientBookError::Storage(format!(
                        "Could not save data to file {}: {}",
                        storage.path().display(),
                        e
                    ))
                })?;
            }
        }
        Ok(result)
    }

    pub fn filtered_client_list(&self) -> &[Client] {
        self.model.filtered_client_list()
    }

    pub fn client_book(&self) -> &ClientBook {
        self.model.client_book()
    }
}
