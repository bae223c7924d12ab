//! Persistence of the client book.

pub mod json;

pub use json::JsonClientBookStorage;

use std::path::Path;

use crate::errors::ClientBookError;
use crate::model::ClientBook;

pub trait ClientBookStorage {
    fn path(&self) -> &Path;

    /// `Ok(None)` when nothing has been saved yet.
    fn read(&self) -> Result<Option<ClientBook>, ClientBookError>;

    fn save(&self, book: &ClientBook) -> Result<(), ClientBookError>;
}
