//! The master client list.

use super::client::Client;
use crate::errors::CommandError;

/// Ordered list of clients in which no two entries are the same client.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientBook {
    clients: Vec<Client>,
}

impl ClientBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a book from `clients`, rejecting lists that hold the same client twice.
    pub fn from_clients(clients: Vec<Client>) -> Result<Self, CommandError> {
        let mut book = Self::new();
        for client in clients {
            book.add_client(client)?;
        }
        Ok(book)
    }

    pub fn clients(&self) -> &[Client] {
        &self.clients
    }

    pub fn len(&self) -> usize {
        self.clients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clients.is_empty()
    }

    pub fn has_client(&self, client: &Client) -> bool {
        self.clients.iter().any(|c| c.is_same_client(client))
    }

    pub fn add_client(&mut self, client: Client) -> Result<(), CommandError> {
        if self.has_client(&client) {
            return Err(CommandError::DuplicateClient);
        }
        self.clients.push(client);
        Ok(())
    }

    /// Replaces `target` with `edited` in place; `target` must be in the book.
    pub fn set_client(&mut self, target: &Client, edited: Client) -> Result<(), CommandError> {
        let position = self
            .clients
            .iter()
            .position(|c| c == target)
            .ok_or_else(|| CommandError::ClientNotFound(target.name().to_string()))?;
        let clashes = self
            .clients
            .iter()
            .enumerate()
            .any(|(i, c)| i != position && c.is_same_client(&edited));
        if clashes {
            return Err(CommandError::DuplicateClient);
        }
        self.clients[position] = edited;
        Ok(())
    }

    pub fn remove_client(&mut self, target: &Client) -> Result<(), CommandError> {
        let position = self
            .clients
            .iter()
            .position(|c| c == target)
            .ok_or_else(|| CommandError::ClientNotFound(target.name().to_string()))?;
        self.clients.remove(position);
        Ok(())
    }

    pub fn find_by_name(&self, name: &str) -> Option<&Client> {
        self.clients
            .iter()
            .find(|c| c.name().as_str().eq_ignore_ascii_case(name))
    }
}
