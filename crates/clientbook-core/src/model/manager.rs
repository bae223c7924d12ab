//! The model contract consumed by commands, and its in-memory implementation.
//!
//! The displayed list is a derived view: the master list filtered by the active
//! predicate, then ordered by the active sort keys. It is recomputed
//! synchronously after every mutation, so the next read always observes it.

use super::client::Client;
use super::client_book::ClientBook;
use super::index::Index;
use super::predicate::{ClientPredicate, SortKey};
use crate::errors::CommandError;

pub trait Model {
    fn client_book(&self) -> &ClientBook;

    /// Replaces the whole client book, keeping predicate and sort order.
    fn set_client_book(&mut self, book: ClientBook);

    fn has_client(&self, client: &Client) -> bool;

    /// Adds `client` and resets the view to show every client.
    fn add_client(&mut self, client: Client) -> Result<(), CommandError>;

    /// Replaces `target`, located by value in the master list, with `edited`.
    fn set_client(&mut self, target: &Client, edited: Client) -> Result<(), CommandError>;

    fn delete_client(&mut self, target: &Client) -> Result<(), CommandError>;

    fn filtered_client_list(&self) -> &[Client];

    fn update_filtered_client_list(&mut self, predicate: ClientPredicate);

    fn sort_filtered_client_list(&mut self, key: SortKey);

    /// Resolves a displayed index, `None` when out of bounds.
    fn client_at(&self, index: Index) -> Option<&Client> {
        self.filtered_client_list().get(index.zero_based())
    }
}

#[derive(Debug, Clone, Default)]
pub struct ModelManager {
    client_book: ClientBook,
    predicate: ClientPredicate,
    // Oldest first; the last key is the primary ordering.
    sort_keys: Vec<SortKey>,
    filtered: Vec<Client>,
}

impl ModelManager {
    pub fn new(client_book: ClientBook) -> Self {
        let mut manager = Self {
            client_book,
            ..Default::default()
        };
        manager.refresh();
        manager
    }

    pub fn predicate(&self) -> &ClientPredicate {
        &self.predicate
    }

    pub fn sort_keys(&self) -> &[SortKey] {
        &self.sort_keys
    }

    fn refresh(&mut self) {
        let mut view: Vec<Client> = self
            .client_book
            .clients()
            .iter()
            .filter(|c| self.predicate.test(c))
            .cloned()
            .collect();
        for key in &self.sort_keys {
            key.apply(&mut view);
        }
        log::trace!(
            "Displayed list recomputed: {} of {} clients",
            view.len(),
            self.client_book.len()
        );
        self.filtered = view;
    }
}

impl Model for ModelManager {
    fn client_book(&self) -> &ClientBook {
        &self.client_book
    }

    fn set_client_book(&mut self, book: ClientBook) {
        self.client_book = book;
        self.refresh();
    }

    fn has_client(&self, client: &Client) -> bool {
        self.client_book.has_client(client)
    }

    fn add_client(&mut self, client: Client) -> Result<(), CommandError> {
        self.client_book.add_client(client)?;
        self.predicate = ClientPredicate::ShowAll;
        self.refresh();
        Ok(())
    }

    fn set_client(&mut self, target: &Client, edited: Client) -> Result<(), CommandError> {
        self.client_book.set_client(target, edited)?;
        self.refresh();
        Ok(())
    }

    fn delete_client(&mut self, target: &Client) -> Result<(), CommandError> {
        self.client_book.remove_client(target)?;
        self.refresh();
        Ok(())
    }

    fn filtered_client_list(&self) -> &[Client] {
        &self.filtered
    }

    fn update_filtered_client_list(&mut self, predicate: ClientPredicate) {
        self.predicate = predicate;
        self.refresh();
    }

    fn sort_filtered_client_list(&mut self, key: SortKey) {
        self.sort_keys.retain(|k| *k != key);
        self.sort_keys.push(key);
        self.refresh();
    }
}
