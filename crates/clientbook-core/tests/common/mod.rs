//! Shared fixtures for the integration tests.
#![allow(dead_code)]

use clientbook_core::model::{Address, Email, Index, Name, Phone};
use clientbook_core::{Client, ClientBook, ModelManager, Tag};

pub const INDEX_FIRST_CLIENT: usize = 1;
pub const INDEX_SECOND_CLIENT: usize = 2;

pub fn index(one_based: usize) -> Index {
    Index::from_one_based(one_based).unwrap()
}

pub fn client(name: &str, phone: &str, email: &str, address: &str, tags: &[&str]) -> Client {
    Client::new(
        Name::parse(name).unwrap(),
        Phone::parse(phone).unwrap(),
        Email::parse(email).unwrap(),
        Address::parse(address).unwrap(),
        tags.iter().map(|t| Tag::parse(t).unwrap()).collect(),
    )
}

pub fn alice() -> Client {
    client(
        "Alice Pauline",
        "94351253",
        "alice@example.com",
        "123, Jurong West Ave 6, #08-111",
        &["Life Insurance"],
    )
}

pub fn benson() -> Client {
    client(
        "Benson Meier",
        "98765432",
        "johnd@example.com",
        "311, Clementi Ave 2, #02-25",
        &["Car Insurance", "Health Insurance"],
    )
}

pub fn carl() -> Client {
    client(
        "Carl Kurz",
        "+49 95352563",
        "heinz@example.com",
        "wall street",
        &["Priority", "Home Insurance"],
    )
}

pub fn daniel() -> Client {
    client("Daniel Meier", "-", "cornelia@example.com", "10th street", &[])
}

pub fn typical_clients() -> Vec<Client> {
    vec![alice(), benson(), carl(), daniel()]
}

pub fn typical_model() -> ModelManager {
    ModelManager::new(ClientBook::from_clients(typical_clients()).unwrap())
}

/// Model holding only the first two typical clients.
pub fn two_client_model() -> ModelManager {
    ModelManager::new(ClientBook::from_clients(vec![alice(), benson()]).unwrap())
}
