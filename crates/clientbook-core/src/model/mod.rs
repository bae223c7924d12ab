//! Client, tag and field value objects, the client book and the model manager.

pub mod client;
pub mod client_book;
pub mod fields;
pub mod index;
pub mod manager;
pub mod predicate;
pub mod tag;

pub use client::Client;
pub use client_book::ClientBook;
pub use fields::{Address, Email, Name, Phone};
pub use index::Index;
pub use manager::{Model, ModelManager};
pub use predicate::{ClientPredicate, MatchMode, SearchCriterion, SearchField, SortKey};
pub use tag::{Tag, PRIORITY_TAG_NAME};
