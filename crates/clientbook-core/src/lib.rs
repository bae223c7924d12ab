//! Command interpretation and execution core for an insurance client book.
//!
//! A client book holds client records whose tags are the insurance policies
//! the client carries, one of which may be the reserved priority tag. Users
//! drive it with single-line textual commands; this crate turns such a line
//! into a validated [`Command`] and executes it against a [`Model`].
//!
//! # Architecture Overview
//!
//! - **Model**: field value objects, tags, clients, the client book and the
//!   model manager that maintains the filtered and sorted view
//! - **Logic**: the argument tokenizer, the command-word dispatcher, one parser
//!   per command kind, and the executable commands themselves
//! - **Storage**: JSON persistence of the client book
//! - **Configuration**: YAML application settings

pub mod config;
pub mod errors;
pub mod logic;
pub mod model;
pub mod storage;

pub use config::{AppConfig, ConfigLoader};
pub use errors::{ClientBookError, CommandError, ParseError, ValidationError};
pub use logic::commands::{Command, CommandResult};
pub use logic::parser::parse_command;
pub use logic::LogicManager;
pub use model::{Client, ClientBook, Model, ModelManager, Tag};
pub use storage::{ClientBookStorage, JsonClientBookStorage};
