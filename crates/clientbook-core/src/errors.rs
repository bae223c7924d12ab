//! Error types for the client book
//!
//! Two kinds of error reach the user: [`ParseError`] is raised while a command
//! line is being turned into a command and before the model is touched, and
//! [`CommandError`] is raised while an already parsed command executes. Both are
//! recoverable and carry the text that is shown to the user.

use thiserror::Error;

use crate::logic::messages;

/// A raw field value was rejected by its validator.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ValidationError {
    pub field: &'static str,
    pub message: &'static str,
}

impl ValidationError {
    pub fn new(field: &'static str, message: &'static str) -> Self {
        Self { field, message }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("{}", messages::invalid_command_format(.0))]
    InvalidFormat(String),
    #[error("{}", messages::MESSAGE_UNKNOWN_COMMAND)]
    UnknownCommand,
    #[error("{}", messages::MESSAGE_INVALID_INDEX)]
    InvalidIndex,
    #[error("{}", messages::duplicate_fields(.0))]
    DuplicatePrefixes(Vec<String>),
    #[error(transparent)]
    Field(#[from] ValidationError),
    #[error("{}", messages::MESSAGE_NOT_EDITED)]
    NoFieldEdited,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error(
        "{}{}",
        messages::MESSAGE_INVALID_CLIENT_DISPLAYED_INDEX,
        messages::invalid_command_format(.usage)
    )]
    InvalidClientIndex { usage: String },
    #[error("{}", messages::MESSAGE_POLICY_NOT_FOUND)]
    PolicyNotFound,
    #[error("{}", messages::MESSAGE_POLICIES_ALREADY_PRESENT)]
    PoliciesAlreadyPresent,
    #[error("{}", messages::MESSAGE_DUPLICATE_CLIENT)]
    DuplicateClient,
    #[error("No client named '{0}' was found in the client book")]
    ClientNotFound(String),
}

impl CommandError {
    pub fn invalid_index(usage: &str) -> Self {
        CommandError::InvalidClientIndex {
            usage: usage.to_string(),
        }
    }
}

/// Crate-level error returned by the logic manager, storage and configuration.
#[derive(Error, Debug, Clone)]
pub enum ClientBookError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Command(#[from] CommandError),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Storage error: {0}")]
    Storage(String),
    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for ClientBookError {
    fn from(err: std::io::Error) -> Self {
        ClientBookError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ClientBookError {
    fn from(err: serde_json::Error) -> Self {
        ClientBookError::Storage(err.to_string())
    }
}
