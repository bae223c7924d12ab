//! Executable commands.
//!
//! Every user instruction is parsed into one variant of [`Command`]. A command
//! holds only validated parameters; anything that depends on model state, such
//! as whether an index is in bounds, is checked when it executes. Execution
//! validates fully before its single model mutation, so a failed command leaves
//! the model untouched.

pub mod client;
pub mod find;
pub mod general;
pub mod policy;
pub mod priority;

pub use client::{AddClientCommand, DeleteClientCommand, EditClientDescriptor, EditCommand, UpdateClientCommand};
pub use find::{FindClientAndCommand, FindClientCommand, FindClientOrCommand};
pub use general::{ClearCommand, ExitCommand, HelpCommand, ListCommand, SortCommand};
pub use policy::{AddPolicyCommand, DeletePolicyCommand};
pub use priority::{PriorityCommand, SortPriorityCommand};

use crate::errors::CommandError;
use crate::model::Model;

/// Outcome of a successful command, consumed by the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    pub feedback_to_user: String,
    pub show_help: bool,
    pub exit: bool,
}

impl CommandResult {
    pub fn new(feedback_to_user: impl Into<String>) -> Self {
        Self {
            feedback_to_user: feedback_to_user.into(),
            show_help: false,
            exit: false,
        }
    }

    pub fn help(feedback_to_user: impl Into<String>) -> Self {
        Self {
            show_help: true,
            ..Self::new(feedback_to_user)
        }
    }

    pub fn exit(feedback_to_user: impl Into<String>) -> Self {
        Self {
            exit: true,
            ..Self::new(feedback_to_user)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    AddClient(AddClientCommand),
    AddPolicy(AddPolicyCommand),
    Edit(EditCommand),
    UpdateClient(UpdateClientCommand),
    DeleteClient(DeleteClientCommand),
    DeletePolicy(DeletePolicyCommand),
    Clear(ClearCommand),
    FindClient(FindClientCommand),
    FindClientAnd(FindClientAndCommand),
    FindClientOr(FindClientOrCommand),
    List(ListCommand),
    Exit(ExitCommand),
    Help(HelpCommand),
    Priority(PriorityCommand),
    Sort(SortCommand),
    SortPriority(SortPriorityCommand),
}

impl Command {
    pub fn execute(&self, model: &mut dyn Model) -> Result<CommandResult, CommandError> {
        match self {
            Command::AddClient(command) => command.execute(model),
            Command::AddPolicy(command) => command.execute(model),
            Command::Edit(command) => command.execute(model),
            Command::UpdateClient(command) => command.execute(model),
            Command::DeleteClient(command) => command.execute(model),
            Command::DeletePolicy(command) => command.execute(model),
            Command::Clear(command) => command.execute(model),
            Command::FindClient(command) => command.execute(model),
            Command::FindClientAnd(command) => command.execute(model),
            Command::FindClientOr(command) => command.execute(model),
            Command::List(command) => command.execute(model),
            Command::Exit(command) => command.execute(model),
            Command::Help(command) => command.execute(model),
            Command::Priority(command) => command.execute(model),
            Command::Sort(command) => command.execute(model),
            Command::SortPriority(command) => command.execute(model),
        }
    }

    /// Whether a successful execution may have changed the client book.
    pub fn mutates_client_book(&self) -> bool {
        matches!(
            self,
            Command::AddClient(_)
                | Command::AddPolicy(_)
                | Command::Edit(_)
                | Command::UpdateClient(_)
                | Command::DeleteClient(_)
                | Command::DeletePolicy(_)
                | Command::Clear(_)
                | Command::Priority(_)
        )
    }
}
