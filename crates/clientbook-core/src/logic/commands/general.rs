//! Argument-free commands.

use super::CommandResult;
use crate::errors::CommandError;
use crate::model::{ClientBook, ClientPredicate, Model, SortKey};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListCommand;

impl ListCommand {
    pub const COMMAND_WORD: &'static str = "list";
    pub const MESSAGE_SUCCESS: &'static str = "Listed all clients";

    pub fn execute(&self, model: &mut dyn Model) -> Result<CommandResult, CommandError> {
        model.update_filtered_client_list(ClientPredicate::ShowAll);
        Ok(CommandResult::new(Self::MESSAGE_SUCCESS))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClearCommand;

impl ClearCommand {
    pub const COMMAND_WORD: &'static str = "clear";
    pub const MESSAGE_SUCCESS: &'static str = "Client book has been cleared!";

    pub fn execute(&self, model: &mut dyn Model) -> Result<CommandResult, CommandError> {
        model.set_client_book(ClientBook::new());
        Ok(CommandResult::new(Self::MESSAGE_SUCCESS))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCommand;

impl ExitCommand {
    pub const COMMAND_WORD: &'static str = "exit";
    pub const MESSAGE_EXIT_ACKNOWLEDGEMENT: &'static str = "Exiting client book as requested ...";

    pub fn execute(&self, _model: &mut dyn Model) -> Result<CommandResult, CommandError> {
        Ok(CommandResult::exit(Self::MESSAGE_EXIT_ACKNOWLEDGEMENT))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HelpCommand;

impl HelpCommand {
    pub const COMMAND_WORD: &'static str = "help";
    pub const MESSAGE_USAGE: &'static str = "help: Shows program usage instructions.\nExample: help";
    pub const SHOWING_HELP_MESSAGE: &'static str = "Opened help window.";

    pub fn execute(&self, _model: &mut dyn Model) -> Result<CommandResult, CommandError> {
        Ok(CommandResult::help(Self::SHOWING_HELP_MESSAGE))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortCommand;

impl SortCommand {
    pub const COMMAND_WORD: &'static str = "sort";
    pub const MESSAGE_SUCCESS: &'static str = "Sorted clients by name";

    pub fn execute(&self, model: &mut dyn Model) -> Result<CommandResult, CommandError> {
        model.sort_filtered_client_list(SortKey::Name);
        Ok(CommandResult::new(Self::MESSAGE_SUCCESS))
    }
}
