//! Commands that create, edit and delete whole client records.

use std::collections::BTreeSet;

use super::CommandResult;
use crate::errors::CommandError;
use crate::logic::messages::format_client;
use crate::model::{Address, Client, Email, Index, Model, Name, Phone, Tag};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddClientCommand {
    to_add: Client,
}

impl AddClientCommand {
    pub const COMMAND_WORD: &'static str = "add";
    pub const MESSAGE_USAGE: &'static str = "add: Adds a client to the client book.\n\
        Parameters: n/NAME p/PHONE e/EMAIL a/ADDRESS [t/POLICY]...\n\
        Example: add n/John Doe p/98765432 e/johnd@example.com \
        a/311, Clementi Ave 2, #02-25 t/Life Insurance t/Car Insurance";

    pub fn new(to_add: Client) -> Self {
        Self { to_add }
    }

    pub fn execute(&self, model: &mut dyn Model) -> Result<CommandResult, CommandError> {
        if model.has_client(&self.to_add) {
            return Err(CommandError::DuplicateClient);
        }
        model.add_client(self.to_add.clone())?;
        Ok(CommandResult::new(format!(
            "New client added: {}",
            format_client(&self.to_add)
        )))
    }
}

/// The fields an edit replaces; `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditClientDescriptor {
    pub name: Option<Name>,
    pub phone: Option<Phone>,
    pub email: Option<Email>,
    pub address: Option<Address>,
    pub tags: Option<BTreeSet<Tag>>,
}

impl EditClientDescriptor {
    pub fn is_any_field_edited(&self) -> bool {
        self.name.is_some()
            || self.phone.is_some()
            || self.email.is_some()
            || self.address.is_some()
            || self.tags.is_some()
    }

    /// Builds the edited client. A replaced tag set keeps the client's
    /// priority tag; only the dedicated commands change priority.
    pub fn apply(&self, client: &Client) -> Client {
        let tags = match &self.tags {
            Some(tags) => {
                let mut tags = tags.clone();
                if client.has_priority() {
                    tags.insert(Tag::Priority);
                }
                tags
            }
            None => client.tags().clone(),
        };
        Client::new(
            self.name.clone().unwrap_or_else(|| client.name().clone()),
            self.phone.clone().unwrap_or_else(|| client.phone().clone()),
            self.email.clone().unwrap_or_else(|| client.email().clone()),
            self.address.clone().unwrap_or_else(|| client.address().clone()),
            tags,
        )
    }
}

fn replace(model: &mut dyn Model, target: &Client, edited: Client) -> Result<Client, CommandError> {
    if !target.is_same_client(&edited) && model.has_client(&edited) {
        return Err(CommandError::DuplicateClient);
    }
    model.set_client(target, edited.clone())?;
    Ok(edited)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditCommand {
    index: Index,
    descriptor: EditClientDescriptor,
}

impl EditCommand {
    pub const COMMAND_WORD: &'static str = "edit";
    pub const MESSAGE_USAGE: &'static str = "edit: Edits the details of the client identified \
        by the index number used in the displayed client list. Existing values will be \
        overwritten by the input values.\n\
        Parameters: INDEX (must be a positive integer) [n/NAME] [p/PHONE] [e/EMAIL] \
        [a/ADDRESS] [t/POLICY]...\n\
        Example: edit 1 p/91234567 e/johndoe@example.com";

    pub fn new(index: Index, descriptor: EditClientDescriptor) -> Self {
        Self { index, descriptor }
    }

    pub fn execute(&self, model: &mut dyn Model) -> Result<CommandResult, CommandError> {
        let target = model
            .client_at(self.index)
            .cloned()
            .ok_or_else(|| CommandError::invalid_index(Self::MESSAGE_USAGE))?;
        let edited = replace(model, &target, self.descriptor.apply(&target))?;
        Ok(CommandResult::new(format!(
            "Edited Client: {}",
            format_client(&edited)
        )))
    }
}

/// Edits the client with the given name, looked up in the whole client book
/// rather than the displayed list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateClientCommand {
    name: Name,
    descriptor: EditClientDescriptor,
}

impl UpdateClientCommand {
    pub const COMMAND_WORD: &'static str = "update";
    pub const MESSAGE_USAGE: &'static str = "update: Updates the contact details of the client \
        with the given name.\n\
        Parameters: n/NAME [p/PHONE] [e/EMAIL] [a/ADDRESS] (at least one of the optional fields)\n\
        Example: update n/John Doe p/91234567";

    pub fn new(name: Name, descriptor: EditClientDescriptor) -> Self {
        Self { name, descriptor }
    }

    pub fn execute(&self, model: &mut dyn Model) -> Result<CommandResult, CommandError> {
        let target = model
            .client_book()
            .find_by_name(self.name.as_str())
            .cloned()
            .ok_or_else(|| CommandError::ClientNotFound(self.name.to_string()))?;
        let edited = replace(model, &target, self.descriptor.apply(&target))?;
        Ok(CommandResult::new(format!(
            "Updated Client: {}",
            format_client(&edited)
        )))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteClientCommand {
    target_index: Index,
}

impl DeleteClientCommand {
    pub const COMMAND_WORD: &'static str = "delete";
    pub const MESSAGE_USAGE: &'static str = "delete: Deletes the client identified by the index \
        number used in the displayed client list.\n\
        Parameters: INDEX (must be a positive integer)\n\
        Example: delete 1";

    pub fn new(target_index: Index) -> Self {
        Self { target_index }
    }

    pub fn execute(&self, model: &mut dyn Model) -> Result<CommandResult, CommandError> {
        let target = model
            .client_at(self.target_index)
            .cloned()
            .ok_or_else(|| CommandError::invalid_index(Self::MESSAGE_USAGE))?;
        model.delete_client(&target)?;
        Ok(CommandResult::new(format!(
            "Deleted Client: {}",
            format_client(&target)
        )))
    }
}
