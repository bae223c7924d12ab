//! Commands that add policies to, or remove policies from, a single client.

use std::collections::BTreeSet;
use std::fmt;

use super::CommandResult;
use crate::errors::CommandError;
use crate::logic::messages::{format_client, MESSAGE_USE_PRIORITY_COMMAND};
use crate::model::{Client, Index, Model, Tag};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddPolicyCommand {
    client_index: Index,
    policies_to_add: BTreeSet<Tag>,
}

impl AddPolicyCommand {
    pub const COMMAND_WORD: &'static str = "addpolicy";
    pub const MESSAGE_USAGE: &'static str = "addpolicy: Adds one or more policies to the client \
        identified by the index number used in the displayed client list.\n\
        Parameters: INDEX (must be a positive integer) t/POLICY [t/POLICY]...\n\
        Example: addpolicy 1 t/Life Insurance t/Car Insurance";

    pub fn new(client_index: Index, policies_to_add: BTreeSet<Tag>) -> Self {
        Self {
            client_index,
            policies_to_add,
        }
    }

    pub fn success_message(client: &Client) -> String {
        format!("Added policy to client: {}", format_client(client))
    }

    pub fn execute(&self, model: &mut dyn Model) -> Result<CommandResult, CommandError> {
        let client = model
            .client_at(self.client_index)
            .cloned()
            .ok_or_else(|| CommandError::invalid_index(Self::MESSAGE_USAGE))?;

        let added: BTreeSet<Tag> = self
            .policies_to_add
            .difference(client.tags())
            .cloned()
            .collect();
        if added.is_empty() {
            return Err(CommandError::PoliciesAlreadyPresent);
        }

        let tags = client.tags().union(&added).cloned().collect();
        let edited = client.with_tags(tags);
        model.set_client(&client, edited.clone())?;

        let mut feedback = Self::success_message(&edited);
        if added.iter().any(Tag::is_priority) {
            feedback.push_str(MESSAGE_USE_PRIORITY_COMMAND);
        }
        Ok(CommandResult::new(feedback))
    }
}

/// Removes the given policies from the indexed client.
///
/// Policies that the client does not hold are ignored as long as at least one
/// of the given policies is present. Removing the priority tag this way is
/// allowed; the feedback then carries [`MESSAGE_USE_PRIORITY_COMMAND`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletePolicyCommand {
    client_index: Index,
    policies_to_delete: BTreeSet<Tag>,
}

impl DeletePolicyCommand {
    pub const COMMAND_WORD: &'static str = "deletepolicy";
    pub const MESSAGE_USAGE: &'static str = "deletepolicy: Deletes one or more policies from the \
        client identified by the index number used in the displayed client list.\n\
        Parameters: INDEX (must be a positive integer) t/POLICY [t/POLICY]...\n\
        Example: deletepolicy 1 t/Life Insurance";

    pub fn new(client_index: Index, policies_to_delete: BTreeSet<Tag>) -> Self {
        Self {
            client_index,
            policies_to_delete,
        }
    }

    pub fn client_index(&self) -> Index {
        self.client_index
    }

    pub fn policies_to_delete(&self) -> &BTreeSet<Tag> {
        &self.policies_to_delete
    }

    pub fn success_message(client: &Client) -> String {
        format!("Deleted policy from client: {}", format_client(client))
    }

    pub fn execute(&self, model: &mut dyn Model) -> Result<CommandResult, CommandError> {
        let client = model
            .client_at(self.client_index)
            .cloned()
            .ok_or_else(|| CommandError::invalid_index(Self::MESSAGE_USAGE))?;

        let removed: BTreeSet<&Tag> = client
            .tags()
            .intersection(&self.policies_to_delete)
            .collect();
        if removed.is_empty() {
            return Err(CommandError::PolicyNotFound);
        }
        let removed_priority = removed.iter().any(|tag| tag.is_priority());

        let remaining = client
            .tags()
            .difference(&self.policies_to_delete)
            .cloned()
            .collect();
        let edited = client.with_tags(remaining);
        model.set_client(&client, edited.clone())?;
        log::debug!(
            "Removed {} policies from client {}",
            removed.len(),
            edited.name()
        );

        let mut feedback = Self::success_message(&edited);
        if removed_priority {
            feedback.push_str(MESSAGE_USE_PRIORITY_COMMAND);
        }
        Ok(CommandResult::new(feedback))
    }
}

/// Field-by-field dump, stable because policies are kept in name order.
impl fmt::Display for DeletePolicyCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let policies: Vec<&str> = self.policies_to_delete.iter().map(Tag::name).collect();
        write!(
            f,
            "DeletePolicyCommand{{client_index={}, policies_to_delete=[{}]}}",
            self.client_index,
            policies.join(", ")
        )
    }
}
