//! Priority assignment and priority ordering.

use std::collections::BTreeSet;

use super::CommandResult;
use crate::errors::CommandError;
use crate::logic::messages::format_client;
use crate::model::{Index, Model, SortKey, Tag};

/// Marks the indexed client as a priority client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriorityCommand {
    client_index: Index,
}

impl PriorityCommand {
    pub const COMMAND_WORD: &'static str = "priority";
    pub const MESSAGE_USAGE: &'static str = "priority: Marks the client identified by the index \
        number used in the displayed client list as a priority client.\n\
        Parameters: INDEX (must be a positive integer)\n\
        Example: priority 1";

    pub fn new(client_index: Index) -> Self {
        Self { client_index }
    }

    pub fn execute(&self, model: &mut dyn Model) -> Result<CommandResult, CommandError> {
        let client = model
            .client_at(self.client_index)
            .cloned()
            .ok_or_else(|| CommandError::invalid_index(Self::MESSAGE_USAGE))?;

        // At most one priority tag per client: drop any before assigning.
        let mut tags: BTreeSet<Tag> = client
            .tags()
            .iter()
            .filter(|tag| !tag.is_priority())
            .cloned()
            .collect();
        tags.insert(Tag::Priority);

        let edited = client.with_tags(tags);
        model.set_client(&client, edited.clone())?;
        Ok(CommandResult::new(format!(
            "Marked client as priority: {}",
            format_client(&edited)
        )))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortPriorityCommand;

impl SortPriorityCommand {
    pub const COMMAND_WORD: &'static str = "sortpriority";
    pub const MESSAGE_SUCCESS: &'static str = "Sorted clients by priority";

    pub fn execute(&self, model: &mut dyn Model) -> Result<CommandResult, CommandError> {
        model.sort_filtered_client_list(SortKey::Priority);
        Ok(CommandResult::new(Self::MESSAGE_SUCCESS))
    }
}
