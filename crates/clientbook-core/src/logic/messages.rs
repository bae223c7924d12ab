//! User-facing messages shared across parsers and commands.

use crate::model::Client;

pub const MESSAGE_UNKNOWN_COMMAND: &str = "Unknown command";
pub const MESSAGE_INVALID_INDEX: &str = "Index is not a non-zero unsigned integer.";
pub const MESSAGE_INVALID_CLIENT_DISPLAYED_INDEX: &str = "The client index provided is invalid\n";
pub const MESSAGE_CLIENTS_LISTED_OVERVIEW: &str = "clients listed!";
pub const MESSAGE_DUPLICATE_FIELDS: &str =
    "Multiple values specified for the following single-valued field(s): ";
pub const MESSAGE_NOT_EDITED: &str = "At least one field to edit must be provided.";
pub const MESSAGE_DUPLICATE_CLIENT: &str = "This client already exists in the client book";
pub const MESSAGE_POLICY_NOT_FOUND: &str = "The specified policy does not exist for this client.";
pub const MESSAGE_POLICIES_ALREADY_PRESENT: &str = "The client already holds every specified policy.";
pub const MESSAGE_USE_PRIORITY_COMMAND: &str =
    "\nNote: please use the priority command for future changes to a client's priority.";

pub fn invalid_command_format(usage: &str) -> String {
    format!("Invalid command format! \n{usage}")
}

pub fn duplicate_fields(prefixes: &[String]) -> String {
    format!("{MESSAGE_DUPLICATE_FIELDS}{}", prefixes.join(" "))
}

pub fn clients_listed(count: usize) -> String {
    format!("{count} {MESSAGE_CLIENTS_LISTED_OVERVIEW}")
}

/// Renders a client for inclusion in feedback text.
pub fn format_client(client: &Client) -> String {
    client.to_string()
}
