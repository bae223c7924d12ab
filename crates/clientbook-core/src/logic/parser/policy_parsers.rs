//! Parsers for `addpolicy`, `deletepolicy` and `priority`.

use std::collections::BTreeSet;

use super::cli_syntax::PREFIX_POLICY;
use super::tokenizer::tokenize;
use super::util::{parse_required_index, parse_tags};
use crate::errors::ParseError;
use crate::logic::commands::{AddPolicyCommand, Command, DeletePolicyCommand, PriorityCommand};
use crate::model::{Index, Tag};

/// Shared shape of the policy commands: `INDEX t/POLICY [t/POLICY]...`.
fn parse_index_and_policies(args: &str, usage: &str) -> Result<(Index, BTreeSet<Tag>), ParseError> {
    let map = tokenize(args, &[PREFIX_POLICY]);
    let index = parse_required_index(map.preamble(), usage)?;
    if !map.is_present(PREFIX_POLICY) {
        return Err(ParseError::InvalidFormat(usage.to_string()));
    }
    let policies = parse_tags(map.all_values(PREFIX_POLICY))?;
    Ok((index, policies))
}

pub fn parse_add_policy(args: &str) -> Result<Command, ParseError> {
    let (index, policies) = parse_index_and_policies(args, AddPolicyCommand::MESSAGE_USAGE)?;
    Ok(Command::AddPolicy(AddPolicyCommand::new(index, policies)))
}

pub fn parse_delete_policy(args: &str) -> Result<Command, ParseError> {
    let (index, policies) = parse_index_and_policies(args, DeletePolicyCommand::MESSAGE_USAGE)?;
    Ok(Command::DeletePolicy(DeletePolicyCommand::new(index, policies)))
}

pub fn parse_priority(args: &str) -> Result<Command, ParseError> {
    let index = parse_required_index(args, PriorityCommand::MESSAGE_USAGE)?;
    Ok(Command::Priority(PriorityCommand::new(index)))
}
