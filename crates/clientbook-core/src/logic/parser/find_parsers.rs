//! Parsers for `find`, `findand` and `findor`.

use super::cli_syntax::*;
use super::tokenizer::tokenize;
use crate::errors::ParseError;
use crate::logic::commands::{
    Command, FindClientAndCommand, FindClientCommand, FindClientOrCommand,
};
use crate::model::{SearchCriterion, SearchField};

const SEARCH_FIELDS: [(Prefix, SearchField); 5] = [
    (PREFIX_NAME, SearchField::Name),
    (PREFIX_PHONE, SearchField::Phone),
    (PREFIX_EMAIL, SearchField::Email),
    (PREFIX_ADDRESS, SearchField::Address),
    (PREFIX_POLICY, SearchField::Policy),
];

pub fn parse_find_client(args: &str) -> Result<Command, ParseError> {
    let keywords: Vec<String> = args.split_whitespace().map(str::to_string).collect();
    if keywords.is_empty() {
        return Err(ParseError::InvalidFormat(
            FindClientCommand::MESSAGE_USAGE.to_string(),
        ));
    }
    Ok(Command::FindClient(FindClientCommand::new(keywords)))
}

/// Criteria in prefix order, then in the order given.
fn parse_criteria(args: &str, usage: &str) -> Result<Vec<SearchCriterion>, ParseError> {
    let prefixes = SEARCH_FIELDS.map(|(prefix, _)| prefix);
    let map = tokenize(args, &prefixes);
    if !map.preamble().is_empty() {
        return Err(ParseError::InvalidFormat(usage.to_string()));
    }

    let mut criteria = Vec::new();
    for (prefix, field) in SEARCH_FIELDS {
        for keyword in map.all_values(prefix) {
            if keyword.is_empty() {
                return Err(ParseError::InvalidFormat(usage.to_string()));
            }
            criteria.push(SearchCriterion::new(field, keyword.as_str()));
        }
    }
    if criteria.is_empty() {
        return Err(ParseError::InvalidFormat(usage.to_string()));
    }
    Ok(criteria)
}

pub fn parse_find_client_and(args: &str) -> Result<Command, ParseError> {
    let criteria = parse_criteria(args, FindClientAndCommand::MESSAGE_USAGE)?;
    Ok(Command::FindClientAnd(FindClientAndCommand::new(criteria)))
}

pub fn parse_find_client_or(args: &str) -> Result<Command, ParseError> {
    let criteria = parse_criteria(args, FindClientOrCommand::MESSAGE_USAGE)?;
    Ok(Command::FindClientOr(FindClientOrCommand::new(criteria)))
}
