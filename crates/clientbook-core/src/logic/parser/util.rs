//! Field-level parsing helpers shared by the command parsers.

use std::collections::BTreeSet;

use crate::errors::ParseError;
use crate::model::{Address, Email, Index, Name, Phone, Tag};

/// Parses a one-based, non-zero unsigned index. Leading and trailing
/// whitespace is ignored; signs are rejected.
pub fn parse_index(raw: &str) -> Result<Index, ParseError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_digit()) {
        return Err(ParseError::InvalidIndex);
    }
    trimmed
        .parse::<usize>()
        .ok()
        .and_then(Index::from_one_based)
        .ok_or(ParseError::InvalidIndex)
}

/// Like [`parse_index`], but a missing index is a format error carrying `usage`.
pub fn parse_required_index(raw: &str, usage: &str) -> Result<Index, ParseError> {
    if raw.trim().is_empty() {
        return Err(ParseError::InvalidFormat(usage.to_string()));
    }
    parse_index(raw)
}

pub fn parse_name(raw: &str) -> Result<Name, ParseError> {
    Ok(Name::parse(raw)?)
}

pub fn parse_phone(raw: &str) -> Result<Phone, ParseError> {
    Ok(Phone::parse(raw)?)
}

pub fn parse_email(raw: &str) -> Result<Email, ParseError> {
    Ok(Email::parse(raw)?)
}

pub fn parse_address(raw: &str) -> Result<Address, ParseError> {
    Ok(Address::parse(raw)?)
}

pub fn parse_tag(raw: &str) -> Result<Tag, ParseError> {
    Ok(Tag::parse(raw)?)
}

pub fn parse_tags(raw: &[String]) -> Result<BTreeSet<Tag>, ParseError> {
    raw.iter().map(|r| parse_tag(r)).collect()
}
