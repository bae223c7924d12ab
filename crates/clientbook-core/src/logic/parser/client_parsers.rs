//! Parsers for `add`, `edit`, `update` and `delete`.

use super::cli_syntax::*;
use super::tokenizer::{tokenize, ArgumentMultimap};
use std::collections::BTreeSet;

use super::util::{
    parse_address, parse_email, parse_name, parse_phone, parse_required_index, parse_tags,
};
use crate::errors::ParseError;
use crate::logic::commands::{
    AddClientCommand, Command, DeleteClientCommand, EditClientDescriptor, EditCommand,
    UpdateClientCommand,
};
use crate::model::{Client, Tag};

pub fn parse_add_client(args: &str) -> Result<Command, ParseError> {
    let map = tokenize(
        args,
        &[PREFIX_NAME, PREFIX_PHONE, PREFIX_EMAIL, PREFIX_ADDRESS, PREFIX_POLICY],
    );
    if !map.are_all_present(&[PREFIX_NAME, PREFIX_PHONE, PREFIX_EMAIL, PREFIX_ADDRESS])
        || !map.preamble().is_empty()
    {
        return Err(ParseError::InvalidFormat(
            AddClientCommand::MESSAGE_USAGE.to_string(),
        ));
    }
    map.verify_no_duplicate_prefixes_for(&[PREFIX_NAME, PREFIX_PHONE, PREFIX_EMAIL, PREFIX_ADDRESS])?;

    let client = Client::new(
        parse_name(map.value(PREFIX_NAME).unwrap_or_default())?,
        parse_phone(map.value(PREFIX_PHONE).unwrap_or_default())?,
        parse_email(map.value(PREFIX_EMAIL).unwrap_or_default())?,
        parse_address(map.value(PREFIX_ADDRESS).unwrap_or_default())?,
        parse_tags(map.all_values(PREFIX_POLICY))?,
    );
    Ok(Command::AddClient(AddClientCommand::new(client)))
}

/// Reads the optional contact fields shared by `edit` and `update`.
fn contact_descriptor(map: &ArgumentMultimap) -> Result<EditClientDescriptor, ParseError> {
    Ok(EditClientDescriptor {
        phone: map.value(PREFIX_PHONE).map(parse_phone).transpose()?,
        email: map.value(PREFIX_EMAIL).map(parse_email).transpose()?,
        address: map.value(PREFIX_ADDRESS).map(parse_address).transpose()?,
        ..Default::default()
    })
}

pub fn parse_edit(args: &str) -> Result<Command, ParseError> {
    let map = tokenize(
        args,
        &[PREFIX_NAME, PREFIX_PHONE, PREFIX_EMAIL, PREFIX_ADDRESS, PREFIX_POLICY],
    );
    let index = parse_required_index(map.preamble(), EditCommand::MESSAGE_USAGE)?;
    map.verify_no_duplicate_prefixes_for(&[PREFIX_NAME, PREFIX_PHONE, PREFIX_EMAIL, PREFIX_ADDRESS])?;

    let mut descriptor = contact_descriptor(&map)?;
    descriptor.name = map.value(PREFIX_NAME).map(parse_name).transpose()?;
    descriptor.tags = parse_tags_for_edit(map.all_values(PREFIX_POLICY))?;
    if !descriptor.is_any_field_edited() {
        return Err(ParseError::NoFieldEdited);
    }
    Ok(Command::Edit(EditCommand::new(index, descriptor)))
}

/// `None` when no `t/` was given; a lone empty `t/` clears the policies.
fn parse_tags_for_edit(values: &[String]) -> Result<Option<BTreeSet<Tag>>, ParseError> {
    if values.is_empty() {
        return Ok(None);
    }
    if values.len() == 1 && values[0].is_empty() {
        return Ok(Some(Default::default()));
    }
    parse_tags(values).map(Some)
}

pub fn parse_update_client(args: &str) -> Result<Command, ParseError> {
    let map = tokenize(args, &[PREFIX_NAME, PREFIX_PHONE, PREFIX_EMAIL, PREFIX_ADDRESS]);
    if !map.is_present(PREFIX_NAME) || !map.preamble().is_empty() {
        return Err(ParseError::InvalidFormat(
            UpdateClientCommand::MESSAGE_USAGE.to_string(),
        ));
    }
    map.verify_no_duplicate_prefixes_for(&[PREFIX_NAME, PREFIX_PHONE, PREFIX_EMAIL, PREFIX_ADDRESS])?;

    let name = parse_name(map.value(PREFIX_NAME).unwrap_or_default())?;
    let descriptor = contact_descriptor(&map)?;
    if !descriptor.is_any_field_edited() {
        return Err(ParseError::NoFieldEdited);
    }
    Ok(Command::UpdateClient(UpdateClientCommand::new(name, descriptor)))
}

pub fn parse_delete_client(args: &str) -> Result<Command, ParseError> {
    let index = parse_required_index(args, DeleteClientCommand::MESSAGE_USAGE)?;
    Ok(Command::DeleteClient(DeleteClientCommand::new(index)))
}
