//! Turns a raw command line into a [`Command`].
//!
//! The first whitespace-delimited token selects a parser from a fixed,
//! case-insensitive registry; the rest of the line, leading whitespace
//! included, is handed to that parser untouched.

pub mod cli_syntax;
pub mod client_parsers;
pub mod find_parsers;
pub mod policy_parsers;
pub mod tokenizer;
pub mod util;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::ParseError;
use crate::logic::commands::*;

static BASIC_COMMAND_FORMAT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)^(?P<command_word>\S+)(?P<arguments>.*)$").unwrap());

type ParserFn = fn(&str) -> Result<Command, ParseError>;

fn parse_clear(_args: &str) -> Result<Command, ParseError> {
    Ok(Command::Clear(ClearCommand))
}

fn parse_list(_args: &str) -> Result<Command, ParseError> {
    Ok(Command::List(ListCommand))
}

fn parse_exit(_args: &str) -> Result<Command, ParseError> {
    Ok(Command::Exit(ExitCommand))
}

fn parse_help(_args: &str) -> Result<Command, ParseError> {
    Ok(Command::Help(HelpCommand))
}

fn parse_sort(_args: &str) -> Result<Command, ParseError> {
    Ok(Command::Sort(SortCommand))
}

fn parse_sort_priority(_args: &str) -> Result<Command, ParseError> {
    Ok(Command::SortPriority(SortPriorityCommand))
}

/// Command words, lowercase, and the parser each one selects.
pub const COMMAND_PARSERS: &[(&str, ParserFn)] = &[
    (AddClientCommand::COMMAND_WORD, client_parsers::parse_add_client),
    (AddPolicyCommand::COMMAND_WORD, policy_parsers::parse_add_policy),
    (EditCommand::COMMAND_WORD, client_parsers::parse_edit),
    (UpdateClientCommand::COMMAND_WORD, client_parsers::parse_update_client),
    (DeleteClientCommand::COMMAND_WORD, client_parsers::parse_delete_client),
    (DeletePolicyCommand::COMMAND_WORD, policy_parsers::parse_delete_policy),
    (ClearCommand::COMMAND_WORD, parse_clear),
    (FindClientCommand::COMMAND_WORD, find_parsers::parse_find_client),
    (ListCommand::COMMAND_WORD, parse_list),
    (ExitCommand::COMMAND_WORD, parse_exit),
    (HelpCommand::COMMAND_WORD, parse_help),
    (PriorityCommand::COMMAND_WORD, policy_parsers::parse_priority),
    (FindClientAndCommand::COMMAND_WORD, find_parsers::parse_find_client_and),
    (FindClientOrCommand::COMMAND_WORD, find_parsers::parse_find_client_or),
    (SortCommand::COMMAND_WORD, parse_sort),
    (SortPriorityCommand::COMMAND_WORD, parse_sort_priority),
];

pub fn parse_command(user_input: &str) -> Result<Command, ParseError> {
    let captures = BASIC_COMMAND_FORMAT
        .captures(user_input.trim())
        .ok_or_else(|| ParseError::InvalidFormat(HelpCommand::MESSAGE_USAGE.to_string()))?;
    let command_word = &captures["command_word"];
    let arguments = &captures["arguments"];

    log::debug!("Command word: {}; Arguments: {}", command_word, arguments);

    let lookup = command_word.to_lowercase();
    match COMMAND_PARSERS.iter().find(|(word, _)| *word == lookup) {
        Some((_, parser)) => parser(arguments),
        None => {
            log::trace!("This user input caused a parse error: {}", user_input);
            Err(ParseError::UnknownCommand)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Index;

    #[test]
    fn test_dispatch_is_case_insensitive() {
        let line = "n/Amy Bee p/11111111 e/amy@example.com a/Block 312 t/Car";
        assert_eq!(
            parse_command(&format!("ADD {line}")).unwrap(),
            parse_command(&format!("add {line}")).unwrap()
        );
        assert_eq!(
            parse_command("DeletePolicy 1 t/Car").unwrap(),
            parse_command("deletepolicy 1 t/Car").unwrap()
        );
    }

    #[test]
    fn test_argument_free_commands_ignore_tail() {
        assert_eq!(parse_command("list"), Ok(Command::List(ListCommand)));
        assert_eq!(parse_command("list 3"), Ok(Command::List(ListCommand)));
        assert_eq!(parse_command("  CLEAR  "), Ok(Command::Clear(ClearCommand)));
        assert_eq!(parse_command("exit"), Ok(Command::Exit(ExitCommand)));
        assert_eq!(parse_command("help"), Ok(Command::Help(HelpCommand)));
        assert_eq!(parse_command("sort"), Ok(Command::Sort(SortCommand)));
        assert_eq!(
            parse_command("sortpriority"),
            Ok(Command::SortPriority(SortPriorityCommand))
        );
    }

    #[test]
    fn test_every_registered_word_dispatches() {
        for (word, _) in COMMAND_PARSERS {
            let result = parse_command(word);
            assert_ne!(result, Err(ParseError::UnknownCommand), "{word}");
        }
        assert_eq!(COMMAND_PARSERS.len(), 16);
    }

    #[test]
    fn test_index_commands() {
        assert_eq!(
            parse_command("delete 1"),
            Ok(Command::DeleteClient(DeleteClientCommand::new(Index::from_zero_based(0))))
        );
        assert_eq!(parse_command("priority x"), Err(ParseError::InvalidIndex));
    }

    #[test]
    fn test_unknown_and_blank_input() {
        assert_eq!(parse_command("unknownCommand"), Err(ParseError::UnknownCommand));
        assert_eq!(
            parse_command("   "),
            Err(ParseError::InvalidFormat(HelpCommand::MESSAGE_USAGE.to_string()))
        );
        assert_eq!(
            parse_command("").unwrap_err().to_string(),
            format!("Invalid command format! \n{}", HelpCommand::MESSAGE_USAGE)
        );
    }
}
