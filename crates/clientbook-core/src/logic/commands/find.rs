//! Commands that replace the predicate of the displayed client list.

use super::CommandResult;
use crate::errors::CommandError;
use crate::logic::messages::clients_listed;
use crate::model::{ClientPredicate, MatchMode, Model, SearchCriterion};

fn apply(model: &mut dyn Model, predicate: ClientPredicate) -> CommandResult {
    model.update_filtered_client_list(predicate);
    CommandResult::new(clients_listed(model.filtered_client_list().len()))
}

/// Shows clients whose name contains any of the keywords as a whole word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindClientCommand {
    keywords: Vec<String>,
}

impl FindClientCommand {
    pub const COMMAND_WORD: &'static str = "find";
    pub const MESSAGE_USAGE: &'static str = "find: Finds all clients whose names contain any of \
        the specified keywords (case-insensitive) and displays them as a list with index numbers.\n\
        Parameters: KEYWORD [MORE_KEYWORDS]...\n\
        Example: find alice bob charlie";

    pub fn new(keywords: Vec<String>) -> Self {
        Self { keywords }
    }

    pub fn execute(&self, model: &mut dyn Model) -> Result<CommandResult, CommandError> {
        Ok(apply(
            model,
            ClientPredicate::NameKeywords(self.keywords.clone()),
        ))
    }
}

/// Shows clients matching every criterion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindClientAndCommand {
    criteria: Vec<SearchCriterion>,
}

impl FindClientAndCommand {
    pub const COMMAND_WORD: &'static str = "findand";
    pub const MESSAGE_USAGE: &'static str = "findand: Finds all clients matching every given \
        criterion. Names, phones, emails and addresses match on a case-insensitive substring, \
        policies on the whole policy name.\n\
        Parameters: [n/NAME] [p/PHONE] [e/EMAIL] [a/ADDRESS] [t/POLICY]... (at least one)\n\
        Example: findand n/alice t/Life Insurance";

    pub fn new(criteria: Vec<SearchCriterion>) -> Self {
        Self { criteria }
    }

    pub fn execute(&self, model: &mut dyn Model) -> Result<CommandResult, CommandError> {
        Ok(apply(
            model,
            ClientPredicate::Criteria {
                mode: MatchMode::All,
                criteria: self.criteria.clone(),
            },
        ))
    }
}

/// Shows clients matching at least one criterion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindClientOrCommand {
    criteria: Vec<SearchCriterion>,
}

impl FindClientOrCommand {
    pub const COMMAND_WORD: &'static str = "findor";
    pub const MESSAGE_USAGE: &'static str = "findor: Finds all clients matching at least one \
        given criterion. Names, phones, emails and addresses match on a case-insensitive \
        substring, policies on the whole policy name.\n\
        Parameters: [n/NAME] [p/PHONE] [e/EMAIL] [a/ADDRESS] [t/POLICY]... (at least one)\n\
        Example: findor n/alice n/bob t/Car Insurance";

    pub fn new(criteria: Vec<SearchCriterion>) -> Self {
        Self { criteria }
    }

    pub fn execute(&self, model: &mut dyn Model) -> Result<CommandResult, CommandError> {
        Ok(apply(
            model,
            ClientPredicate::Criteria {
                mode: MatchMode::Any,
                criteria: self.criteria.clone(),
            },
        ))
    }
}
