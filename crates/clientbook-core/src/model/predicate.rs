//! Predicates and orderings that shape the displayed client list.

use super::client::Client;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    Name,
    Phone,
    Email,
    Address,
    Policy,
}

/// One `prefix/keyword` search term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchCriterion {
    pub field: SearchField,
    pub keyword: String,
}

impl SearchCriterion {
    pub fn new(field: SearchField, keyword: impl Into<String>) -> Self {
        Self {
            field,
            keyword: keyword.into(),
        }
    }

    pub fn matches(&self, client: &Client) -> bool {
        let keyword = self.keyword.to_lowercase();
        let contains = |value: &str| value.to_lowercase().contains(&keyword);
        match self.field {
            SearchField::Name => contains(client.name().as_str()),
            SearchField::Phone => contains(client.phone().as_str()),
            SearchField::Email => contains(client.email().as_str()),
            SearchField::Address => contains(client.address().as_str()),
            SearchField::Policy => client
                .tags()
                .iter()
                .any(|tag| tag.name().to_lowercase() == keyword),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    All,
    Any,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ClientPredicate {
    #[default]
    ShowAll,
    /// Name contains any of the keywords as a whole word.
    NameKeywords(Vec<String>),
    Criteria {
        mode: MatchMode,
        criteria: Vec<SearchCriterion>,
    },
}

impl ClientPredicate {
    pub fn test(&self, client: &Client) -> bool {
        match self {
            ClientPredicate::ShowAll => true,
            ClientPredicate::NameKeywords(keywords) => {
                keywords.iter().any(|k| client.name().contains_word(k))
            }
            ClientPredicate::Criteria { mode, criteria } => match mode {
                MatchMode::All => criteria.iter().all(|c| c.matches(client)),
                MatchMode::Any => criteria.iter().any(|c| c.matches(client)),
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Case-insensitive name, ascending.
    Name,
    /// Priority clients first, order otherwise kept.
    Priority,
}

impl SortKey {
    /// Stable in-place sort of `clients` by this key.
    pub fn apply(&self, clients: &mut [Client]) {
        match self {
            SortKey::Name => clients.sort_by_key(|c| c.name().as_str().to_lowercase()),
            SortKey::Priority => clients.sort_by_key(|c| !c.has_priority()),
        }
    }
}
