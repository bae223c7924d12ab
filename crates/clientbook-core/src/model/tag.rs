//! Policy tags attached to clients.
//!
//! A tag is identified by its name alone: the tag set of a client deduplicates
//! by name, and the reserved name [`PRIORITY_TAG_NAME`] always denotes the
//! priority variant, whichever way the tag was constructed.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

pub const PRIORITY_TAG_NAME: &str = "Priority";

static TAG_NAME_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[[:alnum:]][[:alnum:] ]*$").unwrap());

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Tag {
    Plain(String),
    Priority,
}

impl Tag {
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Policy names should be alphanumeric and may contain spaces";

    pub fn is_valid_tag_name(raw: &str) -> bool {
        TAG_NAME_REGEX.is_match(raw)
    }

    /// Validates `raw` and builds the tag; the reserved name yields [`Tag::Priority`].
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();
        if !Self::is_valid_tag_name(trimmed) {
            return Err(ValidationError::new("policy", Self::MESSAGE_CONSTRAINTS));
        }
        if trimmed == PRIORITY_TAG_NAME {
            return Ok(Tag::Priority);
        }
        Ok(Tag::Plain(trimmed.to_string()))
    }

    pub fn name(&self) -> &str {
        match self {
            Tag::Plain(name) => name,
            Tag::Priority => PRIORITY_TAG_NAME,
        }
    }

    pub fn is_priority(&self) -> bool {
        self.name() == PRIORITY_TAG_NAME
    }
}

impl PartialEq for Tag {
    fn eq(&self, other: &Self) -> bool {
        self.name() == other.name()
    }
}

impl Eq for Tag {}

impl Hash for Tag {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name().hash(state);
    }
}

impl PartialOrd for Tag {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Tag {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name().cmp(other.name())
    }
}

impl TryFrom<String> for Tag {
    type Error = ValidationError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::parse(&raw)
    }
}

impl From<Tag> for String {
    fn from(tag: Tag) -> Self {
        tag.name().to_string()
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn test_reserved_name_is_priority() {
        assert_eq!(Tag::parse("Priority").unwrap(), Tag::Priority);
        assert!(Tag::parse(" Priority ").unwrap().is_priority());
        assert!(!Tag::parse("priority").unwrap().is_priority());
    }

    #[test]
    fn test_invalid_tag_names() {
        assert!(Tag::parse("").is_err());
        assert!(Tag::parse("  ").is_err());
        assert!(Tag::parse("Life-Insurance").is_err());
        assert!(Tag::parse("Life Insurance").is_ok());
    }

    #[test]
    fn test_set_dedups_by_name() {
        let mut tags = BTreeSet::new();
        tags.insert(Tag::Priority);
        tags.insert(Tag::Plain(PRIORITY_TAG_NAME.to_string()));
        tags.insert(Tag::parse("Health Insurance").unwrap());
        assert_eq!(tags.len(), 2);
    }

    #[test]
    fn test_display_and_serde() {
        let tag = Tag::parse("Life Insurance").unwrap();
        assert_eq!(tag.to_string(), "[Life Insurance]");
        let json = serde_json::to_string(&Tag::Priority).unwrap();
        assert_eq!(json, "\"Priority\"");
        let back: Tag = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Tag::Priority);
        assert!(serde_json::from_str::<Tag>("\"\"").is_err());
    }
}
