//! Validated value objects for the single-valued client fields.
//!
//! Every field exposes the same contract: `is_valid(raw)` tells whether a raw
//! string belongs to the field's accepted language, and `parse(raw)` trims the
//! input and produces the value or a [`ValidationError`] carrying the field's
//! constraint message.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

static NAME_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[[:alnum:]][[:alnum:] ]*$").unwrap());

// Optional `+CC ` prefix of one to three digits, then three to thirteen digits.
static PHONE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(-|(\+[0-9]{1,3} )?[0-9]{3,13})$").unwrap());

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    let local = r"[[:alnum:]]+([+_.-][[:alnum:]]+)*";
    let label = r"[[:alnum:]]+(-[[:alnum:]]+)*";
    Regex::new(&format!(r"^{local}@({label}\.)*({label}){{2,}}$")).unwrap()
});

static ADDRESS_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^\s].*$").unwrap());

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Name(String);

impl Name {
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Names should only contain alphanumeric characters and spaces, and it should not be blank";

    pub fn is_valid(raw: &str) -> bool {
        NAME_REGEX.is_match(raw)
    }

    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();
        if !Self::is_valid(trimmed) {
            return Err(ValidationError::new("name", Self::MESSAGE_CONSTRAINTS));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whole-word, case-insensitive match against the name.
    pub fn contains_word(&self, word: &str) -> bool {
        self.0
            .split_whitespace()
            .any(|part| part.eq_ignore_ascii_case(word))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Phone(String);

impl Phone {
    pub const MESSAGE_CONSTRAINTS: &'static str = "Phone numbers should only contain numbers, \
        optionally preceded by an international code such as '+65 ', and be 3 to 13 digits long. \
        Use '-' when no phone number is available";

    pub fn is_valid(raw: &str) -> bool {
        PHONE_REGEX.is_match(raw)
    }

    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();
        if !Self::is_valid(trimmed) {
            return Err(ValidationError::new("phone", Self::MESSAGE_CONSTRAINTS));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_provided(&self) -> bool {
        self.0 != "-"
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    pub const MESSAGE_CONSTRAINTS: &'static str = "Emails should be of the format local-part@domain. \
        The local-part should only contain alphanumeric characters and the characters +_.- \
        and may not start or end with them. The domain is made of labels separated by periods, \
        each label made of alphanumeric characters optionally joined by hyphens, \
        and the last label must be at least 2 characters long";

    pub fn is_valid(raw: &str) -> bool {
        EMAIL_REGEX.is_match(raw)
    }

    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();
        if !Self::is_valid(trimmed) {
            return Err(ValidationError::new("email", Self::MESSAGE_CONSTRAINTS));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Address(String);

impl Address {
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Addresses can take any values, and it should not be blank";

    pub fn is_valid(raw: &str) -> bool {
        ADDRESS_REGEX.is_match(raw)
    }

    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();
        if !Self::is_valid(trimmed) {
            return Err(ValidationError::new("address", Self::MESSAGE_CONSTRAINTS));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

macro_rules! string_conversions {
    ($($field:ident),*) => {
        $(
            impl TryFrom<String> for $field {
                type Error = ValidationError;

                fn try_from(raw: String) -> Result<Self, Self::Error> {
                    Self::parse(&raw)
                }
            }

            impl From<$field> for String {
                fn from(value: $field) -> Self {
                    value.0
                }
            }

            impl fmt::Display for $field {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(&self.0)
                }
            }
        )*
    };
}

string_conversions!(Name, Phone, Email, Address);
