//! The client record.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::fields::{Address, Email, Name, Phone};
use super::tag::Tag;

/// An immutable client record. Edits build a new `Client` and replace the old
/// one in the client book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    name: Name,
    phone: Phone,
    email: Email,
    address: Address,
    #[serde(default)]
    tags: BTreeSet<Tag>,
}

impl Client {
    pub fn new(name: Name, phone: Phone, email: Email, address: Address, tags: BTreeSet<Tag>) -> Self {
        Self {
            name,
            phone,
            email,
            address,
            tags,
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phone(&self) -> &Phone {
        &self.phone
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    pub fn tags(&self) -> &BTreeSet<Tag> {
        &self.tags
    }

    pub fn has_priority(&self) -> bool {
        self.tags.iter().any(Tag::is_priority)
    }

    /// Two clients are the same client when their names match case-insensitively.
    pub fn is_same_client(&self, other: &Client) -> bool {
        self.name.as_str().eq_ignore_ascii_case(other.name.as_str())
    }

    /// Copy of this client carrying `tags` instead of the current tag set.
    pub fn with_tags(&self, tags: BTreeSet<Tag>) -> Client {
        Client {
            tags,
            ..self.clone()
        }
    }
}

/// User-facing rendering used in command feedback.
impl fmt::Display for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}; Phone: {}; Email: {}; Address: {}; Tags: ",
            self.name, self.phone, self.email, self.address
        )?;
        for tag in &self.tags {
            write!(f, "{tag}")?;
        }
        Ok(())
    }
}
