//! Splits an argument tail into a preamble and `prefix/value` pairs.
//!
//! A prefix is recognised only at the start of the tail or right after
//! whitespace, so `t/` inside a value such as `a/Blk 5, Lot/t/3` is not taken
//! as a new argument unless it is space-separated. Each value runs until the
//! next recognised prefix or the end of the tail and is trimmed.

use std::collections::HashMap;

use super::cli_syntax::Prefix;
use crate::errors::ParseError;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgumentMultimap {
    preamble: String,
    values: HashMap<Prefix, Vec<String>>,
}

impl ArgumentMultimap {
    /// Text before the first prefix, trimmed.
    pub fn preamble(&self) -> &str {
        &self.preamble
    }

    /// The last value given for `prefix`.
    pub fn value(&self, prefix: Prefix) -> Option<&str> {
        self.values
            .get(&prefix)
            .and_then(|values| values.last())
            .map(String::as_str)
    }

    pub fn all_values(&self, prefix: Prefix) -> &[String] {
        self.values.get(&prefix).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn is_present(&self, prefix: Prefix) -> bool {
        self.values.contains_key(&prefix)
    }

    pub fn are_all_present(&self, prefixes: &[Prefix]) -> bool {
        prefixes.iter().all(|p| self.is_present(*p))
    }

    /// Fails when any of `prefixes` was given more than once.
    pub fn verify_no_duplicate_prefixes_for(&self, prefixes: &[Prefix]) -> Result<(), ParseError> {
        let duplicated: Vec<String> = prefixes
            .iter()
            .filter(|p| self.all_values(**p).len() > 1)
            .map(|p| p.to_string())
            .collect();
        if duplicated.is_empty() {
            Ok(())
        } else {
            Err(ParseError::DuplicatePrefixes(duplicated))
        }
    }
}

pub fn tokenize(args: &str, prefixes: &[Prefix]) -> ArgumentMultimap {
    let mut positions: Vec<(usize, Prefix)> = Vec::new();
    for prefix in prefixes {
        let needle = prefix.as_str();
        let mut from = 0;
        while let Some(found) = args[from..].find(needle) {
            let at = from + found;
            let at_boundary = args[..at]
                .chars()
                .next_back()
                .map_or(true, char::is_whitespace);
            if at_boundary {
                positions.push((at, *prefix));
            }
            from = at + needle.len();
        }
    }
    positions.sort_by_key(|(at, _)| *at);

    let preamble_end = positions.first().map_or(args.len(), |(at, _)| *at);
    let mut map = ArgumentMultimap {
        preamble: args[..preamble_end].trim().to_string(),
        values: HashMap::new(),
    };
    for (i, (at, prefix)) in positions.iter().enumerate() {
        let start = at + prefix.as_str().len();
        let end = positions.get(i + 1).map_or(args.len(), |(next, _)| *next);
        map.values
            .entry(*prefix)
            .or_default()
            .push(args[start..end].trim().to_string());
    }
    map
}
