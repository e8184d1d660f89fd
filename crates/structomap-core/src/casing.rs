//! Key-case conversion for projected maps
//!
//! Keys are split into words on separators (`_`, `-`, space, `.`) and on case
//! boundaries. An acronym run followed by a capitalised word is split before
//! its last capital, so `HTTPServer` becomes `HTTP` + `Server`.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Naming convention applied to every key of a projected map
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyCase {
    /// `first_name`
    #[serde(rename = "snake_case")]
    Snake,
    /// `firstName`
    #[serde(rename = "camelCase")]
    Camel,
    /// `FirstName`
    #[serde(rename = "PascalCase")]
    Pascal,
}

impl KeyCase {
    /// Convert a single key to this case
    pub fn apply(self, key: &str) -> String {
        match self {
            KeyCase::Snake => to_snake_case(key),
            KeyCase::Camel => to_camel_case(key),
            KeyCase::Pascal => to_pascal_case(key),
        }
    }
}

impl fmt::Display for KeyCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyCase::Snake => write!(f, "snake_case"),
            KeyCase::Camel => write!(f, "camelCase"),
            KeyCase::Pascal => write!(f, "PascalCase"),
        }
    }
}

impl FromStr for KeyCase {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "snake_case" | "snake" => Ok(KeyCase::Snake),
            "camelcase" | "camel" => Ok(KeyCase::Camel),
            "pascalcase" | "pascal" => Ok(KeyCase::Pascal),
            other => Err(Error::Configuration {
                message: format!(
                    "Unknown key case '{}', expected snake_case, camelCase or PascalCase",
                    other
                ),
            }),
        }
    }
}

fn is_separator(c: char) -> bool {
    matches!(c, '_' | '-' | ' ' | '.')
}

/// Split a key into its words
pub fn split_words(input: &str) -> Vec<String> {
    let chars: Vec<char> = input.chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if is_separator(c) {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        }

        // current is non-empty only when the previous char was not a separator
        if !current.is_empty() && c.is_uppercase() {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            if prev.is_lowercase() || prev.is_numeric() || (prev.is_uppercase() && next_is_lower) {
                words.push(std::mem::take(&mut current));
            }
        }
        current.push(c);
    }

    if !current.is_empty() {
        words.push(current);
    }
    words
}

/// `FirstName` -> `first_name`, `ID` -> `id`
pub fn to_snake_case(input: &str) -> String {
    split_words(input)
        .iter()
        .map(|word| word.to_lowercase())
        .collect::<Vec<_>>()
        .join("_")
}

/// `first_name` -> `FirstName`
///
/// Only separators start a new word here; the remainder of each part is kept
/// as written, so `ID` and `FirstName` come back unchanged.
pub fn to_pascal_case(input: &str) -> String {
    input
        .split(is_separator)
        .filter(|part| !part.is_empty())
        .map(upper_first)
        .collect()
}

/// `FirstName` -> `firstName`, `ID` -> `id`
pub fn to_camel_case(input: &str) -> String {
    lower_first(&to_pascal_case(&to_snake_case(input)))
}

fn upper_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn lower_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}
