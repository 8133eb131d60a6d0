//! Semantic vocabulary shared across the expansion pipeline.
//!
//! This module defines the small closed vocabularies the rest of the system
//! agrees on:
//!
//! - [`Mode`]: how an element is introduced into the generated query text
//!   (`MATCH`, `MERGE`, or `CREATE` clause family).
//! - [`Direction`]: the canonical relationship direction. Only `->` and `-`
//!   exist after normalization; `<-` is consumed during expansion and
//!   rewritten as a left-to-right arrow with swapped endpoints.
//! - [`lower_first`]: the alias-defaulting rule applied to labels.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How an element is introduced into the generated query text.
///
/// Mode strings in authored documents are matched case-insensitively; the
/// enum is the normalized form.
///
/// # Examples
///
/// ```
/// use jacquard_core::semantic::Mode;
///
/// let mode: Mode = "MERGE".parse().expect("known mode");
/// assert_eq!(mode, Mode::Merge);
/// assert!("delete".parse::<Mode>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Element is looked up with a `MATCH` clause.
    Match,
    /// Element is upserted with a `MERGE` clause.
    Merge,
    /// Element is created unconditionally with a `CREATE` clause.
    Create,
}

impl Mode {
    /// Returns the lowercase query keyword for this mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Match => "match",
            Mode::Merge => "merge",
            Mode::Create => "create",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error returned when a string names no known [`Mode`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown mode `{0}`")]
pub struct ParseModeError(pub String);

impl FromStr for Mode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "match" => Ok(Mode::Match),
            "merge" => Ok(Mode::Merge),
            "create" => Ok(Mode::Create),
            _ => Err(ParseModeError(s.to_string())),
        }
    }
}

/// Canonical relationship direction.
///
/// Serializes as the literal arrow token so rendered templates can splice it
/// directly into query text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Left-to-right arrow, `->`.
    #[serde(rename = "->")]
    Directed,
    /// Undirected edge, `-`.
    #[serde(rename = "-")]
    Undirected,
}

impl Direction {
    /// Returns the arrow token for this direction.
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Directed => "->",
            Direction::Undirected => "-",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Lower-cases only the first character of `s`, leaving the rest untouched.
///
/// This is the alias-defaulting rule: a node labelled `Person` gets the alias
/// `person`, while `HTTPServer` becomes `hTTPServer` rather than being
/// title-cased or fully lowered.
///
/// # Examples
///
/// ```
/// use jacquard_core::semantic::lower_first;
///
/// assert_eq!(lower_first("CamelCase"), "camelCase");
/// assert_eq!(lower_first(""), "");
/// ```
pub fn lower_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}
