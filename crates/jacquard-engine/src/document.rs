//! Raw document records and the YAML load boundary.
//!
//! A model document is a YAML mapping with two sequences, `nodes` and
//! `rels`. Either may be omitted. Records are deserialized into the typed
//! shapes below at the load boundary; the only check deferred past loading
//! is the presence of `label`, which the element builder reports together
//! with every other problem in the document rather than one record at a
//! time.
//!
//! ```yaml
//! nodes:
//!   - label: Person
//!     mode: merge
//!     attr:
//!       key:
//!         id: ${entry}.id
//! rels:
//!   - label: WORKS_AT
//!     alias: worksAt
//!     mode: create
//!     reltype: person -> org
//! ```

use std::{fs, io, path::Path, str::FromStr};

use indexmap::IndexMap;
use serde::Deserialize;
use thiserror::Error;

/// Failure to get a document off disk and into records.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("failed to read model document: {0}")]
    Io(#[from] io::Error),

    #[error("malformed model document: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// A whole authored document: node records and relationship records, in
/// authored order.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawDocument {
    /// Node records.
    #[serde(default)]
    pub nodes: Vec<RawElement>,
    /// Relationship records.
    #[serde(default)]
    pub rels: Vec<RawElement>,
}

impl RawDocument {
    /// Reads and deserializes a document from a file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, DocumentError> {
        let source = fs::read_to_string(path)?;
        Ok(source.parse()?)
    }
}

impl FromStr for RawDocument {
    type Err = serde_yaml::Error;

    fn from_str(source: &str) -> Result<Self, Self::Err> {
        serde_yaml::from_str(source)
    }
}

/// One authored element record, exactly as loaded.
///
/// Everything except `label` is optional; absence and the empty value are
/// equivalent. `custom` deserializes into an opaque JSON value the engine
/// carries through untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawElement {
    /// Target label, e.g. `Person` or `WORKS_AT`. Required, but checked by
    /// the builder so all missing labels in a document surface at once.
    pub label: Option<String>,
    /// Cross-reference alias; defaults to the label with a lowered first
    /// character.
    pub alias: Option<String>,
    /// Query mode; validated late.
    pub mode: Option<String>,
    /// Attribute maps.
    #[serde(default)]
    pub attr: RawAttr,
    /// Index expressions.
    #[serde(default)]
    pub index: Vec<String>,
    /// Constraint expressions.
    #[serde(default)]
    pub constraint: Vec<String>,
    /// Relationship descriptor; only meaningful on `rels` records.
    pub reltype: Option<String>,
    /// Opaque caller payload.
    #[serde(default)]
    pub custom: serde_json::Value,
}

/// The authored attribute maps of one record. Key order is preserved.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawAttr {
    #[serde(default)]
    pub key: IndexMap<String, String>,
    #[serde(default)]
    pub on_create: IndexMap<String, String>,
    #[serde(default)]
    pub on_update: IndexMap<String, String>,
}
