//! Element records: the unit of the model.
//!
//! An [`Element`] is one node or relationship, carrying both the raw strings
//! the author wrote and the expanded counterparts the engine fills in. Raw
//! and expanded fields live side by side so a rendered template can reach
//! either form, and so expansion stays an in-place, inspectable step.
//!
//! Attribute maps use [`IndexMap`] because authored key order is significant:
//! it decides the order of generated `SET` clauses. The dependency set is a
//! [`BTreeSet`] so every consumer that iterates it sees sorted alias order.

use std::{collections::BTreeSet, fmt};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::semantic::{Direction, Mode};

/// Whether an element describes a node or a relationship.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Node,
    Relationship,
}

impl ElementKind {
    /// Returns the lowercase noun for this kind, as used in messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            ElementKind::Node => "node",
            ElementKind::Relationship => "relationship",
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The attribute maps of an element.
///
/// Each authored map (`key`, `on_create`, `on_update`) is paired with the
/// `expanded_*` map the engine produces. Expanded maps have the same keys in
/// the same order; only the values change.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AttrSet {
    /// Attributes identifying the element (`MERGE`/`MATCH` key properties).
    #[serde(default)]
    pub key: IndexMap<String, String>,
    /// Expanded form of [`AttrSet::key`].
    #[serde(default)]
    pub expanded_key: IndexMap<String, String>,
    /// Attributes set when the element is first created.
    #[serde(default)]
    pub on_create: IndexMap<String, String>,
    /// Expanded form of [`AttrSet::on_create`].
    #[serde(default)]
    pub expanded_on_create: IndexMap<String, String>,
    /// Attributes set on every write.
    #[serde(default)]
    pub on_update: IndexMap<String, String>,
    /// Expanded form of [`AttrSet::on_update`].
    #[serde(default)]
    pub expanded_on_update: IndexMap<String, String>,
}

impl AttrSet {
    /// Returns `true` if no raw attribute map has any entries.
    pub fn is_empty(&self) -> bool {
        self.key.is_empty() && self.on_create.is_empty() && self.on_update.is_empty()
    }
}

/// One node or relationship record.
///
/// Constructed from a raw document record, then mutated in place by each
/// expansion pass. After validation it is treated as immutable input to
/// rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    /// Node or relationship.
    pub kind: ElementKind,
    /// The label applied to the element in the target graph, e.g. `Person`.
    pub label: String,
    /// Unique short name other elements use to reference this one.
    pub alias: String,
    /// Raw mode string as authored; validated against [`Mode`] late so a
    /// whole document's problems can be reported together.
    #[serde(default)]
    pub mode: String,
    /// Attribute maps, raw and expanded.
    #[serde(default)]
    pub attr: AttrSet,
    /// Raw index expressions.
    #[serde(default)]
    pub index: Vec<String>,
    /// Expanded index expressions, same length and order as `index`.
    #[serde(default)]
    pub expanded_index: Vec<String>,
    /// Raw constraint expressions.
    #[serde(default)]
    pub constraint: Vec<String>,
    /// Expanded constraint expressions, same length and order as `constraint`.
    #[serde(default)]
    pub expanded_constraint: Vec<String>,
    /// Aliases of other elements this element's expressions mention.
    #[serde(default)]
    pub depends_on: BTreeSet<String>,
    /// Raw relationship descriptor, e.g. `person -> org`. Empty for nodes.
    #[serde(default)]
    pub reltype: String,
    /// Canonically ordered endpoint aliases; two entries once expanded.
    #[serde(default)]
    pub expanded_reltype_nodes: Vec<String>,
    /// Canonical direction once expanded; `None` for nodes.
    #[serde(default)]
    pub expanded_reltype_dir: Option<Direction>,
    /// Opaque caller-defined payload. Never touched by the engine.
    #[serde(default)]
    pub custom: serde_json::Value,
}

impl Element {
    /// Creates an empty element of the given kind with a label and alias.
    ///
    /// Every other field starts out empty; the document builder and the
    /// expansion passes fill them in.
    pub fn new(kind: ElementKind, label: impl Into<String>, alias: impl Into<String>) -> Self {
        Self {
            kind,
            label: label.into(),
            alias: alias.into(),
            mode: String::new(),
            attr: AttrSet::default(),
            index: Vec::new(),
            expanded_index: Vec::new(),
            constraint: Vec::new(),
            expanded_constraint: Vec::new(),
            depends_on: BTreeSet::new(),
            reltype: String::new(),
            expanded_reltype_nodes: Vec::new(),
            expanded_reltype_dir: None,
            custom: serde_json::Value::Null,
        }
    }

    /// Returns `true` for node elements.
    pub fn is_node(&self) -> bool {
        self.kind == ElementKind::Node
    }

    /// Returns `true` for relationship elements.
    pub fn is_relationship(&self) -> bool {
        self.kind == ElementKind::Relationship
    }

    /// Case-insensitive comparison of the raw mode string against `mode`.
    ///
    /// Returns `false` when the raw mode is empty or unrecognized.
    pub fn mode_is(&self, mode: Mode) -> bool {
        self.mode.parse() == Ok(mode)
    }
}
