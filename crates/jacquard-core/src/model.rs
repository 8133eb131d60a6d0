//! The assembled model: element sequences plus the derived alias index.

use std::collections::{BTreeSet, HashMap};

use log::trace;
use serde::Serialize;

use crate::element::Element;

/// Where an alias points inside the model.
#[derive(Debug, Clone, Copy)]
enum Slot {
    Node(usize),
    Rel(usize),
}

/// A complete model: ordered node elements, ordered relationship elements,
/// and an alias index derived from both.
///
/// The alias index is a build artifact, not a source of truth. It is empty on
/// construction and after any direct mutation of the element sequences;
/// callers rebuild it with [`Model::index_aliases`] before using
/// [`Model::element`]. Sequence order is preserved end to end because it
/// drives the order of generated statements.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Model {
    /// Node elements in authored order.
    pub nodes: Vec<Element>,
    /// Relationship elements in authored order.
    pub rels: Vec<Element>,
    /// Derived alias index. Skipped during serialization; renderers resolve
    /// aliases through helper functions instead.
    #[serde(skip)]
    alias_map: HashMap<String, Slot>,
}

impl Model {
    /// Creates a model from element sequences with an unbuilt alias index.
    pub fn new(nodes: Vec<Element>, rels: Vec<Element>) -> Self {
        Self {
            nodes,
            rels,
            alias_map: HashMap::new(),
        }
    }

    /// Rebuilds the alias index from the element sequences.
    ///
    /// Returns the set of aliases that occur more than once. On a collision
    /// the earliest element keeps the alias; callers that care (the
    /// validator does) must treat a non-empty return as fatal rather than
    /// accept the silent shadowing.
    pub fn index_aliases(&mut self) -> BTreeSet<String> {
        self.alias_map.clear();
        let mut duplicates = BTreeSet::new();

        let slots = self
            .nodes
            .iter()
            .enumerate()
            .map(|(i, element)| (element.alias.clone(), Slot::Node(i)))
            .chain(
                self.rels
                    .iter()
                    .enumerate()
                    .map(|(i, element)| (element.alias.clone(), Slot::Rel(i))),
            );

        for (alias, slot) in slots {
            if self.alias_map.contains_key(&alias) {
                duplicates.insert(alias);
            } else {
                self.alias_map.insert(alias, slot);
            }
        }

        trace!(
            aliases = self.alias_map.len(),
            duplicates = duplicates.len();
            "Alias index rebuilt"
        );
        duplicates
    }

    /// Looks up an element by alias. Returns `None` for unknown aliases and
    /// before [`Model::index_aliases`] has been called.
    pub fn element(&self, alias: &str) -> Option<&Element> {
        match self.alias_map.get(alias)? {
            Slot::Node(i) => self.nodes.get(*i),
            Slot::Rel(i) => self.rels.get(*i),
        }
    }

    /// Returns `true` if an element with this alias is indexed.
    pub fn contains_alias(&self, alias: &str) -> bool {
        self.alias_map.contains_key(alias)
    }

    /// All elements, nodes first, each sequence in authored order.
    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.nodes.iter().chain(self.rels.iter())
    }

    /// Total number of elements.
    pub fn len(&self) -> usize {
        self.nodes.len() + self.rels.len()
    }

    /// Returns `true` when the model has no elements at all.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.rels.is_empty()
    }
}
