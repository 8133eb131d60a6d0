//! Pure query-building helpers.
//!
//! These functions are the fixed namespace a template renderer works with:
//! stateless, side-effect free, and operating only on already-expanded
//! elements. They carry the formatting and filtering logic that would
//! otherwise be duplicated inside every template.
//!
//! Alias lookup is not duplicated here; it lives on
//! [`Model::element`](crate::model::Model::element), which returns `None`
//! rather than failing so templates can probe optional references.

use std::collections::BTreeSet;

use indexmap::IndexMap;

use crate::{element::Element, model::Model, semantic::Mode};

/// Elements whose mode equals `mode`, compared case-insensitively.
///
/// Accepts any iterable of element references so filtered subsets can be
/// filtered again.
///
/// # Examples
///
/// ```
/// use jacquard_core::element::{Element, ElementKind};
/// use jacquard_core::helpers::with_mode;
/// use jacquard_core::semantic::Mode;
///
/// let mut person = Element::new(ElementKind::Node, "Person", "person");
/// person.mode = "Merge".to_string();
/// let mut org = Element::new(ElementKind::Node, "Company", "org");
/// org.mode = "match".to_string();
///
/// let nodes = vec![person, org];
/// let merged = with_mode(&nodes, Mode::Merge);
/// assert_eq!(merged.len(), 1);
/// assert_eq!(merged[0].alias, "person");
/// ```
pub fn with_mode<'a, I>(elements: I, mode: Mode) -> Vec<&'a Element>
where
    I: IntoIterator<Item = &'a Element>,
{
    elements
        .into_iter()
        .filter(|element| element.mode_is(mode))
        .collect()
}

/// Resolves the union of the `depends_on` sets of `elements` against the
/// model, in sorted alias order.
///
/// Sorted order is the determinism contract: the same model always produces
/// the same statement order. Aliases that resolve to no element are skipped;
/// a validated model cannot contain any, and unvalidated callers get the
/// subset that resolves.
pub fn dependency_elements<'m, 'e, I>(elements: I, model: &'m Model) -> Vec<&'m Element>
where
    I: IntoIterator<Item = &'e Element>,
{
    let mut aliases: BTreeSet<&str> = BTreeSet::new();
    for element in elements {
        aliases.extend(element.depends_on.iter().map(String::as_str));
    }

    aliases
        .into_iter()
        .filter_map(|alias| model.element(alias))
        .collect()
}

/// Joins `items` as `<prefix><separator><item>` fragments glued with
/// `joiner`.
///
/// # Examples
///
/// ```
/// use jacquard_core::helpers::fmt_list;
///
/// let text = fmt_list("n", ["id", "name"], ".", ",");
/// assert_eq!(text, "n.id,n.name");
/// ```
pub fn fmt_list<I, S>(prefix: &str, items: I, separator: &str, joiner: &str) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let parts: Vec<String> = items
        .into_iter()
        .map(|item| format!("{prefix}{separator}{}", item.as_ref()))
        .collect();
    parts.join(joiner)
}

/// Shallow merge of two attribute maps.
///
/// Right-hand entries override left-hand values on key collision, but the
/// colliding key keeps its left-hand position; keys only present on the
/// right are appended in their own order.
pub fn merge_attrs(
    left: &IndexMap<String, String>,
    right: &IndexMap<String, String>,
) -> IndexMap<String, String> {
    let mut merged = left.clone();
    for (key, value) in right {
        merged.insert(key.clone(), value.clone());
    }
    merged
}
