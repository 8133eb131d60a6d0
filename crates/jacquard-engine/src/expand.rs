//! Token Expansion Engine.
//!
//! Raw expression strings may contain `${identifier}` tokens, where an
//! identifier is a run of word characters (letters, digits, underscore).
//! Expansion resolves each token textually, left to right:
//!
//! - `${this}` becomes the owning element's alias and records nothing.
//! - `${entry}` becomes the literal word `entry` (the renderer's iteration
//!   variable) and records nothing.
//! - any other `${x}` becomes the literal text `x`, and `x` is recorded in
//!   the owning element's dependency set.
//!
//! Everything that is not a well-formed token passes through unchanged, so
//! expansion is idempotent: expanded text contains no tokens and re-expands
//! to itself. Unknown identifiers are recorded, not rejected; rejecting is
//! the validator's job, which is what allows forward references regardless
//! of declaration order in the document.
//!
//! The scanner is a small explicit loop rather than a regular expression:
//! find `${`, take the word run, require `}`.

use std::collections::BTreeSet;

use indexmap::IndexMap;
use jacquard_core::element::Element;

/// Token identifier resolving to the owning element's alias.
pub const SELF_TOKEN: &str = "this";

/// Token identifier resolving to the literal word `entry`.
pub const ENTRY_TOKEN: &str = "entry";

/// Expands every token in `raw`, recording externally-referenced aliases
/// into `depends_on`.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeSet;
/// use jacquard_engine::expand::expand_value;
///
/// let mut deps = BTreeSet::new();
/// let expanded = expand_value("${a}.x = ${this}.y", "c", &mut deps);
/// assert_eq!(expanded, "a.x = c.y");
/// assert_eq!(deps, BTreeSet::from(["a".to_string()]));
/// ```
pub fn expand_value(raw: &str, self_alias: &str, depends_on: &mut BTreeSet<String>) -> String {
    let mut expanded = String::with_capacity(raw.len());
    let mut rest = raw;

    while let Some(start) = rest.find("${") {
        expanded.push_str(&rest[..start]);
        let after = &rest[start + 2..];

        match scan_identifier(after) {
            Some((identifier, token_end)) => {
                match identifier {
                    SELF_TOKEN => expanded.push_str(self_alias),
                    ENTRY_TOKEN => expanded.push_str(ENTRY_TOKEN),
                    other => {
                        expanded.push_str(other);
                        depends_on.insert(other.to_string());
                    }
                }
                rest = &after[token_end..];
            }
            None => {
                // A `${` with no closing brace is ordinary text.
                expanded.push_str("${");
                rest = after;
            }
        }
    }

    expanded.push_str(rest);
    expanded
}

/// Expands every value of `raw`, keeping keys and their order.
pub fn expand_map(
    raw: &IndexMap<String, String>,
    self_alias: &str,
    depends_on: &mut BTreeSet<String>,
) -> IndexMap<String, String> {
    raw.iter()
        .map(|(key, value)| (key.clone(), expand_value(value, self_alias, depends_on)))
        .collect()
}

/// Expands every entry of `raw`, preserving length and order.
pub fn expand_seq(
    raw: &[String],
    self_alias: &str,
    depends_on: &mut BTreeSet<String>,
) -> Vec<String> {
    raw.iter()
        .map(|entry| expand_value(entry, self_alias, depends_on))
        .collect()
}

/// Runs the attribute, index, and constraint expansion passes over one
/// element, in place.
///
/// Relationship descriptors are not handled here; see
/// [`crate::reltype`], which needs the grammar step as well.
pub fn expand_element(element: &mut Element) {
    element.attr.expanded_key =
        expand_map(&element.attr.key, &element.alias, &mut element.depends_on);
    element.attr.expanded_on_create =
        expand_map(&element.attr.on_create, &element.alias, &mut element.depends_on);
    element.attr.expanded_on_update =
        expand_map(&element.attr.on_update, &element.alias, &mut element.depends_on);
    element.expanded_index = expand_seq(&element.index, &element.alias, &mut element.depends_on);
    element.expanded_constraint =
        expand_seq(&element.constraint, &element.alias, &mut element.depends_on);
}

/// Scans a word-character run directly followed by `}`. Returns the
/// identifier and the byte offset just past the closing brace.
fn scan_identifier(input: &str) -> Option<(&str, usize)> {
    let end = input
        .char_indices()
        .find(|(_, c)| !is_word_char(*c))
        .map_or(input.len(), |(i, _)| i);

    if input[end..].starts_with('}') {
        Some((&input[..end], end + 1))
    } else {
        None
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
