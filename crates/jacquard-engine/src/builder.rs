//! Element Builder: one raw record in, one normalized element out.
//!
//! Normalization is purely lexical: surrounding whitespace is trimmed off
//! labels, aliases, modes, attribute values, and index/constraint entries,
//! and a missing alias is derived from the label. Nothing here resolves
//! tokens or checks cross-references; that comes later, over the whole
//! model at once. The input record is never mutated.

use indexmap::IndexMap;
use jacquard_core::{
    element::{AttrSet, Element, ElementKind},
    semantic::lower_first,
};

use crate::{
    document::RawElement,
    error::{Diagnostic, ErrorCode, Result},
};

/// Builds one element from a raw record.
///
/// `position` is the zero-based index of the record within its document
/// sequence, used to attribute errors for records too malformed to name
/// themselves.
///
/// # Errors
///
/// Returns a `MissingFieldError` diagnostic ([`ErrorCode::E001`]) when
/// `label` is absent or blank.
pub fn build_element(kind: ElementKind, record: &RawElement, position: usize) -> Result<Element> {
    let label = match record.label.as_deref().map(str::trim) {
        Some(label) if !label.is_empty() => label.to_string(),
        _ => {
            return Err(Diagnostic::error(format!(
                "{} record {} is missing required field `label`",
                kind,
                position + 1
            ))
            .with_code(ErrorCode::E001)
            .with_help("every record needs a non-empty `label`"));
        }
    };

    let alias = match record.alias.as_deref().map(str::trim) {
        Some(alias) if !alias.is_empty() => alias.to_string(),
        _ => lower_first(&label),
    };

    let mut element = Element::new(kind, label, alias);
    element.mode = record
        .mode
        .as_deref()
        .map(str::trim)
        .unwrap_or_default()
        .to_string();
    element.attr = AttrSet {
        key: trim_values(&record.attr.key),
        on_create: trim_values(&record.attr.on_create),
        on_update: trim_values(&record.attr.on_update),
        ..AttrSet::default()
    };
    element.index = trim_entries(&record.index);
    element.constraint = trim_entries(&record.constraint);
    // Descriptors are copied verbatim; they are trimmed after token
    // expansion, right before grammar matching.
    element.reltype = record.reltype.clone().unwrap_or_default();
    element.custom = record.custom.clone();

    Ok(element)
}

fn trim_values(map: &IndexMap<String, String>) -> IndexMap<String, String> {
    map.iter()
        .map(|(key, value)| (key.clone(), value.trim().to_string()))
        .collect()
}

fn trim_entries(entries: &[String]) -> Vec<String> {
    entries.iter().map(|entry| entry.trim().to_string()).collect()
}
