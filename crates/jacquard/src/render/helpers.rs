//! Handlebars helpers available to every template.
//!
//! Helpers work on the JSON projection of the model, so they compose as
//! subexpressions: `{{#each (with_mode model.nodes "match")}}`. Semantic
//! rules such as mode matching stay delegated to `jacquard_core`.

use handlebars::{Handlebars, handlebars_helper};
use jacquard_core::semantic::{self, Mode};
use serde_json::Value;

handlebars_helper!(with_mode: |elements: Json, mode: str| filter_mode(elements, mode));

handlebars_helper!(mode_match: |elements: Json| filter_mode(elements, "match"));

handlebars_helper!(mode_create: |elements: Json| filter_mode(elements, "create"));

handlebars_helper!(mode_merge: |elements: Json| filter_mode(elements, "merge"));

handlebars_helper!(deps: |model: Json, element: Json| resolve_dependencies(model, element));

handlebars_helper!(element_of: |model: Json, alias: str| {
    find_element(model, alias).cloned().unwrap_or(Value::Null)
});

handlebars_helper!(fmt_list: |prefix: str, items: Json, separator: str, joiner: str| {
    format_list(prefix, items, separator, joiner)
});

handlebars_helper!(merge_maps: |left: Json, right: Json| merge_objects(left, right));

handlebars_helper!(lower_first: |value: str| semantic::lower_first(value));

/// Registers the full helper namespace on `registry`.
pub(crate) fn register(registry: &mut Handlebars<'_>) {
    registry.register_helper("with_mode", Box::new(with_mode));
    registry.register_helper("mode_match", Box::new(mode_match));
    registry.register_helper("mode_create", Box::new(mode_create));
    registry.register_helper("mode_merge", Box::new(mode_merge));
    registry.register_helper("deps", Box::new(deps));
    registry.register_helper("element_of", Box::new(element_of));
    registry.register_helper("fmt_list", Box::new(fmt_list));
    registry.register_helper("merge_maps", Box::new(merge_maps));
    registry.register_helper("lower_first", Box::new(lower_first));
}

fn filter_mode(elements: &Value, mode: &str) -> Vec<Value> {
    let Ok(wanted) = mode.parse::<Mode>() else {
        return Vec::new();
    };
    elements
        .as_array()
        .map(|items| {
            items
                .iter()
                .filter(|item| {
                    item.get("mode")
                        .and_then(Value::as_str)
                        .is_some_and(|raw| raw.parse::<Mode>() == Ok(wanted))
                })
                .cloned()
                .collect()
        })
        .unwrap_or_default()
}

/// Resolves `element.depends_on` against the model, preserving the sorted
/// alias order the expansion pipeline recorded.
fn resolve_dependencies(model: &Value, element: &Value) -> Vec<Value> {
    element
        .get("depends_on")
        .and_then(Value::as_array)
        .map(|aliases| {
            aliases
                .iter()
                .filter_map(Value::as_str)
                .filter_map(|alias| find_element(model, alias))
                .cloned()
                .collect()
        })
        .unwrap_or_default()
}

fn find_element<'a>(model: &'a Value, alias: &str) -> Option<&'a Value> {
    ["nodes", "rels"].iter().find_map(|section| {
        model
            .get(section)
            .and_then(Value::as_array)
            .and_then(|items| {
                items
                    .iter()
                    .find(|item| item.get("alias").and_then(Value::as_str) == Some(alias))
            })
    })
}

fn format_list(prefix: &str, items: &Value, separator: &str, joiner: &str) -> String {
    let entries: Vec<String> = match items {
        Value::Array(values) => values
            .iter()
            .map(|value| match value {
                Value::String(text) => text.clone(),
                other => other.to_string(),
            })
            .collect(),
        Value::Object(map) => map.keys().cloned().collect(),
        _ => Vec::new(),
    };
    jacquard_core::helpers::fmt_list(prefix, entries, separator, joiner)
}

/// Merges two JSON objects; keys present in both keep the position of the
/// left map and take the value of the right one.
fn merge_objects(left: &Value, right: &Value) -> Value {
    let mut merged = left.as_object().cloned().unwrap_or_default();
    if let Some(entries) = right.as_object() {
        for (key, value) in entries {
            merged.insert(key.clone(), value.clone());
        }
    }
    Value::Object(merged)
}
