//! Cross-reference validation over an expanded model.
//!
//! Validation runs after token expansion and descriptor canonicalization,
//! when every element carries its final dependency set. All findings are
//! accumulated so one pass reports every problem in the document:
//!
//! - duplicate aliases ([`ErrorCode::E202`])
//! - dependencies on aliases no element declares ([`ErrorCode::E200`])
//! - modes outside `match`, `merge`, `create` ([`ErrorCode::E201`])

use std::collections::BTreeSet;

use jacquard_core::{element::Element, model::Model, semantic::Mode};
use log::debug;

use crate::error::{Diagnostic, DiagnosticCollector, ErrorCode, ExpandError};

/// Checks every element of `model` against the aliases the model declares.
///
/// `duplicates` holds the aliases [`Model::index_aliases`] reported as
/// claimed more than once; each is a hard error here.
///
/// # Errors
///
/// Returns an [`ExpandError`] carrying one diagnostic per finding.
pub fn validate(model: &Model, duplicates: &BTreeSet<String>) -> Result<(), ExpandError> {
    let mut collector = DiagnosticCollector::new();

    for alias in duplicates {
        collector.push(
            Diagnostic::error(format!("duplicate alias `{alias}`"))
                .with_code(ErrorCode::E202)
                .with_element(alias.as_str())
                .with_help("aliases must be unique across all nodes and relationships"),
        );
    }

    for element in model.elements() {
        check_mode(element, &mut collector);
        check_dependencies(element, model, &mut collector);
    }

    debug!(elements = model.len(), duplicates = duplicates.len(); "Validation pass finished");
    collector.finish()
}

fn check_mode(element: &Element, collector: &mut DiagnosticCollector) {
    if element.mode.parse::<Mode>().is_err() {
        collector.push(
            Diagnostic::error(format!(
                "invalid mode `{}` for {} `{}`",
                element.mode, element.kind, element.alias
            ))
            .with_code(ErrorCode::E201)
            .with_element(element.alias.as_str())
            .with_help("accepted modes are match, merge, and create"),
        );
    }
}

fn check_dependencies(element: &Element, model: &Model, collector: &mut DiagnosticCollector) {
    for dependency in &element.depends_on {
        if !model.contains_alias(dependency) {
            collector.push(
                Diagnostic::error(format!(
                    "alias reference `{dependency}` not found for {} `{}`",
                    element.kind, element.alias
                ))
                .with_code(ErrorCode::E200)
                .with_element(element.alias.as_str())
                .with_help(
                    "referenced aliases must belong to a node or relationship in the same document",
                ),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use jacquard_core::element::ElementKind;

    use super::*;

    fn node(alias: &str, mode: &str) -> Element {
        let mut element = Element::new(ElementKind::Node, "Person", alias);
        element.mode = mode.to_string();
        element
    }

    fn indexed(nodes: Vec<Element>, rels: Vec<Element>) -> (Model, BTreeSet<String>) {
        let mut model = Model::new(nodes, rels);
        let duplicates = model.index_aliases();
        (model, duplicates)
    }

    #[test]
    fn well_formed_model_passes() {
        let mut person = node("person", "match");
        person.depends_on.insert("org".to_string());
        let (model, duplicates) = indexed(vec![person, node("org", "merge")], vec![]);

        assert!(validate(&model, &duplicates).is_ok());
    }

    #[test]
    fn unknown_dependency_is_reported() {
        let mut person = node("person", "match");
        person.depends_on.insert("missing".to_string());
        let (model, duplicates) = indexed(vec![person], vec![]);

        let err = validate(&model, &duplicates).unwrap_err();
        assert_eq!(err.diagnostics().len(), 1);
        let diagnostic = &err.diagnostics()[0];
        assert_eq!(diagnostic.code(), Some(ErrorCode::E200));
        assert_eq!(
            diagnostic.message(),
            "alias reference `missing` not found for node `person`"
        );
    }

    #[test]
    fn empty_and_unknown_modes_are_reported() {
        let (model, duplicates) = indexed(vec![node("person", ""), node("org", "delete")], vec![]);

        let err = validate(&model, &duplicates).unwrap_err();
        assert_eq!(err.codes(), vec![Some(ErrorCode::E201), Some(ErrorCode::E201)]);
        assert_eq!(
            err.diagnostics()[0].message(),
            "invalid mode `` for node `person`"
        );
        assert_eq!(
            err.diagnostics()[1].message(),
            "invalid mode `delete` for node `org`"
        );
    }

    #[test]
    fn uppercase_modes_are_accepted() {
        let (model, duplicates) = indexed(vec![node("person", "MATCH")], vec![]);
        assert!(validate(&model, &duplicates).is_ok());
    }

    #[test]
    fn duplicate_aliases_are_reported() {
        let (model, duplicates) = indexed(
            vec![node("person", "match"), node("person", "merge")],
            vec![],
        );

        let err = validate(&model, &duplicates).unwrap_err();
        assert_eq!(err.diagnostics().len(), 1);
        let diagnostic = &err.diagnostics()[0];
        assert_eq!(diagnostic.code(), Some(ErrorCode::E202));
        assert_eq!(diagnostic.message(), "duplicate alias `person`");
        assert_eq!(diagnostic.element(), Some("person"));
    }

    #[test]
    fn findings_accumulate_across_elements() {
        let mut person = node("person", "match");
        person.depends_on.insert("nowhere".to_string());
        let (model, duplicates) = indexed(vec![person, node("org", "fetch")], vec![]);

        let err = validate(&model, &duplicates).unwrap_err();
        assert_eq!(err.diagnostics().len(), 2);
    }

    #[test]
    fn relationship_endpoints_are_checked() {
        let mut rel = Element::new(ElementKind::Relationship, "WORKS_AT", "worksAt");
        rel.mode = "create".to_string();
        rel.depends_on.insert("person".to_string());
        rel.depends_on.insert("org".to_string());
        let (model, duplicates) = indexed(vec![node("person", "match")], vec![rel]);

        let err = validate(&model, &duplicates).unwrap_err();
        assert_eq!(err.diagnostics().len(), 1);
        assert_eq!(
            err.diagnostics()[0].message(),
            "alias reference `org` not found for relationship `worksAt`"
        );
    }
}
