//! Expansion engine for declarative graph models.
//!
//! The engine turns a raw YAML document into a fully expanded
//! [`Model`](jacquard_core::model::Model) in four stages:
//!
//! 1. **Build** ([`builder`]): raw records become typed elements; missing
//!    required fields are reported per record.
//! 2. **Index** ([`jacquard_core::model::Model::index_aliases`]): every
//!    alias is registered so tokens and descriptors can be resolved.
//! 3. **Expand** ([`expand`](mod@expand), [`reltype`]): `${...}` tokens are
//!    rewritten into query fragments and relationship descriptors are
//!    canonicalized, recording dependencies along the way.
//! 4. **Validate** ([`validate`]): modes, alias uniqueness, and every
//!    recorded dependency are checked against the model.
//!
//! Each stage reports all of its findings before the pipeline stops, so a
//! document with three missing labels produces three diagnostics in one
//! run.
//!
//! ```
//! use jacquard_engine::RawDocument;
//!
//! let document: RawDocument = r#"
//! nodes:
//!   - label: Person
//!     mode: match
//!     attr:
//!       key:
//!         id: ${this}.id
//! "#
//! .parse()?;
//!
//! let model = jacquard_engine::expand(document)?;
//! assert_eq!(model.nodes[0].attr.expanded_key["id"], "person.id");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod builder;
pub mod document;
pub mod error;
pub mod expand;
pub mod reltype;
pub mod validate;

use jacquard_core::{element::ElementKind, model::Model};
use log::debug;

use crate::error::DiagnosticCollector;
pub use crate::{
    document::{DocumentError, RawDocument},
    error::{Diagnostic, ErrorCode, ExpandError, Severity},
};

/// Runs the full expansion pipeline over `document`.
///
/// # Errors
///
/// Returns an [`ExpandError`] carrying every diagnostic the failing stage
/// produced. Later stages do not run once a stage reports an error.
pub fn expand(document: RawDocument) -> Result<Model, ExpandError> {
    let mut collector = DiagnosticCollector::new();
    let mut model = Model::default();

    for (position, record) in document.nodes.iter().enumerate() {
        match builder::build_element(ElementKind::Node, record, position) {
            Ok(element) => model.nodes.push(element),
            Err(diagnostic) => collector.push(diagnostic),
        }
    }
    for (position, record) in document.rels.iter().enumerate() {
        match builder::build_element(ElementKind::Relationship, record, position) {
            Ok(element) => model.rels.push(element),
            Err(diagnostic) => collector.push(diagnostic),
        }
    }
    collector.finish()?;
    debug!(nodes = model.nodes.len(), rels = model.rels.len(); "Elements built");

    let duplicates = model.index_aliases();

    let mut collector = DiagnosticCollector::new();
    for element in &mut model.nodes {
        expand::expand_element(element);
    }
    for element in &mut model.rels {
        expand::expand_element(element);
        if let Err(diagnostic) = reltype::expand_reltype(element) {
            collector.push(diagnostic);
        }
    }
    collector.finish()?;
    debug!("Tokens and descriptors expanded");

    validate::validate(&model, &duplicates)?;
    Ok(model)
}

#[cfg(test)]
mod tests {
    use jacquard_core::semantic::Direction;

    use super::*;

    fn run(yaml: &str) -> Result<Model, ExpandError> {
        let document: RawDocument = yaml.parse().expect("document parses");
        expand(document)
    }

    #[test]
    fn full_document_expands() {
        let model = run(
            r#"
nodes:
  - label: Person
    mode: match
    attr:
      key:
        id: ${this}.id
      on_create:
        name: ${this}.name
    index:
      - ${this}.id
    constraint:
      - ${this}.id IS UNIQUE
  - label: Organization
    alias: org
    mode: merge
rels:
  - label: WORKS_AT
    alias: worksAt
    mode: create
    reltype: person -> org
    attr:
      key:
        since: ${this}.since
"#,
        )
        .expect("document expands");

        assert_eq!(model.nodes.len(), 2);
        assert_eq!(model.rels.len(), 1);

        let person = model.element("person").expect("person exists");
        assert_eq!(person.attr.expanded_key["id"], "person.id");
        assert_eq!(person.attr.expanded_on_create["name"], "person.name");
        assert_eq!(person.expanded_index, vec!["person.id"]);
        assert_eq!(person.expanded_constraint, vec!["person.id IS UNIQUE"]);

        let works_at = model.element("worksAt").expect("worksAt exists");
        assert_eq!(works_at.expanded_reltype_nodes, vec!["person", "org"]);
        assert_eq!(works_at.expanded_reltype_dir, Some(Direction::Directed));
        assert_eq!(works_at.attr.expanded_key["since"], "worksAt.since");
        assert!(works_at.depends_on.contains("person"));
        assert!(works_at.depends_on.contains("org"));
    }

    #[test]
    fn cross_element_tokens_resolve_and_record_dependencies() {
        let model = run(
            r#"
nodes:
  - label: Person
    mode: match
    attr:
      key:
        employer: ${org}.id
  - label: Organization
    alias: org
    mode: match
"#,
        )
        .expect("document expands");

        let person = model.element("person").expect("person exists");
        assert_eq!(person.attr.expanded_key["employer"], "org.id");
        assert!(person.depends_on.contains("org"));
    }

    #[test]
    fn build_findings_accumulate_before_anything_else_runs() {
        let err = run(
            r#"
nodes:
  - mode: match
  - alias: second
rels:
  - reltype: a -> b
"#,
        )
        .unwrap_err();

        assert_eq!(
            err.codes(),
            vec![
                Some(ErrorCode::E001),
                Some(ErrorCode::E001),
                Some(ErrorCode::E001)
            ]
        );
    }

    #[test]
    fn grammar_findings_stop_the_pipeline_before_validation() {
        let err = run(
            r#"
nodes:
  - label: Person
    mode: delete
rels:
  - label: WORKS_AT
    mode: create
    reltype: person => org
"#,
        )
        .unwrap_err();

        // The bad mode is not reported; the descriptor failure comes first.
        assert_eq!(err.diagnostics().len(), 1);
        assert_eq!(err.diagnostics()[0].code(), Some(ErrorCode::E100));
    }

    #[test]
    fn validation_reports_every_finding() {
        let err = run(
            r#"
nodes:
  - label: Person
    mode: fetch
    attr:
      key:
        employer: ${nowhere}.id
"#,
        )
        .unwrap_err();

        assert_eq!(err.codes(), vec![Some(ErrorCode::E201), Some(ErrorCode::E200)]);
    }

    #[test]
    fn empty_token_is_rejected_by_validation() {
        let err = run(
            r#"
nodes:
  - label: Person
    mode: match
    attr:
      key:
        id: ${}.id
"#,
        )
        .unwrap_err();

        assert_eq!(err.diagnostics().len(), 1);
        assert_eq!(err.diagnostics()[0].code(), Some(ErrorCode::E200));
        assert_eq!(
            err.diagnostics()[0].message(),
            "alias reference `` not found for node `person`"
        );
    }

    #[test]
    fn duplicate_aliases_fail_validation() {
        let err = run(
            r#"
nodes:
  - label: Person
  - label: Person
"#,
        )
        .unwrap_err();

        // Both records derive the alias `person`, and both empty modes are
        // reported alongside the duplicate.
        assert_eq!(
            err.codes(),
            vec![
                Some(ErrorCode::E202),
                Some(ErrorCode::E201),
                Some(ErrorCode::E201)
            ]
        );
    }

    #[test]
    fn empty_document_expands_to_empty_model() {
        let model = run("nodes: []\nrels: []\n").expect("empty document expands");
        assert!(model.is_empty());
    }
}
