//! Relationship Normalizer: descriptor grammar and canonicalization.
//!
//! A relationship descriptor names two endpoint aliases joined by a
//! direction token. Exactly three shapes are accepted, anchored at both
//! ends, with arbitrary surrounding whitespace:
//!
//! - `A -> B` — nodes `(A, B)`, direction `->`
//! - `A - B`  — nodes `(A, B)`, direction `-`
//! - `A <- B` — nodes `(B, A)`, direction `->`
//!
//! The back arrow never survives canonicalization; direction is always
//! expressed left to right, or absent for undirected edges. Both endpoints
//! become dependencies of the relationship, so validation catches endpoints
//! that name no element.

use jacquard_core::{element::Element, semantic::Direction};
use winnow::{
    ModalResult, Parser,
    ascii::multispace0,
    combinator::{alt, delimited},
    token::take_while,
};

use crate::{
    error::{Diagnostic, ErrorCode, Result},
    expand::expand_value,
};

/// The accepted descriptor shapes, quoted in grammar errors.
const ACCEPTED_SHAPES: &str = "A -> B, or A - B, or A <- B";

/// The direction token as authored, before canonicalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Arrow {
    Forward,
    Backward,
    Undirected,
}

fn identifier<'s>(input: &mut &'s str) -> ModalResult<&'s str> {
    take_while(1.., |c: char| c.is_alphanumeric() || c == '_').parse_next(input)
}

fn arrow(input: &mut &str) -> ModalResult<Arrow> {
    // `->` must be tried before the bare `-` it starts with.
    alt((
        "->".value(Arrow::Forward),
        "<-".value(Arrow::Backward),
        "-".value(Arrow::Undirected),
    ))
    .parse_next(input)
}

fn shape(input: &mut &str) -> ModalResult<(String, String, Direction)> {
    let (left, arrow, right) = (
        delimited(multispace0, identifier, multispace0),
        arrow,
        delimited(multispace0, identifier, multispace0),
    )
        .parse_next(input)?;

    Ok(match arrow {
        Arrow::Forward => (left.to_string(), right.to_string(), Direction::Directed),
        Arrow::Backward => (right.to_string(), left.to_string(), Direction::Directed),
        Arrow::Undirected => (left.to_string(), right.to_string(), Direction::Undirected),
    })
}

/// Parses a trimmed, already-expanded descriptor into canonical form:
/// `(node0, node1, direction)`.
///
/// Returns `None` for anything outside the three accepted shapes, including
/// the empty string, a missing direction token, an empty endpoint, or
/// trailing input such as a second arrow.
pub fn canonicalize(descriptor: &str) -> Option<(String, String, Direction)> {
    shape.parse(descriptor).ok()
}

/// Runs the full descriptor pass over one relationship element: token
/// expansion, trimming, grammar matching, and endpoint dependency
/// recording.
///
/// # Errors
///
/// Returns a `GrammarError` diagnostic ([`ErrorCode::E100`]) when the
/// descriptor matches none of the accepted shapes. The message quotes the
/// descriptor as authored, before token expansion, so it points back at
/// the document text.
pub fn expand_reltype(element: &mut Element) -> Result<()> {
    let expanded = expand_value(&element.reltype, &element.alias, &mut element.depends_on);
    let descriptor = expanded.trim();

    let Some((node0, node1, direction)) = canonicalize(descriptor) else {
        return Err(Diagnostic::error(format!(
            "\"{}\" doesn't match \"{ACCEPTED_SHAPES}\"",
            element.reltype
        ))
        .with_code(ErrorCode::E100)
        .with_element(element.alias.as_str())
        .with_help("a descriptor names two aliases joined by ->, -, or <-"));
    };

    element.depends_on.insert(node0.clone());
    element.depends_on.insert(node1.clone());
    element.expanded_reltype_nodes = vec![node0, node1];
    element.expanded_reltype_dir = Some(direction);
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use jacquard_core::element::ElementKind;

    use super::*;

    #[test]
    fn forward_shape_is_kept() {
        assert_eq!(
            canonicalize("a -> b"),
            Some(("a".to_string(), "b".to_string(), Direction::Directed))
        );
    }

    #[test]
    fn backward_shape_swaps_endpoints() {
        assert_eq!(
            canonicalize("b <- a"),
            Some(("a".to_string(), "b".to_string(), Direction::Directed))
        );
    }

    #[test]
    fn undirected_shape_is_kept() {
        assert_eq!(
            canonicalize("a - b"),
            Some(("a".to_string(), "b".to_string(), Direction::Undirected))
        );
    }

    #[test]
    fn whitespace_is_flexible() {
        assert_eq!(
            canonicalize("a   ->   b"),
            Some(("a".to_string(), "b".to_string(), Direction::Directed))
        );
        assert_eq!(
            canonicalize("a->b"),
            Some(("a".to_string(), "b".to_string(), Direction::Directed))
        );
    }

    #[test]
    fn malformed_shapes_are_rejected() {
        assert_eq!(canonicalize("a => b"), None);
        assert_eq!(canonicalize("a <-> b"), None);
        assert_eq!(canonicalize(""), None);
        assert_eq!(canonicalize("a b"), None);
        assert_eq!(canonicalize("a -"), None);
        assert_eq!(canonicalize("-> b"), None);
        assert_eq!(canonicalize("a - > b"), None);
        assert_eq!(canonicalize("a -> b -> c"), None);
    }

    #[test]
    fn expand_reltype_records_endpoints_as_dependencies() {
        let mut rel = Element::new(ElementKind::Relationship, "WORKS_AT", "worksAt");
        rel.reltype = " person   ->   org ".to_string();

        expand_reltype(&mut rel).expect("valid descriptor");
        assert_eq!(rel.expanded_reltype_nodes, vec!["person", "org"]);
        assert_eq!(rel.expanded_reltype_dir, Some(Direction::Directed));
        assert_eq!(
            rel.depends_on,
            BTreeSet::from(["person".to_string(), "org".to_string()])
        );
    }

    #[test]
    fn expand_reltype_resolves_tokens_first() {
        let mut rel = Element::new(ElementKind::Relationship, "KNOWS", "knows");
        rel.reltype = "${person} <- ${other}".to_string();

        expand_reltype(&mut rel).expect("valid descriptor");
        assert_eq!(rel.expanded_reltype_nodes, vec!["other", "person"]);
        assert_eq!(rel.expanded_reltype_dir, Some(Direction::Directed));
        assert!(rel.depends_on.contains("person"));
        assert!(rel.depends_on.contains("other"));
    }

    #[test]
    fn grammar_error_names_the_descriptor() {
        let mut rel = Element::new(ElementKind::Relationship, "WORKS_AT", "worksAt");
        rel.reltype = "a => b".to_string();

        let err = expand_reltype(&mut rel).unwrap_err();
        assert_eq!(err.code(), Some(ErrorCode::E100));
        assert_eq!(err.element(), Some("worksAt"));
        assert_eq!(
            err.message(),
            "\"a => b\" doesn't match \"A -> B, or A - B, or A <- B\""
        );
        assert!(rel.expanded_reltype_nodes.is_empty());
        assert!(rel.expanded_reltype_dir.is_none());
    }

    #[test]
    fn grammar_error_quotes_the_descriptor_as_authored() {
        let mut rel = Element::new(ElementKind::Relationship, "KNOWS", "knows");
        rel.reltype = " ${person} => ${org} ".to_string();

        let err = expand_reltype(&mut rel).unwrap_err();
        // The raw text, not the expanded and trimmed form.
        assert_eq!(
            err.message(),
            "\" ${person} => ${org} \" doesn't match \"A -> B, or A - B, or A <- B\""
        );
    }
}
