//! Pipeline failure type: a batch of diagnostics.

use std::fmt;

use crate::error::{Diagnostic, ErrorCode};

/// A type alias for `Result<T, Diagnostic>`.
pub type Result<T> = std::result::Result<T, Diagnostic>;

/// Failure of an expansion stage, carrying every diagnostic the stage
/// produced before aborting.
///
/// Stages accumulate their findings so one run reports every problem in a
/// document. `Display` keeps log lines short: the first message plus a
/// count of the rest. Callers that present findings individually iterate
/// [`ExpandError::diagnostics`] instead; the CLI renders one report per
/// entry.
#[derive(Debug)]
pub struct ExpandError {
    diagnostics: Vec<Diagnostic>,
}

impl ExpandError {
    /// Wraps a batch of diagnostics.
    pub fn new(diagnostics: Vec<Diagnostic>) -> Self {
        Self { diagnostics }
    }

    /// Every finding, in report order: build findings by record position,
    /// validation findings per element in model order.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// The error code of each finding, in report order.
    pub fn codes(&self) -> Vec<Option<ErrorCode>> {
        self.diagnostics.iter().map(Diagnostic::code).collect()
    }

    /// Findings attributed to the element with this alias.
    ///
    /// Build findings for records too malformed to have an alias are never
    /// yielded here; they only appear in [`ExpandError::diagnostics`].
    pub fn for_element<'a>(&'a self, alias: &'a str) -> impl Iterator<Item = &'a Diagnostic> {
        self.diagnostics
            .iter()
            .filter(move |diagnostic| diagnostic.element() == Some(alias))
    }
}

impl fmt::Display for ExpandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(first) = self.diagnostics.first() {
            write!(f, "{first}")?;
            if self.diagnostics.len() > 1 {
                write!(f, " (+{} more)", self.diagnostics.len() - 1)?;
            }
        }
        Ok(())
    }
}

impl std::error::Error for ExpandError {}

impl From<Diagnostic> for ExpandError {
    fn from(diagnostic: Diagnostic) -> Self {
        Self {
            diagnostics: vec![diagnostic],
        }
    }
}

impl From<Vec<Diagnostic>> for ExpandError {
    fn from(diagnostics: Vec<Diagnostic>) -> Self {
        Self { diagnostics }
    }
}
