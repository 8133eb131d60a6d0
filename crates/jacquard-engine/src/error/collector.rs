//! Accumulation of diagnostics across a pipeline stage.

use log::warn;

use crate::error::{Diagnostic, ExpandError};

/// Collects diagnostics so a whole stage can report every problem it finds
/// instead of stopping at the first.
#[derive(Debug, Default)]
pub(crate) struct DiagnosticCollector {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticCollector {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Adds one diagnostic.
    pub(crate) fn push(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Returns `true` if any collected diagnostic is an error.
    pub(crate) fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|diagnostic| diagnostic.severity().is_error())
    }

    /// Closes the stage: errors become an [`ExpandError`] carrying every
    /// collected diagnostic, warnings alone are logged and discarded.
    pub(crate) fn finish(self) -> Result<(), ExpandError> {
        if self.has_errors() {
            return Err(ExpandError::new(self.diagnostics));
        }
        for diagnostic in &self.diagnostics {
            warn!("{diagnostic}");
        }
        Ok(())
    }
}
