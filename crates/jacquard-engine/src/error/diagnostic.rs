//! The Diagnostic type for pipeline errors and warnings.

use std::fmt;

use crate::error::{ErrorCode, Severity};

/// A single error or warning produced by the expansion pipeline.
///
/// Built with a fluent API: start from [`Diagnostic::error`] or
/// [`Diagnostic::warning`], then attach a code, the alias of the element
/// concerned, and help text as available. Loaded records carry no source
/// offsets, so the element alias is the attribution unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    severity: Severity,
    code: Option<ErrorCode>,
    message: String,
    element: Option<String>,
    help: Option<String>,
}

impl Diagnostic {
    /// Creates an error-severity diagnostic with the given message.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            code: None,
            message: message.into(),
            element: None,
            help: None,
        }
    }

    /// Creates a warning-severity diagnostic with the given message.
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            code: None,
            message: message.into(),
            element: None,
            help: None,
        }
    }

    /// Attaches an error code.
    pub fn with_code(mut self, code: ErrorCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Attributes the diagnostic to the element with this alias.
    pub fn with_element(mut self, alias: impl Into<String>) -> Self {
        self.element = Some(alias.into());
        self
    }

    /// Attaches help text suggesting how to fix the problem.
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// The severity of this diagnostic.
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// The error code, if one was attached.
    pub fn code(&self) -> Option<ErrorCode> {
        self.code
    }

    /// The primary message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The alias of the element this diagnostic concerns, if attributed.
    pub fn element(&self) -> Option<&str> {
        self.element.as_deref()
    }

    /// The help text, if any.
    pub fn help(&self) -> Option<&str> {
        self.help.as_deref()
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "{}[{}]: {}", self.severity, code, self.message),
            None => write!(f, "{}: {}", self.severity, self.message),
        }
    }
}

impl std::error::Error for Diagnostic {}
