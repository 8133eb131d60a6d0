//! Error types for Jacquard operations.
//!
//! This module provides the main error type [`JacquardError`] which wraps
//! various error conditions that can occur during model processing.

use std::io;

use thiserror::Error;

use jacquard_engine::{DocumentError, ExpandError};

/// The main error type for Jacquard operations.
///
/// # Diagnostic Variants
///
/// The `Expand` variant carries every diagnostic the expansion pipeline
/// produced for the failing stage, so callers can report all findings in
/// one pass.
#[derive(Debug, Error)]
pub enum JacquardError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{0}")]
    Document(#[from] DocumentError),

    #[error("{0}")]
    Expand(#[from] ExpandError),

    #[error("Template error: {0}")]
    Template(#[from] handlebars::TemplateError),

    #[error("Render error: {0}")]
    Render(#[from] handlebars::RenderError),

    #[error("Unknown template `{0}`")]
    UnknownTemplate(String),
}
