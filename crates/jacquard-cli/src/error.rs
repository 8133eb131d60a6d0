//! Error type for the Jacquard CLI.

use std::io;

use thiserror::Error;

use jacquard::JacquardError;

/// Errors the CLI run path can report.
///
/// Library errors pass through transparently; the configuration and output
/// plumbing the CLI adds on top contributes its own variants.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] toml::de::Error),

    #[error(transparent)]
    Jacquard(#[from] JacquardError),
}
