//! Error and diagnostic system for the expansion pipeline.
//!
//! This module provides an error handling system with:
//! - Error codes for documentation and searchability
//! - Element attribution so every failure names the record at fault
//! - Severity levels
//! - Diagnostic collector for accumulating multiple errors
//!
//! # Overview
//!
//! The error system is built around the [`Diagnostic`] type, which represents
//! a single error or warning with an optional error code, the alias of the
//! element it concerns, and help text. Loaded documents carry no source
//! offsets, so attribution is by element rather than by span. Multiple
//! diagnostics are wrapped in [`ExpandError`] for returning from the
//! pipeline, which reports everything wrong with a document in one pass
//! instead of stopping at the first problem.
//!
//! # Example
//!
//! ```
//! # use jacquard_engine::error::{Diagnostic, ErrorCode};
//! let diag = Diagnostic::error("alias reference `ghost` not found")
//!     .with_code(ErrorCode::E200)
//!     .with_element("person")
//!     .with_help("every `${...}` identifier must match some element's alias");
//!
//! assert_eq!(diag.to_string(), "error[E200]: alias reference `ghost` not found");
//! ```

mod collector;
mod diagnostic;
mod error_code;
mod expand_error;
mod severity;

pub(crate) use collector::DiagnosticCollector;
pub(crate) use expand_error::Result;

pub use diagnostic::Diagnostic;
pub use error_code::ErrorCode;
pub use expand_error::ExpandError;
pub use severity::Severity;
