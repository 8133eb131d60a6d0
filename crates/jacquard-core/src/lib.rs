//! Jacquard Core Types and Definitions
//!
//! This crate provides the foundational types for the Jacquard model
//! language. It includes:
//!
//! - **Elements**: Node and relationship records with raw and expanded
//!   attribute maps ([`element`] module)
//! - **Model**: The assembled element collections plus the derived alias
//!   index ([`model`] module)
//! - **Semantics**: The mode and direction vocabulary shared across the
//!   pipeline ([`semantic`] module)
//! - **Helpers**: Pure query-building functions consumed by template
//!   renderers ([`helpers`] module)

pub mod element;
pub mod helpers;
pub mod model;
pub mod semantic;
