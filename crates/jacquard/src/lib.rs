//! Jacquard - a declarative model language for generating graph queries.
//!
//! Expansion and template rendering for Jacquard models. A model written in
//! YAML is expanded into query fragments and rendered through handlebars
//! templates into query scripts.

pub mod config;

mod error;
mod render;

pub use jacquard_core::{element, helpers, model, semantic};
pub use jacquard_engine::{
    Diagnostic, DocumentError, ErrorCode, ExpandError, RawDocument, Severity,
};

pub use error::JacquardError;
pub use render::Renderer;

use std::path::Path;

use log::{debug, info, trace};

use config::AppConfig;
use model::Model;

/// Builder for expanding and rendering Jacquard models.
///
/// This provides an API for processing models through the expansion and
/// rendering stages.
///
/// # Examples
///
/// ```rust,no_run
/// use std::path::Path;
///
/// use jacquard::{ModelBuilder, config::AppConfig};
///
/// let source = "nodes:\n  - label: Person\n    mode: match\n";
///
/// // With custom config
/// let config = AppConfig::default();
/// let builder = ModelBuilder::new(config);
///
/// // Expand source to a model
/// let model = builder.parse(source)
///     .expect("Failed to expand");
///
/// // Render the model through a template directory
/// let renderer = builder.renderer(Path::new("templates"))
///     .expect("Failed to load templates");
/// let query = renderer.render("nodes.create", &model)
///     .expect("Failed to render");
///
/// // Or use default config
/// let builder = ModelBuilder::default();
/// ```
#[derive(Default)]
pub struct ModelBuilder {
    config: AppConfig,
}

impl ModelBuilder {
    /// Create a new model builder with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Application configuration including template and output settings
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use jacquard::{ModelBuilder, config::AppConfig};
    ///
    /// let config = AppConfig::default();
    /// let builder = ModelBuilder::new(config);
    /// ```
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration this builder was created with.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Expand YAML source into a model.
    ///
    /// This performs document parsing, element building, token expansion,
    /// descriptor canonicalization, and validation to produce a fully
    /// expanded model.
    ///
    /// # Arguments
    ///
    /// * `source` - Jacquard model source as a YAML string
    ///
    /// # Errors
    ///
    /// Returns `JacquardError` for malformed documents and for expansion or
    /// validation findings.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jacquard::{ModelBuilder, config::AppConfig};
    ///
    /// let source = "nodes:\n  - label: Person\n    mode: match\n";
    /// let builder = ModelBuilder::new(AppConfig::default());
    /// let model = builder.parse(source)
    ///     .expect("Failed to expand model");
    /// assert_eq!(model.nodes[0].alias, "person");
    /// ```
    pub fn parse(&self, source: &str) -> Result<Model, JacquardError> {
        info!("Expanding model");

        let document: RawDocument = source.parse().map_err(DocumentError::from)?;
        let model = jacquard_engine::expand(document)?;

        debug!("Model expanded successfully");
        trace!(model:?; "Expanded model");

        Ok(model)
    }

    /// Read a YAML model file and expand it.
    ///
    /// # Arguments
    ///
    /// * `path` - Path of the model file
    ///
    /// # Errors
    ///
    /// Returns `JacquardError` when the file cannot be read and for every
    /// case [`ModelBuilder::parse`] reports.
    pub fn load(&self, path: &Path) -> Result<Model, JacquardError> {
        info!(path:? = path; "Loading model");

        let document = RawDocument::from_path(path)?;
        let model = jacquard_engine::expand(document)?;

        debug!("Model expanded successfully");

        Ok(model)
    }

    /// Build a [`Renderer`] over the templates found in `search_path`.
    ///
    /// The template extension comes from this builder's configuration.
    ///
    /// # Errors
    ///
    /// Returns `JacquardError` when the directory cannot be read or a
    /// template fails to compile.
    pub fn renderer(&self, search_path: &Path) -> Result<Renderer, JacquardError> {
        Renderer::from_dir(search_path, self.config.templates())
    }
}
