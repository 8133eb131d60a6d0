//! Configuration types for Jacquard query generation.
//!
//! This module provides configuration structures that control where
//! templates are found and how generated files are named. All types
//! implement [`serde::Deserialize`] for flexible loading from external
//! sources.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level application configuration combining template and output settings.
//! - [`TemplateConfig`] - Controls template discovery.
//! - [`OutputConfig`] - Controls generated file naming.
//!
//! # Example
//!
//! ```
//! # use jacquard::config::AppConfig;
//! // Use default configuration
//! let config = AppConfig::default();
//! assert_eq!(config.templates().extension(), "hbs");
//! assert_eq!(config.output().extension(), "cypher");
//! ```

use serde::Deserialize;

/// Top-level application configuration combining template and output
/// settings.
///
/// Groups [`TemplateConfig`] and [`OutputConfig`] into a single
/// configuration root.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Template configuration section.
    #[serde(default)]
    templates: TemplateConfig,

    /// Output configuration section.
    #[serde(default)]
    output: OutputConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified template and output
    /// configurations.
    ///
    /// # Arguments
    ///
    /// * `templates` - Template discovery settings.
    /// * `output` - Generated file naming settings.
    pub fn new(templates: TemplateConfig, output: OutputConfig) -> Self {
        Self { templates, output }
    }

    /// Returns the template configuration.
    pub fn templates(&self) -> &TemplateConfig {
        &self.templates
    }

    /// Returns the output configuration.
    pub fn output(&self) -> &OutputConfig {
        &self.output
    }
}

/// Template discovery configuration.
///
/// Controls which directory is searched for templates and which file
/// extension marks a file as a template.
#[derive(Debug, Clone, Deserialize)]
pub struct TemplateConfig {
    /// Directory searched for templates, relative to the working directory.
    /// Falls back to the caller's default when unset.
    #[serde(default)]
    search_path: Option<String>,

    /// File extension of template files, without the leading dot.
    #[serde(default = "default_template_extension")]
    extension: String,
}

impl TemplateConfig {
    /// Creates a new [`TemplateConfig`] with the specified search path and
    /// extension.
    pub fn new(search_path: Option<String>, extension: String) -> Self {
        Self {
            search_path,
            extension,
        }
    }

    /// Returns the configured search path, if any.
    pub fn search_path(&self) -> Option<&str> {
        self.search_path.as_deref()
    }

    /// Returns the template file extension.
    pub fn extension(&self) -> &str {
        &self.extension
    }
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self {
            search_path: None,
            extension: default_template_extension(),
        }
    }
}

fn default_template_extension() -> String {
    "hbs".to_string()
}

/// Generated file naming configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// File extension of generated files, without the leading dot.
    #[serde(default = "default_output_extension")]
    extension: String,
}

impl OutputConfig {
    /// Creates a new [`OutputConfig`] with the specified extension.
    pub fn new(extension: String) -> Self {
        Self { extension }
    }

    /// Returns the generated file extension.
    pub fn extension(&self) -> &str {
        &self.extension
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            extension: default_output_extension(),
        }
    }
}

fn default_output_extension() -> String {
    "cypher".to_string()
}
