//! Template discovery and rendering.

mod helpers;

use std::{
    fs,
    path::{Path, PathBuf},
};

use handlebars::Handlebars;
use log::{debug, info};
use serde_json::json;

use jacquard_core::model::Model;

use crate::{config::TemplateConfig, error::JacquardError};

/// Renders expanded models through handlebars templates.
///
/// A renderer owns a registry of templates discovered from a single search
/// directory. Template names are file stems, so `nodes.create.hbs`
/// registers as `nodes.create`. Every template sees the model under the
/// `model` key and the helper namespace from [`helpers`].
pub struct Renderer {
    registry: Handlebars<'static>,
    names: Vec<String>,
}

impl Renderer {
    /// Discovers and registers every template under `search_path` with the
    /// configured extension.
    ///
    /// # Errors
    ///
    /// Returns `JacquardError::Io` when the directory cannot be read and
    /// `JacquardError::Template` when a template fails to compile.
    pub fn from_dir(search_path: &Path, config: &TemplateConfig) -> Result<Self, JacquardError> {
        let mut registry = Handlebars::new();
        // Generated output is query text, not HTML; arrows and quotes must
        // land verbatim.
        registry.register_escape_fn(handlebars::no_escape);
        helpers::register(&mut registry);

        let mut paths: Vec<PathBuf> = Vec::new();
        for entry in fs::read_dir(search_path)? {
            let path = entry?.path();
            if path.is_file()
                && path.extension().and_then(|ext| ext.to_str()) == Some(config.extension())
            {
                paths.push(path);
            }
        }
        paths.sort();

        let mut names = Vec::new();
        for path in &paths {
            let Some(name) = path.file_stem().and_then(|stem| stem.to_str()) else {
                continue;
            };
            registry.register_template_file(name, path)?;
            names.push(name.to_string());
        }
        info!(search_path:? = search_path, templates = names.len(); "Templates registered");

        Ok(Self { registry, names })
    }

    /// Returns the registered template names in lexical order.
    pub fn templates(&self) -> &[String] {
        &self.names
    }

    /// Returns whether `name` is a registered template.
    pub fn has_template(&self, name: &str) -> bool {
        self.names.iter().any(|registered| registered == name)
    }

    /// Renders `model` through the named template.
    ///
    /// Consecutive blank lines left behind by block helpers are collapsed,
    /// so the output is ready to write to disk as a query script.
    ///
    /// # Errors
    ///
    /// Returns `JacquardError::UnknownTemplate` when `name` was not
    /// discovered and `JacquardError::Render` when the template fails at
    /// render time.
    pub fn render(&self, name: &str, model: &Model) -> Result<String, JacquardError> {
        if !self.has_template(name) {
            return Err(JacquardError::UnknownTemplate(name.to_string()));
        }
        debug!(template = name; "Rendering template");
        let rendered = self.registry.render(name, &json!({ "model": model }))?;
        Ok(tidy(&rendered))
    }
}

/// Collapses runs of blank lines, drops leading and trailing blanks, and
/// terminates non-empty output with one newline.
///
/// Block helpers keep the line breaks of their own markup, so raw renders
/// arrive with a gap wherever a `{{#each}}` ran.
fn tidy(rendered: &str) -> String {
    let mut lines: Vec<&str> = Vec::new();
    let mut previous_blank = true;
    for line in rendered.lines() {
        let blank = line.trim().is_empty();
        if blank && previous_blank {
            continue;
        }
        lines.push(if blank { "" } else { line });
        previous_blank = blank;
    }
    while lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }
    if lines.is_empty() {
        return String::new();
    }
    let mut output = lines.join("\n");
    output.push('\n');
    output
}
