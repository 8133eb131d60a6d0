//! CLI logic for the Jacquard query generator.
//!
//! This module contains the core CLI logic for the Jacquard query
//! generator.

pub mod error_adapter;

mod args;
mod config;
mod error;

pub use args::Args;
pub use error::CliError;

use std::{fs, path::Path};

use log::{info, warn};

use jacquard::ModelBuilder;

/// Run the Jacquard CLI application
///
/// This function expands the input model and renders the selected
/// template, or every discovered template, writing one generated file per
/// template into the output directory. Generated files are named
/// `<model>.<template>.<extension>`.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `CliError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Expansion and validation findings
/// - Template discovery and rendering errors
pub fn run(args: &Args) -> Result<(), CliError> {
    info!(
        model_path = args.model,
        template = args.template;
        "Processing model"
    );

    // Load configuration
    let app_config = config::load_config(args.config.as_ref())?;

    // The flag beats the configured search path, which beats `templates`
    let search_path = args
        .searchpath
        .as_deref()
        .or(app_config.templates().search_path())
        .unwrap_or("templates")
        .to_string();

    // Expand the model and discover templates using the ModelBuilder API
    let builder = ModelBuilder::new(app_config);
    let model = builder.load(Path::new(&args.model))?;
    let renderer = builder.renderer(Path::new(&search_path))?;

    let names: Vec<String> = if args.template == "all" {
        renderer.templates().to_vec()
    } else {
        vec![args.template.clone()]
    };
    if names.is_empty() {
        warn!(search_path; "No templates discovered");
        return Ok(());
    }

    let model_stem = Path::new(&args.model)
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("model");
    let extension = builder.config().output().extension();

    // Write one generated file per rendered template
    fs::create_dir_all(&args.output)?;
    for name in &names {
        let rendered = renderer.render(name, &model)?;
        let file_name = format!("{model_stem}.{name}.{extension}");
        let path = Path::new(&args.output).join(&file_name);
        fs::write(&path, rendered)?;
        info!(path:? = path; "Generated file written");
    }

    info!(count = names.len(); "Templates rendered successfully");

    Ok(())
}
