//! Command-line argument definitions for the Jacquard CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control the model file, template selection,
//! output location, configuration file selection, and logging verbosity.

use clap::Parser;

/// Command-line arguments for the Jacquard query generator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input model file
    #[arg(help = "Path to the input model file (YAML)")]
    pub model: String,

    /// Template to render, or `all` for every discovered template
    #[arg(short, long, default_value = "all")]
    pub template: String,

    /// Directory searched for templates; overrides the configured path
    #[arg(short, long)]
    pub searchpath: Option<String>,

    /// Directory generated files are written to
    #[arg(short, long, default_value = ".")]
    pub output: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
