//! Binary entry point for the `jacquard` command.

use std::process;

use clap::Parser;
use log::{LevelFilter, debug, error, info};

use jacquard_cli::{Args, error_adapter};

fn main() {
    miette::set_panic_hook();

    let args = Args::parse();
    init_logging(&args.log_level);
    debug!(args:?; "Parsed arguments");

    if let Err(err) = jacquard_cli::run(&args) {
        for report in error_adapter::render_reports(&err) {
            error!("{report}");
        }
        process::exit(1);
    }

    info!("Completed successfully");
}

/// Configures env_logger from the `--log-level` flag. Unrecognized values
/// fall back to `warn` with a note on stderr, since logging is not up yet.
fn init_logging(level: &str) {
    let filter = level.parse::<LevelFilter>().unwrap_or_else(|_| {
        eprintln!("Invalid log level: {level}. Using 'warn' instead.");
        LevelFilter::Warn
    });
    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(filter)
        .init();
}
