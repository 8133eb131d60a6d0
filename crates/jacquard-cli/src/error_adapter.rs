//! Adapters that turn CLI errors into miette reports.
//!
//! An expansion failure carries a list of diagnostics; each becomes its own
//! report so the graphical handler renders every finding separately, with
//! its code and help text.

use thiserror::Error;

use jacquard::{Diagnostic, JacquardError, Severity};

use crate::error::CliError;

/// A single renderable report.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct Reportable {
    message: String,
    code: Option<String>,
    help: Option<String>,
    severity: miette::Severity,
}

impl Reportable {
    fn message_only(message: String) -> Self {
        Self {
            message,
            code: None,
            help: None,
            severity: miette::Severity::Error,
        }
    }

    fn from_diagnostic(diagnostic: &Diagnostic) -> Self {
        let mut message = diagnostic.message().to_string();
        if let Some(element) = diagnostic.element() {
            // Grammar findings quote only the offending descriptor; name
            // the element unless the message already does.
            if !message.contains(&format!("`{element}`")) {
                message.push_str(&format!(" (element `{element}`)"));
            }
        }

        Self {
            message,
            code: diagnostic.code().map(|code| code.as_str().to_string()),
            help: diagnostic.help().map(str::to_string),
            severity: match diagnostic.severity() {
                Severity::Error => miette::Severity::Error,
                Severity::Warning => miette::Severity::Warning,
            },
        }
    }
}

impl miette::Diagnostic for Reportable {
    fn code<'a>(&'a self) -> Option<Box<dyn std::fmt::Display + 'a>> {
        self.code
            .as_ref()
            .map(|code| Box::new(code) as Box<dyn std::fmt::Display + 'a>)
    }

    fn severity(&self) -> Option<miette::Severity> {
        Some(self.severity)
    }

    fn help<'a>(&'a self) -> Option<Box<dyn std::fmt::Display + 'a>> {
        self.help
            .as_ref()
            .map(|help| Box::new(help) as Box<dyn std::fmt::Display + 'a>)
    }
}

/// Renders every report for `error` through miette's graphical handler,
/// one string per finding, ready to print or log.
pub fn render_reports(error: &CliError) -> Vec<String> {
    let handler = miette::GraphicalReportHandler::new();
    to_reportables(error)
        .iter()
        .map(|reportable| {
            let mut rendered = String::new();
            // fmt::Write into a String cannot fail.
            let _ = handler.render_report(&mut rendered, reportable);
            rendered
        })
        .collect()
}

/// Converts a CLI error into independently renderable reports.
///
/// Expansion errors fan out into one report per diagnostic; every other
/// error becomes a single report with its display message.
pub fn to_reportables(error: &CliError) -> Vec<Reportable> {
    match error {
        CliError::Jacquard(JacquardError::Expand(expand)) => expand
            .diagnostics()
            .iter()
            .map(Reportable::from_diagnostic)
            .collect(),
        other => vec![Reportable::message_only(other.to_string())],
    }
}
