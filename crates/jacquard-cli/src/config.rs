//! Configuration loading for the Jacquard CLI.
//!
//! Configuration is read from an explicit `--config` path when given, and
//! otherwise from the platform configuration directory. A missing default
//! file is not an error; built-in defaults apply.

use std::{fs, io, path::PathBuf};

use directories::ProjectDirs;
use log::{debug, info};

use jacquard::config::AppConfig;

use crate::error::CliError;

/// Loads the application configuration.
///
/// # Errors
///
/// Returns an error when an explicitly named file cannot be read, or when
/// any configuration file fails to parse as TOML.
pub(crate) fn load_config(explicit: Option<&String>) -> Result<AppConfig, CliError> {
    let path = match explicit {
        Some(path) => PathBuf::from(path),
        None => match default_config_path() {
            Some(path) => path,
            None => return Ok(AppConfig::default()),
        },
    };

    match fs::read_to_string(&path) {
        Ok(text) => {
            let config = toml::from_str(&text)?;
            info!(path:? = path; "Configuration loaded");
            Ok(config)
        }
        Err(err) if err.kind() == io::ErrorKind::NotFound && explicit.is_none() => {
            debug!(path:? = path; "No configuration file found, using defaults");
            Ok(AppConfig::default())
        }
        Err(err) => Err(err.into()),
    }
}

fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "jacquard").map(|dirs| dirs.config_dir().join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_file_is_parsed() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "[templates]\nextension = \"tpl\"\n\n[output]\nextension = \"cql\"\n",
        )
        .expect("write config");

        let config =
            load_config(Some(&path.to_string_lossy().to_string())).expect("config loads");
        assert_eq!(config.templates().extension(), "tpl");
        assert_eq!(config.output().extension(), "cql");
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let result = load_config(Some(&"/nonexistent/jacquard.toml".to_string()));
        assert!(matches!(result, Err(CliError::Io(_))));
    }

    #[test]
    fn malformed_toml_is_an_error() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("config.toml");
        fs::write(&path, "not = [valid").expect("write config");

        let result = load_config(Some(&path.to_string_lossy().to_string()));
        assert!(matches!(result, Err(CliError::Config(_))));
    }

    #[test]
    fn partial_config_keeps_defaults() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("config.toml");
        fs::write(&path, "[templates]\nsearch_path = \"queries\"\n").expect("write config");

        let config =
            load_config(Some(&path.to_string_lossy().to_string())).expect("config loads");
        assert_eq!(config.templates().search_path(), Some("queries"));
        assert_eq!(config.templates().extension(), "hbs");
        assert_eq!(config.output().extension(), "cypher");
    }
}
