//! Optional TOML configuration.
//!
//! ```toml
//! [logging]
//! level = "debug"
//! file = "retirement.log"
//! console = false
//! ```
//!
//! Every key is optional; a missing file path means all defaults.

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use thiserror::Error;

/// Errors raised while loading the configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, e.g. `"info"` or `"warn,retire_core=debug"`.
    pub level: String,

    /// Log file to append to. The directory must already exist.
    pub file: Option<PathBuf>,

    /// Log to stderr in headless mode. The interactive form always turns
    /// the console off while it owns the terminal.
    pub console: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
            console: true,
        }
    }
}

impl AppConfig {
    /// Loads the configuration from `path`, or returns defaults when `None`.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_toml_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_toml_str(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn load_without_path_returns_defaults() {
        let config = AppConfig::load(None).unwrap();

        assert_eq!(config, AppConfig::default());
        assert_eq!(config.logging.level, "info");
        assert!(config.logging.console);
        assert_eq!(config.logging.file, None);
    }

    #[test]
    fn empty_document_uses_defaults() {
        assert_eq!(AppConfig::from_toml_str("").unwrap(), AppConfig::default());
    }

    #[test]
    fn partial_logging_section_keeps_other_defaults() {
        let config = AppConfig::from_toml_str("[logging]\nlevel = \"debug\"\n").unwrap();

        assert_eq!(config.logging.level, "debug");
        assert!(config.logging.console);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(AppConfig::from_toml_str("[logging]\ncolour = true\n").is_err());
    }

    #[test]
    fn load_reads_file_from_disk() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("calculator.toml");
        std::fs::write(
            &path,
            "[logging]\nlevel = \"warn\"\nfile = \"calc.log\"\nconsole = false\n",
        )?;

        let config = AppConfig::load(Some(&path))?;

        assert_eq!(config.logging.level, "warn");
        assert_eq!(config.logging.file, Some(PathBuf::from("calc.log")));
        assert!(!config.logging.console);
        Ok(())
    }

    #[test]
    fn load_missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");

        let error = AppConfig::load(Some(&path)).unwrap_err();

        assert!(matches!(error, ConfigError::Read { .. }));
    }

    #[test]
    fn load_malformed_file_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[logging\nlevel = ").unwrap();

        let error = AppConfig::load(Some(&path)).unwrap_err();

        assert!(matches!(error, ConfigError::Parse { .. }));
    }
}
