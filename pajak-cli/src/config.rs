//! TOML configuration for the command-line front end.
//!
//! Every key is optional:
//!
//! ```toml
//! log_level = "debug"
//! log_file = "pajak.log"
//! default_status = "K/1"
//! strict_codes = true
//! ```
//!
//! Command-line flags override the file.

use std::path::{Path, PathBuf};

use pajak_core::PtkpStatus;
use serde::Deserialize;
use thiserror::Error;

use crate::cli::Cli;
use crate::input::CodeResolver;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    pub log_level: String,
    pub log_file: Option<PathBuf>,
    /// Status for progressive calculations that name none.
    pub default_status: PtkpStatus,
    pub strict_codes: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_file: None,
            default_status: PtkpStatus::default(),
            strict_codes: false,
        }
    }
}

impl Config {
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(input)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    /// Applies the global command-line flags on top of the file values.
    pub fn apply_overrides(
        &mut self,
        cli: &Cli,
    ) {
        if let Some(level) = &cli.log_level {
            self.log_level = level.clone();
        }
        if let Some(file) = &cli.log_file {
            self.log_file = Some(file.clone());
        }
        if cli.strict {
            self.strict_codes = true;
        }
    }

    pub fn resolver(&self) -> CodeResolver {
        CodeResolver {
            strict: self.strict_codes,
            default_status: self.default_status,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        assert_eq!(Config::from_toml_str("").unwrap(), Config::default());
    }

    #[test]
    fn all_keys() {
        let config = Config::from_toml_str(
            r#"
            log_level = "debug"
            log_file = "pajak.log"
            default_status = "K/1"
            strict_codes = true
            "#,
        )
        .unwrap();

        assert_eq!(
            config,
            Config {
                log_level: "debug".to_string(),
                log_file: Some(PathBuf::from("pajak.log")),
                default_status: PtkpStatus::K1,
                strict_codes: true,
            }
        );
    }

    #[test]
    fn unknown_status_is_rejected() {
        let result = Config::from_toml_str(r#"default_status = "K/9""#);

        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn unknown_key_is_rejected() {
        let result = Config::from_toml_str("colour = true");

        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = Config::load(Path::new("/nonexistent/pajak.toml")).unwrap_err();

        assert!(err.to_string().contains("/nonexistent/pajak.toml"));
    }

    #[test]
    fn flags_override_file() {
        let mut config = Config::from_toml_str(r#"log_level = "warn""#).unwrap();
        let cli = Cli::parse_from(["pajak", "--strict", "--log-level", "trace", "rates"]);

        config.apply_overrides(&cli);

        assert_eq!(config.log_level, "trace");
        assert!(config.strict_codes);
        assert_eq!(config.log_file, None);
    }

    #[test]
    fn resolver_carries_policy() {
        let config = Config {
            default_status: PtkpStatus::K3,
            strict_codes: true,
            ..Config::default()
        };

        assert_eq!(
            config.resolver(),
            CodeResolver {
                strict: true,
                default_status: PtkpStatus::K3,
            }
        );
    }
}
