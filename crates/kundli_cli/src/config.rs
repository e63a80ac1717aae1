//! Optional TOML configuration for the CLI.
//!
//! ```toml
//! [output]
//! pretty = true
//!
//! [logging]
//! level = "debug"
//!
//! [input]
//! require_ascendant = false
//! ```
//!
//! Every key is optional. Command-line flags override file values.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::Level;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("cannot read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("unknown log level {0:?} (expected error, warn, info, debug or trace)")]
    Level(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct KundliConfig {
    pub output: OutputConfig,
    pub logging: LoggingConfig,
    pub input: InputConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Pretty-print JSON reports.
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { pretty: true }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_owned(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InputConfig {
    /// Reject charts without a resolvable ascendant.
    pub require_ascendant: bool,
}

impl KundliConfig {
    pub fn from_toml_str(text: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load from `path`, or defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text, path)
    }

    pub fn log_level(&self) -> Result<Level, ConfigError> {
        self.logging
            .level
            .parse()
            .map_err(|_| ConfigError::Level(self.logging.level.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Result<KundliConfig, ConfigError> {
        KundliConfig::from_toml_str(text, Path::new("test.toml"))
    }

    #[test]
    fn empty_file_is_default() {
        let config = parse("").unwrap();
        assert_eq!(config, KundliConfig::default());
        assert!(config.output.pretty);
        assert_eq!(config.log_level().unwrap(), Level::WARN);
    }

    #[test]
    fn partial_sections() {
        let config = parse("[input]\nrequire_ascendant = true\n[logging]\nlevel = \"debug\"").unwrap();
        assert!(config.input.require_ascendant);
        assert!(config.output.pretty);
        assert_eq!(config.log_level().unwrap(), Level::DEBUG);
    }

    #[test]
    fn unknown_keys_rejected() {
        assert!(matches!(
            parse("[output]\ncolour = true"),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn bad_level() {
        let config = parse("[logging]\nlevel = \"loud\"").unwrap();
        assert!(matches!(config.log_level(), Err(ConfigError::Level(_))));
    }

    #[test]
    fn missing_file() {
        assert!(matches!(
            KundliConfig::load(Some(Path::new("/nonexistent/kundli.toml"))),
            Err(ConfigError::Read { .. })
        ));
        assert_eq!(KundliConfig::load(None).unwrap(), KundliConfig::default());
    }
}
