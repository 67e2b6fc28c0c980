use std::path::Path;

use serde::{Deserialize, Serialize};

/// Output format for command results.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// Machine-readable JSON.
    Json,
}

/// Configuration for the analyst front end.
///
/// Every setting here is a default; the matching command-line flag takes
/// precedence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Versions", into = "Versions")]
pub struct Config {
    /// The output format used when a command is not given `--output`.
    pub output: OutputFormat,

    /// Whether `validate` exits with a failure status when the proposed
    /// decomposition is not valid.
    pub strict: bool,

    /// Whether pass/fail markers may be coloured.
    ///
    /// Colour is still suppressed when the terminal does not support it.
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output: OutputFormat::default(),
            strict: false,
            color: default_color(),
        }
    }
}

/// Errors that can occur when loading or saving a [`Config`].
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The file could not be read or written.
    #[error("Failed to access config file: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not a valid configuration document.
    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    /// The configuration could not be serialized.
    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

impl Config {
    /// Loads the configuration from a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or if the TOML content is
    /// invalid.
    pub fn load(path: &Path) -> Result<Self, Error> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Saves the configuration to a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be serialized to TOML or if
    /// the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), Error> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

const fn default_color() -> bool {
    true
}

/// The serialized versions of the configuration.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "_version")]
enum Versions {
    #[serde(rename = "1")]
    V1 {
        #[serde(default)]
        output: OutputFormat,

        #[serde(default)]
        strict: bool,

        #[serde(default = "default_color")]
        color: bool,
    },
}

impl From<Versions> for Config {
    fn from(versions: Versions) -> Self {
        match versions {
            Versions::V1 {
                output,
                strict,
                color,
            } => Self {
                output,
                strict,
                color,
            },
        }
    }
}

impl From<Config> for Versions {
    fn from(config: Config) -> Self {
        Self::V1 {
            output: config.output,
            strict: config.strict,
            color: config.color,
        }
    }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.output, OutputFormat::Text);
        assert!(!config.strict);
        assert!(config.color);
    }

    #[test]
    fn missing_fields_use_defaults() {
        let config: Config = toml::from_str(r#"_version = "1""#).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn parses_all_fields() {
        let toml = r#"
            _version = "1"
            output = "json"
            strict = true
            color = false
        "#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.output, OutputFormat::Json);
        assert!(config.strict);
        assert!(!config.color);
    }

    #[test]
    fn unknown_version_is_rejected() {
        assert!(toml::from_str::<Config>(r#"_version = "2""#).is_err());
    }

    #[test]
    fn save_then_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("asil.toml");

        let config = Config {
            output: OutputFormat::Json,
            strict: true,
            color: false,
        };
        config.save(&path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains(r#"_version = "1""#));
        assert_eq!(Config::load(&path).unwrap(), config);
    }

    #[test]
    fn load_missing_file_fails() {
        let dir = tempdir().unwrap();
        let result = Config::load(&dir.path().join("missing.toml"));
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
