//! Configuration module

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::commands::OutputFormat;
use crate::error::{CliError, CliResult};
use wordnum_core::Options;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
pub struct CliConfig {
    /// Defaults for command-line flags
    #[serde(default)]
    pub defaults: DefaultsConfig,

    /// Currency rendering options
    #[serde(default)]
    pub options: Options,
}

/// Defaults used when a flag is not given
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct DefaultsConfig {
    /// Language name, ISO code or culture tag
    pub language: String,

    /// Output format
    pub format: OutputFormat,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            language: "english".to_string(),
            format: OutputFormat::Text,
        }
    }
}

impl CliConfig {
    /// Load the configuration file, or defaults when no path is given
    pub fn load(path: Option<&Path>) -> CliResult<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let source = fs::read_to_string(path)
            .map_err(|_| CliError::FileNotFound(path.display().to_string()))?;
        let config = Self::from_toml_str(&source)?;
        log::info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Parse a TOML document
    pub fn from_toml_str(source: &str) -> CliResult<Self> {
        toml::from_str(source).map_err(|e| CliError::ConfigError(e.to_string()).into())
    }

    /// Language from the command line, falling back to the file
    pub fn language<'a>(&'a self, flag: Option<&'a str>) -> &'a str {
        flag.unwrap_or(&self.defaults.language)
    }

    /// Output format from the command line, falling back to the file
    pub fn format(&self, flag: Option<OutputFormat>) -> OutputFormat {
        flag.unwrap_or(self.defaults.format)
    }
}
