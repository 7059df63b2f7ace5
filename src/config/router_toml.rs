#![forbid(unsafe_code)]

//! `cmdrouter.toml` parsing
//!
//! ```toml
//! [output]
//! format = "json"    # "human" (default) or "json"
//! color = "never"    # "auto" (default), "always" or "never"
//! ```
//!
//! Every field is optional. Environment variables `CMDROUTER_FORMAT` and
//! `CMDROUTER_COLOR` take precedence over the file.

use crate::error::ConfigError;
use serde::Deserialize;
use std::path::Path;
use std::str::FromStr;

/// File looked up in the working directory by [`Config::discover`]
pub const CONFIG_FILE_NAME: &str = "cmdrouter.toml";

/// Overrides `output.format`
pub const FORMAT_ENV: &str = "CMDROUTER_FORMAT";

/// Overrides `output.color`
pub const COLOR_ENV: &str = "CMDROUTER_COLOR";

/// Root configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,
}

/// How dispatch outcomes are rendered
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
    #[serde(default)]
    pub color: ColorOption,
}

/// Responder selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Human,
    Json,
}

/// Terminal color policy, mirrors `termcolor::ColorChoice`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ColorOption {
    #[default]
    Auto,
    Always,
    Never,
}

impl FromStr for OutputFormat {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "human" => Ok(OutputFormat::Human),
            "json" => Ok(OutputFormat::Json),
            _ => Err(()),
        }
    }
}

impl FromStr for ColorOption {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(ColorOption::Auto),
            "always" => Ok(ColorOption::Always),
            "never" => Ok(ColorOption::Never),
            _ => Err(()),
        }
    }
}

impl From<ColorOption> for termcolor::ColorChoice {
    fn from(option: ColorOption) -> Self {
        match option {
            ColorOption::Auto => termcolor::ColorChoice::Auto,
            ColorOption::Always => termcolor::ColorChoice::Always,
            ColorOption::Never => termcolor::ColorChoice::Never,
        }
    }
}

impl Config {
    /// Parse configuration from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from a file, without environment overrides
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Load `cmdrouter.toml` from the working directory if present, then apply
    /// environment overrides
    pub fn discover() -> Result<Self, ConfigError> {
        let path = Path::new(CONFIG_FILE_NAME);
        let config = if path.exists() {
            Self::load(path)?
        } else {
            Config::default()
        };
        config.with_env_overrides(|key| std::env::var(key).ok())
    }

    /// Apply `CMDROUTER_*` overrides read through `lookup`
    ///
    /// Blank values are ignored; anything else must name a known variant.
    pub fn with_env_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(FORMAT_ENV)
            && !value.trim().is_empty()
        {
            self.output.format = value.parse().map_err(|_| ConfigError::InvalidValue {
                key: FORMAT_ENV.to_string(),
                value: value.clone(),
            })?;
        }

        if let Some(value) = lookup(COLOR_ENV)
            && !value.trim().is_empty()
        {
            self.output.color = value.parse().map_err(|_| ConfigError::InvalidValue {
                key: COLOR_ENV.to_string(),
                value: value.clone(),
            })?;
        }

        Ok(self)
    }
}
