use anyhow::{Context, Result, anyhow};
use log::warn;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::errors::{AppError, ConfigError};
use crate::reflow::{BreakToken, BreakTokenTable, ReflowEngine, ReflowSettings};

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    /// Reflow thresholds
    #[serde(default)]
    pub reflow: ReflowSettings,

    /// Custom break tokens; the built-in Korean table is used when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub break_tokens: Option<Vec<BreakToken>>,

    /// Output settings
    #[serde(default)]
    pub output: OutputConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Output representation written by the CLI
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Tagged tier markup
    #[default]
    Markup,
    /// Visible text only
    Plain,
    /// Markup nodes as JSON
    Json,
}

impl OutputFormat {
    // @returns: File extension for written output
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Markup => "markup",
            Self::Plain => "txt",
            Self::Json => "json",
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Markup => "markup",
            Self::Plain => "plain",
            Self::Json => "json",
        };
        write!(f, "{}", name)
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "markup" => Ok(Self::Markup),
            "plain" => Ok(Self::Plain),
            "json" => Ok(Self::Json),
            _ => Err(anyhow!("Invalid output format: {}", s)),
        }
    }
}

/// Output configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct OutputConfig {
    /// Output representation
    #[serde(default)]
    pub format: OutputFormat,

    /// Marker inserted between file stem and extension of written files
    #[serde(default = "default_output_suffix")]
    pub suffix: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            suffix: default_output_suffix(),
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

fn default_output_suffix() -> String {
    "mobile".to_string()
}

impl Config {
    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<(), AppError> {
        self.reflow.validate()?;

        self.token_table()?;

        if self.output.suffix.trim().is_empty() {
            return Err(ConfigError::EmptyOutputSuffix.into());
        }

        Ok(())
    }

    /// Break-token table from the config, or the built-in Korean one
    pub fn token_table(&self) -> Result<BreakTokenTable, ConfigError> {
        match &self.break_tokens {
            Some(tokens) => BreakTokenTable::new(tokens.clone()),
            None => Ok(BreakTokenTable::korean()),
        }
    }

    /// Build a reflow engine from this configuration
    pub fn build_engine(&self) -> Result<ReflowEngine, AppError> {
        let engine = ReflowEngine::with_config(self.reflow.clone(), self.token_table()?)?;
        Ok(engine)
    }

    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .context(format!("Failed to open config file: {}", path.display()))?;

        let reader = BufReader::new(file);
        let config: Config = serde_json::from_reader(reader)
            .context(format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Save configuration as pretty JSON
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let config_json = serde_json::to_string_pretty(self)
            .context("Failed to serialize config to JSON")?;

        std::fs::write(path, config_json)
            .context(format!("Failed to write config to file: {}", path.display()))?;

        Ok(())
    }

    /// Load the config at `path`, or write and return the default one
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            return Self::from_file(path);
        }

        warn!("Config file not found at '{}', creating default config.", path.display());

        let config = Config::default();
        config.save(path)?;
        Ok(config)
    }
}
