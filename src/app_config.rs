use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::default::Default;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Default source language tag offered by the prompts
    pub source_language: String,

    /// Default target language tag offered by the prompts
    pub target_language: String,

    /// File extensions recognized as text-file candidates, stored with
    /// their leading dot (e.g. ".en"). The set is free-form: any extension
    /// string accepted interactively is added without validation.
    #[serde(default = "Config::default_extensions")]
    pub recognized_extensions: BTreeSet<String>,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Log level for application logging
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    // @level: Error only
    Error,
    // @level: Warnings and errors
    Warn,
    // @level: Standard information
    #[default]
    Info,
    // @level: Debugging information
    Debug,
    // @level: Full tracing
    Trace,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            source_language: "en".to_string(),
            target_language: "fr".to_string(),
            recognized_extensions: Self::default_extensions(),
            log_level: LogLevel::default(),
        }
    }
}

impl Config {
    /// Extensions recognized out of the box: the common two-letter
    /// language suffixes plus plain ".txt"
    fn default_extensions() -> BTreeSet<String> {
        [
            ".en", ".fr", ".es", ".de", ".it", ".ru", ".ar", ".jp", ".ko", ".pt", ".nl", ".sv",
            ".txt",
        ]
        .iter()
        .map(|ext| ext.to_string())
        .collect()
    }

    /// Load a configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .with_context(|| format!("Failed to open config file: {}", path.display()))?;

        let reader = BufReader::new(file);
        let config: Config = serde_json::from_reader(reader)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Save the configuration as pretty-printed JSON
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let config_json =
            serde_json::to_string_pretty(self).context("Failed to serialize config to JSON")?;

        std::fs::write(path, config_json)
            .with_context(|| format!("Failed to write config to file: {}", path.display()))?;

        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.recognized_extensions.is_empty() {
            return Err(anyhow!(
                "Configuration contains no recognized extensions; nothing could ever be listed"
            ));
        }

        for ext in &self.recognized_extensions {
            if !ext.starts_with('.') {
                return Err(anyhow!(
                    "Recognized extension '{}' must start with a dot",
                    ext
                ));
            }
        }

        Ok(())
    }
}
