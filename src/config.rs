//! Configuration loaded from JSON.

use std::path::Path;

use serde::Deserialize;

use crate::{diagnostics::LogSink, logging::LoggingConfig};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Log informational messages for successful shader compiles.
    pub verbose: bool,
    pub logging: LoggingConfig,
}

impl Config {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Diagnostic sink writing under the configured target.
    pub fn sink(&self) -> LogSink {
        LogSink::new(self.logging.target.clone())
    }
}
