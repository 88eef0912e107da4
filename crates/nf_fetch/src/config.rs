use nf_core::{Error, Result};
use serde::Deserialize;
use std::str::FromStr;
use tracing::Level;

pub const DEFAULT_START_MESSAGE: &str = "📰 Starting Smart AI News Fetch...";
pub const DEFAULT_SUCCESS_MESSAGE: &str = "✅ News fetch completed successfully!";
pub const DEFAULT_FAILURE_MARKER: &str = "❌ Error:";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RunnerConfig {
    pub start_message: String,
    pub success_message: String,
    /// Written in front of the error description on failure.
    pub failure_marker: String,
    pub log_level: String,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            start_message: DEFAULT_START_MESSAGE.to_string(),
            success_message: DEFAULT_SUCCESS_MESSAGE.to_string(),
            failure_marker: DEFAULT_FAILURE_MARKER.to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl RunnerConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn level(&self) -> Result<Level> {
        Level::from_str(&self.log_level)
            .map_err(|_| Error::Config(format!("unknown log level: {}", self.log_level)))
    }

    pub fn failure_line(&self, description: &str) -> String {
        format!("{} {}", self.failure_marker, description)
    }
}
