//! Logging configuration from TOML (`[logging]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw logging configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// JSONL answer transcript; disabled when unset
    pub answer_log: Option<String>,
}

impl FileLoggingConfig {
    /// Transcript path with a leading `~/` expanded to the home directory.
    pub fn answer_log_path(&self) -> Option<PathBuf> {
        let raw = self.answer_log.as_deref()?.trim();
        if raw.is_empty() {
            return None;
        }
        match raw.strip_prefix("~/") {
            Some(rest) => dirs::home_dir().map(|home| home.join(rest)),
            None => Some(PathBuf::from(raw)),
        }
    }
}
