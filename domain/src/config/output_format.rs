//! Output format value object

use serde::{Deserialize, Serialize};

/// How an answer is rendered for the user
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Only the cleaned answer (default)
    #[default]
    Answer,
    /// Answer plus per-source outcomes and runner-up candidates
    Full,
    /// JSON output
    Json,
}
