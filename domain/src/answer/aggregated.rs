//! Aggregated answer value object.

use super::candidate::CandidateAnswer;
use serde::{Deserialize, Serialize};

/// Text carried by the "no answer" sentinel
pub const NO_ANSWER_TEXT: &str = "No answer found";

/// The ranked choice across all sources
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregatedAnswer {
    /// Selected text ([`NO_ANSWER_TEXT`] for the sentinel)
    pub text: String,
    pub success: bool,
    /// The winning candidate, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chosen: Option<CandidateAnswer>,
    /// Every candidate in the winning dedup group, including the chosen one
    pub contributing: Vec<CandidateAnswer>,
    /// Best candidate of each losing dedup group, in rank order
    #[serde(default)]
    pub runners_up: Vec<CandidateAnswer>,
}

impl AggregatedAnswer {
    /// The "no answer" sentinel
    pub fn no_answer() -> Self {
        Self {
            text: NO_ANSWER_TEXT.to_string(),
            success: false,
            chosen: None,
            contributing: Vec::new(),
            runners_up: Vec::new(),
        }
    }

    pub fn chosen(
        chosen: CandidateAnswer,
        contributing: Vec<CandidateAnswer>,
        runners_up: Vec<CandidateAnswer>,
    ) -> Self {
        Self {
            text: chosen.text.clone(),
            success: true,
            chosen: Some(chosen),
            contributing,
            runners_up,
        }
    }

    pub fn is_no_answer(&self) -> bool {
        !self.success && self.chosen.is_none()
    }

    /// Distinct source names in the winning group, in contribution order
    pub fn contributing_sources(&self) -> Vec<String> {
        let mut sources: Vec<String> = Vec::new();
        for c in &self.contributing {
            if !sources.contains(&c.source) {
                sources.push(c.source.clone());
            }
        }
        sources
    }

    /// Replace the selected text (used after post-processing)
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }
}
