//! Answer parameters: use case pipeline control.
//!
//! [`AnswerConfig`] groups the knobs that shape what happens after the sources
//! reply. Per-source timeouts and retries live on
//! [`SourceAdapterConfig`](askme_domain::SourceAdapterConfig).

use askme_domain::{CleanOptions, DEFAULT_ENTITY_BOOST};
use serde::{Deserialize, Serialize};

/// Pipeline control parameters for [`AnswerQuestionUseCase`](crate::AnswerQuestionUseCase).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnswerConfig {
    /// Post-processing applied to the chosen answer
    pub clean: CleanOptions,
    /// Drop candidates that merely restate the question or one of its entities
    pub discard_echoes: bool,
    /// Encyclopedia weight multiplier for questions naming a person, place or organisation
    pub entity_boost: f64,
}

impl Default for AnswerConfig {
    fn default() -> Self {
        Self {
            clean: CleanOptions::default(),
            discard_echoes: true,
            entity_boost: DEFAULT_ENTITY_BOOST,
        }
    }
}

impl AnswerConfig {
    pub fn with_clean(mut self, clean: CleanOptions) -> Self {
        self.clean = clean;
        self
    }

    pub fn with_discard_echoes(mut self, discard: bool) -> Self {
        self.discard_echoes = discard;
        self
    }

    pub fn with_entity_boost(mut self, boost: f64) -> Self {
        self.entity_boost = boost;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AnswerConfig::default();
        assert!(config.discard_echoes);
        assert_eq!(config.entity_boost, 1.25);
        assert!(!config.clean.keep_numeric_parentheticals);
    }

    #[test]
    fn test_builders() {
        let config = AnswerConfig::default()
            .with_discard_echoes(false)
            .with_entity_boost(2.0)
            .with_clean(CleanOptions {
                keep_numeric_parentheticals: true,
            });
        assert!(!config.discard_echoes);
        assert_eq!(config.entity_boost, 2.0);
        assert!(config.clean.keep_numeric_parentheticals);
    }
}
