//! Answer pipeline configuration from TOML (`[answer]` section)

use askme_application::AnswerConfig;
use askme_domain::{CleanOptions, DEFAULT_ENTITY_BOOST};
use serde::{Deserialize, Serialize};

/// Raw answer configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileAnswerConfig {
    pub discard_echoes: bool,
    pub entity_boost: f64,
    /// Keep parentheticals such as `(42%)` or `(3.0 × 10^8 m/s)`
    pub keep_numeric_parentheticals: bool,
}

impl Default for FileAnswerConfig {
    fn default() -> Self {
        Self {
            discard_echoes: true,
            entity_boost: DEFAULT_ENTITY_BOOST,
            keep_numeric_parentheticals: false,
        }
    }
}

impl FileAnswerConfig {
    pub fn to_answer_config(&self) -> AnswerConfig {
        AnswerConfig::default()
            .with_discard_echoes(self.discard_echoes)
            .with_entity_boost(self.entity_boost)
            .with_clean(CleanOptions {
                keep_numeric_parentheticals: self.keep_numeric_parentheticals,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_application_default() {
        assert_eq!(
            FileAnswerConfig::default().to_answer_config(),
            AnswerConfig::default()
        );
    }

    #[test]
    fn test_answer_section_deserialize() {
        let toml_str = r#"
[answer]
discard_echoes = false
keep_numeric_parentheticals = true
"#;
        let config: super::super::FileConfig = toml::from_str(toml_str).unwrap();
        let answer = config.answer.to_answer_config();
        assert!(!answer.discard_echoes);
        assert!(answer.clean.keep_numeric_parentheticals);
        assert_eq!(answer.entity_boost, DEFAULT_ENTITY_BOOST);
    }
}
