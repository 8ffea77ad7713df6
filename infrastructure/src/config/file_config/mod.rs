//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod answer;
mod logging;
mod output;
mod sources;

pub use answer::FileAnswerConfig;
pub use logging::FileLoggingConfig;
pub use output::FileOutputConfig;
pub use sources::{
    FileSourceConfig, FileSourcesConfig, SOURCE_NAMES, WEB, WIKIPEDIA, WOLFRAM,
};

use askme_domain::{ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};

/// Weights above this drown every other source
pub const MAX_SOURCE_WEIGHT: f64 = 10.0;

/// Environment variable consulted for the Wolfram|Alpha app id when
/// `api_key_env` is not set
pub const DEFAULT_WOLFRAM_KEY_ENV: &str = "WOLFRAM_APP_ID";

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Knowledge source settings
    pub sources: FileSourcesConfig,
    /// Ranking and post-processing settings
    pub answer: FileAnswerConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// Answer transcript settings
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// Checks, for every enabled source:
    /// 1. Weight is a positive number no larger than [`MAX_SOURCE_WEIGHT`]
    /// 2. Credentialed sources have a key
    ///
    /// and that at least one source is enabled.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        for (name, source) in self.sources.iter().filter(|(_, s)| s.enabled) {
            if source.weight.is_nan() || source.weight <= 0.0 {
                issues.push(ConfigIssue::error(
                    ConfigIssueCode::NonPositiveWeight {
                        source: name.to_string(),
                    },
                    format!(
                        "sources.{}.weight must be positive (got {})",
                        name, source.weight
                    ),
                ));
            } else if source.weight > MAX_SOURCE_WEIGHT {
                issues.push(ConfigIssue::error(
                    ConfigIssueCode::ExcessiveWeight {
                        source: name.to_string(),
                    },
                    format!(
                        "sources.{}.weight {} exceeds the maximum of {}",
                        name, source.weight, MAX_SOURCE_WEIGHT
                    ),
                ));
            }
        }

        if self.sources.wolfram.enabled
            && self
                .sources
                .wolfram
                .resolve_api_key(Some(DEFAULT_WOLFRAM_KEY_ENV))
                .is_none()
        {
            let var = self
                .sources
                .wolfram
                .api_key_env
                .as_deref()
                .unwrap_or(DEFAULT_WOLFRAM_KEY_ENV);
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::MissingCredentials {
                    source: WOLFRAM.to_string(),
                },
                format!(
                    "sources.wolfram is enabled but has no app id; set {} or sources.wolfram.api_key",
                    var
                ),
            ));
        }

        if !self.sources.any_enabled() {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::NoSourcesEnabled,
                "every knowledge source is disabled",
            ));
        }

        issues
    }

    /// Keep only the named sources enabled.
    ///
    /// Unknown names are reported and leave the configuration untouched.
    pub fn restrict_sources(&mut self, names: &[String]) -> Result<(), ConfigIssue> {
        if let Some(unknown) = names
            .iter()
            .find(|n| self.sources.get(n.as_str()).is_none())
        {
            return Err(ConfigIssue::error(
                ConfigIssueCode::UnknownSource {
                    source: unknown.clone(),
                },
                format!(
                    "unknown source '{}' (expected one of: {})",
                    unknown,
                    SOURCE_NAMES.join(", ")
                ),
            ));
        }

        for name in SOURCE_NAMES {
            if let Some(source) = self.sources.get_mut(name) {
                source.enabled = names.iter().any(|n| n == name);
            }
        }
        Ok(())
    }

    /// Apply one timeout to every source.
    pub fn set_timeout_ms(&mut self, timeout_ms: u64) {
        for name in SOURCE_NAMES {
            if let Some(source) = self.sources.get_mut(name) {
                source.timeout_ms = timeout_ms;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use askme_domain::OutputFormat;

    fn keyed() -> FileConfig {
        let mut config = FileConfig::default();
        config.sources.wolfram.api_key = Some("TEST-APPID".to_string());
        config
    }

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[sources.wolfram]
timeout_ms = 3000
api_key_env = "MY_WOLFRAM_ID"
max_results = 1

[sources.wikipedia]
weight = 1.2

[sources.web]
enabled = false
combine_snippets = true

[answer]
entity_boost = 1.5

[output]
format = "full"
color = false

[logging]
answer_log = "~/.local/share/askme/answers.jsonl"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.sources.wolfram.timeout_ms, 3000);
        assert_eq!(
            config.sources.wolfram.api_key_env.as_deref(),
            Some("MY_WOLFRAM_ID")
        );
        assert_eq!(config.sources.wolfram.max_retries, 2);
        assert_eq!(config.sources.wikipedia.weight, 1.2);
        assert!(!config.sources.web.enabled);
        assert!(config.sources.web.combine_snippets);
        assert_eq!(config.answer.entity_boost, 1.5);
        assert_eq!(config.output.format, Some(OutputFormat::Full));
        assert!(!config.output.color);
        assert!(config.logging.answer_log.is_some());
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[sources.web]
max_results = 3
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.sources.web.max_results, Some(3));
        // Defaults should apply
        assert!(config.sources.wolfram.enabled);
        assert_eq!(config.sources.web.timeout_ms, 5000);
        assert!(config.answer.discard_echoes);
        assert!(config.output.color);
    }

    #[test]
    fn test_validate_valid_config() {
        assert!(keyed().validate().is_empty());
    }

    #[test]
    fn test_validate_missing_wolfram_key_is_warning() {
        let mut config = FileConfig::default();
        config.sources.wolfram.api_key_env = Some("ASKME_TEST_NEVER_SET_4".to_string());
        let issues = config.validate();
        assert_eq!(issues.len(), 1);
        assert!(!issues[0].is_error());
        assert!(issues[0].message.contains("ASKME_TEST_NEVER_SET_4"));
    }

    #[test]
    fn test_validate_weights() {
        let mut config = keyed();
        config.sources.wikipedia.weight = 0.0;
        config.sources.web.weight = 25.0;
        let issues = config.validate();
        assert_eq!(issues.len(), 2);
        assert!(issues.iter().all(|i| i.is_error()));
        assert!(issues.iter().any(|i| matches!(
            &i.code,
            ConfigIssueCode::NonPositiveWeight { source } if source == "wikipedia"
        )));
        assert!(issues.iter().any(|i| matches!(
            &i.code,
            ConfigIssueCode::ExcessiveWeight { source } if source == "web"
        )));
    }

    #[test]
    fn test_validate_nan_weight() {
        let mut config = keyed();
        config.sources.web.weight = f64::NAN;
        assert!(config.validate().iter().any(|i| i.is_error()));
    }

    #[test]
    fn test_disabled_sources_are_not_checked() {
        let mut config = keyed();
        config.sources.web.enabled = false;
        config.sources.web.weight = -1.0;
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_validate_no_sources_enabled() {
        let mut config = FileConfig::default();
        config.sources.wolfram.enabled = false;
        config.sources.wikipedia.enabled = false;
        config.sources.web.enabled = false;
        let issues = config.validate();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].code, ConfigIssueCode::NoSourcesEnabled);
    }

    #[test]
    fn test_restrict_sources() {
        let mut config = FileConfig::default();
        config
            .restrict_sources(&["web".to_string(), "wikipedia".to_string()])
            .unwrap();
        assert!(!config.sources.wolfram.enabled);
        assert!(config.sources.wikipedia.enabled);
        assert!(config.sources.web.enabled);
    }

    #[test]
    fn test_restrict_sources_rejects_unknown() {
        let mut config = FileConfig::default();
        let issue = config
            .restrict_sources(&["web".to_string(), "bing".to_string()])
            .unwrap_err();
        assert!(issue.is_error());
        assert!(issue.message.contains("bing"));
        assert!(config.sources.wolfram.enabled);
    }

    #[test]
    fn test_set_timeout_applies_everywhere() {
        let mut config = FileConfig::default();
        config.set_timeout_ms(750);
        assert!(config.sources.iter().all(|(_, s)| s.timeout_ms == 750));
    }
}
