//! Source configuration from TOML (`[sources.*]` sections)

use askme_domain::{RetryPolicy, SourceAdapterConfig};
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const WOLFRAM: &str = "wolfram";
pub const WIKIPEDIA: &str = "wikipedia";
pub const WEB: &str = "web";

/// Every source name the configuration knows about, in dispatch order
pub const SOURCE_NAMES: [&str; 3] = [WOLFRAM, WIKIPEDIA, WEB];

/// Raw per-source configuration
///
/// Fields left unset fall back to source-specific defaults when the adapter
/// is built (see `sources::registry`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSourceConfig {
    pub enabled: bool,
    /// Total time budget for one question, retries included
    pub timeout_ms: u64,
    pub max_retries: u32,
    pub initial_backoff_ms: u64,
    pub backoff_multiplier: f64,
    pub max_backoff_ms: u64,
    /// Static priority weight used by the ranker
    pub weight: f64,
    /// Inline credential; prefer `api_key_env`
    pub api_key: Option<String>,
    /// Environment variable holding the credential
    pub api_key_env: Option<String>,
    pub base_url: Option<String>,
    pub max_results: Option<usize>,
    /// Join all snippets into one candidate (web only)
    pub combine_snippets: bool,
}

impl Default for FileSourceConfig {
    fn default() -> Self {
        let retry = RetryPolicy::default();
        Self {
            enabled: true,
            timeout_ms: 5000,
            max_retries: retry.max_retries,
            initial_backoff_ms: retry.initial_backoff.as_millis() as u64,
            backoff_multiplier: retry.multiplier,
            max_backoff_ms: retry.max_backoff.as_millis() as u64,
            weight: 1.0,
            api_key: None,
            api_key_env: None,
            base_url: None,
            max_results: None,
            combine_snippets: false,
        }
    }
}

impl FileSourceConfig {
    /// Resolve the credential: inline key first, then the named variable,
    /// then `default_env`. Blank values count as missing.
    pub fn resolve_api_key(&self, default_env: Option<&str>) -> Option<String> {
        if let Some(key) = self.api_key.as_deref().map(str::trim)
            && !key.is_empty()
        {
            return Some(key.to_string());
        }
        let var = self.api_key_env.as_deref().or(default_env)?;
        std::env::var(var)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy {
            max_retries: self.max_retries,
            initial_backoff: Duration::from_millis(self.initial_backoff_ms),
            multiplier: self.backoff_multiplier,
            max_backoff: Duration::from_millis(self.max_backoff_ms),
        }
    }

    /// Convert into the domain configuration the core consumes.
    pub fn to_adapter_config(
        &self,
        api_key: Option<String>,
        default_max_results: usize,
    ) -> SourceAdapterConfig {
        let mut config = SourceAdapterConfig::default()
            .with_timeout(Duration::from_millis(self.timeout_ms))
            .with_retry(self.retry_policy())
            .with_weight(self.weight)
            .with_max_results(self.max_results.unwrap_or(default_max_results));
        if let Some(key) = api_key {
            config = config.with_api_key(key);
        }
        if !self.enabled {
            config = config.disabled();
        }
        config
    }
}

/// Raw `[sources]` table
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSourcesConfig {
    /// Computational engine (Wolfram|Alpha)
    pub wolfram: FileSourceConfig,
    /// Encyclopedia (Wikipedia)
    pub wikipedia: FileSourceConfig,
    /// Web-search snippets (DuckDuckGo)
    pub web: FileSourceConfig,
}

impl FileSourcesConfig {
    pub fn get(&self, name: &str) -> Option<&FileSourceConfig> {
        match name {
            WOLFRAM => Some(&self.wolfram),
            WIKIPEDIA => Some(&self.wikipedia),
            WEB => Some(&self.web),
            _ => None,
        }
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut FileSourceConfig> {
        match name {
            WOLFRAM => Some(&mut self.wolfram),
            WIKIPEDIA => Some(&mut self.wikipedia),
            WEB => Some(&mut self.web),
            _ => None,
        }
    }

    /// `(name, config)` pairs in dispatch order
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &FileSourceConfig)> {
        [
            (WOLFRAM, &self.wolfram),
            (WIKIPEDIA, &self.wikipedia),
            (WEB, &self.web),
        ]
        .into_iter()
    }

    pub fn any_enabled(&self) -> bool {
        self.iter().any(|(_, s)| s.enabled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_domain_defaults() {
        let config = FileSourceConfig::default().to_adapter_config(None, 3);
        let domain = SourceAdapterConfig::default();
        assert_eq!(config.timeout, domain.timeout);
        assert_eq!(config.retry, domain.retry);
        assert_eq!(config.priority_weight, 1.0);
        assert!(config.enabled);
        assert_eq!(config.max_results, 3);
    }

    #[test]
    fn test_to_adapter_config_applies_fields() {
        let source = FileSourceConfig {
            enabled: false,
            timeout_ms: 1500,
            max_retries: 0,
            weight: 0.8,
            max_results: Some(2),
            ..Default::default()
        };
        let config = source.to_adapter_config(Some("key".to_string()), 5);
        assert_eq!(config.timeout, Duration::from_millis(1500));
        assert_eq!(config.retry.max_retries, 0);
        assert_eq!(config.priority_weight, 0.8);
        assert_eq!(config.max_results, 2);
        assert_eq!(config.api_key.as_deref(), Some("key"));
        assert!(!config.enabled);
    }

    #[test]
    fn test_inline_key_wins() {
        let source = FileSourceConfig {
            api_key: Some("  inline  ".to_string()),
            api_key_env: Some("ASKME_TEST_NEVER_SET_1".to_string()),
            ..Default::default()
        };
        assert_eq!(source.resolve_api_key(None).as_deref(), Some("inline"));
    }

    #[test]
    fn test_blank_key_and_unset_env_is_missing() {
        let source = FileSourceConfig {
            api_key: Some("   ".to_string()),
            api_key_env: Some("ASKME_TEST_NEVER_SET_2".to_string()),
            ..Default::default()
        };
        assert!(source.resolve_api_key(Some("ASKME_TEST_NEVER_SET_3")).is_none());
    }

    #[test]
    fn test_lookup_by_name() {
        let mut sources = FileSourcesConfig::default();
        sources.get_mut(WEB).unwrap().combine_snippets = true;
        assert!(sources.get(WEB).unwrap().combine_snippets);
        assert!(sources.get("bing").is_none());
        let names: Vec<&str> = sources.iter().map(|(n, _)| n).collect();
        assert_eq!(names, SOURCE_NAMES.to_vec());
    }
}
