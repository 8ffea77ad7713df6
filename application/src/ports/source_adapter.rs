//! Knowledge source port
//!
//! Defines the interface every knowledge provider adapter implements. One
//! call to [`SourceAdapter::fetch`] is a single attempt; timeouts, retries and
//! error recovery are applied around it by
//! [`query_source`](crate::sources::query_source).

use askme_domain::{CandidateAnswer, FailureKind, Question, SourceAdapterConfig, SourceKind};
use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

/// Errors a single fetch attempt can produce
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SourceError {
    #[error("request timed out")]
    Timeout,

    #[error("rate limited by provider")]
    RateLimited { retry_after: Option<Duration> },

    #[error("authentication failed: {0}")]
    Auth(String),

    #[error("malformed response: {0}")]
    Parse(String),

    /// Provider unreachable or failing server-side; worth retrying
    #[error("provider unavailable: {0}")]
    Unavailable(String),

    /// Provider refused the request; retrying will not help
    #[error("request rejected: {0}")]
    Rejected(String),

    #[error("not configured: {0}")]
    NotConfigured(String),
}

impl SourceError {
    /// Transient errors are retried with backoff; the rest short-circuit.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            SourceError::Timeout | SourceError::RateLimited { .. } | SourceError::Unavailable(_)
        )
    }

    pub fn failure_kind(&self) -> FailureKind {
        match self {
            SourceError::Timeout => FailureKind::SourceTimeout,
            SourceError::RateLimited { .. } => FailureKind::SourceRateLimited,
            SourceError::Auth(_) | SourceError::NotConfigured(_) => FailureKind::SourceAuthError,
            SourceError::Parse(_) => FailureKind::SourceParseError,
            SourceError::Unavailable(_) | SourceError::Rejected(_) => {
                FailureKind::SourceUnavailable
            }
        }
    }
}

/// Adapter for one external knowledge provider
///
/// Implementations build a provider-specific request from the question, parse
/// the provider's native response, and attach a confidence to each candidate.
/// They must not depend on any other adapter.
#[async_trait]
pub trait SourceAdapter: Send + Sync {
    /// Stable identifier, used in results and configuration (e.g. "wolfram")
    fn name(&self) -> &str;

    fn kind(&self) -> SourceKind;

    /// Perform one attempt against the provider.
    async fn fetch(
        &self,
        question: &Question,
        config: &SourceAdapterConfig,
    ) -> Result<Vec<CandidateAnswer>, SourceError>;
}
