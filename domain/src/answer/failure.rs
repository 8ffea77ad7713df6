//! Failure taxonomy shared by sources, the orchestrator and callers.

use serde::{Deserialize, Serialize};

/// Category of a failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// Empty or unparseable question; fatal to the request
    InvalidInput,
    SourceTimeout,
    SourceAuthError,
    SourceRateLimited,
    SourceParseError,
    /// Provider unreachable or returned an unexpected status
    SourceUnavailable,
    /// Every source degraded and nothing usable remained
    NoAnswerFound,
    /// Catastrophic configuration error, e.g. no sources enabled
    Configuration,
    Cancelled,
    /// Orchestrator invariant broken; indicates a bug
    Internal,
}

impl FailureKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureKind::InvalidInput => "invalid_input",
            FailureKind::SourceTimeout => "source_timeout",
            FailureKind::SourceAuthError => "source_auth_error",
            FailureKind::SourceRateLimited => "source_rate_limited",
            FailureKind::SourceParseError => "source_parse_error",
            FailureKind::SourceUnavailable => "source_unavailable",
            FailureKind::NoAnswerFound => "no_answer_found",
            FailureKind::Configuration => "configuration",
            FailureKind::Cancelled => "cancelled",
            FailureKind::Internal => "internal",
        }
    }

    /// Failures local to one source, recovered at the source boundary
    pub fn is_source_local(&self) -> bool {
        matches!(
            self,
            FailureKind::SourceTimeout
                | FailureKind::SourceAuthError
                | FailureKind::SourceRateLimited
                | FailureKind::SourceParseError
                | FailureKind::SourceUnavailable
        )
    }
}

impl std::fmt::Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Recorded reason a single source contributed no candidates
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceFailure {
    pub source: String,
    pub kind: FailureKind,
    pub message: String,
    /// Number of attempts made before giving up (0 if never called)
    pub attempts: u32,
}

impl SourceFailure {
    pub fn new(
        source: impl Into<String>,
        kind: FailureKind,
        message: impl Into<String>,
        attempts: u32,
    ) -> Self {
        Self {
            source: source.into(),
            kind,
            message: message.into(),
            attempts,
        }
    }
}

impl std::fmt::Display for SourceFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {} ({})", self.source, self.message, self.kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_local_kinds() {
        assert!(FailureKind::SourceTimeout.is_source_local());
        assert!(FailureKind::SourceParseError.is_source_local());
        assert!(!FailureKind::InvalidInput.is_source_local());
        assert!(!FailureKind::NoAnswerFound.is_source_local());
    }

    #[test]
    fn test_source_failure_display() {
        let f = SourceFailure::new("wolfram", FailureKind::SourceAuthError, "bad appid", 1);
        assert_eq!(f.to_string(), "wolfram: bad appid (source_auth_error)");
    }
}
