//! Candidate answers produced by knowledge sources.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Broad class of knowledge source
///
/// Declaration order is the fixed tie-break order used by the ranker:
/// computational engine first, then encyclopedia, then web search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    /// Computational knowledge engine (direct factual answers)
    Computational,
    /// Encyclopedia summaries
    Encyclopedia,
    /// Web search snippets
    WebSearch,
    /// Any other pluggable provider
    Other,
}

impl SourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceKind::Computational => "computational",
            SourceKind::Encyclopedia => "encyclopedia",
            SourceKind::WebSearch => "web_search",
            SourceKind::Other => "other",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SourceKind::Computational => "Computational Engine",
            SourceKind::Encyclopedia => "Encyclopedia",
            SourceKind::WebSearch => "Web Search",
            SourceKind::Other => "Other",
        }
    }
}

impl std::fmt::Display for SourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Clamp a score into `[0, 1]`, mapping NaN to zero.
pub fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

/// One source's proposed answer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateAnswer {
    /// Name of the source that produced this candidate (e.g. "wolfram")
    pub source: String,
    pub kind: SourceKind,
    pub text: String,
    confidence: f64,
    /// Static priority weight of the source, stamped by the orchestrator
    pub priority_weight: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latency_ms: Option<u64>,
    /// Provider-specific data, opaque to ranking
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub metadata: serde_json::Value,
}

impl CandidateAnswer {
    /// Create a candidate; `confidence` is clamped to `[0, 1]`.
    pub fn new(
        source: impl Into<String>,
        kind: SourceKind,
        text: impl Into<String>,
        confidence: f64,
    ) -> Self {
        Self {
            source: source.into(),
            kind,
            text: text.into(),
            confidence: clamp_unit(confidence),
            priority_weight: 1.0,
            latency_ms: None,
            metadata: serde_json::Value::Null,
        }
    }

    pub fn confidence(&self) -> f64 {
        self.confidence
    }

    pub fn with_weight(mut self, weight: f64) -> Self {
        self.priority_weight = if weight.is_nan() { 0.0 } else { weight.max(0.0) };
        self
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency_ms = Some(latency.as_millis() as u64);
        self
    }

    pub fn with_metadata(mut self, metadata: serde_json::Value) -> Self {
        self.metadata = metadata;
        self
    }

    /// `priority_weight * confidence`
    pub fn composite_score(&self) -> f64 {
        self.priority_weight * self.confidence
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confidence_is_clamped() {
        let high = CandidateAnswer::new("wolfram", SourceKind::Computational, "42", 1.7);
        assert_eq!(high.confidence(), 1.0);
        let low = CandidateAnswer::new("web", SourceKind::WebSearch, "42", -0.3);
        assert_eq!(low.confidence(), 0.0);
        let nan = CandidateAnswer::new("web", SourceKind::WebSearch, "42", f64::NAN);
        assert_eq!(nan.confidence(), 0.0);
    }

    #[test]
    fn test_composite_score() {
        let c = CandidateAnswer::new("wikipedia", SourceKind::Encyclopedia, "Paris", 0.5)
            .with_weight(1.5);
        assert!((c.composite_score() - 0.75).abs() < f64::EPSILON);
    }

    #[test]
    fn test_negative_weight_is_floored() {
        let c = CandidateAnswer::new("web", SourceKind::WebSearch, "x", 0.5).with_weight(-2.0);
        assert_eq!(c.composite_score(), 0.0);
    }

    #[test]
    fn test_source_kind_order() {
        assert!(SourceKind::Computational < SourceKind::Encyclopedia);
        assert!(SourceKind::Encyclopedia < SourceKind::WebSearch);
        assert!(SourceKind::WebSearch < SourceKind::Other);
    }

    #[test]
    fn test_metadata_skipped_when_null() {
        let c = CandidateAnswer::new("web", SourceKind::WebSearch, "x", 0.5);
        let json = serde_json::to_value(&c).unwrap();
        assert!(json.get("metadata").is_none());
        assert_eq!(json["kind"], "web_search");
    }
}
