//! Orchestration value objects - immutable result types for one answer request.
//!
//! - [`SourceOutcome`] - what a single source contributed (or why it did not)
//! - [`AnswerReport`] - the full record of a request, from tagged question to
//!   cleaned answer

use super::state::OrchestratorState;
use crate::answer::aggregated::AggregatedAnswer;
use crate::answer::candidate::{CandidateAnswer, SourceKind};
use crate::answer::failure::{FailureKind, SourceFailure};
use crate::answer::result::AnswerResult;
use crate::core::question::Question;
use serde::{Deserialize, Serialize};

/// Result of querying one source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceOutcome {
    pub source: String,
    pub kind: SourceKind,
    pub candidates: Vec<CandidateAnswer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure: Option<SourceFailure>,
    pub attempts: u32,
    pub elapsed_ms: u64,
}

impl SourceOutcome {
    /// Creates an outcome for a source that answered (possibly with nothing).
    pub fn success(
        source: impl Into<String>,
        kind: SourceKind,
        candidates: Vec<CandidateAnswer>,
        attempts: u32,
        elapsed_ms: u64,
    ) -> Self {
        Self {
            source: source.into(),
            kind,
            candidates,
            failure: None,
            attempts,
            elapsed_ms,
        }
    }

    /// Creates an outcome for a source that degraded to zero candidates.
    pub fn failure(kind: SourceKind, failure: SourceFailure, elapsed_ms: u64) -> Self {
        Self {
            source: failure.source.clone(),
            kind,
            candidates: Vec::new(),
            attempts: failure.attempts,
            failure: Some(failure),
            elapsed_ms,
        }
    }

    pub fn is_success(&self) -> bool {
        self.failure.is_none()
    }
}

/// Complete record of one answer request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerReport {
    pub question: Question,
    /// Aggregated answer with post-processed text
    pub answer: AggregatedAnswer,
    pub outcomes: Vec<SourceOutcome>,
    /// Candidates dropped for echoing the question
    pub discarded_echoes: usize,
    pub states: Vec<OrchestratorState>,
}

impl AnswerReport {
    pub fn successful_outcomes(&self) -> impl Iterator<Item = &SourceOutcome> {
        self.outcomes.iter().filter(|o| o.is_success())
    }

    pub fn failed_outcomes(&self) -> impl Iterator<Item = &SourceOutcome> {
        self.outcomes.iter().filter(|o| !o.is_success())
    }

    /// Fold into the caller-facing result.
    ///
    /// `sources_used` lists the sources whose candidates back the chosen
    /// answer. When nothing was chosen the failure is `NoAnswerFound`.
    pub fn to_result(&self) -> AnswerResult {
        if self.answer.success {
            return AnswerResult::answered(
                self.answer.text.clone(),
                self.answer.contributing_sources(),
            );
        }

        let reasons: Vec<String> = self
            .failed_outcomes()
            .filter_map(|o| o.failure.as_ref().map(|f| f.to_string()))
            .collect();
        let message = if reasons.is_empty() {
            "no source produced a usable answer".to_string()
        } else {
            format!("no source produced a usable answer; {}", reasons.join("; "))
        };
        AnswerResult::failed(FailureKind::NoAnswerFound, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tagging::tag;

    fn report(answer: AggregatedAnswer, outcomes: Vec<SourceOutcome>) -> AnswerReport {
        AnswerReport {
            question: tag("When was Newton born?").unwrap(),
            answer,
            outcomes,
            discarded_echoes: 0,
            states: vec![OrchestratorState::Received, OrchestratorState::Done],
        }
    }

    #[test]
    fn test_success_result_lists_contributing_sources() {
        let c = CandidateAnswer::new("wolfram", SourceKind::Computational, "1642-12-25", 0.95);
        let answer = AggregatedAnswer::chosen(c.clone(), vec![c.clone()], vec![]);
        let outcome = SourceOutcome::success("wolfram", SourceKind::Computational, vec![c], 1, 30);
        let result = report(answer, vec![outcome]).to_result();
        assert!(result.success);
        assert_eq!(result.text, "1642-12-25");
        assert_eq!(result.sources_used, vec!["wolfram"]);
    }

    #[test]
    fn test_no_answer_result_carries_reasons() {
        let failure = SourceFailure::new("web", FailureKind::SourceTimeout, "timed out", 3);
        let outcome = SourceOutcome::failure(SourceKind::WebSearch, failure, 5000);
        assert_eq!(outcome.attempts, 3);
        let result = report(AggregatedAnswer::no_answer(), vec![outcome]).to_result();
        assert!(!result.success);
        assert_eq!(result.failure_kind(), Some(FailureKind::NoAnswerFound));
        assert!(result.failure.unwrap().message.contains("web: timed out"));
    }
}
