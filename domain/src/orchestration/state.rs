//! Orchestrator lifecycle states

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// State of one answer request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrchestratorState {
    Received,
    Tagging,
    Dispatching,
    /// Waiting on concurrent source tasks
    AwaitingSources,
    Aggregating,
    PostProcessing,
    Done,
    Errored,
}

impl OrchestratorState {
    pub fn as_str(&self) -> &str {
        match self {
            OrchestratorState::Received => "received",
            OrchestratorState::Tagging => "tagging",
            OrchestratorState::Dispatching => "dispatching",
            OrchestratorState::AwaitingSources => "awaiting_sources",
            OrchestratorState::Aggregating => "aggregating",
            OrchestratorState::PostProcessing => "post_processing",
            OrchestratorState::Done => "done",
            OrchestratorState::Errored => "errored",
        }
    }

    pub fn display_name(&self) -> &str {
        match self {
            OrchestratorState::Received => "Received",
            OrchestratorState::Tagging => "Tagging Question",
            OrchestratorState::Dispatching => "Dispatching",
            OrchestratorState::AwaitingSources => "Querying Sources",
            OrchestratorState::Aggregating => "Ranking Answers",
            OrchestratorState::PostProcessing => "Cleaning Answer",
            OrchestratorState::Done => "Done",
            OrchestratorState::Errored => "Errored",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, OrchestratorState::Done | OrchestratorState::Errored)
    }

    /// The state that follows on the happy path
    pub fn next(&self) -> Option<OrchestratorState> {
        match self {
            OrchestratorState::Received => Some(OrchestratorState::Tagging),
            OrchestratorState::Tagging => Some(OrchestratorState::Dispatching),
            OrchestratorState::Dispatching => Some(OrchestratorState::AwaitingSources),
            OrchestratorState::AwaitingSources => Some(OrchestratorState::Aggregating),
            OrchestratorState::Aggregating => Some(OrchestratorState::PostProcessing),
            OrchestratorState::PostProcessing => Some(OrchestratorState::Done),
            OrchestratorState::Done | OrchestratorState::Errored => None,
        }
    }

    /// Legal moves: one step forward, or to `Errored` from any live state.
    pub fn can_transition_to(&self, to: OrchestratorState) -> bool {
        if self.is_terminal() {
            return false;
        }
        to == OrchestratorState::Errored || self.next() == Some(to)
    }
}

impl std::fmt::Display for OrchestratorState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Tracks the lifecycle of a single answer request (Entity)
#[derive(Debug, Clone)]
pub struct AnswerRun {
    state: OrchestratorState,
    history: Vec<OrchestratorState>,
}

impl AnswerRun {
    pub fn new() -> Self {
        Self {
            state: OrchestratorState::Received,
            history: vec![OrchestratorState::Received],
        }
    }

    pub fn state(&self) -> OrchestratorState {
        self.state
    }

    /// Every state visited, in order
    pub fn history(&self) -> &[OrchestratorState] {
        &self.history
    }

    pub fn transition(&mut self, to: OrchestratorState) -> Result<(), DomainError> {
        if !self.state.can_transition_to(to) {
            return Err(DomainError::IllegalTransition {
                from: self.state.as_str().to_string(),
                to: to.as_str().to_string(),
            });
        }
        self.state = to;
        self.history.push(to);
        Ok(())
    }

    /// Move to `Errored`; a no-op once the run is terminal.
    pub fn fail(&mut self) {
        if !self.state.is_terminal() {
            self.state = OrchestratorState::Errored;
            self.history.push(OrchestratorState::Errored);
        }
    }
}

impl Default for AnswerRun {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_happy_path() {
        let mut run = AnswerRun::new();
        let mut state = run.state();
        while let Some(next) = state.next() {
            run.transition(next).unwrap();
            state = next;
        }
        assert_eq!(run.state(), OrchestratorState::Done);
        assert_eq!(run.history().len(), 7);
    }

    #[test]
    fn test_skipping_a_state_is_illegal() {
        let mut run = AnswerRun::new();
        let err = run.transition(OrchestratorState::Aggregating).unwrap_err();
        assert!(matches!(err, DomainError::IllegalTransition { .. }));
        assert_eq!(run.state(), OrchestratorState::Received);
    }

    #[test]
    fn test_errored_reachable_from_any_live_state() {
        let mut run = AnswerRun::new();
        run.transition(OrchestratorState::Tagging).unwrap();
        run.transition(OrchestratorState::Errored).unwrap();
        assert!(run.state().is_terminal());
        assert!(run.transition(OrchestratorState::Dispatching).is_err());
    }

    #[test]
    fn test_fail_is_idempotent() {
        let mut run = AnswerRun::new();
        run.fail();
        run.fail();
        assert_eq!(
            run.history(),
            &[OrchestratorState::Received, OrchestratorState::Errored]
        );
    }
}
