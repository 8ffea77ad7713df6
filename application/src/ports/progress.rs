//! Progress notification port
//!
//! Defines the interface for reporting progress while a question is answered.

use askme_domain::{OrchestratorState, SourceOutcome};

/// Callback for progress updates during an answer request
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (spinner, plain text, etc.)
pub trait ProgressNotifier: Send + Sync {
    /// Called when the orchestrator enters a state; `total_tasks` is the
    /// number of source tasks for `AwaitingSources`, otherwise 0
    fn on_state_enter(&self, state: &OrchestratorState, total_tasks: usize);

    /// Called as each source finishes, in completion order
    fn on_source_complete(&self, outcome: &SourceOutcome);

    /// Called once the request reaches `Done` or `Errored`
    fn on_finished(&self, _state: &OrchestratorState) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ProgressNotifier for NoProgress {
    fn on_state_enter(&self, _state: &OrchestratorState, _total_tasks: usize) {}
    fn on_source_complete(&self, _outcome: &SourceOutcome) {}
}
