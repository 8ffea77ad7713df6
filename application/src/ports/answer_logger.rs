//! Port for structured answer logging.
//!
//! Separate from `tracing`-based diagnostics: this captures a
//! machine-readable transcript of each request (tagged question, per-source
//! outcomes, chosen answer).

use serde_json::Value;

/// A structured answer event.
pub struct AnswerEvent {
    /// Event type identifier (e.g., "question_tagged", "source_completed").
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl AnswerEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }
}

/// Port for logging answer events.
///
/// `log` is synchronous and infallible; logging failures must never affect
/// the answer.
pub trait AnswerLogger: Send + Sync {
    fn log(&self, event: AnswerEvent);
}

/// No-op implementation for tests and when logging is disabled.
pub struct NoAnswerLogger;

impl AnswerLogger for NoAnswerLogger {
    fn log(&self, _event: AnswerEvent) {}
}
