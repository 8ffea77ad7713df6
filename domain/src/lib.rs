//! Domain layer for askme
//!
//! This crate contains the core question-answering logic: tagging, candidate
//! ranking and answer cleanup. It performs no I/O and has no dependencies on
//! infrastructure or presentation concerns.
//!
//! # Pipeline
//!
//! question text → [`tagging::tag`] → [`Question`] → sources (outside this
//! crate) → [`CandidateAnswer`]s → [`aggregation::aggregate`] →
//! [`AggregatedAnswer`] → [`postprocess::clean`] → answer text

pub mod aggregation;
pub mod answer;
pub mod config;
pub mod core;
pub mod orchestration;
pub mod postprocess;
pub mod source;
pub mod tagging;

// Re-export commonly used types
pub use aggregation::{aggregate, dedup_key, discard_echoes};
pub use answer::{
    aggregated::{AggregatedAnswer, NO_ANSWER_TEXT},
    candidate::{CandidateAnswer, SourceKind},
    failure::{FailureKind, SourceFailure},
    result::{AnswerFailure, AnswerResult},
};
pub use config::{ConfigIssue, ConfigIssueCode, OutputFormat, Severity};
pub use core::{
    error::DomainError,
    question::{NamedEntity, Question, TaggedToken},
};
pub use orchestration::{
    state::{AnswerRun, OrchestratorState},
    value_objects::{AnswerReport, SourceOutcome},
};
pub use postprocess::{CleanOptions, clean, clean_with};
pub use source::{DEFAULT_ENTITY_BOOST, RetryPolicy, RoutingHints, SourceAdapterConfig};
pub use tagging::{
    TAGGER_VERSION, tag,
    vocabulary::{EntityType, PosTag},
};
