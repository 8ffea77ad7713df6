//! Application layer for askme
//!
//! This crate contains the answer orchestrator, port definitions, and
//! application configuration. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod sources;
pub mod use_cases;

// Re-export commonly used types
pub use config::AnswerConfig;
pub use ports::{
    answer_logger::{AnswerEvent, AnswerLogger, NoAnswerLogger},
    progress::{NoProgress, ProgressNotifier},
    source_adapter::{SourceAdapter, SourceError},
};
pub use sources::{RegisteredSource, query_source};
pub use use_cases::answer_question::{AnswerError, AnswerQuestionUseCase};
