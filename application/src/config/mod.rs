//! Application-level configuration.
//!
//! - [`AnswerConfig`] - aggregation and post-processing control

pub mod answer_config;

pub use answer_config::AnswerConfig;
