//! Answer value objects: what sources propose and what callers receive.
//!
//! - [`candidate::CandidateAnswer`]: one source's proposal with a confidence
//! - [`aggregated::AggregatedAnswer`]: the ranked choice, or the "no answer" sentinel
//! - [`result::AnswerResult`]: the caller-facing result
//! - [`failure::FailureKind`]: the failure taxonomy

pub mod aggregated;
pub mod candidate;
pub mod failure;
pub mod result;
