//! Caller-facing answer result.

use super::failure::FailureKind;
use serde::{Deserialize, Serialize};

/// Structured failure carried by an unsuccessful [`AnswerResult`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerFailure {
    pub kind: FailureKind,
    pub message: String,
}

/// What the presentation layer receives for every question
///
/// Always well formed: when `success` is false, `text` holds the "no answer"
/// sentinel text and `failure` says why.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerResult {
    pub text: String,
    pub success: bool,
    pub sources_used: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure: Option<AnswerFailure>,
}

impl AnswerResult {
    pub fn answered(text: impl Into<String>, sources_used: Vec<String>) -> Self {
        Self {
            text: text.into(),
            success: true,
            sources_used,
            failure: None,
        }
    }

    pub fn failed(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            text: super::aggregated::NO_ANSWER_TEXT.to_string(),
            success: false,
            sources_used: Vec::new(),
            failure: Some(AnswerFailure {
                kind,
                message: message.into(),
            }),
        }
    }

    pub fn failure_kind(&self) -> Option<FailureKind> {
        self.failure.as_ref().map(|f| f.kind)
    }
}
