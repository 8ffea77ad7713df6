//! Wolfram|Alpha computational source.
//!
//! Queries the Full Results API in JSON mode with plaintext pods. Only the
//! primary pod and a pod titled "Result" become candidates; interpretation,
//! plot and related pods are ignored.

use super::http;
use askme_application::{SourceAdapter, SourceError};
use askme_domain::{CandidateAnswer, Question, SourceAdapterConfig, SourceKind};
use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

pub const DEFAULT_BASE_URL: &str = "https://api.wolframalpha.com";

const PRIMARY_CONFIDENCE: f64 = 0.95;
const RESULT_POD_CONFIDENCE: f64 = 0.9;

/// Adapter for the Wolfram|Alpha Full Results API
pub struct WolframAdapter {
    client: reqwest::Client,
    base_url: String,
}

impl WolframAdapter {
    pub const NAME: &'static str = "wolfram";

    pub fn new(client: reqwest::Client) -> Self {
        Self {
            client,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }
}

#[async_trait]
impl SourceAdapter for WolframAdapter {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn kind(&self) -> SourceKind {
        SourceKind::Computational
    }

    async fn fetch(
        &self,
        question: &Question,
        config: &SourceAdapterConfig,
    ) -> Result<Vec<CandidateAnswer>, SourceError> {
        let app_id = config
            .api_key
            .as_deref()
            .ok_or_else(|| SourceError::NotConfigured("no Wolfram|Alpha app id".to_string()))?;

        let request = self
            .client
            .get(format!("{}/v2/query", self.base_url))
            .query(&[
                ("input", question.raw()),
                ("appid", app_id),
                ("output", "json"),
                ("format", "plaintext"),
            ]);
        let body = http::get_json(request, config.timeout).await?;
        let candidates = parse_query_result(&body)?;
        debug!("Wolfram|Alpha returned {} result pods", candidates.len());
        Ok(candidates)
    }
}

/// Turn a Full Results body into candidates, primary pod first.
fn parse_query_result(body: &Value) -> Result<Vec<CandidateAnswer>, SourceError> {
    let result = body
        .get("queryresult")
        .ok_or_else(|| SourceError::Parse("missing queryresult".to_string()))?;

    match result.get("error") {
        Some(Value::Object(error)) => {
            let msg = error
                .get("msg")
                .and_then(Value::as_str)
                .unwrap_or("unknown error")
                .to_string();
            return Err(if msg.to_lowercase().contains("appid") {
                SourceError::Auth(msg)
            } else {
                SourceError::Rejected(msg)
            });
        }
        Some(Value::Bool(true)) => {
            return Err(SourceError::Rejected("query reported an error".to_string()));
        }
        _ => {}
    }

    if !result.get("success").and_then(Value::as_bool).unwrap_or(false) {
        return Ok(Vec::new());
    }

    let Some(pods) = result.get("pods").and_then(Value::as_array) else {
        return Ok(Vec::new());
    };

    let mut candidates: Vec<CandidateAnswer> = pods.iter().filter_map(pod_candidate).collect();
    candidates.sort_by(|a, b| b.confidence().total_cmp(&a.confidence()));
    Ok(candidates)
}

fn pod_candidate(pod: &Value) -> Option<CandidateAnswer> {
    let title = pod.get("title").and_then(Value::as_str).unwrap_or("");
    let primary = pod.get("primary").and_then(Value::as_bool).unwrap_or(false);
    let confidence = if primary {
        PRIMARY_CONFIDENCE
    } else if title.eq_ignore_ascii_case("result") {
        RESULT_POD_CONFIDENCE
    } else {
        return None;
    };

    let text = pod
        .get("subpods")?
        .as_array()?
        .iter()
        .filter_map(|s| s.get("plaintext").and_then(Value::as_str))
        .map(flatten_lines)
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join("; ");
    if text.is_empty() {
        return None;
    }

    Some(
        CandidateAnswer::new(WolframAdapter::NAME, SourceKind::Computational, text, confidence)
            .with_metadata(serde_json::json!({ "pod": title, "primary": primary })),
    )
}

fn flatten_lines(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect::<Vec<_>>()
        .join("; ")
}
