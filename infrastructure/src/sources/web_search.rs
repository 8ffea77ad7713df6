//! Web-search snippet source (DuckDuckGo HTML endpoint).
//!
//! Scrapes the result snippets from the HTML results page. Each of the top
//! `max_results` snippets becomes a candidate with confidence decaying by
//! rank; with `combine_snippets` they are joined into a single candidate.

use super::http;
use askme_application::{SourceAdapter, SourceError};
use askme_domain::{CandidateAnswer, Question, SourceAdapterConfig, SourceKind};
use async_trait::async_trait;
use scraper::{Html, Selector};
use std::sync::LazyLock;
use tracing::debug;

pub const DEFAULT_BASE_URL: &str = "https://html.duckduckgo.com";

const TOP_CONFIDENCE: f64 = 0.6;
const RANK_DECAY: f64 = 0.8;
const COMBINED_CONFIDENCE: f64 = 0.5;

static SNIPPET: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".result__snippet").expect("snippet selector is valid"));

/// Adapter for DuckDuckGo's HTML search results
pub struct WebSearchAdapter {
    client: reqwest::Client,
    base_url: String,
    combine_snippets: bool,
}

impl WebSearchAdapter {
    pub const NAME: &'static str = "web";

    pub fn new(client: reqwest::Client) -> Self {
        Self {
            client,
            base_url: DEFAULT_BASE_URL.to_string(),
            combine_snippets: false,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_combined_snippets(mut self, combine: bool) -> Self {
        self.combine_snippets = combine;
        self
    }

    fn candidates(&self, snippets: Vec<String>, limit: usize) -> Vec<CandidateAnswer> {
        let top = snippets.into_iter().take(limit);
        if self.combine_snippets {
            let joined = top.collect::<Vec<_>>().join(" ");
            if joined.is_empty() {
                return Vec::new();
            }
            return vec![CandidateAnswer::new(
                Self::NAME,
                SourceKind::WebSearch,
                joined,
                COMBINED_CONFIDENCE,
            )];
        }

        top.enumerate()
            .map(|(rank, text)| {
                CandidateAnswer::new(
                    Self::NAME,
                    SourceKind::WebSearch,
                    text,
                    rank_confidence(rank),
                )
                .with_metadata(serde_json::json!({ "rank": rank }))
            })
            .collect()
    }
}

#[async_trait]
impl SourceAdapter for WebSearchAdapter {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn kind(&self) -> SourceKind {
        SourceKind::WebSearch
    }

    async fn fetch(
        &self,
        question: &Question,
        config: &SourceAdapterConfig,
    ) -> Result<Vec<CandidateAnswer>, SourceError> {
        let request = self
            .client
            .get(format!("{}/html/", self.base_url))
            .query(&[("q", question.raw())]);
        let html = http::get_text(request, config.timeout).await?;
        let snippets = extract_snippets(&html);
        debug!("Web search page held {} snippets", snippets.len());
        Ok(self.candidates(snippets, config.max_results.max(1)))
    }
}

fn rank_confidence(rank: usize) -> f64 {
    TOP_CONFIDENCE * RANK_DECAY.powi(rank as i32)
}

/// Snippet texts in page order, whitespace collapsed, blanks dropped.
fn extract_snippets(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);
    document
        .select(&SNIPPET)
        .map(|el| {
            el.text()
                .collect::<String>()
                .split_whitespace()
                .collect::<Vec<_>>()
                .join(" ")
        })
        .filter(|s| !s.is_empty())
        .collect()
}
