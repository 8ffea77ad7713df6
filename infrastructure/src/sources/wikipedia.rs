//! Wikipedia encyclopedia source.
//!
//! Two requests per attempt: `opensearch` resolves the best page title, then
//! the REST page summary supplies the extract. Questions that name a person,
//! place or organisation search for that entity rather than the whole text.

use super::http;
use askme_application::{SourceAdapter, SourceError};
use askme_domain::{CandidateAnswer, Question, SourceAdapterConfig, SourceKind, dedup_key};
use async_trait::async_trait;
use reqwest::Url;
use serde_json::Value;
use tracing::debug;

pub const DEFAULT_BASE_URL: &str = "https://en.wikipedia.org";

const ENTITY_MATCH_CONFIDENCE: f64 = 0.75;
const SEARCH_MATCH_CONFIDENCE: f64 = 0.55;

const ABBREVIATIONS: [&str; 9] = ["Mr", "Mrs", "Ms", "Dr", "St", "Jr", "Sr", "vs", "c"];

/// Adapter for the Wikipedia search and page-summary APIs
pub struct WikipediaAdapter {
    client: reqwest::Client,
    base_url: String,
}

impl WikipediaAdapter {
    pub const NAME: &'static str = "wikipedia";

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

    fn endpoint(&self, segments: &[&str]) -> Result<Url, SourceError> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| SourceError::NotConfigured(format!("invalid base url: {}", e)))?;
        url.path_segments_mut()
            .map_err(|_| SourceError::NotConfigured("base url cannot take a path".to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn best_title(
        &self,
        term: &str,
        config: &SourceAdapterConfig,
    ) -> Result<Option<String>, SourceError> {
        let request = self
            .client
            .get(self.endpoint(&["w", "api.php"])?)
            .query(&[
                ("action", "opensearch"),
                ("search", term),
                ("limit", "1"),
                ("namespace", "0"),
                ("format", "json"),
            ]);
        let body = http::get_json(request, config.timeout).await?;
        parse_opensearch(&body)
    }
}

#[async_trait]
impl SourceAdapter for WikipediaAdapter {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn kind(&self) -> SourceKind {
        SourceKind::Encyclopedia
    }

    async fn fetch(
        &self,
        question: &Question,
        config: &SourceAdapterConfig,
    ) -> Result<Vec<CandidateAnswer>, SourceError> {
        let term = search_term(question);
        let Some(title) = self.best_title(&term, config).await? else {
            debug!("Wikipedia has no page for '{}'", term);
            return Ok(Vec::new());
        };

        let page = title.replace(' ', "_");
        let request = self
            .client
            .get(self.endpoint(&["api", "rest_v1", "page", "summary", &page])?);
        let body = http::get_json(request, config.timeout).await?;
        let Some(summary) = parse_summary(&body)? else {
            debug!("Wikipedia page '{}' is a disambiguation page", title);
            return Ok(Vec::new());
        };

        let text = leading_sentences(&summary.extract, config.max_results.max(1));
        let confidence = if title_matches_entity(question, &summary.title) {
            ENTITY_MATCH_CONFIDENCE
        } else {
            SEARCH_MATCH_CONFIDENCE
        };

        Ok(vec![
            CandidateAnswer::new(Self::NAME, SourceKind::Encyclopedia, text, confidence)
                .with_metadata(serde_json::json!({
                    "title": summary.title,
                    "search": term,
                })),
        ])
    }
}

/// Entity text for entity-bearing questions, otherwise the content words.
fn search_term(question: &Question) -> String {
    if let Some(entity) = question
        .entities()
        .iter()
        .find(|e| e.entity_type.is_encyclopedic())
    {
        return entity.text.clone();
    }
    let keywords = question.keywords();
    if keywords.is_empty() {
        question.raw().trim().to_string()
    } else {
        keywords.join(" ")
    }
}

fn title_matches_entity(question: &Question, title: &str) -> bool {
    let title = dedup_key(title);
    question
        .entities()
        .iter()
        .any(|e| title == dedup_key(&e.text))
}

/// `[term, [titles], [descriptions], [urls]]` → first title
fn parse_opensearch(body: &Value) -> Result<Option<String>, SourceError> {
    let titles = body
        .get(1)
        .and_then(Value::as_array)
        .ok_or_else(|| SourceError::Parse("unexpected opensearch shape".to_string()))?;
    Ok(titles
        .iter()
        .filter_map(Value::as_str)
        .map(str::trim)
        .find(|t| !t.is_empty())
        .map(str::to_string))
}

struct PageSummary {
    title: String,
    extract: String,
}

/// `None` for disambiguation pages and pages without an extract.
fn parse_summary(body: &Value) -> Result<Option<PageSummary>, SourceError> {
    let title = body
        .get("title")
        .and_then(Value::as_str)
        .ok_or_else(|| SourceError::Parse("summary has no title".to_string()))?;
    if body.get("type").and_then(Value::as_str) == Some("disambiguation") {
        return Ok(None);
    }
    let extract = body
        .get("extract")
        .and_then(Value::as_str)
        .map(str::trim)
        .unwrap_or("");
    if extract.is_empty() {
        return Ok(None);
    }
    Ok(Some(PageSummary {
        title: title.to_string(),
        extract: extract.to_string(),
    }))
}

/// The first `count` sentences of `text`.
///
/// A sentence ends at `.`, `!` or `?` followed by whitespace and an uppercase
/// letter or digit. Initials ("J. R. R.") and common abbreviations do not end
/// a sentence.
fn leading_sentences(text: &str, count: usize) -> String {
    let text = text.trim();
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let mut seen = 0;

    for (i, &(pos, c)) in chars.iter().enumerate() {
        if !matches!(c, '.' | '!' | '?') {
            continue;
        }
        if !chars.get(i + 1).is_some_and(|&(_, n)| n.is_whitespace()) {
            continue;
        }
        let starts_sentence = chars[i + 1..]
            .iter()
            .map(|&(_, n)| n)
            .find(|n| !n.is_whitespace())
            .is_some_and(|n| n.is_uppercase() || n.is_ascii_digit());
        if !starts_sentence || (c == '.' && is_abbreviation(&text[..pos])) {
            continue;
        }
        seen += 1;
        if seen == count {
            return text[..pos + c.len_utf8()].to_string();
        }
    }
    text.to_string()
}

fn is_abbreviation(before: &str) -> bool {
    let word = before.rsplit(char::is_whitespace).next().unwrap_or("");
    let single_initial = word.chars().count() == 1 && word.chars().all(char::is_uppercase);
    single_initial || ABBREVIATIONS.contains(&word)
}
