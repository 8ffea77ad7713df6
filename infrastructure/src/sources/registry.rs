//! Builds the registered source list from file configuration.

use super::{WebSearchAdapter, WikipediaAdapter, WolframAdapter};
use crate::config::{DEFAULT_WOLFRAM_KEY_ENV, FileConfig, FileSourceConfig};
use askme_application::{RegisteredSource, SourceAdapter};
use std::sync::Arc;
use tracing::debug;

const WOLFRAM_MAX_RESULTS: usize = 1;
/// Sentences of the page extract
const WIKIPEDIA_MAX_RESULTS: usize = 2;
const WEB_MAX_RESULTS: usize = 5;

/// One registered source per known provider, in dispatch order.
///
/// Disabled sources are still registered (and skipped by the orchestrator)
/// so that `--show-config` can list them. A Wolfram|Alpha source without an
/// app id is registered as well; it fails with an auth error at query time.
pub fn build_sources(config: &FileConfig, client: &reqwest::Client) -> Vec<RegisteredSource> {
    let sources = &config.sources;

    let wolfram = with_base_url(
        WolframAdapter::new(client.clone()),
        &sources.wolfram,
        |a, url| a.with_base_url(url),
    );
    let wikipedia = with_base_url(
        WikipediaAdapter::new(client.clone()),
        &sources.wikipedia,
        |a, url| a.with_base_url(url),
    );
    let web = with_base_url(
        WebSearchAdapter::new(client.clone()).with_combined_snippets(sources.web.combine_snippets),
        &sources.web,
        |a, url| a.with_base_url(url),
    );

    vec![
        register(
            Arc::new(wolfram),
            &sources.wolfram,
            sources.wolfram.resolve_api_key(Some(DEFAULT_WOLFRAM_KEY_ENV)),
            WOLFRAM_MAX_RESULTS,
        ),
        register(
            Arc::new(wikipedia),
            &sources.wikipedia,
            sources.wikipedia.resolve_api_key(None),
            WIKIPEDIA_MAX_RESULTS,
        ),
        register(
            Arc::new(web),
            &sources.web,
            sources.web.resolve_api_key(None),
            WEB_MAX_RESULTS,
        ),
    ]
}

fn with_base_url<A>(adapter: A, source: &FileSourceConfig, set: fn(A, String) -> A) -> A {
    match source.base_url.as_deref().map(str::trim) {
        Some(url) if !url.is_empty() => set(adapter, url.to_string()),
        _ => adapter,
    }
}

fn register(
    adapter: Arc<dyn SourceAdapter>,
    source: &FileSourceConfig,
    api_key: Option<String>,
    default_max_results: usize,
) -> RegisteredSource {
    let config = source.to_adapter_config(api_key, default_max_results);
    debug!("Registered source {}: {:?}", adapter.name(), config);
    RegisteredSource::new(adapter, config)
}
