//! Query one source with timeout, retry and error recovery.

use crate::ports::source_adapter::{SourceAdapter, SourceError};
use askme_domain::{
    CandidateAnswer, FailureKind, Question, SourceAdapterConfig, SourceFailure, SourceOutcome,
};
use tokio::time::Instant;
use tracing::{debug, info, warn};

/// Query a source, never failing.
///
/// The whole call, retries included, is bounded by `config.timeout`; a zero
/// timeout fails immediately without contacting the provider. Transient
/// errors are retried up to `config.retry.max_retries` times with exponential
/// backoff. Every error ends up as a [`SourceFailure`] on the outcome.
pub async fn query_source(
    adapter: &dyn SourceAdapter,
    question: &Question,
    config: &SourceAdapterConfig,
) -> SourceOutcome {
    let name = adapter.name();
    let kind = adapter.kind();
    let start = Instant::now();

    if config.timeout.is_zero() {
        warn!("Source {} has a zero timeout, skipping", name);
        return SourceOutcome::failure(
            kind,
            SourceFailure::new(name, FailureKind::SourceTimeout, "timeout is zero", 0),
            0,
        );
    }

    let mut attempts = 0u32;
    let result = tokio::time::timeout(
        config.timeout,
        fetch_with_retry(adapter, question, config, &mut attempts),
    )
    .await;
    let elapsed = start.elapsed();
    let elapsed_ms = elapsed.as_millis() as u64;

    match result {
        Ok(Ok(candidates)) => {
            let candidates = tidy_candidates(candidates, config, elapsed);
            info!(
                "Source {} returned {} candidates in {}ms",
                name,
                candidates.len(),
                elapsed_ms
            );
            SourceOutcome::success(name, kind, candidates, attempts, elapsed_ms)
        }
        Ok(Err(e)) => {
            warn!("Source {} failed after {} attempts: {}", name, attempts, e);
            SourceOutcome::failure(
                kind,
                SourceFailure::new(name, e.failure_kind(), e.to_string(), attempts),
                elapsed_ms,
            )
        }
        Err(_) => {
            warn!(
                "Source {} timed out after {}ms ({} attempts)",
                name,
                config.timeout.as_millis(),
                attempts
            );
            SourceOutcome::failure(
                kind,
                SourceFailure::new(
                    name,
                    FailureKind::SourceTimeout,
                    format!("timed out after {}ms", config.timeout.as_millis()),
                    attempts,
                ),
                elapsed_ms,
            )
        }
    }
}

async fn fetch_with_retry(
    adapter: &dyn SourceAdapter,
    question: &Question,
    config: &SourceAdapterConfig,
    attempts: &mut u32,
) -> Result<Vec<CandidateAnswer>, SourceError> {
    loop {
        *attempts += 1;
        match adapter.fetch(question, config).await {
            Ok(candidates) => return Ok(candidates),
            Err(e) if e.is_transient() && *attempts <= config.retry.max_retries => {
                let mut delay = config.retry.backoff_for(*attempts - 1);
                if let SourceError::RateLimited {
                    retry_after: Some(after),
                } = &e
                {
                    delay = delay.max(*after);
                }
                debug!(
                    "Source {} attempt {} failed ({}), retrying in {}ms",
                    adapter.name(),
                    attempts,
                    e,
                    delay.as_millis()
                );
                tokio::time::sleep(delay).await;
            }
            Err(e) => return Err(e),
        }
    }
}

/// Drop blank candidates, cap the count, and stamp latency.
fn tidy_candidates(
    candidates: Vec<CandidateAnswer>,
    config: &SourceAdapterConfig,
    elapsed: std::time::Duration,
) -> Vec<CandidateAnswer> {
    let limit = if config.max_results == 0 {
        usize::MAX
    } else {
        config.max_results
    };
    candidates
        .into_iter()
        .filter(|c| !c.text.trim().is_empty())
        .take(limit)
        .map(|c| c.with_latency(elapsed))
        .collect()
}
