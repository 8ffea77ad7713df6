//! Answer Question use case
//!
//! Drives one request through the orchestrator lifecycle: tag the question,
//! query every enabled source concurrently, rank the candidates and clean the
//! winner.

use crate::config::AnswerConfig;
use crate::ports::answer_logger::{AnswerEvent, AnswerLogger, NoAnswerLogger};
use crate::ports::progress::{NoProgress, ProgressNotifier};
use crate::sources::{RegisteredSource, query_source};
use askme_domain::{
    AggregatedAnswer, AnswerReport, AnswerResult, AnswerRun, CandidateAnswer, DomainError,
    FailureKind, OrchestratorState, Question, RoutingHints, SourceFailure, SourceOutcome,
    aggregate, clean_with, discard_echoes, tag,
};
use std::sync::Arc;
use thiserror::Error;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Errors that abort a request before an answer can be chosen
///
/// Source-level problems never show up here; they degrade to
/// [`SourceFailure`]s on the report.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnswerError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("No knowledge sources enabled")]
    NoSourcesEnabled,

    #[error("Operation cancelled")]
    Cancelled,

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AnswerError {
    pub fn failure_kind(&self) -> FailureKind {
        match self {
            AnswerError::InvalidInput(_) => FailureKind::InvalidInput,
            AnswerError::NoSourcesEnabled => FailureKind::Configuration,
            AnswerError::Cancelled => FailureKind::Cancelled,
            AnswerError::Internal(_) => FailureKind::Internal,
        }
    }
}

impl From<DomainError> for AnswerError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::InvalidInput(msg) => AnswerError::InvalidInput(msg),
            DomainError::NoSourcesEnabled => AnswerError::NoSourcesEnabled,
            DomainError::Cancelled => AnswerError::Cancelled,
            other => AnswerError::Internal(other.to_string()),
        }
    }
}

/// Use case for answering a natural-language question
pub struct AnswerQuestionUseCase {
    sources: Vec<RegisteredSource>,
    config: AnswerConfig,
    logger: Arc<dyn AnswerLogger>,
}

impl AnswerQuestionUseCase {
    pub fn new(sources: Vec<RegisteredSource>) -> Self {
        Self {
            sources,
            config: AnswerConfig::default(),
            logger: Arc::new(NoAnswerLogger),
        }
    }

    pub fn with_config(mut self, config: AnswerConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_logger(mut self, logger: Arc<dyn AnswerLogger>) -> Self {
        self.logger = logger;
        self
    }

    pub fn sources(&self) -> &[RegisteredSource] {
        &self.sources
    }

    /// Answer `text`, folding every failure into the result.
    pub async fn answer(&self, text: &str) -> AnswerResult {
        let token = CancellationToken::new();
        match self.execute(text, &token).await {
            Ok(report) => report.to_result(),
            Err(e) => AnswerResult::failed(e.failure_kind(), e.to_string()),
        }
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(
        &self,
        text: &str,
        cancellation: &CancellationToken,
    ) -> Result<AnswerReport, AnswerError> {
        self.execute_with_progress(text, cancellation, &NoProgress)
            .await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        text: &str,
        cancellation: &CancellationToken,
        progress: &dyn ProgressNotifier,
    ) -> Result<AnswerReport, AnswerError> {
        let mut run = AnswerRun::new();
        let result = self.drive(text, cancellation, progress, &mut run).await;
        if let Err(e) = &result {
            warn!("Answer request failed: {}", e);
            run.fail();
        }
        progress.on_finished(&run.state());
        result
    }

    async fn drive(
        &self,
        text: &str,
        cancellation: &CancellationToken,
        progress: &dyn ProgressNotifier,
        run: &mut AnswerRun,
    ) -> Result<AnswerReport, AnswerError> {
        if cancellation.is_cancelled() {
            return Err(AnswerError::Cancelled);
        }

        enter(run, OrchestratorState::Tagging, 0, progress)?;
        let question = tag(text)?;
        info!(
            "Tagged question with {} tokens, {} entities",
            question.len(),
            question.entities().len()
        );
        self.logger.log(AnswerEvent::new(
            "question_tagged",
            serde_json::json!({
                "question": question.raw(),
                "tokens": question.tokens().collect::<Vec<_>>(),
                "entities": question.entities(),
            }),
        ));

        enter(run, OrchestratorState::Dispatching, 0, progress)?;
        let enabled: Vec<&RegisteredSource> =
            self.sources.iter().filter(|s| s.is_enabled()).collect();
        if enabled.is_empty() {
            return Err(AnswerError::NoSourcesEnabled);
        }

        let outcomes = self
            .query_sources(&question, &enabled, cancellation, progress, run)
            .await?;

        enter(run, OrchestratorState::Aggregating, 0, progress)?;
        let candidates: Vec<CandidateAnswer> = outcomes
            .iter()
            .flat_map(|o| o.candidates.iter().cloned())
            .collect();
        let (candidates, discarded_echoes) = if self.config.discard_echoes {
            discard_echoes(&question, candidates)
        } else {
            (candidates, 0)
        };
        if discarded_echoes > 0 {
            debug!("Discarded {} echo candidates", discarded_echoes);
        }
        let answer = aggregate(candidates);

        enter(run, OrchestratorState::PostProcessing, 0, progress)?;
        let answer = self.post_process(answer);

        enter(run, OrchestratorState::Done, 0, progress)?;
        match &answer.chosen {
            Some(chosen) => info!(
                "Selected answer from {} (score {:.3})",
                chosen.source,
                chosen.composite_score()
            ),
            None => info!("No source produced a usable answer"),
        }
        self.logger.log(AnswerEvent::new(
            "answer_selected",
            serde_json::json!({
                "text": answer.text,
                "success": answer.success,
                "sources": answer.contributing_sources(),
                "discarded_echoes": discarded_echoes,
            }),
        ));

        Ok(AnswerReport {
            question,
            answer,
            outcomes,
            discarded_echoes,
            states: run.history().to_vec(),
        })
    }

    /// Fan out to every enabled source and collect one outcome per source,
    /// in registration order.
    async fn query_sources(
        &self,
        question: &Question,
        enabled: &[&RegisteredSource],
        cancellation: &CancellationToken,
        progress: &dyn ProgressNotifier,
        run: &mut AnswerRun,
    ) -> Result<Vec<SourceOutcome>, AnswerError> {
        let hints = RoutingHints::for_question(question, self.config.entity_boost);
        let shared_question = Arc::new(question.clone());
        let mut join_set = JoinSet::new();

        for (index, source) in enabled.iter().enumerate() {
            let adapter = Arc::clone(&source.adapter);
            let config = source.config.clone();
            let question = Arc::clone(&shared_question);
            let weight = hints.effective_weight(adapter.kind(), config.priority_weight);
            debug!("Dispatching {} with weight {:.2}", adapter.name(), weight);

            join_set.spawn(async move {
                let mut outcome = query_source(adapter.as_ref(), &question, &config).await;
                outcome.candidates = outcome
                    .candidates
                    .into_iter()
                    .map(|c| c.with_weight(weight))
                    .collect();
                (index, outcome)
            });
        }

        enter(run, OrchestratorState::AwaitingSources, enabled.len(), progress)?;

        let mut slots: Vec<Option<SourceOutcome>> = vec![None; enabled.len()];
        loop {
            let result = tokio::select! {
                biased;
                _ = cancellation.cancelled() => {
                    join_set.abort_all();
                    return Err(AnswerError::Cancelled);
                }
                result = join_set.join_next() => result,
            };

            let Some(result) = result else {
                break;
            };

            match result {
                Ok((index, outcome)) => {
                    progress.on_source_complete(&outcome);
                    self.logger.log(AnswerEvent::new(
                        "source_completed",
                        serde_json::json!({
                            "source": outcome.source,
                            "success": outcome.is_success(),
                            "candidates": outcome.candidates.len(),
                            "attempts": outcome.attempts,
                            "elapsed_ms": outcome.elapsed_ms,
                            "failure": outcome.failure.as_ref().map(|f| f.kind.as_str()),
                        }),
                    ));
                    slots[index] = Some(outcome);
                }
                Err(e) => {
                    warn!("Source task join error: {}", e);
                }
            }
        }

        Ok(slots
            .into_iter()
            .zip(enabled)
            .map(|(slot, source)| {
                slot.unwrap_or_else(|| {
                    SourceOutcome::failure(
                        source.adapter.kind(),
                        SourceFailure::new(
                            source.name(),
                            FailureKind::SourceUnavailable,
                            "task aborted or panicked",
                            0,
                        ),
                        0,
                    )
                })
            })
            .collect())
    }

    /// Clean the chosen text; keep the original if cleaning leaves nothing.
    fn post_process(&self, answer: AggregatedAnswer) -> AggregatedAnswer {
        if !answer.success {
            return answer;
        }
        let cleaned = clean_with(&answer.text, self.config.clean);
        if cleaned.trim().is_empty() {
            answer
        } else {
            answer.with_text(cleaned)
        }
    }
}

fn enter(
    run: &mut AnswerRun,
    state: OrchestratorState,
    total_tasks: usize,
    progress: &dyn ProgressNotifier,
) -> Result<(), AnswerError> {
    run.transition(state)?;
    debug!("Entering state {}", state.as_str());
    progress.on_state_enter(&state, total_tasks);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::source_adapter::{SourceAdapter, SourceError};
    use askme_domain::{CleanOptions, NO_ANSWER_TEXT, SourceAdapterConfig, SourceKind};
    use async_trait::async_trait;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::time::Duration;
    use tokio::time::Instant;

    enum Behaviour {
        Answer(Vec<(&'static str, f64)>),
        Fail(SourceError),
        FailTimes(u32, SourceError, &'static str),
        Slow(Duration, &'static str),
        Panic,
    }

    struct MockSource {
        name: &'static str,
        kind: SourceKind,
        behaviour: Behaviour,
        calls: AtomicU32,
        completed: AtomicU32,
    }

    impl MockSource {
        fn new(name: &'static str, kind: SourceKind, behaviour: Behaviour) -> Arc<Self> {
            Arc::new(Self {
                name,
                kind,
                behaviour,
                calls: AtomicU32::new(0),
                completed: AtomicU32::new(0),
            })
        }

        fn candidate(&self, text: &str, confidence: f64) -> CandidateAnswer {
            CandidateAnswer::new(self.name, self.kind, text, confidence)
        }
    }

    #[async_trait]
    impl SourceAdapter for MockSource {
        fn name(&self) -> &str {
            self.name
        }

        fn kind(&self) -> SourceKind {
            self.kind
        }

        async fn fetch(
            &self,
            _question: &Question,
            _config: &SourceAdapterConfig,
        ) -> Result<Vec<CandidateAnswer>, SourceError> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
            match &self.behaviour {
                Behaviour::Answer(answers) => Ok(answers
                    .iter()
                    .map(|(text, confidence)| self.candidate(text, *confidence))
                    .collect()),
                Behaviour::Fail(e) => Err(e.clone()),
                Behaviour::FailTimes(times, e, text) => {
                    if call <= *times {
                        Err(e.clone())
                    } else {
                        Ok(vec![self.candidate(text, 0.6)])
                    }
                }
                Behaviour::Slow(delay, text) => {
                    tokio::time::sleep(*delay).await;
                    self.completed.fetch_add(1, Ordering::SeqCst);
                    Ok(vec![self.candidate(text, 0.6)])
                }
                Behaviour::Panic => panic!("adapter exploded"),
            }
        }
    }

    fn source(adapter: Arc<MockSource>) -> RegisteredSource {
        RegisteredSource::new(adapter, SourceAdapterConfig::default())
    }

    fn source_with(adapter: Arc<MockSource>, config: SourceAdapterConfig) -> RegisteredSource {
        RegisteredSource::new(adapter, config)
    }

    #[derive(Default)]
    struct RecordingLogger {
        events: Mutex<Vec<&'static str>>,
    }

    impl AnswerLogger for RecordingLogger {
        fn log(&self, event: AnswerEvent) {
            self.events.lock().unwrap().push(event.event_type);
        }
    }

    #[derive(Default)]
    struct RecordingProgress {
        states: Mutex<Vec<OrchestratorState>>,
        completed: Mutex<Vec<String>>,
        finished: Mutex<Option<OrchestratorState>>,
    }

    impl ProgressNotifier for RecordingProgress {
        fn on_state_enter(&self, state: &OrchestratorState, _total_tasks: usize) {
            self.states.lock().unwrap().push(*state);
        }

        fn on_source_complete(&self, outcome: &SourceOutcome) {
            self.completed.lock().unwrap().push(outcome.source.clone());
        }

        fn on_finished(&self, state: &OrchestratorState) {
            *self.finished.lock().unwrap() = Some(*state);
        }
    }

    #[tokio::test]
    async fn test_computational_answer_beats_web_snippet() {
        let wolfram = MockSource::new(
            "wolfram",
            SourceKind::Computational,
            Behaviour::Answer(vec![("1642-12-25", 0.95)]),
        );
        let web = MockSource::new(
            "web",
            SourceKind::WebSearch,
            Behaviour::Answer(vec![("Isaac Newton (born 25 December 1642)", 0.6)]),
        );
        let use_case = AnswerQuestionUseCase::new(vec![source(wolfram), source(web)]);

        let result = use_case.answer("When was Isaac Newton born?").await;
        assert!(result.success);
        assert_eq!(result.text, "1642-12-25");
        assert_eq!(result.sources_used, vec!["wolfram"]);
        assert!(result.failure.is_none());
    }

    #[tokio::test]
    async fn test_report_records_full_lifecycle() {
        let web = MockSource::new(
            "web",
            SourceKind::WebSearch,
            Behaviour::Answer(vec![("Paris", 0.6)]),
        );
        let use_case = AnswerQuestionUseCase::new(vec![source(web)]);
        let report = use_case
            .execute("What is the capital of France?", &CancellationToken::new())
            .await
            .unwrap();

        assert_eq!(
            report.states,
            vec![
                OrchestratorState::Received,
                OrchestratorState::Tagging,
                OrchestratorState::Dispatching,
                OrchestratorState::AwaitingSources,
                OrchestratorState::Aggregating,
                OrchestratorState::PostProcessing,
                OrchestratorState::Done,
            ]
        );
        assert_eq!(report.outcomes.len(), 1);
        assert_eq!(report.question.raw(), "What is the capital of France?");
    }

    #[tokio::test]
    async fn test_blank_question_is_invalid_input() {
        let web = MockSource::new("web", SourceKind::WebSearch, Behaviour::Answer(vec![]));
        let use_case = AnswerQuestionUseCase::new(vec![source(web.clone())]);

        let result = use_case.answer("").await;
        assert!(!result.success);
        assert_eq!(result.text, NO_ANSWER_TEXT);
        assert_eq!(result.failure_kind(), Some(FailureKind::InvalidInput));

        let result = use_case.answer("  ?! ").await;
        assert_eq!(result.failure_kind(), Some(FailureKind::InvalidInput));
        assert_eq!(web.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_no_enabled_sources_is_configuration_failure() {
        let use_case = AnswerQuestionUseCase::new(vec![]);
        let result = use_case.answer("Who wrote Hamlet?").await;
        assert_eq!(result.failure_kind(), Some(FailureKind::Configuration));

        let web = MockSource::new("web", SourceKind::WebSearch, Behaviour::Answer(vec![]));
        let use_case = AnswerQuestionUseCase::new(vec![source_with(
            web,
            SourceAdapterConfig::default().disabled(),
        )]);
        let err = use_case
            .execute("Who wrote Hamlet?", &CancellationToken::new())
            .await
            .unwrap_err();
        assert_eq!(err, AnswerError::NoSourcesEnabled);
    }

    #[tokio::test]
    async fn test_zero_timeout_source_is_isolated() {
        let wolfram = MockSource::new(
            "wolfram",
            SourceKind::Computational,
            Behaviour::Answer(vec![("42", 0.95)]),
        );
        let web = MockSource::new(
            "web",
            SourceKind::WebSearch,
            Behaviour::Answer(vec![("forty-two", 0.6)]),
        );
        let use_case = AnswerQuestionUseCase::new(vec![
            source_with(
                wolfram.clone(),
                SourceAdapterConfig::default().with_timeout(Duration::ZERO),
            ),
            source(web),
        ]);

        let report = use_case
            .execute("What is six times seven?", &CancellationToken::new())
            .await
            .unwrap();
        assert!(report.answer.success);
        assert_eq!(report.answer.text, "forty-two");
        let failure = report.outcomes[0].failure.as_ref().unwrap();
        assert_eq!(failure.kind, FailureKind::SourceTimeout);
        assert_eq!(failure.attempts, 0);
        assert_eq!(wolfram.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_slow_source_bounded_by_timeout() {
        let slow = MockSource::new(
            "wikipedia",
            SourceKind::Encyclopedia,
            Behaviour::Slow(Duration::from_secs(60), "too late"),
        );
        let fast = MockSource::new(
            "web",
            SourceKind::WebSearch,
            Behaviour::Answer(vec![("Canberra", 0.6)]),
        );
        let use_case = AnswerQuestionUseCase::new(vec![
            source_with(
                slow,
                SourceAdapterConfig::default().with_timeout(Duration::from_secs(2)),
            ),
            source(fast),
        ]);

        let start = Instant::now();
        let report = use_case
            .execute("What is the capital of Australia?", &CancellationToken::new())
            .await
            .unwrap();
        assert!(start.elapsed() < Duration::from_secs(3));
        assert_eq!(report.answer.text, "Canberra");
        assert_eq!(
            report.outcomes[0].failure.as_ref().unwrap().kind,
            FailureKind::SourceTimeout
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_transient_failure_retried_then_succeeds() {
        let flaky = MockSource::new(
            "web",
            SourceKind::WebSearch,
            Behaviour::FailTimes(
                2,
                SourceError::Unavailable("HTTP 503".to_string()),
                "Canberra",
            ),
        );
        let use_case = AnswerQuestionUseCase::new(vec![source(flaky.clone())]);

        let report = use_case
            .execute("What is the capital of Australia?", &CancellationToken::new())
            .await
            .unwrap();
        assert!(report.answer.success);
        assert_eq!(report.outcomes[0].attempts, 3);
        assert_eq!(flaky.calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_auth_error_not_retried() {
        let wolfram = MockSource::new(
            "wolfram",
            SourceKind::Computational,
            Behaviour::Fail(SourceError::Auth("invalid appid".to_string())),
        );
        let use_case = AnswerQuestionUseCase::new(vec![source(wolfram.clone())]);

        let report = use_case
            .execute("What is two plus two?", &CancellationToken::new())
            .await
            .unwrap();
        let failure = report.outcomes[0].failure.as_ref().unwrap();
        assert_eq!(failure.kind, FailureKind::SourceAuthError);
        assert_eq!(failure.attempts, 1);
        assert_eq!(wolfram.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_all_sources_failing_yields_no_answer() {
        let wolfram = MockSource::new(
            "wolfram",
            SourceKind::Computational,
            Behaviour::Fail(SourceError::Parse("unexpected body".to_string())),
        );
        let web = MockSource::new("web", SourceKind::WebSearch, Behaviour::Answer(vec![]));
        let use_case = AnswerQuestionUseCase::new(vec![source(wolfram), source(web)]);

        let result = use_case.answer("What is the meaning of life?").await;
        assert!(!result.success);
        assert_eq!(result.text, NO_ANSWER_TEXT);
        assert_eq!(result.failure_kind(), Some(FailureKind::NoAnswerFound));
        let message = &result.failure.unwrap().message;
        assert!(message.contains("wolfram"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancellation_aborts_source_tasks() {
        let slow = MockSource::new(
            "web",
            SourceKind::WebSearch,
            Behaviour::Slow(Duration::from_secs(10), "never"),
        );
        let use_case = AnswerQuestionUseCase::new(vec![source_with(
            slow.clone(),
            SourceAdapterConfig::default().with_timeout(Duration::from_secs(30)),
        )]);
        let token = CancellationToken::new();
        let canceller = token.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(100)).await;
            canceller.cancel();
        });

        let progress = RecordingProgress::default();
        let err = use_case
            .execute_with_progress("Who wrote Hamlet?", &token, &progress)
            .await
            .unwrap_err();
        assert_eq!(err, AnswerError::Cancelled);
        assert_eq!(
            *progress.finished.lock().unwrap(),
            Some(OrchestratorState::Errored)
        );

        tokio::time::sleep(Duration::from_secs(60)).await;
        assert_eq!(slow.completed.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_already_cancelled_token_short_circuits() {
        let web = MockSource::new("web", SourceKind::WebSearch, Behaviour::Answer(vec![]));
        let use_case = AnswerQuestionUseCase::new(vec![source(web.clone())]);
        let token = CancellationToken::new();
        token.cancel();
        let err = use_case.execute("Who wrote Hamlet?", &token).await.unwrap_err();
        assert_eq!(err.failure_kind(), FailureKind::Cancelled);
        assert_eq!(web.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_panicking_adapter_degrades_to_failure() {
        let broken = MockSource::new("wolfram", SourceKind::Computational, Behaviour::Panic);
        let web = MockSource::new(
            "web",
            SourceKind::WebSearch,
            Behaviour::Answer(vec![("William Shakespeare", 0.6)]),
        );
        let use_case = AnswerQuestionUseCase::new(vec![source(broken), source(web)]);

        let report = use_case
            .execute("Who wrote Hamlet?", &CancellationToken::new())
            .await
            .unwrap();
        assert_eq!(report.answer.text, "William Shakespeare");
        let failure = report.outcomes[0].failure.as_ref().unwrap();
        assert_eq!(failure.source, "wolfram");
        assert_eq!(failure.kind, FailureKind::SourceUnavailable);
    }

    #[tokio::test]
    async fn test_chosen_answer_is_cleaned() {
        let web = MockSource::new(
            "web",
            SourceKind::WebSearch,
            Behaviour::Answer(vec![(
                "Isaac Newton (born 25 December 1642) was an English physicist.",
                0.6,
            )]),
        );
        let use_case = AnswerQuestionUseCase::new(vec![source(web)]);
        let result = use_case.answer("Who was Isaac Newton?").await;
        assert_eq!(result.text, "Isaac Newton was an English physicist.");
    }

    #[tokio::test]
    async fn test_numeric_parentheticals_kept_when_configured() {
        let wolfram = MockSource::new(
            "wolfram",
            SourceKind::Computational,
            Behaviour::Answer(vec![("about 384400 km (238900 mi)", 0.9)]),
        );
        let use_case = AnswerQuestionUseCase::new(vec![source(wolfram)]).with_config(
            AnswerConfig::default().with_clean(CleanOptions {
                keep_numeric_parentheticals: true,
            }),
        );
        let result = use_case.answer("How far is the Moon?").await;
        assert_eq!(result.text, "about 384400 km (238900 mi)");
    }

    #[tokio::test]
    async fn test_entity_question_boosts_encyclopedia() {
        let wikipedia = MockSource::new(
            "wikipedia",
            SourceKind::Encyclopedia,
            Behaviour::Answer(vec![("English mathematician and physicist", 0.55)]),
        );
        let web = MockSource::new(
            "web",
            SourceKind::WebSearch,
            Behaviour::Answer(vec![("a famous scientist", 0.6)]),
        );
        let use_case = AnswerQuestionUseCase::new(vec![source(wikipedia), source(web)]);

        let report = use_case
            .execute("Who was Isaac Newton?", &CancellationToken::new())
            .await
            .unwrap();
        let chosen = report.answer.chosen.as_ref().unwrap();
        assert_eq!(chosen.source, "wikipedia");
        assert!((chosen.priority_weight - 1.25).abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_echo_candidates_discarded() {
        let web = MockSource::new(
            "web",
            SourceKind::WebSearch,
            Behaviour::Answer(vec![("Isaac Newton", 0.9)]),
        );
        let wolfram = MockSource::new(
            "wolfram",
            SourceKind::Computational,
            Behaviour::Answer(vec![("1642", 0.5)]),
        );
        let use_case = AnswerQuestionUseCase::new(vec![source(web), source(wolfram)]);

        let report = use_case
            .execute("When was Isaac Newton born?", &CancellationToken::new())
            .await
            .unwrap();
        assert_eq!(report.discarded_echoes, 1);
        assert_eq!(report.answer.text, "1642");
    }

    #[tokio::test]
    async fn test_progress_and_logger_events() {
        let wolfram = MockSource::new(
            "wolfram",
            SourceKind::Computational,
            Behaviour::Answer(vec![("4", 0.95)]),
        );
        let web = MockSource::new("web", SourceKind::WebSearch, Behaviour::Answer(vec![]));
        let logger = Arc::new(RecordingLogger::default());
        let use_case = AnswerQuestionUseCase::new(vec![source(wolfram), source(web)])
            .with_logger(logger.clone());
        let progress = RecordingProgress::default();

        use_case
            .execute_with_progress("What is two plus two?", &CancellationToken::new(), &progress)
            .await
            .unwrap();

        let events = logger.events.lock().unwrap().clone();
        assert_eq!(events.len(), 4);
        assert_eq!(events[0], "question_tagged");
        assert_eq!(events[3], "answer_selected");
        assert_eq!(progress.completed.lock().unwrap().len(), 2);
        assert_eq!(
            progress.states.lock().unwrap().last(),
            Some(&OrchestratorState::Done)
        );
        assert_eq!(
            *progress.finished.lock().unwrap(),
            Some(OrchestratorState::Done)
        );
    }
}
