//! Console output formatter for answers

use crate::output::formatter::OutputFormatter;
use askme_application::{AnswerError, RegisteredSource};
use askme_domain::core::string::truncate_chars;
use askme_domain::{
    AnswerReport, AnswerResult, CandidateAnswer, NO_ANSWER_TEXT, OutputFormat, SourceKind,
    SourceOutcome,
};
use colored::Colorize;

const RUNNERS_UP_SHOWN: usize = 3;
const RUNNER_UP_MAX_CHARS: usize = 160;

/// Formats answers for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// The answer alone; failures render an explicit block, never an empty line
    pub fn format_answer(report: &AnswerReport) -> String {
        if report.answer.success {
            return format!("{}\n", report.answer.text);
        }

        let result = report.to_result();
        let mut output = Self::no_answer_header(report.question.raw());
        let reasons: Vec<String> = report
            .failed_outcomes()
            .filter_map(|o| o.failure.as_ref())
            .map(|f| f.to_string())
            .collect();
        if reasons.is_empty() {
            output.push_str(&format!(
                "  {}\n",
                "No source returned a usable candidate.".dimmed()
            ));
        } else {
            for reason in reasons {
                output.push_str(&format!("  {} {}\n", "x".red(), reason));
            }
        }
        if let Some(kind) = result.failure_kind() {
            output.push_str(&format!("{} {}\n", "Reason:".dimmed(), kind));
        }
        output
    }

    /// Format the complete report
    pub fn format_full(report: &AnswerReport) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("askme"));
        output.push('\n');

        output.push_str(&format!(
            "{} {}\n",
            "Question:".cyan().bold(),
            report.question.raw()
        ));
        if !report.question.entities().is_empty() {
            let entities: Vec<String> = report
                .question
                .entities()
                .iter()
                .map(|e| format!("{} ({})", e.text, e.entity_type.as_str()))
                .collect();
            output.push_str(&format!(
                "{} {}\n",
                "Entities:".cyan().bold(),
                entities.join(", ")
            ));
        }

        output.push_str(&Self::section_header("Answer"));
        match &report.answer.chosen {
            Some(chosen) => {
                output.push_str(&format!("\n{}\n", report.answer.text.green().bold()));
                output.push_str(&format!(
                    "{}\n",
                    format!(
                        "from {} (score {:.3}, sources: {})",
                        chosen.source,
                        chosen.composite_score(),
                        report.answer.contributing_sources().join(", ")
                    )
                    .dimmed()
                ));
            }
            None => {
                output.push_str(&format!("\n{}\n", NO_ANSWER_TEXT.red().bold()));
            }
        }

        if !report.answer.runners_up.is_empty() {
            output.push_str(&Self::section_header("Runners-up"));
            for candidate in report.answer.runners_up.iter().take(RUNNERS_UP_SHOWN) {
                output.push_str(&Self::candidate_line(candidate));
            }
        }

        output.push_str(&Self::section_header("Sources"));
        for outcome in &report.outcomes {
            output.push_str(&Self::outcome_line(outcome));
        }
        if report.discarded_echoes > 0 {
            output.push_str(&format!(
                "\n{}\n",
                format!(
                    "{} candidate(s) discarded for echoing the question",
                    report.discarded_echoes
                )
                .dimmed()
            ));
        }

        output.push_str(&Self::footer());
        output
    }

    /// Format as JSON: the caller-facing result plus the full report
    pub fn format_json(report: &AnswerReport) -> String {
        let value = serde_json::json!({
            "result": report.to_result(),
            "report": report,
        });
        serde_json::to_string_pretty(&value).unwrap_or_else(|_| "{}".to_string())
    }

    /// Render a request-level failure in the requested format
    pub fn format_error(question: &str, error: &AnswerError, format: OutputFormat) -> String {
        let result = AnswerResult::failed(error.failure_kind(), error.to_string());
        match format {
            OutputFormat::Json => {
                let value = serde_json::json!({ "result": result });
                serde_json::to_string_pretty(&value).unwrap_or_else(|_| "{}".to_string())
            }
            OutputFormat::Answer | OutputFormat::Full => {
                let mut output = Self::no_answer_header(question);
                output.push_str(&format!("  {} {}\n", "x".red(), error));
                output
            }
        }
    }

    /// One line per registered source: state, budget, weight and credential
    pub fn format_sources(sources: &[RegisteredSource]) -> String {
        let mut output = format!("{}\n", "Knowledge sources:".cyan().bold());
        for source in sources {
            let config = &source.config;
            let state = if config.enabled {
                format!("{:<8}", "enabled").green()
            } else {
                format!("{:<8}", "disabled").dimmed()
            };
            let key = match (source.adapter.kind(), &config.api_key) {
                (_, Some(_)) => " key: set",
                (SourceKind::Computational, None) => " key: missing",
                _ => "",
            };
            output.push_str(&format!(
                "  {:<10} {} {} timeout {}ms, {} retries, weight {:.2}, max {}{}\n",
                source.name(),
                state,
                source.adapter.kind().display_name(),
                config.timeout.as_millis(),
                config.retry.max_retries,
                config.priority_weight,
                config.max_results,
                key
            ));
        }
        output
    }

    fn no_answer_header(question: &str) -> String {
        let mut output = format!("{}\n", NO_ANSWER_TEXT.red().bold());
        if !question.trim().is_empty() {
            output.push_str(&format!("{} {}\n", "Question:".dimmed(), question.trim()));
        }
        output
    }

    fn candidate_line(candidate: &CandidateAnswer) -> String {
        format!(
            "  {} {} {}\n",
            "-".dimmed(),
            Self::indent_tail(&truncate_chars(&candidate.text, RUNNER_UP_MAX_CHARS), "    "),
            format!("[{} {:.3}]", candidate.source, candidate.composite_score()).dimmed()
        )
    }

    fn outcome_line(outcome: &SourceOutcome) -> String {
        let timing = format!(
            "{}ms, {} attempt{}",
            outcome.elapsed_ms,
            outcome.attempts,
            if outcome.attempts == 1 { "" } else { "s" }
        );
        match &outcome.failure {
            None => format!(
                "  {} {:<10} {} candidate(s) {}\n",
                "v".green(),
                outcome.source,
                outcome.candidates.len(),
                format!("({})", timing).dimmed()
            ),
            Some(failure) => format!(
                "  {} {:<10} {}: {} {}\n",
                "x".red(),
                outcome.source,
                failure.kind.as_str().yellow(),
                failure.message,
                format!("({})", timing).dimmed()
            ),
        }
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }

    /// Indent every line after the first
    fn indent_tail(text: &str, prefix: &str) -> String {
        text.lines()
            .enumerate()
            .map(|(i, line)| {
                if i == 0 {
                    line.to_string()
                } else {
                    format!("{}{}", prefix, line)
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_answer(&self, report: &AnswerReport) -> String {
        Self::format_answer(report)
    }

    fn format_full(&self, report: &AnswerReport) -> String {
        Self::format_full(report)
    }

    fn format_json(&self, report: &AnswerReport) -> String {
        Self::format_json(report)
    }

    fn format_error(&self, question: &str, error: &AnswerError, format: OutputFormat) -> String {
        Self::format_error(question, error, format)
    }
}
