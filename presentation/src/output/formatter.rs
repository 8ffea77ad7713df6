//! Output formatter trait

use askme_application::AnswerError;
use askme_domain::{AnswerReport, OutputFormat};

/// Trait for rendering answers
pub trait OutputFormatter {
    /// Only the cleaned answer, or an explicit "no answer" block
    fn format_answer(&self, report: &AnswerReport) -> String;

    /// Answer plus per-source outcomes and runners-up
    fn format_full(&self, report: &AnswerReport) -> String;

    /// Format as JSON
    fn format_json(&self, report: &AnswerReport) -> String;

    /// A request that failed before any source was asked
    fn format_error(&self, question: &str, error: &AnswerError, format: OutputFormat) -> String;

    fn format(&self, report: &AnswerReport, format: OutputFormat) -> String {
        match format {
            OutputFormat::Answer => self.format_answer(report),
            OutputFormat::Full => self.format_full(report),
            OutputFormat::Json => self.format_json(report),
        }
    }
}
