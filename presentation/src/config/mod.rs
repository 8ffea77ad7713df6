//! Presentation-level configuration
//!
//! Resolves how an answer is displayed from the CLI flags and the file
//! settings, CLI first.

use crate::cli::commands::OutputFormat as CliOutputFormat;
use askme_domain::OutputFormat;

/// Output configuration for the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Enable colored terminal output
    pub color: bool,
    /// Show progress indicators on stderr
    pub show_progress: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Answer,
            color: true,
            show_progress: true,
        }
    }
}

impl OutputConfig {
    /// Merge CLI flags over file settings.
    ///
    /// JSON output never shows progress so stdout and stderr stay
    /// machine-friendly.
    pub fn resolve(
        cli_format: Option<CliOutputFormat>,
        quiet: bool,
        file_format: Option<OutputFormat>,
        file_color: bool,
    ) -> Self {
        let format = cli_format
            .map(OutputFormat::from)
            .or(file_format)
            .unwrap_or_default();
        Self {
            format,
            color: file_color,
            show_progress: !quiet && format != OutputFormat::Json,
        }
    }

    /// Turn colour off globally when disabled.
    pub fn apply_color(&self) {
        if !self.color {
            colored::control::set_override(false);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_format_wins() {
        let config = OutputConfig::resolve(
            Some(CliOutputFormat::Full),
            false,
            Some(OutputFormat::Json),
            true,
        );
        assert_eq!(config.format, OutputFormat::Full);
        assert!(config.show_progress);
    }

    #[test]
    fn test_file_format_used_when_flag_absent() {
        let config = OutputConfig::resolve(None, false, Some(OutputFormat::Json), false);
        assert_eq!(config.format, OutputFormat::Json);
        assert!(!config.color);
        assert!(!config.show_progress);
    }

    #[test]
    fn test_defaults_and_quiet() {
        let config = OutputConfig::resolve(None, true, None, true);
        assert_eq!(config.format, OutputFormat::Answer);
        assert!(!config.show_progress);
    }
}
