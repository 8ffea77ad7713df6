//! CLI command definitions

use askme_domain::OutputFormat as DomainOutputFormat;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for answers
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Only the cleaned answer
    Answer,
    /// Answer plus per-source outcomes and runners-up
    Full,
    /// JSON output
    Json,
}

impl From<OutputFormat> for DomainOutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Answer => DomainOutputFormat::Answer,
            OutputFormat::Full => DomainOutputFormat::Full,
            OutputFormat::Json => DomainOutputFormat::Json,
        }
    }
}

/// CLI arguments for askme
#[derive(Parser, Debug)]
#[command(name = "askme")]
#[command(author, version, about = "Ask a factual question, get one short answer")]
#[command(long_about = r#"
askme sends a natural-language question to several knowledge sources at once
(a computational engine, an encyclopedia and web-search snippets), ranks what
comes back and prints the single best answer.

Configuration files are loaded from (in priority order):
1. ASKME_* environment variables (e.g. ASKME_SOURCES__WOLFRAM__API_KEY)
2. --config <path>     Explicit config file
3. ./askme.toml        Project-level config
4. ~/.config/askme/config.toml   Global config

Example:
  askme "When was Isaac Newton born?"
  askme -s wikipedia -s web "What is the capital of Australia?"
  askme -o json "How far is the Moon?"
"#)]
pub struct Cli {
    /// The question to ask (read from stdin when omitted)
    pub question: Option<String>,

    /// Output format (defaults to the config file's, then "answer")
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Sources to query (can be specified multiple times; default: all enabled)
    #[arg(short, long = "source", value_name = "SOURCE")]
    pub sources: Vec<String>,

    /// Time budget per source in milliseconds, retries included
    #[arg(long, value_name = "N")]
    pub timeout_ms: Option<u64>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration sources and knowledge sources, then exit
    #[arg(long)]
    pub show_config: bool,

    /// Append a JSONL transcript of the request to this file
    #[arg(long, value_name = "PATH")]
    pub answer_log: Option<PathBuf>,

    /// Keep numeric parentheticals such as "(42%)" in the answer
    #[arg(long)]
    pub keep_units: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal() {
        let cli = Cli::try_parse_from(["askme", "Who wrote Hamlet?"]).unwrap();
        assert_eq!(cli.question.as_deref(), Some("Who wrote Hamlet?"));
        assert_eq!(cli.output, None);
        assert!(cli.sources.is_empty());
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_parse_all_flags() {
        let cli = Cli::try_parse_from([
            "askme",
            "-o",
            "json",
            "-s",
            "web",
            "--source",
            "wikipedia",
            "--timeout-ms",
            "1500",
            "-vv",
            "-q",
            "--no-config",
            "--answer-log",
            "answers.jsonl",
            "--keep-units",
            "How far is the Moon?",
        ])
        .unwrap();
        assert_eq!(cli.output, Some(OutputFormat::Json));
        assert_eq!(cli.sources, vec!["web", "wikipedia"]);
        assert_eq!(cli.timeout_ms, Some(1500));
        assert_eq!(cli.verbose, 2);
        assert!(cli.quiet);
        assert!(cli.no_config);
        assert!(cli.keep_units);
        assert_eq!(cli.answer_log, Some(PathBuf::from("answers.jsonl")));
    }

    #[test]
    fn test_rejects_unknown_format() {
        assert!(Cli::try_parse_from(["askme", "-o", "xml", "hi"]).is_err());
    }

    #[test]
    fn test_output_format_into_domain() {
        assert_eq!(
            DomainOutputFormat::from(OutputFormat::Full),
            DomainOutputFormat::Full
        );
    }
}
