//! CLI entrypoint for askme
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use askme_application::{
    AnswerError, AnswerLogger, AnswerQuestionUseCase, NoAnswerLogger, NoProgress,
    ProgressNotifier,
};
use askme_infrastructure::{ConfigLoader, JsonlAnswerLogger, build_client, build_sources};
use askme_presentation::{
    Cli, ConsoleFormatter, OutputConfig, OutputFormatter, ProgressReporter, SimpleProgress,
};
use clap::Parser;
use std::io::{IsTerminal, Read};
use std::process::ExitCode;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

/// Exit status when every source came back empty-handed
const EXIT_NO_ANSWER: u8 = 2;
/// Conventional status for SIGINT
const EXIT_INTERRUPTED: u8 = 130;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level; RUST_LOG wins when set
    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    info!("Starting askme");

    // === Configuration ===
    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref())
            .map_err(|e| anyhow!("failed to load configuration: {}", e))?
    };

    if !cli.sources.is_empty()
        && let Err(issue) = config.restrict_sources(&cli.sources)
    {
        error!("{}", issue.message);
        eprintln!("error: {}", issue.message);
        return Ok(ExitCode::FAILURE);
    }
    if let Some(timeout_ms) = cli.timeout_ms {
        config.set_timeout_ms(timeout_ms);
    }
    if cli.keep_units {
        config.answer.keep_numeric_parentheticals = true;
    }

    let output = OutputConfig::resolve(
        cli.output,
        cli.quiet,
        config.output.format,
        config.output.color,
    );
    output.apply_color();

    // === Dependency Injection ===
    let client = build_client().context("failed to build HTTP client")?;
    let sources = build_sources(&config, &client);

    if cli.show_config {
        println!("Configuration sources (in priority order):");
        for line in ConfigLoader::describe_sources(cli.config.as_deref()) {
            println!("  {}", line);
        }
        println!();
        print!("{}", ConsoleFormatter::format_sources(&sources));
        return Ok(ExitCode::SUCCESS);
    }

    let issues = config.validate();
    for issue in &issues {
        if issue.is_error() {
            error!("{}", issue.message);
        } else {
            warn!("{}", issue.message);
        }
    }
    if issues.iter().any(|i| i.is_error()) {
        for issue in issues.iter().filter(|i| i.is_error()) {
            eprintln!("error: {}", issue.message);
        }
        return Ok(ExitCode::FAILURE);
    }

    let question = match cli.question {
        Some(q) => q,
        None => read_question_from_stdin()?,
    };

    let log_path = cli
        .answer_log
        .clone()
        .or_else(|| config.logging.answer_log_path());
    let logger: Arc<dyn AnswerLogger> = match log_path.and_then(JsonlAnswerLogger::open) {
        Some(logger) => {
            info!("Answer transcript: {}", logger.path().display());
            Arc::new(logger)
        }
        None => Arc::new(NoAnswerLogger),
    };

    let use_case = AnswerQuestionUseCase::new(sources)
        .with_config(config.answer.to_answer_config())
        .with_logger(logger);

    // Ctrl-C cancels the request; in-flight source tasks are aborted
    let cancellation = CancellationToken::new();
    let interrupt = cancellation.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Interrupted, cancelling outstanding sources");
            interrupt.cancel();
        }
    });

    let progress: Box<dyn ProgressNotifier> = if !output.show_progress {
        Box::new(NoProgress)
    } else if std::io::stderr().is_terminal() {
        Box::new(ProgressReporter::new())
    } else {
        Box::new(SimpleProgress)
    };

    let outcome = use_case
        .execute_with_progress(&question, &cancellation, progress.as_ref())
        .await;

    match outcome {
        Ok(report) => {
            println!("{}", ConsoleFormatter.format(&report, output.format).trim_end());
            Ok(if report.answer.success {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(EXIT_NO_ANSWER)
            })
        }
        Err(e) => {
            println!(
                "{}",
                ConsoleFormatter::format_error(&question, &e, output.format).trim_end()
            );
            Ok(match e {
                AnswerError::Cancelled => ExitCode::from(EXIT_INTERRUPTED),
                _ => ExitCode::FAILURE,
            })
        }
    }
}

fn read_question_from_stdin() -> Result<String> {
    let mut stdin = std::io::stdin();
    if stdin.is_terminal() {
        bail!("Question is required. Pass it as an argument or pipe it on stdin.");
    }
    let mut question = String::new();
    stdin
        .read_to_string(&mut question)
        .context("failed to read question from stdin")?;
    Ok(question)
}
