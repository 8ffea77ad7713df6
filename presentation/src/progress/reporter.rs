//! Progress reporting while a question is answered
//!
//! Both reporters write to stderr so that stdout carries only the answer.

use askme_application::ProgressNotifier;
use askme_domain::{OrchestratorState, SourceOutcome};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;

/// Reports progress with an indicatif bar over the source tasks
pub struct ProgressReporter {
    bar: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            bar: Mutex::new(None),
        }
    }

    fn sources_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:30.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-")
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn replace_bar(&self, bar: Option<ProgressBar>) {
        if let Ok(mut slot) = self.bar.lock() {
            if let Some(previous) = slot.take() {
                previous.finish_and_clear();
            }
            *slot = bar;
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressNotifier for ProgressReporter {
    fn on_state_enter(&self, state: &OrchestratorState, total_tasks: usize) {
        match state {
            OrchestratorState::AwaitingSources => {
                let pb = ProgressBar::new(total_tasks as u64);
                pb.set_style(Self::sources_style());
                pb.set_prefix(state.display_name().to_string());
                pb.set_message("waiting...");
                pb.enable_steady_tick(Duration::from_millis(100));
                self.replace_bar(Some(pb));
            }
            OrchestratorState::Aggregating | OrchestratorState::PostProcessing => {
                let pb = ProgressBar::new_spinner();
                pb.set_style(Self::spinner_style());
                pb.set_prefix(state.display_name().to_string());
                self.replace_bar(Some(pb));
            }
            _ => {}
        }
    }

    fn on_source_complete(&self, outcome: &SourceOutcome) {
        if let Ok(slot) = self.bar.lock()
            && let Some(pb) = slot.as_ref()
        {
            let status = if outcome.is_success() {
                format!("{} {}", "v".green(), outcome.source)
            } else {
                format!("{} {}", "x".red(), outcome.source)
            };
            pb.set_message(status);
            pb.inc(1);
        }
    }

    fn on_finished(&self, _state: &OrchestratorState) {
        self.replace_bar(None);
    }
}

/// Simple text-based progress (no fancy UI)
pub struct SimpleProgress;

impl ProgressNotifier for SimpleProgress {
    fn on_state_enter(&self, state: &OrchestratorState, total_tasks: usize) {
        if *state == OrchestratorState::AwaitingSources {
            eprintln!(
                "{} {} ({} sources)",
                "->".cyan(),
                state.display_name().bold(),
                total_tasks
            );
        }
    }

    fn on_source_complete(&self, outcome: &SourceOutcome) {
        match &outcome.failure {
            None => eprintln!(
                "  {} {} ({} candidates, {}ms)",
                "v".green(),
                outcome.source,
                outcome.candidates.len(),
                outcome.elapsed_ms
            ),
            Some(failure) => eprintln!(
                "  {} {} ({})",
                "x".red(),
                outcome.source,
                failure.kind
            ),
        }
    }

    fn on_finished(&self, state: &OrchestratorState) {
        if *state == OrchestratorState::Errored {
            eprintln!("{} {}", "->".cyan(), state.display_name().red());
        }
    }
}
