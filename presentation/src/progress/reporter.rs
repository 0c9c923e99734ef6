//! Progress reporting for batch runs

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use quiz_application::ports::progress::ResolutionProgress;
use quiz_domain::{AttemptFailure, Question, QuestionOutcome, preview};
use std::sync::Mutex;

/// One-line status for a finished question
fn outcome_line(index: usize, outcome: &QuestionOutcome) -> String {
    match outcome {
        QuestionOutcome::Resolved {
            option_index,
            option,
            attempts,
            ..
        } => format!(
            "{} Q{}: option {} ({}) after {} attempt(s)",
            "v".green(),
            index + 1,
            option_index + 1,
            preview(option, 40),
            attempts
        ),
        QuestionOutcome::Unresolved { reason, attempts } => format!(
            "{} Q{}: unresolved, {} after {} attempt(s)",
            "x".red(),
            index + 1,
            reason,
            attempts
        ),
    }
}

/// Reports progress during a batch run with a progress bar
pub struct ProgressReporter {
    bar: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            bar: Mutex::new(None),
        }
    }

    fn batch_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-")
    }

    fn with_bar(&self, f: impl FnOnce(&ProgressBar)) {
        if let Ok(guard) = self.bar.lock() {
            if let Some(pb) = guard.as_ref() {
                f(pb);
            }
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ResolutionProgress for ProgressReporter {
    fn on_batch_start(&self, total_questions: usize) {
        let pb = ProgressBar::new(total_questions as u64);
        pb.set_style(Self::batch_style());
        pb.set_prefix("Answering");
        pb.set_message("Starting...");

        if let Ok(mut guard) = self.bar.lock() {
            *guard = Some(pb);
        }
    }

    fn on_question_start(&self, _index: usize, question: &Question) {
        self.with_bar(|pb| pb.set_message(preview(question.text(), 50)));
    }

    fn on_attempt_start(&self, attempt: usize, max_attempts: usize) {
        if attempt > 1 {
            self.with_bar(|pb| pb.set_message(format!("retry {}/{}", attempt, max_attempts)));
        }
    }

    fn on_attempt_failed(&self, attempt: usize, failure: &AttemptFailure) {
        self.with_bar(|pb| {
            pb.println(format!("  {} attempt {}: {}", "!".yellow(), attempt, failure))
        });
    }

    fn on_question_complete(&self, index: usize, outcome: &QuestionOutcome) {
        self.with_bar(|pb| {
            pb.println(outcome_line(index, outcome));
            pb.inc(1);
        });
    }

    fn on_batch_complete(&self) {
        if let Ok(mut guard) = self.bar.lock() {
            if let Some(pb) = guard.take() {
                pb.finish_with_message(format!("{}", "done".green()));
            }
        }
    }
}

/// Simple text-based progress on stderr (no fancy UI)
pub struct SimpleProgress;

impl ResolutionProgress for SimpleProgress {
    fn on_batch_start(&self, total_questions: usize) {
        eprintln!(
            "{} {} ({} questions)",
            "->".cyan(),
            "Answering quiz".bold(),
            total_questions
        );
    }

    fn on_question_start(&self, index: usize, question: &Question) {
        eprintln!("  Q{}: {}", index + 1, preview(question.text(), 70));
    }

    fn on_attempt_failed(&self, attempt: usize, failure: &AttemptFailure) {
        eprintln!("    {} attempt {}: {}", "!".yellow(), attempt, failure);
    }

    fn on_question_complete(&self, index: usize, outcome: &QuestionOutcome) {
        eprintln!("  {}", outcome_line(index, outcome));
    }

    fn on_batch_complete(&self) {
        eprintln!();
    }
}
