//! Progress notification port
//!
//! Defines the interface for reporting progress while questions are resolved.

use quiz_domain::{AttemptFailure, MatchResult, Question, QuestionOutcome};

/// Callback for progress updates during a batch run
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (progress bar, plain lines, etc.)
pub trait ResolutionProgress: Send + Sync {
    /// Called once the questions have been listed
    fn on_batch_start(&self, total_questions: usize);

    /// Called when a question starts processing
    fn on_question_start(&self, index: usize, question: &Question);

    /// Called when a question reaches its outcome
    fn on_question_complete(&self, index: usize, outcome: &QuestionOutcome);

    /// Called when every question has been visited
    fn on_batch_complete(&self);

    // ==================== Attempt Callbacks ====================

    /// Called when an attempt begins
    fn on_attempt_start(&self, _attempt: usize, _max_attempts: usize) {}

    /// Called when the answer text has been matched to an option
    fn on_option_matched(&self, _question: &Question, _matched: &MatchResult) {}

    /// Called when an attempt is consumed without acceptance
    fn on_attempt_failed(&self, _attempt: usize, _failure: &AttemptFailure) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ResolutionProgress for NoProgress {
    fn on_batch_start(&self, _total_questions: usize) {}
    fn on_question_start(&self, _index: usize, _question: &Question) {}
    fn on_question_complete(&self, _index: usize, _outcome: &QuestionOutcome) {}
    fn on_batch_complete(&self) {}
}
