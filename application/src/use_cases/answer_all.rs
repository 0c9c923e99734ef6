//! Answer All use case.
//!
//! Lists every question from a [`QuestionSource`], resolves them one at a
//! time in source order, and selects each accepted option exactly once.

use crate::ports::progress::ResolutionProgress;
use crate::ports::question_source::{QuestionHandle, QuestionSource, SourceError};
use crate::use_cases::resolve_question::{QuestionResolution, ResolveQuestionUseCase};
use chrono::{DateTime, Utc};
use quiz_domain::{AttemptRecord, Question, QuestionOutcome, UnresolvedReason, preview};
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

/// Errors that abort a batch run
#[derive(Error, Debug)]
pub enum AnswerAllError {
    #[error("Failed to list questions: {0}")]
    ListFailed(#[from] SourceError),
}

/// Per-question entry of a [`BatchReport`]
#[derive(Debug, Clone, Serialize)]
pub struct QuestionReport {
    pub handle: QuestionHandle,
    pub question: String,
    pub options: Vec<String>,
    pub outcome: QuestionOutcome,
    pub attempts: Vec<AttemptRecord>,
}

impl QuestionReport {
    fn new(handle: QuestionHandle, question: &Question, resolution: QuestionResolution) -> Self {
        Self {
            handle,
            question: question.text().to_string(),
            options: question.options().to_vec(),
            outcome: resolution.outcome,
            attempts: resolution.attempts,
        }
    }
}

/// Result of a batch run, in source order
#[derive(Debug, Clone, Serialize)]
pub struct BatchReport {
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub cancelled: bool,
    pub questions: Vec<QuestionReport>,
}

impl BatchReport {
    pub fn total(&self) -> usize {
        self.questions.len()
    }

    pub fn resolved_count(&self) -> usize {
        self.questions
            .iter()
            .filter(|q| q.outcome.is_resolved())
            .count()
    }

    pub fn unresolved_count(&self) -> usize {
        self.total() - self.resolved_count()
    }

    pub fn total_attempts(&self) -> usize {
        self.questions.iter().map(|q| q.outcome.attempts()).sum()
    }
}

/// Use case answering every question of a source
pub struct AnswerAllUseCase {
    source: Arc<dyn QuestionSource>,
    resolver: ResolveQuestionUseCase,
}

impl AnswerAllUseCase {
    pub fn new(source: Arc<dyn QuestionSource>, resolver: ResolveQuestionUseCase) -> Self {
        Self { source, resolver }
    }

    /// Resolve all questions sequentially.
    ///
    /// Only a failure to list the questions aborts the run. Per-question
    /// problems, including a failed selection, are recorded in the report.
    /// Once `cancellation` fires, the current and all remaining questions
    /// are reported as [`UnresolvedReason::Cancelled`] and nothing more is
    /// selected.
    pub async fn execute(
        &self,
        progress: &dyn ResolutionProgress,
        cancellation: &CancellationToken,
    ) -> Result<BatchReport, AnswerAllError> {
        let started_at = Utc::now();
        let questions = self.source.list_questions().await?;
        info!("Answering {} question(s)", questions.len());
        progress.on_batch_start(questions.len());

        let mut reports = Vec::with_capacity(questions.len());
        for (index, sourced) in questions.iter().enumerate() {
            let question = &sourced.question;
            progress.on_question_start(index, question);

            let resolution = if cancellation.is_cancelled() {
                QuestionResolution {
                    outcome: QuestionOutcome::unresolved(UnresolvedReason::Cancelled, 0),
                    attempts: Vec::new(),
                }
            } else {
                info!(
                    "Question {}/{} {}: {}",
                    index + 1,
                    questions.len(),
                    sourced.handle,
                    preview(question.text(), 80)
                );
                let resolution = self
                    .resolver
                    .resolve(question, progress, cancellation)
                    .await;
                self.apply(sourced.handle, resolution, cancellation).await
            };

            progress.on_question_complete(index, &resolution.outcome);
            reports.push(QuestionReport::new(sourced.handle, question, resolution));
        }

        progress.on_batch_complete();
        let report = BatchReport {
            started_at,
            finished_at: Utc::now(),
            cancelled: cancellation.is_cancelled(),
            questions: reports,
        };
        info!(
            "Batch finished: {}/{} resolved",
            report.resolved_count(),
            report.total()
        );
        Ok(report)
    }

    /// Select the accepted option, downgrading the outcome if that fails.
    async fn apply(
        &self,
        handle: QuestionHandle,
        mut resolution: QuestionResolution,
        cancellation: &CancellationToken,
    ) -> QuestionResolution {
        let QuestionOutcome::Resolved {
            option_index,
            attempts,
            ..
        } = resolution.outcome
        else {
            return resolution;
        };

        if cancellation.is_cancelled() {
            warn!("Cancelled before selecting option for {}", handle);
            resolution.outcome = QuestionOutcome::unresolved(UnresolvedReason::Cancelled, attempts);
            return resolution;
        }

        if let Err(e) = self.source.select_option(handle, option_index).await {
            error!("Failed to select option {} for {}: {}", option_index + 1, handle, e);
            resolution.outcome = QuestionOutcome::unresolved(
                UnresolvedReason::SelectionFailed(e.to_string()),
                attempts,
            );
        }
        resolution
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ResolverParams;
    use crate::ports::progress::NoProgress;
    use crate::ports::question_source::SourcedQuestion;
    use crate::ports::text_oracle::{ModelParameters, OracleError, TextOracle};
    use async_trait::async_trait;
    use quiz_domain::ExtractionMode;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct MemorySource {
        questions: Vec<SourcedQuestion>,
        fail_listing: bool,
        fail_selection: bool,
        selections: Mutex<Vec<(QuestionHandle, usize)>>,
    }

    impl MemorySource {
        fn new(questions: Vec<Question>) -> Self {
            Self {
                questions: questions
                    .into_iter()
                    .enumerate()
                    .map(|(i, q)| SourcedQuestion::new(QuestionHandle(i), q))
                    .collect(),
                fail_listing: false,
                fail_selection: false,
                selections: Mutex::new(Vec::new()),
            }
        }

        fn selections(&self) -> Vec<(QuestionHandle, usize)> {
            self.selections.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl QuestionSource for MemorySource {
        async fn list_questions(&self) -> Result<Vec<SourcedQuestion>, SourceError> {
            if self.fail_listing {
                return Err(SourceError::Unavailable("page not loaded".into()));
            }
            Ok(self.questions.clone())
        }

        async fn select_option(
            &self,
            handle: QuestionHandle,
            option_index: usize,
        ) -> Result<(), SourceError> {
            if self.fail_selection {
                return Err(SourceError::InvalidHandle(handle));
            }
            self.selections.lock().unwrap().push((handle, option_index));
            Ok(())
        }
    }

    /// Echoes the first option listed in the answer prompt and always says yes
    struct FirstOptionOracle {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl TextOracle for FirstOptionOracle {
        async fn ask(&self, prompt: &str, _params: &ModelParameters) -> Result<String, OracleError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if let Some(rest) = prompt.split("\n1. ").nth(1) {
                return Ok(rest.lines().next().unwrap_or_default().to_string());
            }
            Ok("yes".to_string())
        }
    }

    fn resolver() -> ResolveQuestionUseCase {
        ResolveQuestionUseCase::new(
            Arc::new(FirstOptionOracle {
                calls: AtomicUsize::new(0),
            }),
            ResolverParams::default().with_extraction(ExtractionMode::None),
        )
    }

    fn questions() -> Vec<Question> {
        vec![
            Question::new("Capital of France?", ["Paris", "Lyon"]),
            Question::new("Empty?", Vec::<String>::new()),
            Question::new("2 + 2?", ["4", "5"]),
        ]
    }

    #[tokio::test]
    async fn test_answers_in_source_order() {
        let source = Arc::new(MemorySource::new(questions()));
        let use_case = AnswerAllUseCase::new(source.clone(), resolver());

        let report = use_case
            .execute(&NoProgress, &CancellationToken::new())
            .await
            .unwrap();

        assert_eq!(report.total(), 3);
        assert_eq!(report.resolved_count(), 2);
        assert_eq!(report.unresolved_count(), 1);
        assert!(!report.cancelled);
        assert_eq!(
            report.questions[1].outcome,
            QuestionOutcome::unresolved(UnresolvedReason::NoOptions, 0)
        );
        assert_eq!(
            source.selections(),
            vec![(QuestionHandle(0), 0), (QuestionHandle(2), 0)]
        );
    }

    #[tokio::test]
    async fn test_listing_failure_aborts() {
        let mut source = MemorySource::new(questions());
        source.fail_listing = true;
        let use_case = AnswerAllUseCase::new(Arc::new(source), resolver());

        let result = use_case.execute(&NoProgress, &CancellationToken::new()).await;
        assert!(matches!(result, Err(AnswerAllError::ListFailed(_))));
    }

    #[tokio::test]
    async fn test_selection_failure_is_recorded() {
        let mut source = MemorySource::new(questions());
        source.fail_selection = true;
        let use_case = AnswerAllUseCase::new(Arc::new(source), resolver());

        let report = use_case
            .execute(&NoProgress, &CancellationToken::new())
            .await
            .unwrap();

        assert_eq!(report.resolved_count(), 0);
        assert!(matches!(
            &report.questions[0].outcome,
            QuestionOutcome::Unresolved {
                reason: UnresolvedReason::SelectionFailed(_),
                attempts: 1,
            }
        ));
    }

    #[tokio::test]
    async fn test_cancelled_batch_selects_nothing() {
        let source = Arc::new(MemorySource::new(questions()));
        let use_case = AnswerAllUseCase::new(source.clone(), resolver());
        let token = CancellationToken::new();
        token.cancel();

        let report = use_case.execute(&NoProgress, &token).await.unwrap();

        assert!(report.cancelled);
        assert_eq!(report.total(), 3);
        assert!(report.questions.iter().all(|q| matches!(
            q.outcome,
            QuestionOutcome::Unresolved {
                reason: UnresolvedReason::Cancelled,
                ..
            }
        )));
        assert!(source.selections().is_empty());
    }

    #[tokio::test]
    async fn test_report_serializes() {
        let source = Arc::new(MemorySource::new(questions()));
        let report = AnswerAllUseCase::new(source, resolver())
            .execute(&NoProgress, &CancellationToken::new())
            .await
            .unwrap();

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["questions"][0]["outcome"]["status"], "resolved");
        assert_eq!(json["questions"][0]["outcome"]["option"], "Paris");
        assert!(json["started_at"].is_string());
    }
}
