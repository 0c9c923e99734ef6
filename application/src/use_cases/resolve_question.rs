//! Resolve Question use case.
//!
//! Runs the bounded retry loop for a single question:
//!
//! 1. Ask the answer model with the question and its numbered options
//! 2. Derive the candidate text ([`ExtractionMode`])
//! 3. Match the candidate against the options ([`select_best`])
//! 4. Let the [`AnswerAcceptancePolicy`] confirm the match
//!
//! Any failure in steps 1-4 consumes the attempt. After `max_attempts`
//! failures the question ends [`UnresolvedReason::AttemptsExhausted`].
//! This use case never selects an option; the caller does that exactly once
//! for a resolved outcome.

use crate::config::ResolverParams;
use crate::policy::{self, AcceptanceContext, AnswerAcceptancePolicy};
use crate::ports::progress::ResolutionProgress;
use crate::ports::text_oracle::{OracleError, TextOracle};
use crate::use_cases::shared::GuardedOracle;
use quiz_domain::{
    AttemptFailure, AttemptRecord, AttemptState, ExtractionMode, MatchResult, PromptTemplate,
    Question, QuestionOutcome, UnresolvedReason, Verdict, preview, select_best,
};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Outcome of a question together with its attempt history
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionResolution {
    pub outcome: QuestionOutcome,
    pub attempts: Vec<AttemptRecord>,
}

impl QuestionResolution {
    fn unresolved(reason: UnresolvedReason, attempts: Vec<AttemptRecord>) -> Self {
        Self {
            outcome: QuestionOutcome::unresolved(reason, attempts.len()),
            attempts,
        }
    }

    pub fn is_resolved(&self) -> bool {
        self.outcome.is_resolved()
    }
}

/// Use case resolving one question to an accepted option
pub struct ResolveQuestionUseCase {
    oracle: Arc<dyn TextOracle>,
    policy: Arc<dyn AnswerAcceptancePolicy>,
    params: ResolverParams,
}

impl Clone for ResolveQuestionUseCase {
    fn clone(&self) -> Self {
        Self {
            oracle: self.oracle.clone(),
            policy: self.policy.clone(),
            params: self.params.clone(),
        }
    }
}

impl ResolveQuestionUseCase {
    /// Create with the policy selected by `params.acceptance`
    pub fn new(oracle: Arc<dyn TextOracle>, params: ResolverParams) -> Self {
        let policy = policy::from_params(&params);
        Self {
            oracle,
            policy,
            params,
        }
    }

    /// Replace the acceptance policy.
    pub fn with_policy(mut self, policy: Arc<dyn AnswerAcceptancePolicy>) -> Self {
        self.policy = policy;
        self
    }

    pub fn params(&self) -> &ResolverParams {
        &self.params
    }

    /// Resolve `question`, honouring the attempt bound and `cancellation`.
    pub async fn resolve(
        &self,
        question: &Question,
        progress: &dyn ResolutionProgress,
        cancellation: &CancellationToken,
    ) -> QuestionResolution {
        if let Err(e) = question.ensure_options() {
            warn!("{}, skipping: {}", e, preview(question.text(), 60));
            return QuestionResolution::unresolved(UnresolvedReason::NoOptions, Vec::new());
        }

        let oracle = GuardedOracle::new(
            self.oracle.clone(),
            self.params.oracle_timeout,
            cancellation.clone(),
        );
        let mut state = AttemptState::new(self.params.max_attempts);
        let mut history = Vec::new();

        while let Some(attempt) = state.begin_attempt() {
            if cancellation.is_cancelled() {
                info!("Resolution cancelled before attempt {}", attempt);
                return QuestionResolution::unresolved(UnresolvedReason::Cancelled, history);
            }

            progress.on_attempt_start(attempt, state.max_attempts());
            debug!("Attempt {}/{}", attempt, state.max_attempts());

            match self.run_attempt(attempt, question, &oracle, progress).await {
                Ok((record, matched)) => {
                    state.resolve();
                    history.push(record);
                    let option = question
                        .require_option(matched.option_index)
                        .unwrap_or_default()
                        .to_string();
                    info!(
                        "Accepted option {} ({}) on attempt {}",
                        matched.option_index + 1,
                        preview(&option, 40),
                        attempt
                    );
                    return QuestionResolution {
                        outcome: QuestionOutcome::Resolved {
                            option_index: matched.option_index,
                            option,
                            score: matched.score,
                            attempts: state.attempts_used(),
                        },
                        attempts: history,
                    };
                }
                Err(record) => {
                    if let Some(failure) = &record.failure {
                        progress.on_attempt_failed(attempt, failure);
                    }
                    history.push(record);
                    state.record_failure();

                    if cancellation.is_cancelled() {
                        info!("Resolution cancelled during attempt {}", attempt);
                        return QuestionResolution::unresolved(UnresolvedReason::Cancelled, history);
                    }
                }
            }
        }

        warn!(
            "No option accepted after {} attempt(s): {}",
            state.attempts_used(),
            preview(question.text(), 60)
        );
        QuestionResolution::unresolved(UnresolvedReason::AttemptsExhausted, history)
    }

    /// One ask→extract→match→accept cycle. `Err` carries the failed record.
    async fn run_attempt(
        &self,
        attempt: usize,
        question: &Question,
        oracle: &dyn TextOracle,
        progress: &dyn ResolutionProgress,
    ) -> Result<(AttemptRecord, MatchResult), AttemptRecord> {
        let record = AttemptRecord::new(attempt);

        let answer_text = match oracle
            .ask(
                &PromptTemplate::answer_query(question),
                &self.params.answer_parameters(),
            )
            .await
        {
            Ok(text) => text,
            Err(e) => {
                warn!("Answer call failed on attempt {}: {}", attempt, e);
                return Err(record.failed(AttemptFailure::OracleFailure {
                    error: e.to_string(),
                }));
            }
        };
        debug!("Answer text: {}", preview(&answer_text, 120));

        let candidate = match self.extract(&answer_text, oracle).await {
            Ok(candidate) => candidate,
            Err(e) => {
                warn!("Extraction call failed on attempt {}: {}", attempt, e);
                return Err(record.failed(AttemptFailure::ExtractionFailed {
                    error: e.to_string(),
                }));
            }
        };
        let record = record.with_candidate(candidate.clone());

        let Some(matched) = select_best(question.options(), &candidate) else {
            return Err(record.failed(AttemptFailure::NoMatch));
        };
        let record = record.with_match(matched);
        let option = match question.require_option(matched.option_index) {
            Ok(option) => option,
            Err(e) => {
                warn!("{}", e);
                return Err(record.failed(AttemptFailure::NoMatch));
            }
        };
        debug!(
            "Candidate {:?} matched option {} with score {:.3}",
            preview(&candidate, 40),
            matched.option_index + 1,
            matched.score
        );
        progress.on_option_matched(question, &matched);

        let context = AcceptanceContext {
            question,
            option_index: matched.option_index,
            option,
            answer_text: &answer_text,
        };
        match self.policy.evaluate(&context, oracle).await {
            Verdict::Accept => Ok((record, matched)),
            Verdict::Reject(reason) => {
                info!("Option {} rejected: {}", matched.option_index + 1, reason);
                Err(record.failed(AttemptFailure::Rejected { reason }))
            }
        }
    }

    async fn extract(&self, answer_text: &str, oracle: &dyn TextOracle) -> Result<String, OracleError> {
        match self.params.extraction {
            ExtractionMode::SeparateCall => {
                let short = oracle
                    .ask(
                        &PromptTemplate::extraction_prompt(answer_text),
                        &self.params.extraction_parameters(),
                    )
                    .await?;
                Ok(short.trim().to_string())
            }
            ExtractionMode::None => Ok(answer_text.trim().to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::progress::NoProgress;
    use crate::ports::text_oracle::ModelParameters;
    use async_trait::async_trait;
    use quiz_domain::{AcceptanceMode, RejectReason};
    use std::collections::VecDeque;
    use std::sync::Mutex;

    /// Replays scripted replies in call order and records every prompt
    struct ScriptedOracle {
        replies: Mutex<VecDeque<Result<String, OracleError>>>,
        prompts: Mutex<Vec<String>>,
    }

    impl ScriptedOracle {
        fn new(replies: Vec<Result<&str, OracleError>>) -> Arc<Self> {
            Arc::new(Self {
                replies: Mutex::new(
                    replies
                        .into_iter()
                        .map(|r| r.map(str::to_string))
                        .collect(),
                ),
                prompts: Mutex::new(Vec::new()),
            })
        }

        fn calls(&self) -> usize {
            self.prompts.lock().unwrap().len()
        }

        fn prompt(&self, index: usize) -> String {
            self.prompts.lock().unwrap()[index].clone()
        }
    }

    #[async_trait]
    impl TextOracle for ScriptedOracle {
        async fn ask(&self, prompt: &str, _params: &ModelParameters) -> Result<String, OracleError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            self.replies
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(OracleError::Transport("script exhausted".into())))
        }
    }

    fn question() -> Question {
        Question::new("Capital of France?", ["Paris", "London", "Berlin"])
    }

    fn use_case(oracle: Arc<ScriptedOracle>, params: ResolverParams) -> ResolveQuestionUseCase {
        ResolveQuestionUseCase::new(oracle, params)
    }

    #[tokio::test]
    async fn test_resolves_on_first_attempt() {
        let oracle = ScriptedOracle::new(vec![
            Ok("Paris is the capital of France."),
            Ok("Paris"),
            Ok("yes"),
        ]);
        let resolution = use_case(oracle.clone(), ResolverParams::default())
            .resolve(&question(), &NoProgress, &CancellationToken::new())
            .await;

        assert_eq!(
            resolution.outcome,
            QuestionOutcome::Resolved {
                option_index: 0,
                option: "Paris".to_string(),
                score: 1.0,
                attempts: 1,
            }
        );
        assert_eq!(oracle.calls(), 3);
        assert!(oracle.prompt(0).contains("1. Paris\n2. London\n3. Berlin"));
        assert!(oracle.prompt(1).ends_with("Paris is the capital of France."));
        assert!(oracle.prompt(2).starts_with("Is this answer correct: Paris"));
    }

    #[tokio::test]
    async fn test_retry_bound_is_respected() {
        let oracle = ScriptedOracle::new(vec![
            Ok("London"),
            Ok("London"),
            Ok("no"),
            Ok("Berlin"),
            Ok("Berlin"),
            Ok("no"),
        ]);
        let resolution = use_case(oracle.clone(), ResolverParams::default())
            .resolve(&question(), &NoProgress, &CancellationToken::new())
            .await;

        assert_eq!(
            resolution.outcome,
            QuestionOutcome::unresolved(UnresolvedReason::AttemptsExhausted, 2)
        );
        assert_eq!(resolution.attempts.len(), 2);
        assert_eq!(oracle.calls(), 6);
        assert_eq!(
            resolution.attempts[1].failure,
            Some(AttemptFailure::Rejected {
                reason: RejectReason::VerifierDisagreed
            })
        );
    }

    #[tokio::test]
    async fn test_failed_call_then_success() {
        let oracle = ScriptedOracle::new(vec![
            Err(OracleError::Status {
                status: 502,
                body: "bad gateway".into(),
            }),
            Ok("The answer is Berlin"),
            Ok("Berlin"),
            Ok("Yes."),
        ]);
        let resolution = use_case(oracle.clone(), ResolverParams::default())
            .resolve(&question(), &NoProgress, &CancellationToken::new())
            .await;

        assert_eq!(resolution.outcome.chosen_index(), Some(2));
        assert_eq!(resolution.outcome.attempts(), 2);
        assert!(matches!(
            resolution.attempts[0].failure,
            Some(AttemptFailure::OracleFailure { .. })
        ));
        assert!(resolution.attempts[1].is_accepted());
    }

    #[tokio::test]
    async fn test_extraction_failure_consumes_attempt() {
        let oracle = ScriptedOracle::new(vec![
            Ok("Paris"),
            Err(OracleError::Timeout(60)),
        ]);
        let params = ResolverParams::default().with_max_attempts(1);
        let resolution = use_case(oracle, params)
            .resolve(&question(), &NoProgress, &CancellationToken::new())
            .await;

        assert_eq!(
            resolution.outcome,
            QuestionOutcome::unresolved(UnresolvedReason::AttemptsExhausted, 1)
        );
        assert!(matches!(
            resolution.attempts[0].failure,
            Some(AttemptFailure::ExtractionFailed { .. })
        ));
    }

    #[tokio::test]
    async fn test_extraction_none_matches_full_answer() {
        let oracle = ScriptedOracle::new(vec![Ok("  Londn  "), Ok("yes")]);
        let params = ResolverParams::default().with_extraction(ExtractionMode::None);
        let resolution = use_case(oracle.clone(), params)
            .resolve(&question(), &NoProgress, &CancellationToken::new())
            .await;

        assert_eq!(resolution.outcome.chosen_index(), Some(1));
        assert_eq!(resolution.attempts[0].candidate.as_deref(), Some("Londn"));
        assert_eq!(oracle.calls(), 2);
    }

    #[tokio::test]
    async fn test_validate_mode_uses_marker() {
        let oracle = ScriptedOracle::new(vec![
            Ok("Paris, obviously."),
            Ok("Paris"),
            Ok("That is wrong."),
            Ok("Paris."),
            Ok("Paris"),
            Ok("YES"),
        ]);
        let params = ResolverParams::default().with_acceptance(AcceptanceMode::Validate);
        let resolution = use_case(oracle.clone(), params)
            .resolve(&question(), &NoProgress, &CancellationToken::new())
            .await;

        assert_eq!(resolution.outcome.chosen_index(), Some(0));
        assert_eq!(resolution.outcome.attempts(), 2);
        assert_eq!(
            resolution.attempts[0].failure,
            Some(AttemptFailure::Rejected {
                reason: RejectReason::MarkerMissing
            })
        );
        assert!(oracle.prompt(2).contains("Proposed answer:\nParis, obviously."));
    }

    #[tokio::test]
    async fn test_no_options_makes_no_calls() {
        let oracle = ScriptedOracle::new(vec![]);
        let empty = Question::new("Anything?", Vec::<String>::new());
        let resolution = use_case(oracle.clone(), ResolverParams::default())
            .resolve(&empty, &NoProgress, &CancellationToken::new())
            .await;

        assert_eq!(
            resolution.outcome,
            QuestionOutcome::unresolved(UnresolvedReason::NoOptions, 0)
        );
        assert_eq!(oracle.calls(), 0);
    }

    #[tokio::test]
    async fn test_cancelled_before_start() {
        let oracle = ScriptedOracle::new(vec![Ok("Paris")]);
        let token = CancellationToken::new();
        token.cancel();
        let resolution = use_case(oracle.clone(), ResolverParams::default())
            .resolve(&question(), &NoProgress, &token)
            .await;

        assert_eq!(
            resolution.outcome,
            QuestionOutcome::unresolved(UnresolvedReason::Cancelled, 0)
        );
        assert_eq!(oracle.calls(), 0);
    }

    #[tokio::test]
    async fn test_cancelled_mid_attempt_is_not_exhaustion() {
        /// Cancels the token on its first call, then reports the cancellation
        struct CancellingOracle {
            token: CancellationToken,
        }

        #[async_trait]
        impl TextOracle for CancellingOracle {
            async fn ask(&self, _prompt: &str, _params: &ModelParameters) -> Result<String, OracleError> {
                self.token.cancel();
                Err(OracleError::Cancelled)
            }
        }

        let token = CancellationToken::new();
        let oracle = Arc::new(CancellingOracle {
            token: token.clone(),
        });
        let params = ResolverParams::default().with_max_attempts(5);
        let resolution = ResolveQuestionUseCase::new(oracle, params)
            .resolve(&question(), &NoProgress, &token)
            .await;

        assert_eq!(
            resolution.outcome,
            QuestionOutcome::unresolved(UnresolvedReason::Cancelled, 1)
        );
    }
}
