//! Verify-then-accept: a separate yes/no question about the selected option.

use super::{AcceptanceContext, AnswerAcceptancePolicy};
use crate::ports::text_oracle::{ModelParameters, TextOracle};
use async_trait::async_trait;
use quiz_domain::{
    AcceptanceMode, PromptTemplate, RejectReason, Verdict, decide_yes_no_response, preview,
};
use tracing::{debug, warn};

/// Accepts an option when the verifier's reply is closer to "yes" than "no"
pub struct VerifyThenAccept {
    params: ModelParameters,
}

impl VerifyThenAccept {
    pub fn new(params: ModelParameters) -> Self {
        Self { params }
    }
}

#[async_trait]
impl AnswerAcceptancePolicy for VerifyThenAccept {
    fn mode(&self) -> AcceptanceMode {
        AcceptanceMode::Verify
    }

    async fn evaluate(&self, context: &AcceptanceContext<'_>, oracle: &dyn TextOracle) -> Verdict {
        let prompt = PromptTemplate::verify_prompt(context.question, context.option);

        match oracle.ask(&prompt, &self.params).await {
            Ok(reply) => {
                debug!("Verification reply: {}", preview(&reply, 80));
                Verdict::from_decision(
                    decide_yes_no_response(Some(&reply)),
                    RejectReason::VerifierDisagreed,
                )
            }
            Err(e) => {
                warn!("Failed to verify answer: {}", e);
                Verdict::from_decision(
                    decide_yes_no_response(None),
                    RejectReason::OracleUnavailable(e.to_string()),
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::text_oracle::OracleError;
    use quiz_domain::{Model, Question};
    use std::sync::Mutex;

    struct FixedOracle {
        reply: Result<String, OracleError>,
        prompts: Mutex<Vec<String>>,
    }

    impl FixedOracle {
        fn new(reply: Result<&str, OracleError>) -> Self {
            Self {
                reply: reply.map(str::to_string),
                prompts: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl TextOracle for FixedOracle {
        async fn ask(&self, prompt: &str, _params: &ModelParameters) -> Result<String, OracleError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            self.reply.clone()
        }
    }

    async fn evaluate_with(oracle: &FixedOracle) -> Verdict {
        let question = Question::new("Capital of France?", ["Paris", "London"]);
        let context = AcceptanceContext {
            question: &question,
            option_index: 0,
            option: "Paris",
            answer_text: "Paris is the capital.",
        };
        let policy = VerifyThenAccept::new(ModelParameters::new(Model::default_verification()));
        policy.evaluate(&context, oracle).await
    }

    #[tokio::test]
    async fn test_yes_accepts() {
        let oracle = FixedOracle::new(Ok("Yes"));
        assert_eq!(evaluate_with(&oracle).await, Verdict::Accept);

        let prompts = oracle.prompts.lock().unwrap();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains("Is this answer correct: Paris"));
    }

    #[tokio::test]
    async fn test_no_rejects() {
        let oracle = FixedOracle::new(Ok("no"));
        assert_eq!(
            evaluate_with(&oracle).await,
            Verdict::Reject(RejectReason::VerifierDisagreed)
        );
    }

    #[tokio::test]
    async fn test_oracle_failure_rejects() {
        let oracle = FixedOracle::new(Err(OracleError::Transport("connection reset".into())));
        match evaluate_with(&oracle).await {
            Verdict::Reject(RejectReason::OracleUnavailable(msg)) => {
                assert!(msg.contains("connection reset"))
            }
            other => panic!("Expected OracleUnavailable rejection, got {:?}", other),
        }
    }
}
