//! Validate-then-accept: classify the full answer and look for a marker.

use super::{AcceptanceContext, AnswerAcceptancePolicy};
use crate::ports::text_oracle::{ModelParameters, TextOracle};
use async_trait::async_trait;
use quiz_domain::{AcceptanceMode, PromptTemplate, RejectReason, Verdict, preview, signals_affirmative};
use tracing::{debug, warn};

/// Accepts an option when the classification reply contains the marker
///
/// No similarity vote is taken on the reply; a plain case-insensitive
/// substring check decides.
pub struct ValidateThenAccept {
    params: ModelParameters,
    marker: String,
}

impl ValidateThenAccept {
    pub fn new(params: ModelParameters, marker: impl Into<String>) -> Self {
        Self {
            params,
            marker: marker.into(),
        }
    }

    pub fn marker(&self) -> &str {
        &self.marker
    }
}

#[async_trait]
impl AnswerAcceptancePolicy for ValidateThenAccept {
    fn mode(&self) -> AcceptanceMode {
        AcceptanceMode::Validate
    }

    async fn evaluate(&self, context: &AcceptanceContext<'_>, oracle: &dyn TextOracle) -> Verdict {
        let prompt =
            PromptTemplate::validate_prompt(context.question, context.answer_text, &self.marker);

        match oracle.ask(&prompt, &self.params).await {
            Ok(reply) => {
                debug!("Validation reply: {}", preview(&reply, 80));
                Verdict::from_decision(
                    signals_affirmative(&reply, &self.marker),
                    RejectReason::MarkerMissing,
                )
            }
            Err(e) => {
                warn!("Failed to validate answer: {}", e);
                Verdict::Reject(RejectReason::OracleUnavailable(e.to_string()))
            }
        }
    }
}
