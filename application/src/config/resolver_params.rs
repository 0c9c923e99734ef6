//! Resolver parameters: resolution loop control.
//!
//! [`ResolverParams`] groups the static parameters that control the
//! per-question loop in [`ResolveQuestionUseCase`](crate::use_cases::resolve_question::ResolveQuestionUseCase).
//! These are application-layer concerns, not domain policy.

use crate::ports::text_oracle::ModelParameters;
use quiz_domain::{
    AcceptanceMode, DEFAULT_AFFIRMATIVE_MARKER, ExtractionMode, Model, PromptTemplate,
};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Resolution loop control parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolverParams {
    /// Maximum ask→extract→match→accept cycles per question.
    pub max_attempts: usize,
    /// Which text is fed to the best-match selector.
    pub extraction: ExtractionMode,
    /// How a matched option is confirmed.
    pub acceptance: AcceptanceMode,
    /// Timeout applied to every oracle call (`None` = wait indefinitely).
    pub oracle_timeout: Option<Duration>,
    /// Model answering the question.
    pub answer_model: Model,
    /// Model distilling the short answer.
    pub extraction_model: Model,
    /// Model verifying or validating the chosen option.
    pub verification_model: Model,
    /// Maximum response length hint for the answer call.
    pub answer_max_tokens: Option<u32>,
    /// Substring that marks a validation reply as "correct".
    pub affirmative_marker: String,
}

impl Default for ResolverParams {
    fn default() -> Self {
        Self {
            max_attempts: 2,
            extraction: ExtractionMode::default(),
            acceptance: AcceptanceMode::default(),
            oracle_timeout: Some(Duration::from_secs(60)),
            answer_model: Model::default_answer(),
            extraction_model: Model::default_extraction(),
            verification_model: Model::default_verification(),
            answer_max_tokens: None,
            affirmative_marker: DEFAULT_AFFIRMATIVE_MARKER.to_string(),
        }
    }
}

impl ResolverParams {
    // ==================== Builder Methods ====================

    pub fn with_max_attempts(mut self, max: usize) -> Self {
        self.max_attempts = max;
        self
    }

    pub fn with_extraction(mut self, mode: ExtractionMode) -> Self {
        self.extraction = mode;
        self
    }

    pub fn with_acceptance(mut self, mode: AcceptanceMode) -> Self {
        self.acceptance = mode;
        self
    }

    pub fn with_oracle_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.oracle_timeout = timeout;
        self
    }

    pub fn with_answer_model(mut self, model: Model) -> Self {
        self.answer_model = model;
        self
    }

    pub fn with_extraction_model(mut self, model: Model) -> Self {
        self.extraction_model = model;
        self
    }

    pub fn with_verification_model(mut self, model: Model) -> Self {
        self.verification_model = model;
        self
    }

    pub fn with_answer_max_tokens(mut self, max_tokens: Option<u32>) -> Self {
        self.answer_max_tokens = max_tokens;
        self
    }

    pub fn with_affirmative_marker(mut self, marker: impl Into<String>) -> Self {
        self.affirmative_marker = marker.into();
        self
    }

    // ==================== Request Parameters ====================

    /// Parameters for the answer call
    pub fn answer_parameters(&self) -> ModelParameters {
        ModelParameters::new(self.answer_model.clone())
            .with_system_prompt(PromptTemplate::answer_system())
            .with_max_tokens(self.answer_max_tokens)
    }

    /// Parameters for the short-answer extraction call
    pub fn extraction_parameters(&self) -> ModelParameters {
        ModelParameters::new(self.extraction_model.clone())
    }

    /// Parameters for the yes/no verification call
    pub fn verification_parameters(&self) -> ModelParameters {
        ModelParameters::new(self.verification_model.clone())
            .with_system_prompt(PromptTemplate::verify_system())
    }

    /// Parameters for the correctness classification call
    pub fn validation_parameters(&self) -> ModelParameters {
        ModelParameters::new(self.verification_model.clone())
            .with_system_prompt(PromptTemplate::validate_system(&self.affirmative_marker))
    }
}
