//! Answer acceptance policies
//!
//! A matched option is only selected after an acceptance policy confirms it.
//! Both policies sit behind [`AnswerAcceptancePolicy`] and are chosen by
//! [`AcceptanceMode`]:
//!
//! | Mode | Policy | Oracle call | Accepts when |
//! |------|--------|-------------|--------------|
//! | `verify` | [`VerifyThenAccept`] | yes/no about the selected option | reply is closer to "yes" |
//! | `validate` | [`ValidateThenAccept`] | correctness of the full answer | reply contains the marker |

mod validate;
mod verify;

pub use validate::ValidateThenAccept;
pub use verify::VerifyThenAccept;

use crate::config::ResolverParams;
use crate::ports::text_oracle::TextOracle;
use async_trait::async_trait;
use quiz_domain::{AcceptanceMode, Question, Verdict};
use std::sync::Arc;

/// What a policy needs to judge a candidate option
#[derive(Debug, Clone, Copy)]
pub struct AcceptanceContext<'a> {
    /// The question being answered
    pub question: &'a Question,
    /// Index of the matched option
    pub option_index: usize,
    /// Text of the matched option
    pub option: &'a str,
    /// Full answer text returned by the answer call
    pub answer_text: &'a str,
}

/// Strategy deciding whether a matched option may be selected
#[async_trait]
pub trait AnswerAcceptancePolicy: Send + Sync {
    /// The mode this policy implements
    fn mode(&self) -> AcceptanceMode;

    /// Judge the candidate; oracle failures yield a rejection
    async fn evaluate(&self, context: &AcceptanceContext<'_>, oracle: &dyn TextOracle) -> Verdict;
}

/// Build the policy selected by `params.acceptance`
pub fn from_params(params: &ResolverParams) -> Arc<dyn AnswerAcceptancePolicy> {
    match params.acceptance {
        AcceptanceMode::Verify => Arc::new(VerifyThenAccept::new(params.verification_parameters())),
        AcceptanceMode::Validate => Arc::new(ValidateThenAccept::new(
            params.validation_parameters(),
            params.affirmative_marker.clone(),
        )),
    }
}
