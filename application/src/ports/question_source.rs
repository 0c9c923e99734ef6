//! Question Source port
//!
//! Defines where questions come from and how a chosen option is applied.
//! All page/markup handling stays behind this port.

use async_trait::async_trait;
use quiz_domain::Question;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while reading questions or selecting an option
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Question source unavailable: {0}")]
    Unavailable(String),

    #[error("Unknown question handle: {0}")]
    InvalidHandle(QuestionHandle),

    #[error("Option {option_index} out of range for question {handle}")]
    OptionOutOfRange {
        handle: QuestionHandle,
        option_index: usize,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(String),
}

/// Opaque handle identifying a question within its source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QuestionHandle(pub usize);

impl std::fmt::Display for QuestionHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A question together with the handle used to act on it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourcedQuestion {
    pub handle: QuestionHandle,
    pub question: Question,
}

impl SourcedQuestion {
    pub fn new(handle: QuestionHandle, question: Question) -> Self {
        Self { handle, question }
    }
}

/// Source of multiple-choice questions
#[async_trait]
pub trait QuestionSource: Send + Sync {
    /// List the currently available questions in display order
    async fn list_questions(&self) -> Result<Vec<SourcedQuestion>, SourceError>;

    /// Apply the side effect of choosing `option_index` for a question
    async fn select_option(
        &self,
        handle: QuestionHandle,
        option_index: usize,
    ) -> Result<(), SourceError>;
}
