//! Application layer for quiz-quorum
//!
//! This crate contains use cases, acceptance policies, port definitions,
//! and resolver configuration. It depends only on the domain layer.

pub mod config;
pub mod policy;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::ResolverParams;
pub use policy::{AcceptanceContext, AnswerAcceptancePolicy, ValidateThenAccept, VerifyThenAccept};
pub use ports::{
    progress::{NoProgress, ResolutionProgress},
    question_source::{QuestionHandle, QuestionSource, SourceError, SourcedQuestion},
    text_oracle::{ModelParameters, OracleError, TextOracle},
};
pub use use_cases::answer_all::{AnswerAllError, AnswerAllUseCase, BatchReport, QuestionReport};
pub use use_cases::resolve_question::{QuestionResolution, ResolveQuestionUseCase};
