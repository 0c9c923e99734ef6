//! Domain layer for quiz-quorum
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Matching
//!
//! A model answers in free text; [`matching`] maps that text back onto one of
//! the displayed options using case-insensitive edit-distance similarity.
//!
//! ## Verdicts
//!
//! Before an option is selected the model is asked to confirm it. [`verdict`]
//! turns the confirmation reply into accept/reject.
//!
//! ## Resolution
//!
//! Each question gets a bounded number of attempts, tracked by
//! [`resolution::AttemptState`] and ending in a [`resolution::QuestionOutcome`].

pub mod config;
pub mod core;
pub mod matching;
pub mod prompt;
pub mod resolution;
pub mod verdict;

// Re-export commonly used types
pub use config::{
    AcceptanceMode, ConfigIssue, ConfigIssueCode, ExtractionMode, OutputFormat, Severity,
};
pub use core::{
    error::DomainError,
    model::Model,
    question::{Question, UNKNOWN_QUESTION},
    string::preview,
};
pub use matching::{MatchResult, edit_distance, select_best, similarity};
pub use prompt::PromptTemplate;
pub use resolution::{
    AttemptFailure, AttemptRecord, AttemptState, QuestionOutcome, ResolutionState,
    UnresolvedReason,
};
pub use verdict::{
    DEFAULT_AFFIRMATIVE_MARKER, RejectReason, Verdict, decide_yes_no, decide_yes_no_response,
    signals_affirmative,
};
