//! Outcome types for question resolution.
//!
//! - [`AttemptFailure`] - Why a single attempt did not end in acceptance
//! - [`AttemptRecord`] - What happened during one attempt
//! - [`QuestionOutcome`] - Final result for a question

use crate::matching::MatchResult;
use crate::verdict::RejectReason;
use serde::{Deserialize, Serialize};

/// Why an attempt was consumed without acceptance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AttemptFailure {
    /// The answer call produced no text
    OracleFailure { error: String },
    /// The short-answer extraction call produced no text
    ExtractionFailed { error: String },
    /// No option could be matched (the question had no options)
    NoMatch,
    /// An option was matched but the acceptance policy refused it
    Rejected { reason: RejectReason },
}

impl std::fmt::Display for AttemptFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AttemptFailure::OracleFailure { error } => write!(f, "oracle failure: {}", error),
            AttemptFailure::ExtractionFailed { error } => {
                write!(f, "extraction failed: {}", error)
            }
            AttemptFailure::NoMatch => write!(f, "no matching option"),
            AttemptFailure::Rejected { reason } => write!(f, "rejected: {}", reason),
        }
    }
}

/// Record of a single ask→extract→match→accept cycle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttemptRecord {
    /// 1-based attempt number
    pub attempt: usize,
    /// Text fed to the selector (extracted answer or full answer)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub candidate: Option<String>,
    /// Best match for the candidate text, if matching ran
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched: Option<MatchResult>,
    /// Failure that consumed the attempt; `None` when it was accepted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure: Option<AttemptFailure>,
}

impl AttemptRecord {
    pub fn new(attempt: usize) -> Self {
        Self {
            attempt,
            candidate: None,
            matched: None,
            failure: None,
        }
    }

    pub fn with_candidate(mut self, candidate: impl Into<String>) -> Self {
        self.candidate = Some(candidate.into());
        self
    }

    pub fn with_match(mut self, matched: MatchResult) -> Self {
        self.matched = Some(matched);
        self
    }

    pub fn failed(mut self, failure: AttemptFailure) -> Self {
        self.failure = Some(failure);
        self
    }

    pub fn is_accepted(&self) -> bool {
        self.failure.is_none() && self.matched.is_some()
    }
}

/// Why a question ended without a selected option
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnresolvedReason {
    /// The question had no options to choose from
    NoOptions,
    /// Every allowed attempt was used without acceptance
    AttemptsExhausted,
    /// Processing was aborted before an option was accepted
    Cancelled,
    /// An option was accepted but the source could not select it
    SelectionFailed(String),
}

impl std::fmt::Display for UnresolvedReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UnresolvedReason::NoOptions => write!(f, "no options"),
            UnresolvedReason::AttemptsExhausted => write!(f, "attempts exhausted"),
            UnresolvedReason::Cancelled => write!(f, "cancelled"),
            UnresolvedReason::SelectionFailed(e) => write!(f, "selection failed: {}", e),
        }
    }
}

/// Final result for one question
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum QuestionOutcome {
    /// An option was accepted
    Resolved {
        option_index: usize,
        option: String,
        score: f64,
        attempts: usize,
    },
    /// No option was chosen and no side effect happened
    Unresolved {
        reason: UnresolvedReason,
        attempts: usize,
    },
}

impl QuestionOutcome {
    pub fn unresolved(reason: UnresolvedReason, attempts: usize) -> Self {
        QuestionOutcome::Unresolved { reason, attempts }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, QuestionOutcome::Resolved { .. })
    }

    /// Index of the chosen option, if any
    pub fn chosen_index(&self) -> Option<usize> {
        match self {
            QuestionOutcome::Resolved { option_index, .. } => Some(*option_index),
            QuestionOutcome::Unresolved { .. } => None,
        }
    }

    /// Number of attempts consumed
    pub fn attempts(&self) -> usize {
        match self {
            QuestionOutcome::Resolved { attempts, .. }
            | QuestionOutcome::Unresolved { attempts, .. } => *attempts,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attempt_record_builder() {
        let record = AttemptRecord::new(1)
            .with_candidate("Paris")
            .with_match(MatchResult {
                option_index: 0,
                score: 1.0,
            });
        assert!(record.is_accepted());

        let rejected = record.failed(AttemptFailure::Rejected {
            reason: RejectReason::VerifierDisagreed,
        });
        assert!(!rejected.is_accepted());
    }

    #[test]
    fn test_outcome_accessors() {
        let resolved = QuestionOutcome::Resolved {
            option_index: 2,
            option: "Berlin".to_string(),
            score: 0.8,
            attempts: 1,
        };
        assert!(resolved.is_resolved());
        assert_eq!(resolved.chosen_index(), Some(2));
        assert_eq!(resolved.attempts(), 1);

        let unresolved = QuestionOutcome::unresolved(UnresolvedReason::AttemptsExhausted, 2);
        assert!(!unresolved.is_resolved());
        assert_eq!(unresolved.chosen_index(), None);
        assert_eq!(unresolved.attempts(), 2);
    }

    #[test]
    fn test_outcome_serializes_with_status_tag() {
        let outcome = QuestionOutcome::unresolved(UnresolvedReason::NoOptions, 0);
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["status"], "unresolved");
        assert_eq!(json["reason"], "no_options");
    }
}
