//! Accept/reject outcome of an acceptance check.

use serde::{Deserialize, Serialize};

/// Why a selected option was not accepted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectReason {
    /// The verifier answered "no"
    VerifierDisagreed,
    /// The validation reply did not contain the affirmative marker
    MarkerMissing,
    /// The verification/validation call itself failed
    OracleUnavailable(String),
}

impl std::fmt::Display for RejectReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RejectReason::VerifierDisagreed => write!(f, "verifier said no"),
            RejectReason::MarkerMissing => write!(f, "validation did not confirm"),
            RejectReason::OracleUnavailable(e) => write!(f, "verification unavailable: {}", e),
        }
    }
}

/// Result of evaluating a candidate option
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    /// The option may be selected
    Accept,
    /// The option must not be selected; the attempt is retried
    Reject(RejectReason),
}

impl Verdict {
    /// Check if the verdict is an acceptance
    pub fn is_accepted(&self) -> bool {
        matches!(self, Verdict::Accept)
    }

    /// Build a verdict from a boolean decision
    pub fn from_decision(accepted: bool, reason: RejectReason) -> Self {
        if accepted {
            Verdict::Accept
        } else {
            Verdict::Reject(reason)
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::Accept => write!(f, "Accepted"),
            Verdict::Reject(reason) => write!(f, "Rejected ({})", reason),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_decision() {
        assert!(Verdict::from_decision(true, RejectReason::VerifierDisagreed).is_accepted());
        assert_eq!(
            Verdict::from_decision(false, RejectReason::MarkerMissing),
            Verdict::Reject(RejectReason::MarkerMissing)
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Verdict::Accept.to_string(), "Accepted");
        assert_eq!(
            Verdict::Reject(RejectReason::OracleUnavailable("timeout".into())).to_string(),
            "Rejected (verification unavailable: timeout)"
        );
    }
}
