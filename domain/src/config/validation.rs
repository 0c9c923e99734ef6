//! Configuration issues reported by config validation.
//!
//! Loaders collect every problem they find instead of stopping at the first,
//! so the binary can print them all and abort only on [`Severity::Error`].

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fatal: the configuration cannot work at all.
    Error,
    /// Non-fatal: the configuration works but may not behave as expected.
    Warning,
}

/// Identifies a specific configuration issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigIssueCode {
    /// A model field is present but blank.
    EmptyModelName { field: String },
    /// A string field does not name a known variant.
    InvalidEnumValue {
        field: String,
        value: String,
        valid_values: Vec<String>,
    },
    /// `max_attempts` is zero, so no question can ever resolve.
    ZeroAttempts,
    /// The oracle endpoint is blank.
    EmptyBaseUrl,
    /// No credential is configured for the oracle.
    MissingCredential,
    /// The affirmative marker is blank while validate acceptance is selected.
    BlankAffirmativeMarker,
}

/// A detected issue in the configuration.
#[derive(Debug, Clone)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub code: ConfigIssueCode,
    pub message: String,
}

impl ConfigIssue {
    pub fn error(code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            code,
            message: message.into(),
        }
    }

    pub fn warning(code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            code,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_set_severity() {
        let err = ConfigIssue::error(ConfigIssueCode::ZeroAttempts, "no attempts");
        assert!(err.is_error());

        let warn = ConfigIssue::warning(ConfigIssueCode::MissingCredential, "no credential");
        assert!(!warn.is_error());
        assert_eq!(warn.message, "no credential");
    }
}
