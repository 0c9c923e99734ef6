//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Question has no options to match against")]
    NoOptions,

    #[error("Option index {index} out of range (question has {len} options)")]
    OptionOutOfRange { index: usize, len: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_display() {
        let error = DomainError::OptionOutOfRange { index: 4, len: 3 };
        assert_eq!(
            error.to_string(),
            "Option index 4 out of range (question has 3 options)"
        );
    }
}
