//! Question value object

use super::error::DomainError;
use serde::{Deserialize, Serialize};

/// Heading used when a question's text could not be read from its source
pub const UNKNOWN_QUESTION: &str = "Unknown Question";

/// A multiple-choice question to be answered (Value Object)
///
/// Options are kept in display order; the position of an option is the
/// index handed back to the question source when it is selected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    text: String,
    options: Vec<String>,
}

impl Question {
    /// Create a new question from already-clean text and options
    pub fn new<I, S>(text: impl Into<String>, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            text: text.into(),
            options: options.into_iter().map(Into::into).collect(),
        }
    }

    /// Build a question from raw scraped strings.
    ///
    /// Every string is trimmed, blank options are dropped, and a missing or
    /// blank heading becomes [`UNKNOWN_QUESTION`].
    pub fn from_raw<I, S>(text: Option<&str>, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let text = text
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .unwrap_or(UNKNOWN_QUESTION);

        let options = options
            .into_iter()
            .map(|o| o.as_ref().trim().to_string())
            .filter(|o| !o.is_empty())
            .collect::<Vec<_>>();

        Self {
            text: text.to_string(),
            options,
        }
    }

    /// Get the question text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the options in display order
    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// Get a single option by index
    pub fn option(&self, index: usize) -> Option<&str> {
        self.options.get(index).map(String::as_str)
    }

    /// Get a single option by index, failing when it does not exist
    pub fn require_option(&self, index: usize) -> Result<&str, DomainError> {
        self.option(index).ok_or(DomainError::OptionOutOfRange {
            index,
            len: self.options.len(),
        })
    }

    /// Check whether there is anything to match against
    pub fn has_options(&self) -> bool {
        !self.options.is_empty()
    }

    /// Fail with [`DomainError::NoOptions`] when there is nothing to match
    pub fn ensure_options(&self) -> Result<(), DomainError> {
        if self.has_options() {
            Ok(())
        } else {
            Err(DomainError::NoOptions)
        }
    }
}

impl std::fmt::Display for Question {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_creation() {
        let q = Question::new("Capital of France?", ["Paris", "London"]);
        assert_eq!(q.text(), "Capital of France?");
        assert_eq!(q.options(), ["Paris", "London"]);
        assert_eq!(q.option(1), Some("London"));
        assert_eq!(q.option(2), None);
        assert!(q.has_options());
    }

    #[test]
    fn test_from_raw_trims_and_drops_blank_options() {
        let q = Question::from_raw(Some("  2 + 2 = ?  "), ["  4 ", "", "   ", "5"]);
        assert_eq!(q.text(), "2 + 2 = ?");
        assert_eq!(q.options(), ["4", "5"]);
    }

    #[test]
    fn test_from_raw_missing_heading() {
        let q = Question::from_raw(None, ["a"]);
        assert_eq!(q.text(), UNKNOWN_QUESTION);

        let q = Question::from_raw(Some("   "), ["a"]);
        assert_eq!(q.text(), UNKNOWN_QUESTION);
    }

    #[test]
    fn test_no_options() {
        let q = Question::from_raw(Some("Anything?"), Vec::<String>::new());
        assert!(!q.has_options());
        assert_eq!(q.ensure_options(), Err(DomainError::NoOptions));
    }

    #[test]
    fn test_require_option() {
        let q = Question::new("Pick one", ["a", "b"]);
        assert_eq!(q.require_option(1), Ok("b"));
        assert_eq!(
            q.require_option(2),
            Err(DomainError::OptionOutOfRange { index: 2, len: 2 })
        );
    }
}
