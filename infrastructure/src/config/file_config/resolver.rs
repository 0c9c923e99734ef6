//! Resolution loop configuration from TOML (`[resolver]` section)

use quiz_domain::config::validation::{ConfigIssue, ConfigIssueCode};
use quiz_domain::{AcceptanceMode, DEFAULT_AFFIRMATIVE_MARKER, ExtractionMode};
use serde::{Deserialize, Serialize};

/// Raw resolver configuration from TOML
///
/// # Example
///
/// ```toml
/// [resolver]
/// max_attempts = 2
/// extraction = "separate-call"   # "separate-call" or "none"
/// acceptance = "verify"          # "verify" or "validate"
/// affirmative_marker = "yes"     # used by "validate"
/// answer_max_tokens = 1024
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileResolverConfig {
    /// Attempts per question before giving up
    pub max_attempts: usize,
    /// Extraction mode: "separate-call" or "none"
    pub extraction: String,
    /// Acceptance strategy: "verify" or "validate"
    pub acceptance: String,
    /// Substring marking a correct answer in validate mode
    pub affirmative_marker: String,
    /// Length hint for the answer call
    pub answer_max_tokens: Option<u32>,
}

impl Default for FileResolverConfig {
    fn default() -> Self {
        Self {
            max_attempts: 2,
            extraction: ExtractionMode::default().as_str().to_string(),
            acceptance: AcceptanceMode::default().as_str().to_string(),
            affirmative_marker: DEFAULT_AFFIRMATIVE_MARKER.to_string(),
            answer_max_tokens: None,
        }
    }
}

fn invalid_enum(field: &str, value: &str, valid: &[&str], fallback: &str) -> ConfigIssue {
    ConfigIssue::warning(
        ConfigIssueCode::InvalidEnumValue {
            field: field.to_string(),
            value: value.to_string(),
            valid_values: valid.iter().map(|v| v.to_string()).collect(),
        },
        format!(
            "{}: unknown value '{}', falling back to '{}'",
            field, value, fallback
        ),
    )
}

impl FileResolverConfig {
    /// Parse extraction string into ExtractionMode, returning warnings on failure.
    pub fn parse_extraction(&self) -> (ExtractionMode, Vec<ConfigIssue>) {
        match self.extraction.parse::<ExtractionMode>() {
            Ok(mode) => (mode, vec![]),
            Err(_) => {
                let fallback = ExtractionMode::default();
                let issue = invalid_enum(
                    "resolver.extraction",
                    &self.extraction,
                    ExtractionMode::valid_values(),
                    fallback.as_str(),
                );
                (fallback, vec![issue])
            }
        }
    }

    /// Parse acceptance string into AcceptanceMode, returning warnings on failure.
    pub fn parse_acceptance(&self) -> (AcceptanceMode, Vec<ConfigIssue>) {
        match self.acceptance.parse::<AcceptanceMode>() {
            Ok(mode) => (mode, vec![]),
            Err(_) => {
                let fallback = AcceptanceMode::default();
                let issue = invalid_enum(
                    "resolver.acceptance",
                    &self.acceptance,
                    AcceptanceMode::valid_values(),
                    fallback.as_str(),
                );
                (fallback, vec![issue])
            }
        }
    }

    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        issues.extend(self.parse_extraction().1);
        let (acceptance, acceptance_issues) = self.parse_acceptance();
        issues.extend(acceptance_issues);

        if self.max_attempts == 0 {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::ZeroAttempts,
                "resolver.max_attempts: must be at least 1",
            ));
        }
        if acceptance == AcceptanceMode::Validate && self.affirmative_marker.trim().is_empty() {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::BlankAffirmativeMarker,
                "resolver.affirmative_marker: cannot be blank with acceptance = \"validate\"",
            ));
        }
        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_parse_cleanly() {
        let config = FileResolverConfig::default();
        assert_eq!(config.max_attempts, 2);
        assert_eq!(config.parse_extraction().0, ExtractionMode::SeparateCall);
        assert_eq!(config.parse_acceptance().0, AcceptanceMode::Verify);
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_deserialize_resolver_section() {
        let toml_str = r#"
[resolver]
max_attempts = 4
extraction = "none"
acceptance = "validate"
affirmative_marker = "correct"
"#;
        let config: super::super::FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.resolver.max_attempts, 4);
        assert_eq!(config.resolver.parse_extraction().0, ExtractionMode::None);
        assert_eq!(config.resolver.parse_acceptance().0, AcceptanceMode::Validate);
        assert_eq!(config.resolver.affirmative_marker, "correct");
    }

    #[test]
    fn test_unknown_mode_falls_back_with_warning() {
        let config = FileResolverConfig {
            acceptance: "vote".to_string(),
            ..Default::default()
        };
        let (mode, issues) = config.parse_acceptance();
        assert_eq!(mode, AcceptanceMode::Verify);
        assert_eq!(issues.len(), 1);
        assert!(!issues[0].is_error());
        assert!(issues[0].message.contains("'vote'"));
    }

    #[test]
    fn test_zero_attempts_is_error() {
        let config = FileResolverConfig {
            max_attempts: 0,
            ..Default::default()
        };
        assert!(config
            .validate()
            .iter()
            .any(|i| i.is_error() && i.code == ConfigIssueCode::ZeroAttempts));
    }

    #[test]
    fn test_blank_marker_only_matters_for_validate() {
        let verify = FileResolverConfig {
            affirmative_marker: " ".to_string(),
            ..Default::default()
        };
        assert!(verify.validate().is_empty());

        let validate = FileResolverConfig {
            acceptance: "validate".to_string(),
            ..verify
        };
        assert!(validate
            .validate()
            .iter()
            .any(|i| i.code == ConfigIssueCode::BlankAffirmativeMarker));
    }
}
