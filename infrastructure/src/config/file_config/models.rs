//! Role-based model configuration from TOML (`[models]` section)

use quiz_domain::Model;
use quiz_domain::config::validation::{ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};

/// Role-based model configuration from TOML
///
/// # Example
///
/// ```toml
/// [models]
/// answer = "Meta-Llama-3.1-70B-Instruct"        # Descriptive answer
/// extraction = "Meta-Llama-3.2-3B-Instruct"     # Short answer distillation
/// verification = "Meta-Llama-3.1-70B-Instruct"  # yes/no check or validation
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileModelsConfig {
    /// Model answering the question
    pub answer: Option<String>,
    /// Model extracting the short answer
    pub extraction: Option<String>,
    /// Model judging the matched option
    pub verification: Option<String>,
}

impl FileModelsConfig {
    /// Parse a single model string, collecting issues for empty names.
    fn parse_single_model(field: &str, value: Option<&String>) -> (Option<Model>, Vec<ConfigIssue>) {
        match value {
            None => (None, vec![]),
            Some(s) if s.trim().is_empty() => {
                let issue = ConfigIssue::error(
                    ConfigIssueCode::EmptyModelName {
                        field: field.to_string(),
                    },
                    format!("models.{}: model name cannot be empty", field),
                );
                (None, vec![issue])
            }
            // Unknown names become Model::Custom
            Some(s) => (Some(Model::from(s.trim())), vec![]),
        }
    }

    pub fn parse_answer(&self) -> (Option<Model>, Vec<ConfigIssue>) {
        Self::parse_single_model("answer", self.answer.as_ref())
    }

    pub fn parse_extraction(&self) -> (Option<Model>, Vec<ConfigIssue>) {
        Self::parse_single_model("extraction", self.extraction.as_ref())
    }

    pub fn parse_verification(&self) -> (Option<Model>, Vec<ConfigIssue>) {
        Self::parse_single_model("verification", self.verification.as_ref())
    }
}
