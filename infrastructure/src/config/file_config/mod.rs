//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod models;
mod oracle;
mod output;
mod resolver;

pub use models::FileModelsConfig;
pub use oracle::{DEFAULT_BASE_URL, FileOracleConfig};
pub use output::FileOutputConfig;
pub use resolver::FileResolverConfig;

use quiz_application::ResolverParams;
use quiz_domain::config::validation::ConfigIssue;
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Relay endpoint and credential
    pub oracle: FileOracleConfig,
    /// Role-based model selection
    pub models: FileModelsConfig,
    /// Resolution loop settings
    pub resolver: FileResolverConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// Checks empty model names, oracle endpoint and credential, unknown
    /// resolver modes, zero attempts, and a blank affirmative marker.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        issues.extend(self.models.parse_answer().1);
        issues.extend(self.models.parse_extraction().1);
        issues.extend(self.models.parse_verification().1);

        issues.extend(self.oracle.validate());
        issues.extend(self.resolver.validate());

        issues
    }

    /// Build resolver parameters; invalid values fall back to defaults.
    pub fn to_resolver_params(&self) -> ResolverParams {
        let mut params = ResolverParams::default()
            .with_max_attempts(self.resolver.max_attempts)
            .with_extraction(self.resolver.parse_extraction().0)
            .with_acceptance(self.resolver.parse_acceptance().0)
            .with_oracle_timeout(self.oracle.timeout())
            .with_answer_max_tokens(self.resolver.answer_max_tokens)
            .with_affirmative_marker(self.resolver.affirmative_marker.trim());

        if let Some(model) = self.models.parse_answer().0 {
            params = params.with_answer_model(model);
        }
        if let Some(model) = self.models.parse_extraction().0 {
            params = params.with_extraction_model(model);
        }
        if let Some(model) = self.models.parse_verification().0 {
            params = params.with_verification_model(model);
        }
        params
    }
}
