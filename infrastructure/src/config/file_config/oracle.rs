//! Oracle endpoint configuration from TOML (`[oracle]` section)

use crate::oracle::OracleSettings;
use quiz_domain::config::validation::{ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default chat relay endpoint
pub const DEFAULT_BASE_URL: &str = "https://llm-2-0.vercel.app/api/chat";

/// Raw oracle configuration from TOML
///
/// # Example
///
/// ```toml
/// [oracle]
/// base_url = "https://llm-2-0.vercel.app/api/chat"
/// credential_env = "QUIZ_ORACLE_PASSWORD"   # or: credential = "..."
/// timeout_secs = 60                         # 0 disables the timeout
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOracleConfig {
    /// Relay endpoint
    pub base_url: String,
    /// Password sent in the request envelope
    pub credential: Option<String>,
    /// Environment variable holding the password
    pub credential_env: Option<String>,
    /// Per-call timeout in seconds
    pub timeout_secs: u64,
}

impl Default for FileOracleConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            credential: None,
            credential_env: None,
            timeout_secs: 60,
        }
    }
}

impl FileOracleConfig {
    /// Credential from the config value, else from `credential_env`.
    pub fn resolve_credential(&self) -> Option<String> {
        if let Some(credential) = self.credential.as_ref().filter(|c| !c.is_empty()) {
            return Some(credential.clone());
        }
        self.credential_env
            .as_deref()
            .and_then(|name| std::env::var(name).ok())
            .filter(|c| !c.is_empty())
    }

    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs))
    }

    pub fn to_settings(&self) -> OracleSettings {
        OracleSettings::new(
            self.base_url.trim(),
            self.resolve_credential().unwrap_or_default(),
        )
        .with_request_timeout(self.timeout())
    }

    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        if self.base_url.trim().is_empty() {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::EmptyBaseUrl,
                "oracle.base_url: endpoint cannot be empty",
            ));
        }
        if self.resolve_credential().is_none() {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::MissingCredential,
                "oracle: no credential configured, requests will send an empty password",
            ));
        }
        issues
    }
}
