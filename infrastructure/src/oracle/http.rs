//! HTTP text oracle backed by the chat relay endpoint

use super::protocol::{RelayReply, RelayRequest};
use async_trait::async_trait;
use quiz_application::ports::text_oracle::{ModelParameters, OracleError, TextOracle};
use std::time::Duration;
use tracing::{debug, warn};

/// Longest error body kept in [`OracleError::Status`]
const MAX_ERROR_BODY: usize = 512;

/// Connection settings for [`HttpTextOracle`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OracleSettings {
    /// Relay endpoint receiving the POST
    pub base_url: String,
    /// Password placed in the request envelope
    pub credential: String,
    /// Whole-request timeout applied by the HTTP client
    pub request_timeout: Option<Duration>,
}

impl OracleSettings {
    pub fn new(base_url: impl Into<String>, credential: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            credential: credential.into(),
            request_timeout: None,
        }
    }

    pub fn with_request_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.request_timeout = timeout;
        self
    }
}

/// [`TextOracle`] that POSTs each prompt to the relay endpoint
pub struct HttpTextOracle {
    client: reqwest::Client,
    settings: OracleSettings,
}

impl HttpTextOracle {
    pub fn new(settings: OracleSettings) -> Result<Self, OracleError> {
        let mut builder = reqwest::Client::builder().user_agent(concat!(
            "quiz-quorum/",
            env!("CARGO_PKG_VERSION")
        ));
        if let Some(timeout) = settings.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| OracleError::Transport(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client, settings })
    }

    pub fn settings(&self) -> &OracleSettings {
        &self.settings
    }
}

#[async_trait]
impl TextOracle for HttpTextOracle {
    async fn ask(&self, prompt: &str, params: &ModelParameters) -> Result<String, OracleError> {
        let request = RelayRequest::new(prompt, params, &self.settings.credential);

        let response = self
            .client
            .post(&self.settings.base_url)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    OracleError::Timeout(self.settings.request_timeout.map_or(0, |t| t.as_secs()))
                } else {
                    OracleError::Transport(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("Oracle returned HTTP {} for {}", status.as_u16(), params.model);
            return Err(OracleError::Status {
                status: status.as_u16(),
                body: body.chars().take(MAX_ERROR_BODY).collect(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| OracleError::Transport(e.to_string()))?;
        let reply: RelayReply = serde_json::from_str(&body)
            .map_err(|e| OracleError::MalformedResponse(e.to_string()))?;

        debug!("Oracle reply from {} ({} chars)", params.model, reply.message.len());
        Ok(reply.message)
    }
}
