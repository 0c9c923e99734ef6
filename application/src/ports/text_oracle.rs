//! Text Oracle port
//!
//! Defines the interface for asking a language model for free text.

use async_trait::async_trait;
use quiz_domain::Model;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur during an oracle call
///
/// The resolution loop treats every variant except [`OracleError::Cancelled`]
/// the same way: no text is available for this attempt.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OracleError {
    #[error("Transport failure: {0}")]
    Transport(String),

    #[error("Non-success status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Timed out after {0}s")]
    Timeout(u64),

    #[error("Cancelled")]
    Cancelled,
}

impl OracleError {
    /// Check if this error represents a cancellation
    pub fn is_cancelled(&self) -> bool {
        matches!(self, OracleError::Cancelled)
    }
}

/// Parameters for a single oracle request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelParameters {
    /// Model identifier
    pub model: Model,
    /// Instruction/system framing, if any
    pub system_prompt: Option<String>,
    /// Maximum response length hint
    pub max_tokens: Option<u32>,
    /// Streaming flag; responses are always consumed whole
    pub stream: bool,
}

impl ModelParameters {
    pub fn new(model: Model) -> Self {
        Self {
            model,
            system_prompt: None,
            max_tokens: None,
            stream: false,
        }
    }

    pub fn with_system_prompt(mut self, system_prompt: impl Into<String>) -> Self {
        self.system_prompt = Some(system_prompt.into());
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: Option<u32>) -> Self {
        self.max_tokens = max_tokens;
        self
    }
}

/// Oracle for free-text model answers
///
/// This port defines how the application layer talks to a language model.
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait TextOracle: Send + Sync {
    /// Send a prompt and return the model's whole reply
    async fn ask(&self, prompt: &str, params: &ModelParameters) -> Result<String, OracleError>;
}
