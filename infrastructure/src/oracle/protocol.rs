//! Wire types for the chat relay endpoint.
//!
//! The relay wraps a chat-completion style body in an envelope carrying the
//! access password, and replies with a single `message` string:
//!
//! ```json
//! { "request_body": { "model": "...", "messages": [...], "stream": false },
//!   "password": "..." }
//! ```
//!
//! ```json
//! { "message": "..." }
//! ```

use quiz_application::ports::text_oracle::ModelParameters;
use serde::{Deserialize, Serialize};

/// Envelope POSTed to the relay
#[derive(Debug, Clone, Serialize)]
pub struct RelayRequest<'a> {
    pub request_body: ChatRequestBody<'a>,
    pub password: &'a str,
}

/// Chat-completion request body
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequestBody<'a> {
    pub model: &'a str,
    pub messages: Vec<ChatMessage<'a>>,
    pub stream: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

/// A single chat message
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatMessage<'a> {
    pub role: &'static str,
    pub content: &'a str,
}

impl<'a> RelayRequest<'a> {
    /// Build the envelope: optional system message, then the user prompt.
    pub fn new(prompt: &'a str, params: &'a ModelParameters, password: &'a str) -> Self {
        let mut messages = Vec::with_capacity(2);
        if let Some(system) = params.system_prompt.as_deref() {
            messages.push(ChatMessage {
                role: "system",
                content: system,
            });
        }
        messages.push(ChatMessage {
            role: "user",
            content: prompt,
        });

        Self {
            request_body: ChatRequestBody {
                model: params.model.as_str(),
                messages,
                stream: params.stream,
                max_tokens: params.max_tokens,
            },
            password,
        }
    }
}

/// Successful relay reply
#[derive(Debug, Clone, Deserialize)]
pub struct RelayReply {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_domain::Model;
    use serde_json::json;

    #[test]
    fn test_envelope_with_system_prompt() {
        let params = ModelParameters::new(Model::Llama31_70bInstruct)
            .with_system_prompt("Only yes or no.")
            .with_max_tokens(Some(256));
        let request = RelayRequest::new("Is it Paris?", &params, "secret");

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "request_body": {
                    "model": "Meta-Llama-3.1-70B-Instruct",
                    "messages": [
                        { "role": "system", "content": "Only yes or no." },
                        { "role": "user", "content": "Is it Paris?" }
                    ],
                    "stream": false,
                    "max_tokens": 256
                },
                "password": "secret"
            })
        );
    }

    #[test]
    fn test_envelope_without_system_prompt_omits_max_tokens() {
        let params = ModelParameters::new(Model::Llama32_3bInstruct);
        let request = RelayRequest::new("Extract", &params, "");
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(value["request_body"]["messages"].as_array().unwrap().len(), 1);
        assert!(value["request_body"].get("max_tokens").is_none());
    }

    #[test]
    fn test_reply_requires_message_string() {
        assert!(serde_json::from_str::<RelayReply>(r#"{"message":"Paris"}"#).is_ok());
        assert!(serde_json::from_str::<RelayReply>(r#"{"message":42}"#).is_err());
        assert!(serde_json::from_str::<RelayReply>(r#"{"text":"Paris"}"#).is_err());
    }
}
