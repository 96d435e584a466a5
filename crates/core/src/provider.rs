//! Provider trait — the seam between the gateway and the LLM backend.
//!
//! A Provider knows how to send a conversation to an LLM and get a
//! normalized reply back. Exactly one production implementation exists
//! (the Anthropic Messages API client in `graft-providers`); the trait
//! is here so gateway tests can substitute a recording mock.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::ProviderError;
use crate::message::Message;

/// Configuration for a provider request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    /// The model to use (e.g., "claude-haiku-4-5-20251001")
    pub model: String,

    /// The conversation messages. System-role messages are folded into
    /// the backend's top-level system field by the implementation.
    pub messages: Vec<Message>,

    /// Temperature (0.0 = deterministic, 1.0 = creative)
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Maximum tokens to generate
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

fn default_temperature() -> f32 {
    0.7
}

/// A normalized, non-streaming reply from a provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatReply {
    /// The generated text.
    pub reply: String,

    /// Which model actually responded (may differ from requested).
    pub model: String,

    /// Token usage statistics.
    pub usage: Option<Usage>,
}

/// Token usage information.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Usage {
    pub input_tokens: u32,
    pub output_tokens: u32,
}

/// The core Provider trait.
///
/// The gateway calls `complete()` without knowing which backend is in
/// use. One outbound call per incoming request; no streaming.
#[async_trait]
pub trait Provider: Send + Sync {
    /// A human-readable name for this provider (e.g., "anthropic").
    fn name(&self) -> &str;

    /// Send a request and get a complete, normalized reply.
    async fn complete(
        &self,
        request: ChatRequest,
    ) -> std::result::Result<ChatReply, ProviderError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chat_request_defaults() {
        let req = ChatRequest {
            model: "claude-haiku-4-5-20251001".into(),
            messages: vec![],
            temperature: default_temperature(),
            max_tokens: None,
        };
        assert!((req.temperature - 0.7).abs() < f32::EPSILON);
        assert!(req.max_tokens.is_none());
    }

    #[test]
    fn chat_reply_serialization() {
        let reply = ChatReply {
            reply: "Hello!".into(),
            model: "claude-haiku-4-5-20251001".into(),
            usage: Some(Usage {
                input_tokens: 10,
                output_tokens: 5,
            }),
        };
        let json = serde_json::to_string(&reply).unwrap();
        assert!(json.contains("Hello!"));
        assert!(json.contains("input_tokens"));
    }
}
