//! Claude-specific request and response types
//!
//! These types map directly to the Anthropic Messages API schema.

use serde::{Deserialize, Serialize};

/// Request body for the Messages API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessagesRequest {
    /// Model identifier
    pub model: String,
    /// Maximum number of tokens to generate (required)
    pub max_tokens: u32,
    /// Array of messages in the conversation
    pub messages: Vec<MessageParam>,
}

/// A single message in the conversation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageParam {
    /// Role: "user" or "assistant"
    pub role: String,
    /// Plain text content
    pub content: String,
}

/// Response envelope from the Messages API
#[derive(Debug, Clone, Deserialize)]
pub struct MessagesResponse {
    /// Generated content blocks (empty on some error responses)
    #[serde(default)]
    pub content: Vec<ResponseContentBlock>,
    /// Present when the API reports a structured error
    #[serde(default)]
    pub error: Option<ApiError>,
}

/// A content block within a response
#[derive(Debug, Clone, Deserialize)]
pub struct ResponseContentBlock {
    /// Block type (always "text" for non-tool responses)
    #[serde(rename = "type")]
    pub block_type: String,
    /// Generated text
    #[serde(default)]
    pub text: String,
}

/// Structured error reported by the API
#[derive(Debug, Clone, Deserialize)]
pub struct ApiError {
    /// Error category (e.g. "rate_limit_error")
    #[serde(rename = "type")]
    pub error_type: String,
    /// Human-readable error message
    pub message: String,
}
