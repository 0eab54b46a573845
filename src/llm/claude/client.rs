//! Claude verification client

use async_trait::async_trait;
use reqwest::Client;
use std::collections::BTreeMap;
use tracing::debug;

use crate::llm::core::{
    error::VerifyError, provider::VerificationProvider, types::VerificationResult,
};

use super::extract::parse_verification_result;
use super::prompt::build_verification_prompt;
use super::types::{MessageParam, MessagesRequest, MessagesResponse};

/// Production Messages API host
const DEFAULT_BASE_URL: &str = "https://api.anthropic.com";
/// Model used for verification requests
const DEFAULT_MODEL: &str = "claude-sonnet-4-20250514";
/// Required API version header value
const ANTHROPIC_VERSION: &str = "2023-06-01";
/// Upper bound on tokens in the model's reply
const MAX_TOKENS: u32 = 2000;

/// Client for verifying code against a specification via the Claude
/// Messages API
///
/// Immutable after construction, so it can be shared across tasks.
#[derive(Debug)]
pub struct ClaudeClient {
    /// HTTP client for making requests
    http_client: Client,
    /// API credential sent in the `x-api-key` header
    api_key: String,
    /// Model identifier
    model: String,
    /// API host, overridable for fixture tests
    base_url: String,
}

impl ClaudeClient {
    /// Create a new client bound to `api_key`.
    ///
    /// # Errors
    ///
    /// Returns [`VerifyError::Configuration`] if the key is empty or the
    /// HTTP client cannot be built.
    pub fn new(api_key: impl Into<String>) -> Result<Self, VerifyError> {
        let api_key = api_key.into();
        if api_key.is_empty() {
            return Err(VerifyError::Configuration(
                "API key is required".to_string(),
            ));
        }

        let http_client = Client::builder()
            .connect_timeout(std::time::Duration::from_secs(5))
            .build()
            .map_err(|e| {
                VerifyError::Configuration(format!("failed to create HTTP client: {e}"))
            })?;

        Ok(Self {
            http_client,
            api_key,
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
        })
    }

    /// Point the client at a different API host (fixture tests)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Override the model identifier
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Build the Messages API endpoint URL
    fn messages_url(&self) -> String {
        format!("{}/v1/messages", self.base_url)
    }

    /// Send the rendered prompt and decode the verification result
    async fn send_verification(&self, prompt: String) -> Result<VerificationResult, VerifyError> {
        let request = MessagesRequest {
            model: self.model.clone(),
            max_tokens: MAX_TOKENS,
            messages: vec![MessageParam {
                role: "user".to_string(),
                content: prompt,
            }],
        };

        let response = self
            .http_client
            .post(self.messages_url())
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&request)
            .send()
            .await
            .map_err(VerifyError::Transport)?;

        let status = response.status();
        let body = response.text().await.map_err(VerifyError::ResponseRead)?;

        if !status.is_success() {
            return Err(VerifyError::Http {
                status: status.as_u16(),
                body,
            });
        }

        let envelope: MessagesResponse =
            serde_json::from_str(&body).map_err(VerifyError::ResponseDecode)?;

        if let Some(error) = envelope.error {
            return Err(VerifyError::Provider(error.message));
        }

        let Some(first) = envelope.content.first() else {
            return Err(VerifyError::EmptyResponse);
        };

        parse_verification_result(&first.text)
    }
}

#[async_trait]
impl VerificationProvider for ClaudeClient {
    fn name(&self) -> &str {
        "claude"
    }

    async fn verify(
        &self,
        spec_content: &str,
        code_contents: &BTreeMap<String, String>,
    ) -> Result<VerificationResult, VerifyError> {
        let prompt = build_verification_prompt(spec_content, code_contents);

        debug!(
            model = %self.model,
            files = code_contents.len(),
            prompt_bytes = prompt.len(),
            "sending verification request"
        );

        let result = self.send_verification(prompt).await?;

        debug!(
            match_percentage = result.match_percentage,
            "verification complete"
        );

        Ok(result)
    }
}
