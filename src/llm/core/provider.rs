//! Provider trait for verification implementations

use async_trait::async_trait;
use std::collections::BTreeMap;

use super::{error::VerifyError, types::VerificationResult};
use crate::llm::claude::ClaudeClient;

/// Main interface that verification provider implementations must satisfy
#[async_trait]
pub trait VerificationProvider: Send + Sync + std::fmt::Debug {
    /// Short tag identifying the provider (e.g. "claude")
    fn name(&self) -> &str;

    /// Evaluate how closely `code_contents` matches `spec_content`.
    ///
    /// Sends a single request to the provider and decodes the structured
    /// result from its reply. Files are rendered into the prompt in path
    /// order. Dropping the returned future aborts the in-flight request;
    /// callers that need a timeout wrap the call in `tokio::time::timeout`.
    ///
    /// # Arguments
    /// * `spec_content` - The specification document text
    /// * `code_contents` - Map of file path to file content
    ///
    /// # Returns
    /// The decoded `VerificationResult`, or an error describing which stage
    /// of the call failed
    async fn verify(
        &self,
        spec_content: &str,
        code_contents: &BTreeMap<String, String>,
    ) -> Result<VerificationResult, VerifyError>;
}

/// Create a verification provider backed by the Claude Messages API
///
/// # Arguments
///
/// * `api_key` - Anthropic API key (must be non-empty)
///
/// # Returns
///
/// A boxed trait object implementing `VerificationProvider`, or a
/// configuration error if the key is empty
///
/// # Example
///
/// ```rust,no_run
/// use std::collections::BTreeMap;
/// use specmatch::llm::{create_provider, VerificationProvider};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let provider = create_provider("sk-ant-...")?;
///
/// let mut files = BTreeMap::new();
/// files.insert("src/login.tsx".to_string(), "export function Login() {}".to_string());
///
/// let result = provider.verify("The login screen shows a form.", &files).await?;
/// println!("match: {}%", result.match_percentage);
/// # Ok(())
/// # }
/// ```
pub fn create_provider(
    api_key: impl Into<String>,
) -> Result<Box<dyn VerificationProvider>, VerifyError> {
    let client = ClaudeClient::new(api_key)?;
    Ok(Box::new(client))
}
