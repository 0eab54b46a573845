//! Error types for the verification layer

use thiserror::Error;

/// Errors that can occur when verifying code against a specification
#[derive(Debug, Error)]
pub enum VerifyError {
    /// Client misconfiguration (e.g. missing API key)
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Network failure before an HTTP response was received
    #[error("failed to send request: {0}")]
    Transport(#[source] reqwest::Error),

    /// Connection failure while reading the response body
    #[error("failed to read response: {0}")]
    ResponseRead(#[source] reqwest::Error),

    /// Non-success HTTP status from the API
    #[error("API error (status {status}): {body}")]
    Http { status: u16, body: String },

    /// Response body was not a valid API envelope
    #[error("failed to parse response: {0}")]
    ResponseDecode(#[source] serde_json::Error),

    /// Error reported by the provider inside the response envelope
    #[error("API error: {0}")]
    Provider(String),

    /// Response contained zero content items
    #[error("empty response from API")]
    EmptyResponse,

    /// Model text did not decode as a verification result
    #[error("failed to parse verification result: {0}")]
    Extraction(#[source] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_error() {
        let err = VerifyError::Configuration("API key is required".to_string());
        assert!(err.to_string().contains("configuration error"));
        assert!(err.to_string().contains("API key is required"));
    }

    #[test]
    fn test_http_error() {
        let err = VerifyError::Http {
            status: 500,
            body: "oops".to_string(),
        };
        assert!(err.to_string().contains("500"));
        assert!(err.to_string().contains("oops"));
    }

    #[test]
    fn test_provider_error() {
        let err = VerifyError::Provider("rate limited".to_string());
        assert!(err.to_string().contains("API error"));
        assert!(err.to_string().contains("rate limited"));
    }

    #[test]
    fn test_empty_response_error() {
        let err = VerifyError::EmptyResponse;
        assert!(err.to_string().contains("empty response"));
    }

    #[test]
    fn test_extraction_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err = VerifyError::Extraction(json_err);
        assert!(err.to_string().contains("failed to parse verification result"));
    }
}
