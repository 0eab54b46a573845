//! Recovering the structured result from model reply text

use regex::Regex;
use std::sync::LazyLock;

use crate::llm::core::{error::VerifyError, types::VerificationResult};

/// Matches a json-tagged fenced block, capturing the interior non-greedily
static JSON_FENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"```json\s*([\s\S]*?)\s*```").expect("valid fence pattern")
});

/// Decode a [`VerificationResult`] from the model's reply text.
///
/// The model is asked to emit bare JSON but often wraps it in a ```json
/// fence, sometimes with surrounding prose. When a fence is present its
/// interior is the payload; otherwise the whole text is.
pub fn parse_verification_result(text: &str) -> Result<VerificationResult, VerifyError> {
    let payload = match JSON_FENCE.captures(text) {
        Some(captures) => captures.get(1).map_or(text, |m| m.as_str()),
        None => text,
    };

    serde_json::from_str(payload).map_err(VerifyError::Extraction)
}
