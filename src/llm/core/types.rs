//! Core types for the verification layer

use serde::{Deserialize, Serialize};

/// Outcome of comparing a specification document against source files
///
/// Decoded from the JSON object the model emits. Every field defaults to its
/// zero value when absent, and `match_percentage` is reported as-is without
/// being clamped to 0-100.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationResult {
    /// How closely the code matches the specification (0-100)
    #[serde(default)]
    pub match_percentage: f64,
    /// Specification items the code satisfies
    #[serde(default)]
    pub matched_items: Vec<String>,
    /// Specification items the code does not satisfy
    #[serde(default)]
    pub unmatched_items: Vec<String>,
    /// Free-form reviewer commentary
    #[serde(default)]
    pub notes: String,
}
