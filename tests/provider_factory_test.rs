//! Tests for the verification provider factory
//!
//! The ignored test makes a real Messages API call. To run it:
//! 1. Put `ANTHROPIC_API_KEY=...` in `.env`
//! 2. Run: `cargo test --test provider_factory_test -- --ignored`

use std::collections::BTreeMap;

use specmatch::llm::{create_provider, VerificationProvider, VerifyError};

#[test]
fn test_create_provider_returns_claude() {
    let provider = create_provider("test-key").expect("non-empty key");
    assert_eq!(provider.name(), "claude");
}

#[test]
fn test_create_provider_rejects_empty_key() {
    let err = create_provider("").unwrap_err();
    assert!(matches!(err, VerifyError::Configuration(_)));
}

#[tokio::test]
#[ignore] // Run with --ignored flag
async fn test_verify_against_live_api() {
    dotenvy::dotenv().ok();

    let api_key = std::env::var("ANTHROPIC_API_KEY").expect("ANTHROPIC_API_KEY required in .env");
    let provider = create_provider(api_key).expect("Failed to create provider");

    let mut files = BTreeMap::new();
    files.insert(
        "src/greet.rs".to_string(),
        "pub fn greet(name: &str) -> String { format!(\"Hello, {name}!\") }".to_string(),
    );

    let result = provider
        .verify(
            "A greet function takes a name and returns the string \"Hello, <name>!\".",
            &files,
        )
        .await
        .expect("verification call failed");

    println!("match: {}%", result.match_percentage);
    println!("matched: {:?}", result.matched_items);
    println!("unmatched: {:?}", result.unmatched_items);
    println!("notes: {}", result.notes);

    assert!(result.match_percentage > 0.0);
}
