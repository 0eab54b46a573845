//! Specification Verification Layer
//!
//! This module provides a unified interface for asking an LLM provider how
//! closely a set of source files implements a specification document.

pub mod claude;
pub mod core;

// Re-export commonly used types
pub use core::{
    error::VerifyError,
    provider::{create_provider, VerificationProvider},
    types::VerificationResult,
};

pub use claude::ClaudeClient;
