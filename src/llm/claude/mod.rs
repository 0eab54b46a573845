//! Claude provider implementation
//!
//! This module provides a client that asks an Anthropic Claude model to
//! grade how closely a set of source files implements a specification
//! document, and decodes the structured result from its reply.

pub mod client;
pub mod extract;
pub mod prompt;
pub mod types;

// Re-export commonly used types
pub use client::ClaudeClient;
