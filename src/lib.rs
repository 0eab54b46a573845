// Specification-match verification layer
pub mod llm;
