//! Chat completion client used to synthesize UI tests.

/// OpenAI compatible chat completion client.
pub mod openai;

/// Language model abstraction.
pub mod traits;

/// Chat completion request and response payloads.
pub mod types;
