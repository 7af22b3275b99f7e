//! Completion service abstraction.
//!
//! The extraction pipeline depends on nothing beyond a blocking
//! request/response contract: send a text prompt, receive a text completion.
//! Model choice, temperature, and token limits are configuration external to
//! the pipeline.

mod openai;

pub use openai::OpenAiClient;

use async_trait::async_trait;

/// Error type for completion service calls.
#[derive(Debug, thiserror::Error)]
pub enum CompletionError {
    /// Transport-level failure (network, TLS, timeout)
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success status from the service
    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// The configured API key environment variable is unset
    #[error("API key environment variable '{0}' is not set")]
    MissingApiKey(String),

    /// The response body did not contain a completion
    #[error("Malformed completion response: {0}")]
    MalformedResponse(String),
}

/// Trait for external completion services.
///
/// The pipeline awaits each completion before parsing and resolution proceed;
/// there is no batching and no concurrent extraction across documents. A
/// failure is fatal for the current document and is not retried.
#[async_trait]
pub trait CompletionClient: Send + Sync + std::fmt::Debug {
    /// Send a prompt and return the text completion.
    async fn complete(&self, prompt: &str) -> Result<String, CompletionError>;

    /// Get the name of this client for identification purposes.
    fn name(&self) -> &str;
}
