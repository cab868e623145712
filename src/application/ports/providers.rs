use async_trait::async_trait;
use thiserror::Error;

#[cfg(test)]
use mockall::{automock, predicate::*};

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("Provider not configured: {0}")]
    NotConfigured(String),

    #[error("Provider request failed: {0}")]
    RequestFailed(String),

    #[error("Provider returned an unusable response: {0}")]
    BadResponse(String),
}

/// Port for the upstream text-completion provider.
///
/// Implementations receive sanitized prompt text and return generated text.
/// Calls are fire-and-forget once dispatched; there is no cancellation
/// propagation to the upstream service.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait TextCompletionProvider: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String, ProviderError>;
}

/// Port for the upstream image-generation provider.
///
/// Returns a URL path to the generated image, suitable for direct use by a
/// web client.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ImageGenerationProvider: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, ProviderError>;
}
