//! Traits for generation collaborators

use super::errors::LLMError;
use super::types::{Generation, GenerationRequest};
use async_trait::async_trait;

/// Core trait for text generation providers
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Get the name of this provider
    fn name(&self) -> &str;

    /// Get the model ID being used
    fn model(&self) -> &str;

    /// Run a single request and return the final text
    async fn generate(&self, request: &GenerationRequest) -> Result<Generation, LLMError>;
}
