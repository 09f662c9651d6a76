//! Inference port - Interface for LLM inference

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Result of an inference call
#[derive(Debug, Clone)]
pub struct InferenceReply {
    /// Generated response content
    pub content: String,
    /// Model used for generation
    pub model: String,
}

/// Port for inference operations
#[cfg_attr(test, automock)]
#[async_trait]
pub trait InferencePort: Send + Sync {
    /// Generate a response for a single prompt
    async fn generate(&self, prompt: &str) -> Result<InferenceReply, ApplicationError>;

    /// Check if the inference backend is healthy
    async fn is_healthy(&self) -> bool;

    /// Get the name of the current model
    fn current_model(&self) -> String;
}
