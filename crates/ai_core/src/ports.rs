//! Port definitions for inference engines
//!
//! Defines the traits (ports) that inference adapters must implement.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::InferenceError;

/// A single-prompt inference request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InferenceRequest {
    /// The full prompt text
    pub prompt: String,
    /// Model to use (overrides config default)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

impl InferenceRequest {
    /// Create a request for the configured default model
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            model: None,
        }
    }

    /// Set the model for this request
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }
}

/// Response from inference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InferenceResponse {
    /// Generated text
    pub content: String,
    /// Model that generated the response
    pub model: String,
}

/// Port for inference engine implementations
#[async_trait]
pub trait InferenceEngine: Send + Sync {
    /// Generate a complete response for a prompt
    async fn generate(
        &self,
        request: InferenceRequest,
    ) -> Result<InferenceResponse, InferenceError>;

    /// Check if the inference service is reachable
    async fn health_check(&self) -> Result<bool, InferenceError>;

    /// Get the configured default model
    fn default_model(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_defaults_to_configured_model() {
        let req = InferenceRequest::new("Hello");
        assert_eq!(req.prompt, "Hello");
        assert!(req.model.is_none());
    }

    #[test]
    fn with_model_overrides() {
        let req = InferenceRequest::new("Hello").with_model("gemini-1.5-pro");
        assert_eq!(req.model, Some("gemini-1.5-pro".to_string()));
    }

    #[test]
    fn request_serialization_skips_none_model() {
        let req = InferenceRequest::new("Test");
        let json = serde_json::to_string(&req).unwrap();
        assert!(json.contains("prompt"));
        assert!(!json.contains("model"));
    }
}
