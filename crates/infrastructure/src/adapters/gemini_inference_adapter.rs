//! Gemini inference adapter - Implements InferencePort using ai_core

use std::time::Instant;

use ai_core::{GeminiInferenceEngine, InferenceConfig, InferenceEngine, InferenceRequest};
use application::{
    error::ApplicationError,
    ports::{InferencePort, InferenceReply},
};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Adapter for Gemini inference
#[derive(Debug)]
pub struct GeminiInferenceAdapter {
    engine: GeminiInferenceEngine,
}

impl GeminiInferenceAdapter {
    /// Create a new adapter with the given configuration
    pub fn new(config: InferenceConfig) -> Result<Self, ApplicationError> {
        let engine = GeminiInferenceEngine::new(config)
            .map_err(|e| ApplicationError::Configuration(e.to_string()))?;
        Ok(Self { engine })
    }

    fn map_error(e: ai_core::InferenceError) -> ApplicationError {
        match e {
            ai_core::InferenceError::EmptyReply => ApplicationError::EmptyInferenceReply,
            other => ApplicationError::Inference(other.to_string()),
        }
    }
}

#[async_trait]
impl InferencePort for GeminiInferenceAdapter {
    #[instrument(skip(self, prompt), fields(prompt_len = prompt.len()))]
    async fn generate(&self, prompt: &str) -> Result<InferenceReply, ApplicationError> {
        let start = Instant::now();

        let response = self
            .engine
            .generate(InferenceRequest::new(prompt))
            .await
            .map_err(Self::map_error)?;

        debug!(
            model = %response.model,
            latency_ms = start.elapsed().as_millis() as u64,
            "Inference completed"
        );

        Ok(InferenceReply {
            content: response.content,
            model: response.model,
        })
    }

    async fn is_healthy(&self) -> bool {
        self.engine.health_check().await.unwrap_or(false)
    }

    fn current_model(&self) -> String {
        self.engine.default_model().to_string()
    }
}
