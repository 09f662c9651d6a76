//! Gemini client implementation

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use crate::config::InferenceConfig;
use crate::error::InferenceError;
use crate::ports::{InferenceEngine, InferenceRequest, InferenceResponse};

/// Inference engine backed by the Gemini `generateContent` API
pub struct GeminiInferenceEngine {
    client: Client,
    config: InferenceConfig,
}

impl std::fmt::Debug for GeminiInferenceEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiInferenceEngine")
            .field("base_url", &self.config.base_url)
            .field("model", &self.config.model)
            .finish_non_exhaustive()
    }
}

impl GeminiInferenceEngine {
    /// Create a new Gemini inference engine
    pub fn new(config: InferenceConfig) -> Result<Self, InferenceError> {
        if config.api_key.is_empty() {
            return Err(InferenceError::MissingApiKey);
        }

        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| InferenceError::ConnectionFailed(e.to_string()))?;

        info!(
            base_url = %config.base_url,
            model = %config.model,
            "Initialized Gemini inference engine"
        );

        Ok(Self { client, config })
    }

    /// Build the generateContent URL for a model
    fn generate_url(&self, model: &str) -> String {
        format!(
            "{}/v1beta/models/{model}:generateContent",
            self.config.base_url
        )
    }

    /// Get the model to use for a request
    fn resolve_model<'a>(&'a self, request: &'a InferenceRequest) -> &'a str {
        request.model.as_deref().unwrap_or(&self.config.model)
    }
}

/// Gemini-format generation request
#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

impl GenerateContentRequest {
    fn from_prompt(prompt: &str) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

/// Gemini-format generation response
#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

impl GenerateContentResponse {
    /// Text of the first candidate's first part, if any
    fn first_text(self) -> Option<String> {
        self.candidates
            .into_iter()
            .next()?
            .content
            .parts
            .into_iter()
            .next()
            .map(|p| p.text)
    }
}

#[async_trait]
impl InferenceEngine for GeminiInferenceEngine {
    #[instrument(skip(self, request), fields(model = %self.resolve_model(&request)))]
    async fn generate(
        &self,
        request: InferenceRequest,
    ) -> Result<InferenceResponse, InferenceError> {
        let model = self.resolve_model(&request).to_string();
        let body = GenerateContentRequest::from_prompt(&request.prompt);

        debug!("Sending generateContent request");

        let response = self
            .client
            .post(self.generate_url(&model))
            .query(&[("key", self.config.api_key.as_str())])
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            warn!(status = %status, "Inference request failed");
            return Err(InferenceError::ServerError(format!(
                "Status {status}: {body}"
            )));
        }

        let generated: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| InferenceError::InvalidResponse(e.to_string()))?;

        let content = generated.first_text().ok_or(InferenceError::EmptyReply)?;

        debug!(chars = content.len(), "Inference completed");

        Ok(InferenceResponse { content, model })
    }

    #[instrument(skip(self))]
    async fn health_check(&self) -> Result<bool, InferenceError> {
        let response = self
            .client
            .get(format!("{}/v1beta/models", self.config.base_url))
            .query(&[("key", self.config.api_key.as_str())])
            .timeout(Duration::from_secs(5))
            .send()
            .await;

        match response {
            Ok(resp) => Ok(resp.status().is_success()),
            Err(e) if e.is_timeout() => Ok(false),
            Err(e) if e.is_connect() => Ok(false),
            Err(e) => Err(InferenceError::RequestFailed(e.to_string())),
        }
    }

    fn default_model(&self) -> &str {
        &self.config.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> GeminiInferenceEngine {
        GeminiInferenceEngine::new(InferenceConfig::with_api_key("test-key")).unwrap()
    }

    #[test]
    fn missing_api_key_is_rejected() {
        let result = GeminiInferenceEngine::new(InferenceConfig::default());
        assert!(matches!(result, Err(InferenceError::MissingApiKey)));
    }

    #[test]
    fn generate_url_includes_model_and_action() {
        assert_eq!(
            engine().generate_url("gemini-2.0-flash"),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.0-flash:generateContent"
        );
    }

    #[test]
    fn default_model_comes_from_config() {
        assert_eq!(engine().default_model(), "gemini-2.0-flash");
    }

    #[test]
    fn request_body_wraps_prompt_in_contents_parts() {
        let body = GenerateContentRequest::from_prompt("hello");
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["contents"][0]["parts"][0]["text"], "hello");
    }

    #[test]
    fn first_text_reads_first_candidate() {
        let json = r#"{"candidates":[{"content":{"parts":[{"text":"reply"}]}}]}"#;
        let response: GenerateContentResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.first_text(), Some("reply".to_string()));
    }

    #[test]
    fn first_text_is_none_without_candidates() {
        let response: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(response.first_text(), None);
    }
}
