//! Inference errors

use thiserror::Error;

/// Errors that can occur during inference
#[derive(Debug, Error)]
pub enum InferenceError {
    /// Failed to connect to the inference service
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to the inference service failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// No API key configured
    #[error("Missing API key")]
    MissingApiKey,

    /// Response body could not be decoded
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// The service answered but returned no candidates or no text
    #[error("Empty reply from inference service")]
    EmptyReply,

    /// Timeout during inference
    #[error("Inference timeout after {0}ms")]
    Timeout(u64),

    /// Server-side error status
    #[error("Server error: {0}")]
    ServerError(String),
}

impl From<reqwest::Error> for InferenceError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            InferenceError::Timeout(30000)
        } else if err.is_connect() {
            InferenceError::ConnectionFailed(err.to_string())
        } else {
            InferenceError::RequestFailed(err.to_string())
        }
    }
}
