//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Inference/AI error
    #[error("Inference error: {0}")]
    Inference(String),

    /// Inference service answered but carried no usable reply
    #[error("Empty reply from inference service")]
    EmptyInferenceReply,

    /// Speech capture or processing error
    #[error("Speech error: {0}")]
    Speech(String),

    /// Audio was processed but contained no recognizable speech
    #[error("No speech detected")]
    NoSpeechDetected,

    /// Patient record storage error
    #[error("Storage error: {0}")]
    Storage(String),

    /// Report generation error
    #[error("Report error: {0}")]
    Report(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_errors_pass_through_transparently() {
        let err: ApplicationError = DomainError::InvalidPainRating(0).into();
        assert_eq!(err.to_string(), "Invalid pain rating: 0 (expected 1-10)");
    }

    #[test]
    fn inference_error_message() {
        let err = ApplicationError::Inference("timeout".to_string());
        assert_eq!(err.to_string(), "Inference error: timeout");
    }
}
