//! Speech port - Interface for speech-to-text and text-to-speech operations

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Result of a transcription operation
#[derive(Debug, Clone)]
pub struct TranscriptionResult {
    /// Transcribed text
    pub text: String,
    /// Confidence score (0.0 - 1.0)
    pub confidence: Option<f32>,
}

/// Result of a speech synthesis operation
#[derive(Debug, Clone)]
pub struct SynthesisResult {
    /// Generated audio data (MP3)
    pub audio_data: Vec<u8>,
}

/// Port for speech processing operations
#[cfg_attr(test, automock)]
#[async_trait]
pub trait SpeechPort: Send + Sync {
    /// Transcribe WAV audio to text
    ///
    /// Implementations return `ApplicationError::NoSpeechDetected` when the
    /// audio carried no recognizable speech and `ApplicationError::Speech`
    /// for transport problems, so callers can degrade rather than abort.
    async fn transcribe(&self, audio_data: Vec<u8>)
    -> Result<TranscriptionResult, ApplicationError>;

    /// Synthesize speech from text
    async fn synthesize(&self, text: String) -> Result<SynthesisResult, ApplicationError>;

    /// Check if the speech service is available
    async fn is_available(&self) -> bool;
}
