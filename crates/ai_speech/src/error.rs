//! Speech processing errors

use thiserror::Error;

/// Errors that can occur during capture or speech processing
#[derive(Debug, Error)]
pub enum SpeechError {
    /// Failed to connect to speech service
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to speech service failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Invalid audio format or corrupted data
    #[error("Invalid audio: {0}")]
    InvalidAudio(String),

    /// The service processed the audio but recognized no speech
    #[error("No speech detected in audio")]
    NoSpeechDetected,

    /// Transcription failed
    #[error("Transcription failed: {0}")]
    TranscriptionFailed(String),

    /// Synthesis failed
    #[error("Synthesis failed: {0}")]
    SynthesisFailed(String),

    /// Invalid response from service
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Timeout during processing
    #[error("Speech processing timeout after {0}ms")]
    Timeout(u64),

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Audio capture failed
    #[error("Capture failed: {0}")]
    CaptureFailed(String),

    /// WAV encoding or decoding failed
    #[error("Audio encoding failed: {0}")]
    EncodingFailed(String),
}

impl From<reqwest::Error> for SpeechError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(30000)
        } else if err.is_connect() {
            Self::ConnectionFailed(err.to_string())
        } else {
            Self::RequestFailed(err.to_string())
        }
    }
}

impl From<hound::Error> for SpeechError {
    fn from(err: hound::Error) -> Self {
        Self::EncodingFailed(err.to_string())
    }
}
