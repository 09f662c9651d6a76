//! Port definitions for speech processing
//!
//! Defines the traits (ports) that speech processing adapters must implement.

use async_trait::async_trait;

use crate::error::SpeechError;
use crate::types::{AudioData, Transcription};

/// Port for Speech-to-Text (STT) implementations
#[async_trait]
pub trait SpeechToText: Send + Sync {
    /// Transcribe audio to text
    ///
    /// # Errors
    ///
    /// Returns `SpeechError::NoSpeechDetected` when the audio contains no
    /// recognizable speech, and other variants for transport failures.
    async fn transcribe(&self, audio: AudioData) -> Result<Transcription, SpeechError>;

    /// Check if the STT service is available
    async fn is_available(&self) -> bool;
}

/// Port for Text-to-Speech (TTS) implementations
#[async_trait]
pub trait TextToSpeech: Send + Sync {
    /// Convert text to speech
    ///
    /// # Errors
    ///
    /// Returns `SpeechError` if synthesis fails.
    async fn synthesize(&self, text: &str) -> Result<AudioData, SpeechError>;

    /// Check if the TTS service is available
    async fn is_available(&self) -> bool;
}
