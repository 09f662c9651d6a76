//! Google speech adapter - Implements SpeechPort using ai_speech

use ai_speech::{
    AudioData, AudioFormat, GoogleSpeechProvider, SpeechConfig, SpeechError, SpeechToText,
    TextToSpeech,
};
use application::error::ApplicationError;
use application::ports::{SpeechPort, SynthesisResult, TranscriptionResult};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Adapter for Google speech services
#[derive(Debug)]
pub struct GoogleSpeechAdapter {
    provider: GoogleSpeechProvider,
}

impl GoogleSpeechAdapter {
    /// Create a new speech adapter
    pub fn new(config: SpeechConfig) -> Result<Self, ApplicationError> {
        let provider = GoogleSpeechProvider::new(config)
            .map_err(|e| ApplicationError::Configuration(e.to_string()))?;
        Ok(Self { provider })
    }

    fn map_error(err: SpeechError) -> ApplicationError {
        match err {
            SpeechError::NoSpeechDetected => ApplicationError::NoSpeechDetected,
            SpeechError::Configuration(e) => ApplicationError::Configuration(e),
            other => ApplicationError::Speech(other.to_string()),
        }
    }
}

#[async_trait]
impl SpeechPort for GoogleSpeechAdapter {
    #[instrument(skip(self, audio_data), fields(audio_size = audio_data.len()))]
    async fn transcribe(
        &self,
        audio_data: Vec<u8>,
    ) -> Result<TranscriptionResult, ApplicationError> {
        let audio = AudioData::new(audio_data, AudioFormat::Wav);

        let transcription = self
            .provider
            .transcribe(audio)
            .await
            .map_err(Self::map_error)?;

        debug!(
            text_len = transcription.text.len(),
            confidence = ?transcription.confidence,
            "Transcription complete"
        );

        Ok(TranscriptionResult {
            text: transcription.text,
            confidence: transcription.confidence,
        })
    }

    #[instrument(skip(self, text), fields(text_len = text.len()))]
    async fn synthesize(&self, text: String) -> Result<SynthesisResult, ApplicationError> {
        let audio = self
            .provider
            .synthesize(&text)
            .await
            .map_err(Self::map_error)?;

        debug!(audio_size = audio.size_bytes(), "Synthesis complete");

        Ok(SynthesisResult {
            audio_data: audio.into_data(),
        })
    }

    async fn is_available(&self) -> bool {
        <GoogleSpeechProvider as SpeechToText>::is_available(&self.provider).await
    }
}
