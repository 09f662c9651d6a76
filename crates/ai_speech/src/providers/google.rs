//! Google speech provider
//!
//! Implements `SpeechToText` via the Cloud Speech `speech:recognize`
//! endpoint and `TextToSpeech` via the Cloud Text-to-Speech
//! `text:synthesize` endpoint. Audio crosses the wire base64-encoded.

use std::time::Duration;

use async_trait::async_trait;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use crate::capture::SAMPLE_RATE_HZ;
use crate::config::SpeechConfig;
use crate::error::SpeechError;
use crate::ports::{SpeechToText, TextToSpeech};
use crate::types::{AudioData, AudioFormat, Transcription};

/// Google speech provider implementing both STT and TTS
#[derive(Debug, Clone)]
pub struct GoogleSpeechProvider {
    client: Client,
    config: SpeechConfig,
}

impl GoogleSpeechProvider {
    /// Create a new Google speech provider
    pub fn new(config: SpeechConfig) -> Result<Self, SpeechError> {
        config.validate().map_err(SpeechError::Configuration)?;

        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| {
                SpeechError::Configuration(format!("Failed to create HTTP client: {e}"))
            })?;

        Ok(Self { client, config })
    }

    fn stt_url(&self) -> String {
        format!("{}/v1/speech:recognize", self.config.stt_base_url)
    }

    fn tts_url(&self) -> String {
        format!("{}/v1/text:synthesize", self.config.tts_base_url)
    }
}

/// Cloud Speech recognize request
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RecognizeRequest<'a> {
    config: RecognitionConfig<'a>,
    audio: RecognitionAudio,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RecognitionConfig<'a> {
    encoding: &'static str,
    sample_rate_hertz: u32,
    language_code: &'a str,
}

#[derive(Debug, Serialize)]
struct RecognitionAudio {
    content: String,
}

/// Cloud Speech recognize response
#[derive(Debug, Deserialize)]
struct RecognizeResponse {
    #[serde(default)]
    results: Vec<RecognitionResult>,
}

#[derive(Debug, Deserialize)]
struct RecognitionResult {
    #[serde(default)]
    alternatives: Vec<RecognitionAlternative>,
}

#[derive(Debug, Deserialize)]
struct RecognitionAlternative {
    transcript: String,
    #[serde(default)]
    confidence: Option<f32>,
}

/// Cloud Text-to-Speech synthesize request
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SynthesizeRequest<'a> {
    input: SynthesisInput<'a>,
    voice: VoiceSelection<'a>,
    audio_config: SynthesisAudioConfig,
}

#[derive(Debug, Serialize)]
struct SynthesisInput<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct VoiceSelection<'a> {
    language_code: &'a str,
    name: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SynthesisAudioConfig {
    audio_encoding: &'static str,
}

/// Cloud Text-to-Speech synthesize response
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SynthesizeResponse {
    audio_content: String,
}

#[async_trait]
impl SpeechToText for GoogleSpeechProvider {
    #[instrument(skip(self, audio), fields(audio_size = audio.size_bytes()))]
    async fn transcribe(&self, audio: AudioData) -> Result<Transcription, SpeechError> {
        if audio.is_empty() {
            return Err(SpeechError::InvalidAudio("Audio data is empty".to_string()));
        }
        if audio.format() != AudioFormat::Wav {
            return Err(SpeechError::InvalidAudio(format!(
                "Expected WAV audio, got {:?}",
                audio.format()
            )));
        }

        debug!("Transcribing audio");

        let sample_rate = audio.sample_rate().unwrap_or(SAMPLE_RATE_HZ);
        let request = RecognizeRequest {
            config: RecognitionConfig {
                encoding: "LINEAR16",
                sample_rate_hertz: sample_rate,
                language_code: &self.config.language,
            },
            audio: RecognitionAudio {
                content: BASE64.encode(audio.data()),
            },
        };

        let response = self
            .client
            .post(self.stt_url())
            .query(&[("key", self.config.api_key.as_str())])
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            warn!(status = %status, "Transcription request failed");
            return Err(SpeechError::TranscriptionFailed(format!("Status {status}")));
        }

        let recognized: RecognizeResponse = response
            .json()
            .await
            .map_err(|e| SpeechError::InvalidResponse(e.to_string()))?;

        let alternative = recognized
            .results
            .into_iter()
            .next()
            .and_then(|r| r.alternatives.into_iter().next())
            .ok_or(SpeechError::NoSpeechDetected)?;

        if alternative.transcript.trim().is_empty() {
            return Err(SpeechError::NoSpeechDetected);
        }

        debug!(chars = alternative.transcript.len(), "Transcription completed");

        let mut transcription = Transcription::new(alternative.transcript);
        if let Some(confidence) = alternative.confidence {
            transcription = transcription.with_confidence(confidence);
        }
        Ok(transcription)
    }

    async fn is_available(&self) -> bool {
        !self.config.api_key.is_empty()
    }
}

#[async_trait]
impl TextToSpeech for GoogleSpeechProvider {
    #[instrument(skip(self, text), fields(chars = text.len()))]
    async fn synthesize(&self, text: &str) -> Result<AudioData, SpeechError> {
        if text.trim().is_empty() {
            return Err(SpeechError::SynthesisFailed("text is empty".to_string()));
        }

        debug!("Synthesizing speech");

        let request = SynthesizeRequest {
            input: SynthesisInput { text },
            voice: VoiceSelection {
                language_code: &self.config.language,
                name: &self.config.voice,
            },
            audio_config: SynthesisAudioConfig {
                audio_encoding: "MP3",
            },
        };

        let response = self
            .client
            .post(self.tts_url())
            .query(&[("key", self.config.api_key.as_str())])
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            warn!(status = %status, "Synthesis request failed");
            return Err(SpeechError::SynthesisFailed(format!("Status {status}")));
        }

        let synthesized: SynthesizeResponse = response
            .json()
            .await
            .map_err(|e| SpeechError::InvalidResponse(e.to_string()))?;

        let data = BASE64
            .decode(synthesized.audio_content)
            .map_err(|e| SpeechError::InvalidResponse(format!("Bad base64 audio: {e}")))?;

        Ok(AudioData::new(data, AudioFormat::Mp3))
    }

    async fn is_available(&self) -> bool {
        !self.config.api_key.is_empty()
    }
}
