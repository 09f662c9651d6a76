//! Types for speech processing
//!
//! Contains data structures for audio data, formats, and transcriptions.

use serde::{Deserialize, Serialize};

/// Supported audio formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AudioFormat {
    /// WAV format (uncompressed, what the recorder produces)
    Wav,
    /// MP3 format (what TTS synthesis returns)
    Mp3,
}

impl AudioFormat {
    /// Get the MIME type for this audio format
    #[must_use]
    pub const fn mime_type(&self) -> &'static str {
        match self {
            Self::Wav => "audio/wav",
            Self::Mp3 => "audio/mpeg",
        }
    }

    /// Get the file extension for this audio format
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Wav => "wav",
            Self::Mp3 => "mp3",
        }
    }
}

/// Container for audio data with metadata
#[derive(Debug, Clone)]
pub struct AudioData {
    /// Raw audio bytes
    data: Vec<u8>,
    /// Audio format
    format: AudioFormat,
    /// Sample rate in Hz (if known)
    sample_rate: Option<u32>,
}

impl AudioData {
    /// Create new audio data
    #[must_use]
    pub const fn new(data: Vec<u8>, format: AudioFormat) -> Self {
        Self {
            data,
            format,
            sample_rate: None,
        }
    }

    /// Create audio data with sample rate
    #[must_use]
    pub const fn with_sample_rate(mut self, sample_rate: u32) -> Self {
        self.sample_rate = Some(sample_rate);
        self
    }

    /// Get the raw audio bytes
    #[must_use]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Consume and return the raw audio bytes
    #[must_use]
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    /// Get the audio format
    #[must_use]
    pub const fn format(&self) -> AudioFormat {
        self.format
    }

    /// Get the sample rate (if known)
    #[must_use]
    pub const fn sample_rate(&self) -> Option<u32> {
        self.sample_rate
    }

    /// Get the size of the audio data in bytes
    #[must_use]
    pub fn size_bytes(&self) -> usize {
        self.data.len()
    }

    /// Check if the audio data is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get the MIME type for this audio
    #[must_use]
    pub const fn mime_type(&self) -> &'static str {
        self.format.mime_type()
    }

    /// Generate a filename with the appropriate extension
    #[must_use]
    pub fn filename(&self, base: &str) -> String {
        format!("{}.{}", base, self.format.extension())
    }
}

/// Result of speech-to-text transcription
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transcription {
    /// Transcribed text
    pub text: String,
    /// Confidence score (0.0 - 1.0)
    pub confidence: Option<f32>,
}

impl Transcription {
    /// Create a simple transcription with just text
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            confidence: None,
        }
    }

    /// Set the confidence score
    #[must_use]
    pub const fn with_confidence(mut self, confidence: f32) -> Self {
        self.confidence = Some(confidence);
        self
    }

    /// Check if the transcription is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mime_types_are_correct() {
        assert_eq!(AudioFormat::Wav.mime_type(), "audio/wav");
        assert_eq!(AudioFormat::Mp3.mime_type(), "audio/mpeg");
    }

    #[test]
    fn extensions_are_correct() {
        assert_eq!(AudioFormat::Wav.extension(), "wav");
        assert_eq!(AudioFormat::Mp3.extension(), "mp3");
    }

    #[test]
    fn new_creates_audio_data() {
        let data = vec![1, 2, 3, 4];
        let audio = AudioData::new(data.clone(), AudioFormat::Wav);

        assert_eq!(audio.data(), &data);
        assert_eq!(audio.format(), AudioFormat::Wav);
        assert_eq!(audio.sample_rate(), None);
    }

    #[test]
    fn with_sample_rate_sets_sample_rate() {
        let audio = AudioData::new(vec![1, 2, 3], AudioFormat::Wav).with_sample_rate(44100);
        assert_eq!(audio.sample_rate(), Some(44100));
    }

    #[test]
    fn filename_includes_extension() {
        let audio = AudioData::new(vec![], AudioFormat::Mp3);
        assert_eq!(audio.filename("reply"), "reply.mp3");
    }

    #[test]
    fn is_empty_reflects_data() {
        assert!(AudioData::new(vec![], AudioFormat::Wav).is_empty());
        assert!(!AudioData::new(vec![1], AudioFormat::Wav).is_empty());
    }

    #[test]
    fn transcription_is_empty_for_whitespace() {
        assert!(Transcription::new("   \n\t  ").is_empty());
        assert!(!Transcription::new("Hello").is_empty());
    }

    #[test]
    fn transcription_with_confidence() {
        let transcription = Transcription::new("Test").with_confidence(0.95);
        assert_eq!(transcription.confidence, Some(0.95));
    }
}
