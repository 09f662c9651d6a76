//! Configuration for speech processing

use serde::{Deserialize, Serialize};

/// Configuration for the speech provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeechConfig {
    /// API key; sent as a query parameter, never logged
    #[serde(default, skip_serializing)]
    pub api_key: String,

    /// Base URL of the speech recognition API
    #[serde(default = "default_stt_base_url")]
    pub stt_base_url: String,

    /// Base URL of the speech synthesis API
    #[serde(default = "default_tts_base_url")]
    pub tts_base_url: String,

    /// Recognition and synthesis language (BCP-47 code)
    #[serde(default = "default_language")]
    pub language: String,

    /// Voice name for synthesis
    #[serde(default = "default_voice")]
    pub voice: String,

    /// Request timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_stt_base_url() -> String {
    "https://speech.googleapis.com".to_string()
}

fn default_tts_base_url() -> String {
    "https://texttospeech.googleapis.com".to_string()
}

fn default_language() -> String {
    "en-US".to_string()
}

fn default_voice() -> String {
    "en-US-Standard-C".to_string()
}

const fn default_timeout_ms() -> u64 {
    30000
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            stt_base_url: default_stt_base_url(),
            tts_base_url: default_tts_base_url(),
            language: default_language(),
            voice: default_voice(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

impl SpeechConfig {
    /// Create a config with the given API key and defaults otherwise
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Default::default()
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.api_key.is_empty() {
            return Err("speech API key is required".to_string());
        }
        if self.language.is_empty() {
            return Err("language code is required".to_string());
        }
        Ok(())
    }
}
