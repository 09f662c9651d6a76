//! Application configuration

use ai_core::InferenceConfig;
use ai_speech::SpeechConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Inference configuration
    #[serde(default)]
    pub inference: InferenceConfig,

    /// Speech processing configuration
    #[serde(default)]
    pub speech: SpeechConfig,

    /// Storage configuration
    #[serde(default)]
    pub storage: StorageConfig,
}

/// On-disk storage configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory for patient record JSON files and generated reports
    #[serde(default = "default_data_dir")]
    pub data_dir: String,

    /// Subdirectory of `data_dir` for captured WAV recordings
    #[serde(default = "default_recordings_dir")]
    pub recordings_dir: String,
}

fn default_data_dir() -> String {
    ".".to_string()
}

fn default_recordings_dir() -> String {
    "recordings".to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            recordings_dir: default_recordings_dir(),
        }
    }
}

impl StorageConfig {
    /// Directory holding the patient record files
    #[must_use]
    pub fn data_path(&self) -> PathBuf {
        PathBuf::from(&self.data_dir)
    }

    /// Directory holding captured recordings
    #[must_use]
    pub fn recordings_path(&self) -> PathBuf {
        Path::new(&self.data_dir).join(&self.recordings_dir)
    }
}

impl AppConfig {
    /// Load configuration from defaults, an optional `config` file, and
    /// `TRIAGE_*` environment variables
    ///
    /// `GEMINI_API_KEY` and `GOOGLE_SPEECH_API_KEY` fill in the inference
    /// and speech keys when the config leaves them empty.
    pub fn load() -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            .set_default("inference.base_url", "https://generativelanguage.googleapis.com")?
            .set_default("inference.model", "gemini-2.0-flash")?
            .add_source(config::File::with_name("config").required(false))
            .add_source(
                config::Environment::with_prefix("TRIAGE")
                    .separator("_")
                    .try_parsing(true),
            );

        let mut loaded: Self = builder.build()?.try_deserialize()?;

        if loaded.inference.api_key.is_empty() {
            if let Ok(key) = std::env::var("GEMINI_API_KEY") {
                loaded.inference.api_key = key;
            }
        }
        if loaded.speech.api_key.is_empty() {
            if let Ok(key) = std::env::var("GOOGLE_SPEECH_API_KEY") {
                loaded.speech.api_key = key;
            }
        }

        Ok(loaded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_config_default() {
        let config = AppConfig::default();
        assert_eq!(config.storage.data_dir, ".");
        assert_eq!(config.storage.recordings_dir, "recordings");
        assert_eq!(config.inference.model, "gemini-2.0-flash");
    }

    #[test]
    fn storage_paths_are_joined() {
        let config = StorageConfig {
            data_dir: "/var/lib/triage".to_string(),
            recordings_dir: "recordings".to_string(),
        };
        assert_eq!(
            config.recordings_path(),
            PathBuf::from("/var/lib/triage/recordings")
        );
        assert_eq!(config.data_path(), PathBuf::from("/var/lib/triage"));
    }

    #[test]
    fn app_config_deserialization() {
        let json = r#"{"storage":{"data_dir":"/tmp/triage"}}"#;
        let config: AppConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.storage.data_dir, "/tmp/triage");
        assert_eq!(config.storage.recordings_dir, "recordings");
    }

    #[test]
    fn app_config_serialization_skips_api_keys() {
        let mut config = AppConfig::default();
        config.inference.api_key = "secret".to_string();
        let json = serde_json::to_string(&config).unwrap();
        assert!(!json.contains("secret"));
        assert!(json.contains("inference"));
        assert!(json.contains("storage"));
    }

    #[test]
    fn inference_section_overrides() {
        let json = r#"{"inference":{"model":"gemini-1.5-pro","timeout_ms":5000}}"#;
        let config: AppConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.inference.model, "gemini-1.5-pro");
        assert_eq!(config.inference.timeout_ms, 5000);
    }
}
