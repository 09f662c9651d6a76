//! Configuration for the inference engine

use serde::{Deserialize, Serialize};

/// Configuration for the Gemini inference engine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InferenceConfig {
    /// Base URL of the Gemini API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Model to use for generation
    #[serde(default = "default_model")]
    pub model: String,

    /// API key; sent as a query parameter, never logged
    #[serde(default, skip_serializing)]
    pub api_key: String,

    /// Request timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_base_url() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

fn default_model() -> String {
    "gemini-2.0-flash".to_string()
}

const fn default_timeout_ms() -> u64 {
    30000
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            model: default_model(),
            api_key: String::new(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

impl InferenceConfig {
    /// Create a config with the given API key and defaults otherwise
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Default::default()
        }
    }
}
