//! AI Core - Inference engine for symptom analysis
//!
//! Provides abstractions for LLM inference backed by the Gemini
//! `generateContent` REST API.

pub mod config;
pub mod error;
pub mod gemini;
pub mod ports;

pub use config::InferenceConfig;
pub use error::InferenceError;
pub use gemini::GeminiInferenceEngine;
pub use ports::{InferenceEngine, InferenceRequest, InferenceResponse};
