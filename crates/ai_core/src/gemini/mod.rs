//! Gemini inference engine
//!
//! Talks to the `generateContent` REST endpoint of the Gemini API.

mod client;

pub use client::GeminiInferenceEngine;
