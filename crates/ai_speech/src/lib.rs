//! AI Speech - Audio capture, Speech-to-Text and Text-to-Speech
//!
//! Provides the voice side of the intake flow:
//! - `capture` - Microphone-style recording into in-memory WAV data
//! - `SpeechToText` / `TextToSpeech` - Ports for speech processing
//! - `providers` - Google Cloud Speech / Text-to-Speech adapters
//!
//! # Architecture
//!
//! This crate follows the ports & adapters pattern:
//! - `ports` module defines the traits (ports)
//! - `providers` module contains concrete implementations (adapters)
//!
//! Live microphone input sits behind the `device-capture` feature so the
//! default build needs no platform audio libraries; any `AudioSource`
//! implementation can feed the recorder.

pub mod capture;
pub mod config;
pub mod error;
pub mod ports;
pub mod providers;
pub mod types;

#[cfg(feature = "device-capture")]
pub use capture::DeviceSource;
pub use capture::{AudioSource, Recorder, CHUNK_SAMPLES, SAMPLE_RATE_HZ};
pub use config::SpeechConfig;
pub use error::SpeechError;
pub use ports::{SpeechToText, TextToSpeech};
pub use providers::google::GoogleSpeechProvider;
pub use types::{AudioData, AudioFormat, Transcription};
