//! Infrastructure layer - Adapters for external systems
//!
//! Implements ports defined in the application layer: Gemini inference,
//! Google speech services, on-disk patient records, and PDF reports.

pub mod adapters;
pub mod config;
pub mod persistence;
pub mod report;

pub use adapters::{GeminiInferenceAdapter, GoogleSpeechAdapter};
pub use config::{AppConfig, StorageConfig};
pub use persistence::FilePatientStore;
pub use report::PdfReportRenderer;
