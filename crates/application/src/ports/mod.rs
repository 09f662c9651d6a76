//! Port definitions for the application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these ports.

mod inference_port;
mod patient_store;
mod report_port;
mod speech_port;

pub use inference_port::{InferencePort, InferenceReply};
pub use patient_store::PatientStorePort;
pub use report_port::ReportPort;
pub use speech_port::{SpeechPort, SynthesisResult, TranscriptionResult};

#[cfg(test)]
pub use inference_port::MockInferencePort;
#[cfg(test)]
pub use patient_store::MockPatientStorePort;
#[cfg(test)]
pub use report_port::MockReportPort;
#[cfg(test)]
pub use speech_port::MockSpeechPort;
