//! Application services - Use case orchestration

mod appointment_service;
mod consultation_service;
mod intake_service;
mod triage_service;
mod voice_service;

pub use appointment_service::AppointmentService;
pub use consultation_service::{ConsultationService, GREETING};
pub use intake_service::IntakeService;
pub use triage_service::{TriageNotice, TriageOutcome, TriageService};
pub use voice_service::{
    CaptureOutcome, VoiceService, RESULTS_UNAVAILABLE, SPEECH_NOT_RECOGNIZED,
};
