//! Application layer - Use cases and orchestration
//!
//! Contains the triage analysis pipeline, port definitions, and the
//! services that orchestrate domain objects and infrastructure adapters.

pub mod analysis;
pub mod error;
pub mod ports;
pub mod services;

pub use analysis::{analysis_prompt, consultation_prompt, parse_diagnosis};
pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
