//! Symptom analysis pipeline
//!
//! Builds the prompts sent to the inference engine and parses the
//! line-oriented replies back into structured diagnosis results.

mod parser;
mod prompt;

pub use parser::parse_diagnosis;
pub use prompt::{analysis_prompt, consultation_prompt};
