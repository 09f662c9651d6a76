//! Consultation entity - A spoken exchange between patient and assistant

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::DomainError;
use crate::value_objects::ConsultationId;

/// Who produced a consultation turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Speaker {
    Doctor,
    Patient,
}

impl Speaker {
    /// Label used in transcripts and prompts
    pub const fn label(self) -> &'static str {
        match self {
            Self::Doctor => "Doctor",
            Self::Patient => "Patient",
        }
    }
}

/// One utterance in a consultation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsultationTurn {
    /// Who spoke
    pub speaker: Speaker,
    /// What was said
    pub text: String,
    /// When the turn was recorded
    pub timestamp: DateTime<Utc>,
}

impl ConsultationTurn {
    /// Create a turn spoken by the assistant doctor
    pub fn doctor(text: impl Into<String>) -> Self {
        Self::new(Speaker::Doctor, text)
    }

    /// Create a turn spoken by the patient
    pub fn patient(text: impl Into<String>) -> Self {
        Self::new(Speaker::Patient, text)
    }

    fn new(speaker: Speaker, text: impl Into<String>) -> Self {
        Self {
            speaker,
            text: text.into(),
            timestamp: Utc::now(),
        }
    }
}

/// A voice consultation session with its ordered turns
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Consultation {
    /// Unique session identifier
    pub id: ConsultationId,
    /// Turns in the order they were spoken
    pub turns: Vec<ConsultationTurn>,
    /// When the session started
    pub started_at: DateTime<Utc>,
    /// When the session was closed, if it has been
    #[serde(skip_serializing_if = "Option::is_none")]
    pub closed_at: Option<DateTime<Utc>>,
}

impl Consultation {
    /// Start a new consultation
    pub fn new() -> Self {
        Self {
            id: ConsultationId::new(),
            turns: Vec::new(),
            started_at: Utc::now(),
            closed_at: None,
        }
    }

    /// Append a turn, rejecting turns on a closed session
    pub fn add_turn(&mut self, turn: ConsultationTurn) -> Result<(), DomainError> {
        if self.is_closed() {
            return Err(DomainError::NotPermitted(
                "consultation already closed".to_string(),
            ));
        }
        self.turns.push(turn);
        Ok(())
    }

    /// Number of turns spoken by the patient
    pub fn patient_turn_count(&self) -> usize {
        self.turns
            .iter()
            .filter(|t| t.speaker == Speaker::Patient)
            .count()
    }

    /// Render the full exchange as "Speaker: text" lines, oldest first
    pub fn transcript(&self) -> String {
        self.turns
            .iter()
            .map(|t| format!("{}: {}", t.speaker.label(), t.text))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Close the session; further turns are rejected
    pub fn close(&mut self) {
        if self.closed_at.is_none() {
            self.closed_at = Some(Utc::now());
        }
    }

    /// Whether the session has been closed
    pub fn is_closed(&self) -> bool {
        self.closed_at.is_some()
    }
}

impl Default for Consultation {
    fn default() -> Self {
        Self::new()
    }
}
