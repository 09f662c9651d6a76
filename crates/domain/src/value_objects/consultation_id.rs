//! Consultation identifier for tracking voice consultation sessions

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A unique consultation/session identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConsultationId(Uuid);

impl ConsultationId {
    /// Create a new random consultation ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create a consultation ID from an existing UUID
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Parse a consultation ID from a string
    pub fn parse(s: &str) -> Result<Self, uuid::Error> {
        Ok(Self(Uuid::parse_str(s)?))
    }

    /// Get the underlying UUID
    pub const fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for ConsultationId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ConsultationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for ConsultationId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}
