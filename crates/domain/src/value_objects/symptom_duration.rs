//! How long the patient has been experiencing their symptoms

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// Unit of time the patient reported their symptom duration in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DurationUnit {
    Hours,
    Days,
    Weeks,
    Months,
}

impl DurationUnit {
    /// Singular label, used when the duration value is exactly one
    const fn singular(self) -> &'static str {
        match self {
            Self::Hours => "hour",
            Self::Days => "day",
            Self::Weeks => "week",
            Self::Months => "month",
        }
    }

    const fn plural(self) -> &'static str {
        match self {
            Self::Hours => "hours",
            Self::Days => "days",
            Self::Weeks => "weeks",
            Self::Months => "months",
        }
    }
}

impl fmt::Display for DurationUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.plural())
    }
}

/// A patient-reported symptom duration such as "3 days" or "1 week"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SymptomDuration {
    value: u32,
    unit: DurationUnit,
}

impl SymptomDuration {
    /// Create a duration, rejecting a zero value
    pub fn new(value: u32, unit: DurationUnit) -> Result<Self, DomainError> {
        if value == 0 {
            return Err(DomainError::InvalidDuration(
                "duration value must be at least 1".to_string(),
            ));
        }
        Ok(Self { value, unit })
    }

    /// Get the numeric value
    pub const fn value(&self) -> u32 {
        self.value
    }

    /// Get the unit
    pub const fn unit(&self) -> DurationUnit {
        self.unit
    }
}

impl fmt::Display for SymptomDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.value == 1 {
            write!(f, "1 {}", self.unit.singular())
        } else {
            write!(f, "{} {}", self.value, self.unit.plural())
        }
    }
}
