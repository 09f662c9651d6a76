//! Risk rating extracted from the model's triage reply

use std::fmt;

use serde::{Deserialize, Serialize};

/// An integer risk rating on the 0-10 scale
///
/// Values above 10 are clamped on construction; the parser can therefore
/// feed it whatever integer it scraped without a separate validation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub struct RiskRating(u8);

impl RiskRating {
    /// Rating reported when the upstream call failed entirely
    pub const FAILED: Self = Self(0);

    /// Rating assumed when a rating line carries no digits
    pub const UNPARSED: Self = Self(5);

    /// Create a rating, clamping to the 0-10 scale
    pub const fn new(value: u8) -> Self {
        if value > 10 { Self(10) } else { Self(value) }
    }

    /// Get the numeric value
    pub const fn value(&self) -> u8 {
        self.0
    }

    /// Whether the emergency-care banner should be shown (rating >= 8)
    pub const fn requires_emergency_care(&self) -> bool {
        self.0 >= 8
    }

    /// Whether scheduling an appointment should be offered (rating >= 7)
    pub const fn warrants_appointment(&self) -> bool {
        self.0 >= 7
    }
}

impl Default for RiskRating {
    fn default() -> Self {
        Self::UNPARSED
    }
}

impl From<u8> for RiskRating {
    fn from(value: u8) -> Self {
        Self::new(value)
    }
}

impl From<RiskRating> for u8 {
    fn from(rating: RiskRating) -> Self {
        rating.0
    }
}

impl fmt::Display for RiskRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/10", self.0)
    }
}
