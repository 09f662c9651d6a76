//! Patient-reported pain rating on the 1-10 intake scale

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// A validated pain rating between 1 and 10 inclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct PainRating(u8);

impl PainRating {
    /// Create a pain rating, rejecting values outside 1-10
    pub const fn new(value: u8) -> Result<Self, DomainError> {
        if matches!(value, 1..=10) {
            Ok(Self(value))
        } else {
            Err(DomainError::InvalidPainRating(value))
        }
    }

    /// Get the numeric value
    pub const fn value(&self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for PainRating {
    type Error = DomainError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PainRating> for u8 {
    fn from(rating: PainRating) -> Self {
        rating.0
    }
}

impl fmt::Display for PainRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/10", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_full_scale() {
        for value in 1..=10 {
            assert!(PainRating::new(value).is_ok());
        }
    }

    #[test]
    fn rejects_zero() {
        assert!(matches!(
            PainRating::new(0),
            Err(DomainError::InvalidPainRating(0))
        ));
    }

    #[test]
    fn rejects_above_ten() {
        assert!(matches!(
            PainRating::new(11),
            Err(DomainError::InvalidPainRating(11))
        ));
    }

    #[test]
    fn display_uses_scale_suffix() {
        let rating = PainRating::new(7).unwrap();
        assert_eq!(rating.to_string(), "7/10");
    }

    #[test]
    fn serde_rejects_out_of_range() {
        let result: Result<PainRating, _> = serde_json::from_str("0");
        assert!(result.is_err());
    }

    #[test]
    fn serde_roundtrip() {
        let rating = PainRating::new(5).unwrap();
        let json = serde_json::to_string(&rating).unwrap();
        assert_eq!(json, "5");
        let parsed: PainRating = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, rating);
    }
}
