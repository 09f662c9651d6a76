//! Symptom report entity - What the patient told us before analysis

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;
use crate::value_objects::{PainRating, SymptomDuration};

/// A patient's self-reported symptoms ready for triage analysis
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SymptomReport {
    /// Free-text symptom description
    pub description: String,
    /// Pain level on the 1-10 intake scale
    pub pain_rating: PainRating,
    /// How long the symptoms have been present, when the patient knows
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<SymptomDuration>,
}

impl SymptomReport {
    /// Create a report, rejecting an empty description
    pub fn new(description: impl Into<String>, pain_rating: PainRating) -> Result<Self, DomainError> {
        let description = description.into();
        if description.trim().is_empty() {
            return Err(DomainError::ValidationError(
                "symptom description is required".to_string(),
            ));
        }
        Ok(Self {
            description,
            pain_rating,
            duration: None,
        })
    }

    /// Attach a symptom duration
    #[must_use]
    pub fn with_duration(mut self, duration: SymptomDuration) -> Self {
        self.duration = Some(duration);
        self
    }

    /// Description annotated with the pain level, the form the analysis prompt expects
    pub fn annotated_description(&self) -> String {
        match self.duration {
            Some(duration) => format!(
                "{} (Pain level: {}, duration: {duration})",
                self.description, self.pain_rating
            ),
            None => format!("{} (Pain level: {})", self.description, self.pain_rating),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value_objects::DurationUnit;

    fn rating(value: u8) -> PainRating {
        PainRating::new(value).unwrap()
    }

    #[test]
    fn rejects_empty_description() {
        assert!(SymptomReport::new("   ", rating(5)).is_err());
    }

    #[test]
    fn annotated_description_appends_pain_level() {
        let report = SymptomReport::new("severe headache", rating(7)).unwrap();
        assert_eq!(
            report.annotated_description(),
            "severe headache (Pain level: 7/10)"
        );
    }

    #[test]
    fn annotated_description_includes_duration_when_present() {
        let report = SymptomReport::new("persistent cough", rating(3))
            .unwrap()
            .with_duration(SymptomDuration::new(2, DurationUnit::Weeks).unwrap());
        assert_eq!(
            report.annotated_description(),
            "persistent cough (Pain level: 3/10, duration: 2 weeks)"
        );
    }

    #[test]
    fn duration_defaults_to_none() {
        let report = SymptomReport::new("dizziness", rating(4)).unwrap();
        assert!(report.duration.is_none());
    }
}
