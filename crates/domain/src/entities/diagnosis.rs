//! Diagnosis result entity - The parsed outcome of a triage analysis

use serde::{Deserialize, Serialize};

use crate::value_objects::RiskRating;

/// Placeholder cause when the model reply listed none
pub const NO_CAUSES_IDENTIFIED: &str = "No specific causes identified";

/// Placeholder assessment when the reply carried no life-threatening line
pub const NO_ASSESSMENT_AVAILABLE: &str = "No assessment available";

/// Assessment text used for every degraded result
pub const ASSESSMENT_UNAVAILABLE: &str = "Assessment unavailable";

/// Structured triage outcome extracted from a model reply
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosisResult {
    /// Potential causes, one entry per dash line in the reply
    pub causes: Vec<String>,
    /// Life-threatening assessment text
    pub life_threatening: String,
    /// Risk rating on the 0-10 scale
    pub risk_rating: RiskRating,
}

impl DiagnosisResult {
    /// Create a result from parsed parts, substituting the placeholder
    /// cause when the list is empty
    pub fn new(causes: Vec<String>, life_threatening: String, risk_rating: RiskRating) -> Self {
        let causes = if causes.is_empty() {
            vec![NO_CAUSES_IDENTIFIED.to_string()]
        } else {
            causes
        };
        Self {
            causes,
            life_threatening,
            risk_rating,
        }
    }

    /// Degraded result when the inference call could not be made
    pub fn transport_failure() -> Self {
        Self::degraded("Unable to process symptoms. Please try again later.")
    }

    /// Degraded result when the service answered but carried no usable reply
    pub fn empty_reply() -> Self {
        Self::degraded("Unable to analyze symptoms. Please try again or contact support.")
    }

    /// Degraded result for an unexpected internal failure
    pub fn internal_failure() -> Self {
        Self::degraded("System error. Please try again or contact support.")
    }

    fn degraded(cause: &str) -> Self {
        Self {
            causes: vec![cause.to_string()],
            life_threatening: ASSESSMENT_UNAVAILABLE.to_string(),
            risk_rating: RiskRating::FAILED,
        }
    }

    /// Whether this result came from a failed analysis rather than a parsed reply
    pub fn is_degraded(&self) -> bool {
        self.risk_rating == RiskRating::FAILED && self.life_threatening == ASSESSMENT_UNAVAILABLE
    }

    /// Risk tier derived from the rating
    pub fn tier(&self) -> RiskTier {
        RiskTier::from_rating(self.risk_rating)
    }
}

/// Coarse risk tier used to pick the recommended action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskTier {
    Low,
    Moderate,
    High,
}

impl RiskTier {
    /// Map a rating to its tier: 7+ high, 4-6 moderate, below 4 low
    pub const fn from_rating(rating: RiskRating) -> Self {
        match rating.value() {
            7..=10 => Self::High,
            4..=6 => Self::Moderate,
            _ => Self::Low,
        }
    }

    /// Short label shown next to the rating
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low Risk",
            Self::Moderate => "Moderate Risk",
            Self::High => "High Risk",
        }
    }

    /// Recommended action text for this tier
    pub const fn recommendation(self) -> &'static str {
        match self {
            Self::High => {
                "Seek immediate medical attention or call emergency services. Your symptoms \
                 suggest a potentially serious condition that requires urgent medical evaluation."
            },
            Self::Moderate => {
                "Schedule an appointment with your healthcare provider within the next 24-48 \
                 hours. In the meantime:\n- Rest and avoid strenuous activity\n- Monitor your \
                 symptoms for any changes\n- Keep track of any new symptoms"
            },
            Self::Low => {
                "Your condition can likely be managed at home. Consider:\n- Over-the-counter \
                 medications if appropriate\n- Rest and hydration\n- Apply ice/heat as needed\n\
                 - Monitor symptoms and seek medical attention if they worsen"
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_causes_get_placeholder() {
        let result = DiagnosisResult::new(Vec::new(), "No".to_string(), RiskRating::new(3));
        assert_eq!(result.causes, vec![NO_CAUSES_IDENTIFIED.to_string()]);
    }

    #[test]
    fn provided_causes_are_kept() {
        let result = DiagnosisResult::new(
            vec!["Migraine".to_string(), "Tension headache".to_string()],
            "No".to_string(),
            RiskRating::new(4),
        );
        assert_eq!(result.causes.len(), 2);
    }

    #[test]
    fn transport_failure_is_degraded() {
        let result = DiagnosisResult::transport_failure();
        assert!(result.is_degraded());
        assert_eq!(result.risk_rating, RiskRating::FAILED);
        assert_eq!(result.life_threatening, ASSESSMENT_UNAVAILABLE);
    }

    #[test]
    fn degraded_variants_carry_distinct_causes() {
        let transport = DiagnosisResult::transport_failure();
        let empty = DiagnosisResult::empty_reply();
        let internal = DiagnosisResult::internal_failure();
        assert_ne!(transport.causes, empty.causes);
        assert_ne!(empty.causes, internal.causes);
        assert_ne!(transport.causes, internal.causes);
    }

    #[test]
    fn parsed_result_is_not_degraded() {
        let result = DiagnosisResult::new(
            vec!["Flu".to_string()],
            "No - symptoms are mild".to_string(),
            RiskRating::new(3),
        );
        assert!(!result.is_degraded());
    }

    #[test]
    fn tier_boundaries() {
        assert_eq!(RiskTier::from_rating(RiskRating::new(0)), RiskTier::Low);
        assert_eq!(RiskTier::from_rating(RiskRating::new(3)), RiskTier::Low);
        assert_eq!(RiskTier::from_rating(RiskRating::new(4)), RiskTier::Moderate);
        assert_eq!(RiskTier::from_rating(RiskRating::new(6)), RiskTier::Moderate);
        assert_eq!(RiskTier::from_rating(RiskRating::new(7)), RiskTier::High);
        assert_eq!(RiskTier::from_rating(RiskRating::new(10)), RiskTier::High);
    }

    #[test]
    fn tier_labels() {
        assert_eq!(RiskTier::Low.label(), "Low Risk");
        assert_eq!(RiskTier::Moderate.label(), "Moderate Risk");
        assert_eq!(RiskTier::High.label(), "High Risk");
    }

    #[test]
    fn high_tier_recommends_emergency_evaluation() {
        assert!(RiskTier::High.recommendation().contains("immediate medical attention"));
    }
}
