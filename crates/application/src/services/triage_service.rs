//! Triage service - Symptom analysis orchestration
//!
//! Analysis never fails outright: when the inference call goes wrong the
//! caller gets a degraded diagnosis plus a notice describing what happened,
//! mirroring how the intake flow keeps working without the AI service.

use std::{fmt, sync::Arc};

use domain::{DiagnosisResult, SymptomReport};
use tracing::{debug, instrument, warn};

use crate::analysis::{analysis_prompt, parse_diagnosis};
use crate::error::ApplicationError;
use crate::ports::InferencePort;

/// Why an analysis came back degraded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriageNotice {
    /// The inference service could not be reached
    Transport,
    /// The service answered but returned no usable reply
    EmptyReply,
    /// Something unexpected failed on our side
    Internal,
}

impl TriageNotice {
    /// User-facing explanation for the degraded result
    pub const fn message(self) -> &'static str {
        match self {
            Self::Transport => "Error connecting to the AI service.",
            Self::EmptyReply => {
                "Unable to get a response from the AI service. Please try again."
            },
            Self::Internal => "An unexpected error occurred.",
        }
    }
}

/// Outcome of a triage analysis
#[derive(Debug, Clone)]
pub struct TriageOutcome {
    /// Parsed (or degraded) diagnosis
    pub diagnosis: DiagnosisResult,
    /// Set when the diagnosis is degraded
    pub notice: Option<TriageNotice>,
}

/// Service for analyzing symptom reports
pub struct TriageService {
    inference: Arc<dyn InferencePort>,
}

impl fmt::Debug for TriageService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TriageService").finish_non_exhaustive()
    }
}

impl TriageService {
    /// Create a new triage service
    pub fn new(inference: Arc<dyn InferencePort>) -> Self {
        Self { inference }
    }

    /// Analyze a symptom report
    #[instrument(skip(self, report), fields(pain = %report.pain_rating))]
    pub async fn analyze(&self, report: &SymptomReport) -> TriageOutcome {
        let prompt = analysis_prompt(&report.annotated_description());

        match self.inference.generate(&prompt).await {
            Ok(reply) => {
                debug!(model = %reply.model, "Analysis reply received");
                TriageOutcome {
                    diagnosis: parse_diagnosis(&reply.content),
                    notice: None,
                }
            },
            Err(err) => {
                warn!(error = %err, "Analysis failed, degrading");
                let (diagnosis, notice) = match err {
                    ApplicationError::EmptyInferenceReply => {
                        (DiagnosisResult::empty_reply(), TriageNotice::EmptyReply)
                    },
                    ApplicationError::Inference(_) => {
                        (DiagnosisResult::transport_failure(), TriageNotice::Transport)
                    },
                    _ => (DiagnosisResult::internal_failure(), TriageNotice::Internal),
                };
                TriageOutcome {
                    diagnosis,
                    notice: Some(notice),
                }
            },
        }
    }

    /// Check if the underlying inference is healthy
    pub async fn is_healthy(&self) -> bool {
        self.inference.is_healthy().await
    }

    /// Get the current model name
    pub fn current_model(&self) -> String {
        self.inference.current_model()
    }
}

#[cfg(test)]
mod tests {
    use domain::{PainRating, RiskRating, RiskTier};

    use super::*;
    use crate::ports::{InferenceReply, MockInferencePort};

    fn report() -> SymptomReport {
        SymptomReport::new("severe headache", PainRating::new(7).unwrap()).unwrap()
    }

    fn reply(content: &str) -> InferenceReply {
        InferenceReply {
            content: content.to_string(),
            model: "test-model".to_string(),
        }
    }

    #[tokio::test]
    async fn analyze_parses_successful_reply() {
        let mut mock = MockInferencePort::new();
        mock.expect_generate()
            .withf(|prompt| prompt.contains("severe headache (Pain level: 7/10)"))
            .returning(|_| {
                Ok(reply(
                    "- Migraine\nLife-Threatening Assessment: No - benign\nRisk Rating: 4",
                ))
            });

        let service = TriageService::new(Arc::new(mock));
        let outcome = service.analyze(&report()).await;

        assert!(outcome.notice.is_none());
        assert_eq!(outcome.diagnosis.causes, vec!["Migraine"]);
        assert_eq!(outcome.diagnosis.risk_rating.value(), 4);
        assert_eq!(outcome.diagnosis.tier(), RiskTier::Moderate);
    }

    #[tokio::test]
    async fn transport_failure_degrades_with_notice() {
        let mut mock = MockInferencePort::new();
        mock.expect_generate()
            .returning(|_| Err(ApplicationError::Inference("connection refused".to_string())));

        let service = TriageService::new(Arc::new(mock));
        let outcome = service.analyze(&report()).await;

        assert_eq!(outcome.notice, Some(TriageNotice::Transport));
        assert!(outcome.diagnosis.is_degraded());
        assert_eq!(outcome.diagnosis.risk_rating, RiskRating::FAILED);
    }

    #[tokio::test]
    async fn empty_reply_degrades_with_its_own_notice() {
        let mut mock = MockInferencePort::new();
        mock.expect_generate()
            .returning(|_| Err(ApplicationError::EmptyInferenceReply));

        let service = TriageService::new(Arc::new(mock));
        let outcome = service.analyze(&report()).await;

        assert_eq!(outcome.notice, Some(TriageNotice::EmptyReply));
        assert_eq!(
            outcome.diagnosis.causes,
            vec!["Unable to analyze symptoms. Please try again or contact support."]
        );
    }

    #[tokio::test]
    async fn unexpected_errors_degrade_as_internal() {
        let mut mock = MockInferencePort::new();
        mock.expect_generate()
            .returning(|_| Err(ApplicationError::Internal("oops".to_string())));

        let service = TriageService::new(Arc::new(mock));
        let outcome = service.analyze(&report()).await;

        assert_eq!(outcome.notice, Some(TriageNotice::Internal));
        assert_eq!(
            outcome.diagnosis.causes,
            vec!["System error. Please try again or contact support."]
        );
    }

    #[test]
    fn notice_messages_are_distinct() {
        assert_ne!(TriageNotice::Transport.message(), TriageNotice::EmptyReply.message());
        assert_ne!(TriageNotice::EmptyReply.message(), TriageNotice::Internal.message());
    }
}
