//! Consultation service - Turn-by-turn voice consultation flow

use std::{fmt, sync::Arc};

use domain::{Consultation, ConsultationTurn};
use tracing::{debug, instrument};

use crate::analysis::consultation_prompt;
use crate::error::ApplicationError;
use crate::ports::InferencePort;

/// Greeting spoken by the assistant at the start of every consultation
pub const GREETING: &str = "Hello, I'm your virtual doctor. How can I help you today?";

/// Service for running voice consultations
pub struct ConsultationService {
    inference: Arc<dyn InferencePort>,
}

impl fmt::Debug for ConsultationService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConsultationService").finish_non_exhaustive()
    }
}

impl ConsultationService {
    /// Create a new consultation service
    pub fn new(inference: Arc<dyn InferencePort>) -> Self {
        Self { inference }
    }

    /// Start a consultation with the opening doctor greeting
    pub fn begin(&self) -> Result<Consultation, ApplicationError> {
        let mut consultation = Consultation::new();
        consultation.add_turn(ConsultationTurn::doctor(GREETING))?;
        Ok(consultation)
    }

    /// Record a patient utterance and generate the doctor's reply
    ///
    /// The consultation only ends when the caller closes it; this method
    /// keeps the exchange going for as long as turns arrive.
    #[instrument(skip(self, consultation, text), fields(id = %consultation.id))]
    pub async fn patient_says(
        &self,
        consultation: &mut Consultation,
        text: impl Into<String>,
    ) -> Result<String, ApplicationError> {
        consultation.add_turn(ConsultationTurn::patient(text.into()))?;

        let prompt = consultation_prompt(consultation);
        let reply = self.inference.generate(&prompt).await?;
        let answer = reply.content.trim().to_string();

        debug!(
            patient_turns = consultation.patient_turn_count(),
            "Doctor reply generated"
        );

        consultation.add_turn(ConsultationTurn::doctor(&answer))?;
        Ok(answer)
    }

    /// Close the consultation
    pub fn end(&self, consultation: &mut Consultation) {
        consultation.close();
    }
}

#[cfg(test)]
mod tests {
    use domain::Speaker;

    use super::*;
    use crate::ports::{InferenceReply, MockInferencePort};

    fn doctor_reply(content: &str) -> InferenceReply {
        InferenceReply {
            content: content.to_string(),
            model: "test-model".to_string(),
        }
    }

    #[tokio::test]
    async fn begin_opens_with_greeting() {
        let service = ConsultationService::new(Arc::new(MockInferencePort::new()));
        let consultation = service.begin().unwrap();

        assert_eq!(consultation.turns.len(), 1);
        assert_eq!(consultation.turns[0].speaker, Speaker::Doctor);
        assert_eq!(consultation.turns[0].text, GREETING);
    }

    #[tokio::test]
    async fn patient_turn_gets_doctor_reply_appended() {
        let mut mock = MockInferencePort::new();
        mock.expect_generate()
            .withf(|prompt| prompt.contains("Patient: My chest hurts"))
            .returning(|_| Ok(doctor_reply("  When did the pain start?  ")));

        let service = ConsultationService::new(Arc::new(mock));
        let mut consultation = service.begin().unwrap();

        let answer = service
            .patient_says(&mut consultation, "My chest hurts")
            .await
            .unwrap();

        assert_eq!(answer, "When did the pain start?");
        assert_eq!(consultation.turns.len(), 3);
        assert_eq!(consultation.patient_turn_count(), 1);
    }

    #[tokio::test]
    async fn inference_failure_leaves_patient_turn_recorded() {
        let mut mock = MockInferencePort::new();
        mock.expect_generate()
            .returning(|_| Err(ApplicationError::Inference("down".to_string())));

        let service = ConsultationService::new(Arc::new(mock));
        let mut consultation = service.begin().unwrap();

        let result = service.patient_says(&mut consultation, "Hello").await;
        assert!(result.is_err());
        assert_eq!(consultation.patient_turn_count(), 1);
        assert_eq!(consultation.turns.len(), 2);
    }

    #[tokio::test]
    async fn closed_consultation_rejects_turns() {
        let service = ConsultationService::new(Arc::new(MockInferencePort::new()));
        let mut consultation = service.begin().unwrap();
        service.end(&mut consultation);

        let result = service.patient_says(&mut consultation, "Hello?").await;
        assert!(result.is_err());
        assert!(consultation.is_closed());
    }
}
