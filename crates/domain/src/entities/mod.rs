//! Domain entities - Objects with identity and lifecycle

mod appointment;
mod consultation;
mod diagnosis;
mod patient_record;
mod symptom_report;

pub use appointment::Appointment;
pub use consultation::{Consultation, ConsultationTurn, Speaker};
pub use diagnosis::{
    DiagnosisResult, RiskTier, ASSESSMENT_UNAVAILABLE, NO_ASSESSMENT_AVAILABLE,
    NO_CAUSES_IDENTIFIED,
};
pub use patient_record::{
    question_prompt, HistoryQuestionnaire, InsuranceInfo, PatientProfile, QuestionnaireCategory,
    QUESTIONNAIRE_CATEGORIES,
};
pub use symptom_report::SymptomReport;
