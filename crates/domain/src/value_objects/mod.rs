//! Value objects - Immutable, validated domain primitives

mod consultation_id;
mod pain_rating;
mod risk_rating;
mod symptom_duration;

pub use consultation_id::ConsultationId;
pub use pain_rating::PainRating;
pub use risk_rating::RiskRating;
pub use symptom_duration::{DurationUnit, SymptomDuration};
