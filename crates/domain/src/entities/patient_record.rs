//! Patient record entities - Identity, insurance, and history questionnaire

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// Basic patient identity captured at the start of intake
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientProfile {
    /// Patient's full name
    pub name: String,
    /// Date of birth
    pub date_of_birth: NaiveDate,
}

impl PatientProfile {
    /// Create a profile, rejecting an empty name
    pub fn new(name: impl Into<String>, date_of_birth: NaiveDate) -> Result<Self, DomainError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::ValidationError(
                "patient name is required".to_string(),
            ));
        }
        Ok(Self {
            name,
            date_of_birth,
        })
    }
}

/// Insurance details captured during intake
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsuranceInfo {
    /// Name of the insurance provider
    pub provider: String,
    /// Member or policy identifier
    pub member_id: String,
}

/// A named group of questionnaire fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuestionnaireCategory {
    /// Section heading shown in reports
    pub title: &'static str,
    /// Answer keys belonging to this section, in display order
    pub fields: &'static [&'static str],
}

/// The intake history questionnaire, grouped into six sections
pub const QUESTIONNAIRE_CATEGORIES: &[QuestionnaireCategory] = &[
    QuestionnaireCategory {
        title: "Personal Information",
        fields: &[
            "full_name",
            "date_of_birth",
            "gender",
            "preferred_language",
            "preferred_communication",
        ],
    },
    QuestionnaireCategory {
        title: "Medical History",
        fields: &[
            "medical_conditions",
            "current_symptoms",
            "disabilities",
            "past_surgeries",
            "past_hospitalizations",
            "past_illnesses",
            "family_history",
        ],
    },
    QuestionnaireCategory {
        title: "Mental Health",
        fields: &[
            "mental_health_history",
            "mental_health_diagnosis",
            "recent_mental_health",
        ],
    },
    QuestionnaireCategory {
        title: "COVID-19 History",
        fields: &["covid_history", "long_covid", "current_covid_symptoms"],
    },
    QuestionnaireCategory {
        title: "Lifestyle",
        fields: &["tobacco_use", "alcohol_use", "drug_use", "dietary_restrictions"],
    },
    QuestionnaireCategory {
        title: "Healthcare Management",
        fields: &[
            "primary_care",
            "primary_care_duration",
            "care_plan",
            "medication_review",
            "health_management",
            "support_needs",
            "insurance_coverage",
        ],
    },
];

/// The question asked for a given answer key, as shown during intake
/// and repeated in generated reports
#[must_use]
pub fn question_prompt(field: &str) -> Option<&'static str> {
    let prompt = match field {
        "full_name" => "What is your full name?",
        "date_of_birth" => "What is your date of birth?",
        "gender" => "What gender do you identify as?",
        "preferred_language" => "What is your preferred language, if any?",
        "preferred_communication" => {
            "What is your preferred method of communication? (e.g., phone, email, in-person)"
        },
        "medical_conditions" => {
            "Do you have any allergies or chronic conditions? If so, please list them."
        },
        "current_symptoms" => "Do you have any current symptoms or concerns?",
        "disabilities" => "Do you have any disabilities? If so, please describe them.",
        "past_surgeries" => "Have you had any surgeries in the past? If so, please list them.",
        "past_hospitalizations" => {
            "Have you had any hospitalizations in the past? If so, please list them."
        },
        "past_illnesses" => {
            "Have you had any major illnesses in the past? If so, please list them."
        },
        "family_history" => {
            "Do you have any family history of major illnesses? If so, please list them."
        },
        "mental_health_history" => {
            "Do you have any history of mental health conditions, substance abuse, domestic \
             violence or abuse, sexual abuse, PTSD, self-harm, eating disorders, sleep \
             disorders, chronic pain, heart disease, or any other illnesses? If so, please \
             describe them."
        },
        "mental_health_diagnosis" => {
            "Have you ever been diagnosed or treated for a mental health condition?"
        },
        "recent_mental_health" => {
            "Have you felt anxious, depressed, or hopeless in the last 2 weeks?"
        },
        "covid_history" => "Have you ever tested positive for COVID-19?",
        "long_covid" => {
            "Did you experience long-term symptoms such as fatigue, brain fog, or breathing \
             issues?"
        },
        "current_covid_symptoms" => {
            "Do you still experience any COVID-related symptoms today?"
        },
        "tobacco_use" => "Do you smoke or use tobacco products? If so, how often?",
        "alcohol_use" => "Do you consume alcohol? If so, how often?",
        "drug_use" => "Do you use recreational drugs? If so, how often?",
        "dietary_restrictions" => "Do you have any dietary restrictions?",
        "primary_care" => "Do you have a primary care provider?",
        "primary_care_duration" => {
            "How long have you been seeing your primary care provider?"
        },
        "care_plan" => "Are you following a care plan created with a doctor?",
        "medication_review" => {
            "Are your medications reviewed regularly by a healthcare professional?"
        },
        "health_management" => "Do you feel confident managing your own health?",
        "support_needs" => {
            "Do you need assistance from others to manage your health (e.g., emotional, \
             financial, physical)?"
        },
        "insurance_coverage" => {
            "Do you have insurance that covers your current health needs?"
        },
        _ => return None,
    };
    Some(prompt)
}

/// Completed (or partially completed) history questionnaire answers
///
/// Only answered questions are stored; blank answers are dropped on insert
/// so the persisted record never carries empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HistoryQuestionnaire {
    answers: BTreeMap<String, String>,
}

impl HistoryQuestionnaire {
    /// Create an empty questionnaire
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an answer, discarding it when blank
    pub fn record_answer(&mut self, key: impl Into<String>, answer: impl Into<String>) {
        let answer = answer.into();
        if !answer.trim().is_empty() {
            self.answers.insert(key.into(), answer);
        }
    }

    /// Look up an answer by key
    pub fn answer(&self, key: &str) -> Option<&str> {
        self.answers.get(key).map(String::as_str)
    }

    /// Number of answered questions
    pub fn answered_count(&self) -> usize {
        self.answers.len()
    }

    /// Whether nothing has been answered
    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    /// Answered fields of one category, in the category's display order
    pub fn answered_in_category<'a>(
        &'a self,
        category: &QuestionnaireCategory,
    ) -> impl Iterator<Item = (&'static str, &'a str)> {
        category
            .fields
            .iter()
            .filter_map(|&field| self.answer(field).map(|answer| (field, answer)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_rejects_empty_name() {
        let dob = NaiveDate::from_ymd_opt(1990, 4, 2).unwrap();
        assert!(PatientProfile::new("  ", dob).is_err());
    }

    #[test]
    fn profile_date_serializes_as_iso_date() {
        let dob = NaiveDate::from_ymd_opt(1990, 4, 2).unwrap();
        let profile = PatientProfile::new("Jane Doe", dob).unwrap();
        let json = serde_json::to_string(&profile).unwrap();
        assert!(json.contains("\"1990-04-02\""));
    }

    #[test]
    fn categories_cover_twenty_nine_fields() {
        let total: usize = QUESTIONNAIRE_CATEGORIES.iter().map(|c| c.fields.len()).sum();
        assert_eq!(total, 29);
    }

    #[test]
    fn category_fields_are_unique() {
        let mut seen = std::collections::BTreeSet::new();
        for category in QUESTIONNAIRE_CATEGORIES {
            for field in category.fields {
                assert!(seen.insert(*field), "duplicate field {field}");
            }
        }
    }

    #[test]
    fn every_field_has_a_question_prompt() {
        for category in QUESTIONNAIRE_CATEGORIES {
            for field in category.fields {
                assert!(question_prompt(field).is_some(), "missing prompt for {field}");
            }
        }
    }

    #[test]
    fn unknown_field_has_no_prompt() {
        assert!(question_prompt("shoe_size").is_none());
    }

    #[test]
    fn blank_answers_are_dropped() {
        let mut questionnaire = HistoryQuestionnaire::new();
        questionnaire.record_answer("tobacco_use", "  ");
        assert!(questionnaire.is_empty());
    }

    #[test]
    fn answers_are_retrievable() {
        let mut questionnaire = HistoryQuestionnaire::new();
        questionnaire.record_answer("tobacco_use", "No");
        assert_eq!(questionnaire.answer("tobacco_use"), Some("No"));
        assert_eq!(questionnaire.answered_count(), 1);
    }

    #[test]
    fn answered_in_category_respects_display_order() {
        let mut questionnaire = HistoryQuestionnaire::new();
        questionnaire.record_answer("drug_use", "No");
        questionnaire.record_answer("tobacco_use", "Occasionally");

        let lifestyle = &QUESTIONNAIRE_CATEGORIES[4];
        assert_eq!(lifestyle.title, "Lifestyle");
        let answered: Vec<_> = questionnaire.answered_in_category(lifestyle).collect();
        assert_eq!(
            answered,
            vec![("tobacco_use", "Occasionally"), ("drug_use", "No")]
        );
    }

    #[test]
    fn questionnaire_serializes_as_flat_map() {
        let mut questionnaire = HistoryQuestionnaire::new();
        questionnaire.record_answer("gender", "female");
        let json = serde_json::to_string(&questionnaire).unwrap();
        assert_eq!(json, r#"{"gender":"female"}"#);
    }
}
