//! Intake service - Patient record collection and report generation

use std::{fmt, path::PathBuf, sync::Arc};

use domain::{HistoryQuestionnaire, InsuranceInfo, PatientProfile};
use tracing::{debug, instrument};

use crate::error::ApplicationError;
use crate::ports::{PatientStorePort, ReportPort};

/// Service for collecting patient records and producing reports
pub struct IntakeService {
    store: Arc<dyn PatientStorePort>,
    reports: Arc<dyn ReportPort>,
}

impl fmt::Debug for IntakeService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntakeService").finish_non_exhaustive()
    }
}

impl IntakeService {
    /// Create a new intake service
    pub fn new(store: Arc<dyn PatientStorePort>, reports: Arc<dyn ReportPort>) -> Self {
        Self { store, reports }
    }

    /// Persist the patient profile
    #[instrument(skip(self, profile))]
    pub async fn record_profile(&self, profile: &PatientProfile) -> Result<(), ApplicationError> {
        self.store.save_profile(profile).await
    }

    /// Load the previously saved profile, if any
    pub async fn saved_profile(&self) -> Result<Option<PatientProfile>, ApplicationError> {
        self.store.load_profile().await
    }

    /// Persist the insurance information
    #[instrument(skip(self, insurance))]
    pub async fn record_insurance(
        &self,
        insurance: &InsuranceInfo,
    ) -> Result<(), ApplicationError> {
        self.store.save_insurance(insurance).await
    }

    /// Persist the questionnaire answers and render the history report
    ///
    /// Returns the path of the generated PDF.
    #[instrument(skip(self, questionnaire), fields(answers = questionnaire.answered_count()))]
    pub async fn submit_history(
        &self,
        questionnaire: &HistoryQuestionnaire,
    ) -> Result<PathBuf, ApplicationError> {
        self.store.save_history(questionnaire).await?;
        let path = self.reports.history_report(questionnaire).await?;
        debug!(path = %path.display(), "History report generated");
        Ok(path)
    }

    /// Render a flat summary report of everything on file
    ///
    /// Requires a saved profile; insurance and history sections are
    /// included only when present.
    #[instrument(skip(self))]
    pub async fn summary_report(&self) -> Result<PathBuf, ApplicationError> {
        let profile = self
            .store
            .load_profile()
            .await?
            .ok_or_else(|| ApplicationError::Storage("no patient profile on file".to_string()))?;

        let mut entries = vec![
            ("Name".to_string(), profile.name.clone()),
            (
                "Date of Birth".to_string(),
                profile.date_of_birth.format("%Y-%m-%d").to_string(),
            ),
        ];

        if let Some(insurance) = self.store.load_insurance().await? {
            entries.push(("Insurance Provider".to_string(), insurance.provider));
            entries.push(("Member ID".to_string(), insurance.member_id));
        }

        if let Some(history) = self.store.load_history().await? {
            for category in domain::QUESTIONNAIRE_CATEGORIES {
                for (field, answer) in history.answered_in_category(category) {
                    entries.push((format!("{} / {field}", category.title), answer.to_string()));
                }
            }
        }

        self.reports.summary_report(&profile, &entries).await
    }
}
