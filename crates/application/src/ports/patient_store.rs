//! Patient store port - Interface for persisting patient records

use std::path::PathBuf;

use async_trait::async_trait;
use domain::{HistoryQuestionnaire, InsuranceInfo, PatientProfile};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for patient record persistence
///
/// Writes overwrite the previous record; there is one patient per store.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait PatientStorePort: Send + Sync {
    /// Save the patient profile
    async fn save_profile(&self, profile: &PatientProfile) -> Result<(), ApplicationError>;

    /// Load the patient profile, if one has been saved
    async fn load_profile(&self) -> Result<Option<PatientProfile>, ApplicationError>;

    /// Save the insurance information
    async fn save_insurance(&self, insurance: &InsuranceInfo) -> Result<(), ApplicationError>;

    /// Load the insurance information, if saved
    async fn load_insurance(&self) -> Result<Option<InsuranceInfo>, ApplicationError>;

    /// Save the history questionnaire answers
    async fn save_history(
        &self,
        questionnaire: &HistoryQuestionnaire,
    ) -> Result<(), ApplicationError>;

    /// Load the history questionnaire, if saved
    async fn load_history(&self) -> Result<Option<HistoryQuestionnaire>, ApplicationError>;

    /// Save a WAV recording under a timestamped filename; returns its path
    async fn save_recording(&self, audio_data: &[u8]) -> Result<PathBuf, ApplicationError>;
}
