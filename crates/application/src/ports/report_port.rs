//! Report port - Interface for rendering PDF reports

use std::path::PathBuf;

use async_trait::async_trait;
use domain::{HistoryQuestionnaire, PatientProfile};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for patient report generation
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ReportPort: Send + Sync {
    /// Render the categorized patient history report; returns the PDF path
    async fn history_report(
        &self,
        questionnaire: &HistoryQuestionnaire,
    ) -> Result<PathBuf, ApplicationError>;

    /// Render a flat key/value summary report; returns the PDF path
    async fn summary_report(
        &self,
        profile: &PatientProfile,
        entries: &[(String, String)],
    ) -> Result<PathBuf, ApplicationError>;
}
