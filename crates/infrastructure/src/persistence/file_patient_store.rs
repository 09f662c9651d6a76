//! File-backed patient store
//!
//! Each record lives in its own JSON file under the data directory and is
//! overwritten on save. Recordings land in a subdirectory under timestamped
//! filenames so consecutive captures never clobber each other.

use std::path::{Path, PathBuf};

use application::error::ApplicationError;
use application::ports::PatientStorePort;
use async_trait::async_trait;
use chrono::Local;
use domain::{HistoryQuestionnaire, InsuranceInfo, PatientProfile};
use serde::{de::DeserializeOwned, Serialize};
use tokio::fs;
use tracing::{debug, instrument};

const PROFILE_FILE: &str = "user_info.json";
const INSURANCE_FILE: &str = "insurance_info.json";
const HISTORY_FILE: &str = "patient_history.json";

/// Patient store writing JSON files to a data directory
#[derive(Debug, Clone)]
pub struct FilePatientStore {
    data_dir: PathBuf,
    recordings_dir: PathBuf,
}

impl FilePatientStore {
    /// Create a store rooted at the given directories
    pub fn new(data_dir: impl Into<PathBuf>, recordings_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            recordings_dir: recordings_dir.into(),
        }
    }

    async fn write_json<T: Serialize + Sync>(
        &self,
        filename: &str,
        value: &T,
    ) -> Result<(), ApplicationError> {
        let bytes = serde_json::to_vec_pretty(value)
            .map_err(|e| ApplicationError::Storage(e.to_string()))?;

        fs::create_dir_all(&self.data_dir)
            .await
            .map_err(|e| ApplicationError::Storage(e.to_string()))?;

        let path = self.data_dir.join(filename);
        fs::write(&path, bytes)
            .await
            .map_err(|e| ApplicationError::Storage(e.to_string()))?;

        debug!(path = %path.display(), "Record saved");
        Ok(())
    }

    async fn read_json<T: DeserializeOwned>(
        &self,
        filename: &str,
    ) -> Result<Option<T>, ApplicationError> {
        let path = self.data_dir.join(filename);
        match fs::read(&path).await {
            Ok(bytes) => {
                let value = serde_json::from_slice(&bytes)
                    .map_err(|e| ApplicationError::Storage(e.to_string()))?;
                Ok(Some(value))
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(ApplicationError::Storage(e.to_string())),
        }
    }

    fn recording_filename() -> String {
        Local::now().format("audio_%Y%m%d_%H%M%S.wav").to_string()
    }

    /// Directory holding the record files
    #[must_use]
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[async_trait]
impl PatientStorePort for FilePatientStore {
    async fn save_profile(&self, profile: &PatientProfile) -> Result<(), ApplicationError> {
        self.write_json(PROFILE_FILE, profile).await
    }

    async fn load_profile(&self) -> Result<Option<PatientProfile>, ApplicationError> {
        self.read_json(PROFILE_FILE).await
    }

    async fn save_insurance(&self, insurance: &InsuranceInfo) -> Result<(), ApplicationError> {
        self.write_json(INSURANCE_FILE, insurance).await
    }

    async fn load_insurance(&self) -> Result<Option<InsuranceInfo>, ApplicationError> {
        self.read_json(INSURANCE_FILE).await
    }

    async fn save_history(
        &self,
        questionnaire: &HistoryQuestionnaire,
    ) -> Result<(), ApplicationError> {
        self.write_json(HISTORY_FILE, questionnaire).await
    }

    async fn load_history(&self) -> Result<Option<HistoryQuestionnaire>, ApplicationError> {
        self.read_json(HISTORY_FILE).await
    }

    #[instrument(skip(self, audio_data), fields(audio_size = audio_data.len()))]
    async fn save_recording(&self, audio_data: &[u8]) -> Result<PathBuf, ApplicationError> {
        fs::create_dir_all(&self.recordings_dir)
            .await
            .map_err(|e| ApplicationError::Storage(e.to_string()))?;

        let path = self.recordings_dir.join(Self::recording_filename());
        fs::write(&path, audio_data)
            .await
            .map_err(|e| ApplicationError::Storage(e.to_string()))?;

        debug!(path = %path.display(), "Recording saved");
        Ok(path)
    }
}
