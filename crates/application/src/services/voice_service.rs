//! Voice service - Recording persistence, transcription, and spoken replies
//!
//! Transcription failures degrade into sentinel transcripts instead of
//! errors: the intake flow treats "we heard nothing" and "the service is
//! down" as answers the caller can react to, not as aborts.

use std::{fmt, path::PathBuf, sync::Arc};

use tracing::{debug, instrument, warn};

use crate::error::ApplicationError;
use crate::ports::{PatientStorePort, SpeechPort, SynthesisResult};

/// Transcript used when the audio carried no recognizable speech
pub const SPEECH_NOT_RECOGNIZED: &str = "Speech could not be recognized";

/// Transcript used when the recognition service could not be reached
pub const RESULTS_UNAVAILABLE: &str = "Could not request results";

/// Outcome of capturing and transcribing a recording
#[derive(Debug, Clone)]
pub struct CaptureOutcome {
    /// Transcript text, or one of the sentinel values
    pub transcript: String,
    /// Whether the transcript is real speech rather than a sentinel
    pub recognized: bool,
    /// Where the WAV recording was stored
    pub recording_path: PathBuf,
}

impl CaptureOutcome {
    fn recognized(transcript: String, recording_path: PathBuf) -> Self {
        Self {
            transcript,
            recognized: true,
            recording_path,
        }
    }

    fn sentinel(transcript: &str, recording_path: PathBuf) -> Self {
        Self {
            transcript: transcript.to_string(),
            recognized: false,
            recording_path,
        }
    }
}

/// Service for the voice side of intake
pub struct VoiceService {
    speech: Arc<dyn SpeechPort>,
    store: Arc<dyn PatientStorePort>,
}

impl fmt::Debug for VoiceService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VoiceService").finish_non_exhaustive()
    }
}

impl VoiceService {
    /// Create a new voice service
    pub fn new(speech: Arc<dyn SpeechPort>, store: Arc<dyn PatientStorePort>) -> Self {
        Self { speech, store }
    }

    /// Persist a WAV recording and transcribe it
    ///
    /// The recording is always saved, even when transcription fails.
    #[instrument(skip(self, audio_data), fields(audio_size = audio_data.len()))]
    pub async fn capture(&self, audio_data: Vec<u8>) -> Result<CaptureOutcome, ApplicationError> {
        let recording_path = self.store.save_recording(&audio_data).await?;
        debug!(path = %recording_path.display(), "Recording saved");

        match self.speech.transcribe(audio_data).await {
            Ok(transcription) => Ok(CaptureOutcome::recognized(
                transcription.text,
                recording_path,
            )),
            Err(ApplicationError::NoSpeechDetected) => {
                debug!("No speech detected in recording");
                Ok(CaptureOutcome::sentinel(SPEECH_NOT_RECOGNIZED, recording_path))
            },
            Err(ApplicationError::Speech(reason)) => {
                warn!(reason = %reason, "Transcription service unavailable");
                Ok(CaptureOutcome::sentinel(RESULTS_UNAVAILABLE, recording_path))
            },
            Err(other) => Err(other),
        }
    }

    /// Synthesize a spoken reply, degrading to silence on failure
    ///
    /// Voice output is a nicety; a TTS outage must not break the exchange.
    #[instrument(skip(self, text), fields(chars = text.len()))]
    pub async fn speak(&self, text: &str) -> Option<SynthesisResult> {
        match self.speech.synthesize(text.to_string()).await {
            Ok(result) => Some(result),
            Err(err) => {
                warn!(error = %err, "Speech synthesis failed, continuing without audio");
                None
            },
        }
    }

    /// Check if the speech backend is available
    pub async fn is_available(&self) -> bool {
        self.speech.is_available().await
    }
}
