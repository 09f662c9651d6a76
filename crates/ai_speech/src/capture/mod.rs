//! Audio capture into in-memory WAV data
//!
//! A `Recorder` drains an `AudioSource` on a worker thread until stopped,
//! then flushes the collected samples into a WAV buffer. The source
//! abstraction keeps the recorder testable without audio hardware; the
//! `device-capture` feature provides a microphone-backed source.

use std::io::Cursor;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::JoinHandle;

use parking_lot::Mutex;
use tracing::{debug, info};

use crate::error::SpeechError;
use crate::types::{AudioData, AudioFormat};

#[cfg(feature = "device-capture")]
mod device;

#[cfg(feature = "device-capture")]
pub use device::DeviceSource;

/// Samples requested from the source per read
pub const CHUNK_SAMPLES: usize = 1024;

/// Capture sample rate in Hz
pub const SAMPLE_RATE_HZ: u32 = 44100;

/// Capture channel count (mono)
pub const CHANNELS: u16 = 1;

/// Bits per captured sample
pub const BITS_PER_SAMPLE: u16 = 16;

/// A pull-based source of mono 16-bit samples at `SAMPLE_RATE_HZ`
pub trait AudioSource: Send + 'static {
    /// Read the next chunk of up to `CHUNK_SAMPLES` samples
    ///
    /// Returns `Ok(None)` when the source is exhausted. An empty chunk is
    /// permitted and means no samples were available yet.
    fn next_chunk(&mut self) -> Result<Option<Vec<i16>>, SpeechError>;
}

/// An in-progress recording
///
/// Created by [`Recorder::start`]; the worker thread keeps draining the
/// source until [`Recorder::stop`] raises the stop flag and joins it.
/// Stopping consumes the recorder, so a finished recording cannot be
/// resumed or stopped twice.
#[derive(Debug)]
pub struct Recorder {
    stop_flag: Arc<AtomicBool>,
    samples: Arc<Mutex<Vec<i16>>>,
    worker: Option<JoinHandle<Result<(), SpeechError>>>,
}

impl Recorder {
    /// Start recording from the given source
    pub fn start(mut source: impl AudioSource) -> Self {
        let stop_flag = Arc::new(AtomicBool::new(false));
        let samples = Arc::new(Mutex::new(Vec::new()));

        let worker_flag = Arc::clone(&stop_flag);
        let worker_samples = Arc::clone(&samples);
        let worker = std::thread::spawn(move || {
            while !worker_flag.load(Ordering::SeqCst) {
                match source.next_chunk()? {
                    Some(chunk) => {
                        if !chunk.is_empty() {
                            worker_samples.lock().extend_from_slice(&chunk);
                        }
                    },
                    None => break,
                }
            }
            Ok(())
        });

        info!("Recording started");

        Self {
            stop_flag,
            samples,
            worker: Some(worker),
        }
    }

    /// Whether the worker thread is still draining the source
    pub fn is_recording(&self) -> bool {
        self.worker.as_ref().is_some_and(|w| !w.is_finished())
    }

    /// Number of samples collected so far
    pub fn sample_count(&self) -> usize {
        self.samples.lock().len()
    }

    /// Stop recording and flush the collected samples as WAV data
    pub fn stop(mut self) -> Result<AudioData, SpeechError> {
        self.stop_flag.store(true, Ordering::SeqCst);

        let worker = self
            .worker
            .take()
            .ok_or_else(|| SpeechError::CaptureFailed("recorder already stopped".to_string()))?;
        worker
            .join()
            .map_err(|_| SpeechError::CaptureFailed("capture thread panicked".to_string()))??;

        let samples = std::mem::take(&mut *self.samples.lock());
        debug!(samples = samples.len(), "Recording stopped");

        encode_wav(&samples)
    }
}

/// Encode mono 16-bit samples into an in-memory WAV buffer
fn encode_wav(samples: &[i16]) -> Result<AudioData, SpeechError> {
    let spec = hound::WavSpec {
        channels: CHANNELS,
        sample_rate: SAMPLE_RATE_HZ,
        bits_per_sample: BITS_PER_SAMPLE,
        sample_format: hound::SampleFormat::Int,
    };

    let mut buffer = Cursor::new(Vec::new());
    {
        let mut writer = hound::WavWriter::new(&mut buffer, spec)?;
        for &sample in samples {
            writer.write_sample(sample)?;
        }
        writer.finalize()?;
    }

    Ok(AudioData::new(buffer.into_inner(), AudioFormat::Wav).with_sample_rate(SAMPLE_RATE_HZ))
}
