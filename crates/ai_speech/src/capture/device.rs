//! Microphone-backed audio source using cpal
//!
//! The cpal stream is not `Send` on every platform, so it lives on its own
//! thread; samples cross to the recorder through a channel.

use std::sync::mpsc;
use std::time::Duration;

use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use tracing::{info, warn};

use super::{AudioSource, CHUNK_SAMPLES, SAMPLE_RATE_HZ};
use crate::error::SpeechError;

/// Audio source reading from the default input device
#[derive(Debug)]
pub struct DeviceSource {
    rx: mpsc::Receiver<Vec<i16>>,
    // Dropping this tells the stream thread to shut down
    _shutdown: mpsc::Sender<()>,
}

impl DeviceSource {
    /// Open the default input device
    pub fn open() -> Result<Self, SpeechError> {
        let (tx, rx) = mpsc::channel::<Vec<i16>>();
        let (shutdown_tx, shutdown_rx) = mpsc::channel::<()>();
        let (ready_tx, ready_rx) = mpsc::channel::<Result<(), SpeechError>>();

        std::thread::spawn(move || run_input_stream(&tx, &ready_tx, &shutdown_rx));

        // The stream thread reports once the stream is playing (or failed)
        match ready_rx.recv_timeout(Duration::from_secs(5)) {
            Ok(Ok(())) => Ok(Self {
                rx,
                _shutdown: shutdown_tx,
            }),
            Ok(Err(err)) => Err(err),
            Err(_) => Err(SpeechError::CaptureFailed(
                "timed out waiting for input stream".to_string(),
            )),
        }
    }
}

/// Build and run the input stream until the shutdown channel closes
fn run_input_stream(
    tx: &mpsc::Sender<Vec<i16>>,
    ready_tx: &mpsc::Sender<Result<(), SpeechError>>,
    shutdown_rx: &mpsc::Receiver<()>,
) {
    let stream = match build_stream(tx) {
        Ok(stream) => stream,
        Err(err) => {
            let _ = ready_tx.send(Err(err));
            return;
        },
    };

    if let Err(e) = stream.play() {
        let _ = ready_tx.send(Err(SpeechError::CaptureFailed(e.to_string())));
        return;
    }

    info!("Microphone capture started");
    let _ = ready_tx.send(Ok(()));

    // Block until the DeviceSource is dropped
    let _ = shutdown_rx.recv();
}

fn build_stream(tx: &mpsc::Sender<Vec<i16>>) -> Result<cpal::Stream, SpeechError> {
    let host = cpal::default_host();
    let device = host
        .default_input_device()
        .ok_or_else(|| SpeechError::CaptureFailed("no input device available".to_string()))?;

    let config = cpal::StreamConfig {
        channels: 1,
        sample_rate: cpal::SampleRate(SAMPLE_RATE_HZ),
        buffer_size: cpal::BufferSize::Default,
    };

    let chunk_tx = tx.clone();
    device
        .build_input_stream(
            &config,
            move |data: &[i16], _| {
                for chunk in data.chunks(CHUNK_SAMPLES) {
                    if chunk_tx.send(chunk.to_vec()).is_err() {
                        return;
                    }
                }
            },
            |err| warn!(error = %err, "Input stream error"),
            None,
        )
        .map_err(|e| SpeechError::CaptureFailed(e.to_string()))
}

impl AudioSource for DeviceSource {
    fn next_chunk(&mut self) -> Result<Option<Vec<i16>>, SpeechError> {
        match self.rx.recv_timeout(Duration::from_millis(100)) {
            Ok(chunk) => Ok(Some(chunk)),
            Err(mpsc::RecvTimeoutError::Timeout) => Ok(Some(Vec::new())),
            Err(mpsc::RecvTimeoutError::Disconnected) => Ok(None),
        }
    }
}
