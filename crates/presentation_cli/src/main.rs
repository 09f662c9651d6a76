//! Triage assistant CLI
//!
//! Terminal front end for patient intake, symptom triage, and voice
//! consultations.

#![allow(clippy::print_stdout)]

mod consult;
mod diagnose;
mod intake;
mod prompts;

use std::sync::Arc;

use application::{
    AppointmentService, ConsultationService, IntakeService, TriageService, VoiceService,
};
use application::ports::{InferencePort, PatientStorePort, ReportPort, SpeechPort};
use clap::{Parser, Subcommand};
use infrastructure::{
    AppConfig, FilePatientStore, GeminiInferenceAdapter, GoogleSpeechAdapter, PdfReportRenderer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Triage assistant CLI
#[derive(Parser)]
#[command(name = "triage-cli")]
#[command(author, version, about = "AI Health Assistant CLI", long_about = None)]
struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Collect patient information and the history questionnaire
    Intake,

    /// Analyze symptoms and show the risk assessment
    Diagnose,

    /// Hold a voice consultation with the virtual doctor
    Consult {
        /// Synthesize doctor replies and save them as audio files
        #[arg(long)]
        speak: bool,
    },

    /// Render a summary report of everything on file
    Summary,

    /// Check backend availability
    Status,
}

/// Determine log filter level from verbosity count
const fn log_filter_from_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn inference_port(config: &AppConfig) -> anyhow::Result<Arc<dyn InferencePort>> {
    let adapter = GeminiInferenceAdapter::new(config.inference.clone())?;
    Ok(Arc::new(adapter))
}

fn speech_port(config: &AppConfig) -> anyhow::Result<Arc<dyn SpeechPort>> {
    let adapter = GoogleSpeechAdapter::new(config.speech.clone())?;
    Ok(Arc::new(adapter))
}

fn patient_store(config: &AppConfig) -> Arc<dyn PatientStorePort> {
    Arc::new(FilePatientStore::new(
        config.storage.data_path(),
        config.storage.recordings_path(),
    ))
}

fn report_renderer(config: &AppConfig) -> Arc<dyn ReportPort> {
    Arc::new(PdfReportRenderer::new(config.storage.data_path()))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = log_filter_from_verbosity(cli.verbose);
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::load()?;

    match cli.command {
        Commands::Intake => {
            let intake_service =
                IntakeService::new(patient_store(&config), report_renderer(&config));
            intake::run(&intake_service).await?;
        },

        Commands::Diagnose => {
            let triage = TriageService::new(inference_port(&config)?);
            let appointments = AppointmentService::new();
            diagnose::run(&triage, &appointments).await?;
        },

        Commands::Consult { speak } => {
            let consultations = ConsultationService::new(inference_port(&config)?);
            let voice = VoiceService::new(speech_port(&config)?, patient_store(&config));
            let replies_dir = config.storage.recordings_path();
            consult::run(&consultations, &voice, &replies_dir, speak).await?;
        },

        Commands::Summary => {
            let intake_service =
                IntakeService::new(patient_store(&config), report_renderer(&config));
            let path = intake_service.summary_report().await?;
            println!("Summary report written to {}.", path.display());
        },

        Commands::Status => {
            let triage = TriageService::new(inference_port(&config)?);
            println!("Model: {}", triage.current_model());
            if triage.is_healthy().await {
                println!("Inference: available");
            } else {
                println!("Inference: unavailable");
            }

            match speech_port(&config) {
                Ok(speech) => {
                    if speech.is_available().await {
                        println!("Speech: available");
                    } else {
                        println!("Speech: unavailable");
                    }
                },
                Err(e) => println!("Speech: not configured ({e})"),
            }
        },
    }

    Ok(())
}
