//! Voice consultation flow - Turn-by-turn exchange with the virtual doctor

use std::path::Path;

use application::{ConsultationService, VoiceService};

use crate::prompts;

/// Run a consultation until the patient says goodbye
///
/// With the `device-capture` feature the patient speaks into the default
/// microphone; otherwise turns are typed. When `speak` is set, doctor
/// replies are synthesized and saved next to the recordings.
pub async fn run(
    consultations: &ConsultationService,
    voice: &VoiceService,
    replies_dir: &Path,
    speak: bool,
) -> anyhow::Result<()> {
    println!("Voice Consultation (say or type 'bye' to end)");
    println!();

    let mut consultation = consultations.begin()?;
    let greeting = application::GREETING;
    println!("Doctor: {greeting}");
    if speak {
        save_reply(voice, replies_dir, 0, greeting).await?;
    }

    let mut turn = 0u32;
    loop {
        let Some(utterance) = next_utterance(voice).await? else {
            continue;
        };
        if utterance.is_empty() || utterance.eq_ignore_ascii_case("bye") {
            break;
        }

        let reply = match consultations.patient_says(&mut consultation, utterance).await {
            Ok(reply) => reply,
            Err(e) => {
                println!("The doctor is unavailable right now ({e}). Try again.");
                continue;
            },
        };

        println!();
        println!("Doctor: {reply}");
        turn += 1;
        if speak {
            save_reply(voice, replies_dir, turn, &reply).await?;
        }
    }

    consultations.end(&mut consultation);
    println!();
    println!(
        "Consultation ended after {} patient turn(s). Take care!",
        consultation.patient_turn_count()
    );

    Ok(())
}

async fn save_reply(
    voice: &VoiceService,
    replies_dir: &Path,
    turn: u32,
    text: &str,
) -> anyhow::Result<()> {
    if let Some(result) = voice.speak(text).await {
        tokio::fs::create_dir_all(replies_dir).await?;
        let path = replies_dir.join(format!("doctor_reply_{turn:03}.mp3"));
        tokio::fs::write(&path, result.audio_data).await?;
        println!("(spoken reply saved to {})", path.display());
    }
    Ok(())
}

/// Capture one patient utterance
///
/// Returns `None` when the audio could not be transcribed, after telling
/// the patient what happened.
#[cfg(feature = "device-capture")]
async fn next_utterance(voice: &VoiceService) -> anyhow::Result<Option<String>> {
    use ai_speech::{DeviceSource, Recorder};

    prompts::read_line("Press Enter to start recording...")?;
    let recorder = Recorder::start(DeviceSource::open()?);
    prompts::read_line("Recording... press Enter to stop.")?;
    let audio = recorder.stop()?;

    let outcome = voice.capture(audio.into_data()).await?;
    if outcome.recognized {
        println!("You said: {}", outcome.transcript);
        Ok(Some(outcome.transcript))
    } else {
        println!("{}. Please try again.", outcome.transcript);
        Ok(None)
    }
}

#[cfg(not(feature = "device-capture"))]
async fn next_utterance(_voice: &VoiceService) -> anyhow::Result<Option<String>> {
    println!();
    Ok(Some(prompts::read_line("You:")?))
}
