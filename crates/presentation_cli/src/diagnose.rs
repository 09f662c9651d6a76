//! Symptom analysis flow - Triage, risk display, appointment offer

use application::{AppointmentService, TriageService};
use domain::SymptomReport;

use crate::prompts;

const EMERGENCY_BANNER: &str =
    "EMERGENCY: Please call emergency services or go to the nearest emergency room immediately!";

/// Run the symptom analysis flow
pub async fn run(triage: &TriageService, appointments: &AppointmentService) -> anyhow::Result<()> {
    println!("Symptom Analysis");
    println!();

    let report = collect_report()?;

    println!();
    println!("Analyzing symptoms...");
    let outcome = triage.analyze(&report).await;

    if let Some(notice) = outcome.notice {
        println!();
        println!("Note: {}", notice.message());
    }

    let diagnosis = &outcome.diagnosis;

    println!();
    println!("Analysis Results");
    println!();
    println!("Potential Causes:");
    for cause in &diagnosis.causes {
        println!("  - {cause}");
    }

    println!();
    println!("Life-Threatening Assessment:");
    println!("  {}", diagnosis.life_threatening);

    let tier = diagnosis.tier();
    println!();
    println!("Risk Rating: {}", diagnosis.risk_rating);
    println!("{} ({})", tier.label(), diagnosis.risk_rating);
    println!();
    println!("Recommended Action: {}", tier.recommendation());

    if diagnosis.risk_rating.requires_emergency_care() {
        println!();
        println!("{EMERGENCY_BANNER}");
    }

    if diagnosis.risk_rating.warrants_appointment()
        && prompts::read_yes_no("Schedule an appointment?")?
    {
        let appointment = appointments.schedule();
        println!();
        println!("Appointment Scheduled");
        println!("  Doctor:   {}", appointment.doctor);
        println!("  Date:     {}", appointment.formatted_date());
        println!("  Time:     {}", appointment.formatted_time());
        println!("  Location: {}", appointment.location);
        println!();
        println!("A confirmation email will be sent with the video consultation link.");
    }

    Ok(())
}

fn collect_report() -> anyhow::Result<SymptomReport> {
    loop {
        let description = prompts::read_nonempty("Describe your symptoms:")?;
        let pain = prompts::read_pain_rating()?;

        match SymptomReport::new(description, pain) {
            Ok(report) => {
                let report = match prompts::read_optional_duration()? {
                    Some(duration) => report.with_duration(duration),
                    None => report,
                };
                return Ok(report);
            },
            Err(e) => println!("{e}"),
        }
    }
}
