//! Intake wizard - Profile, insurance, and history questionnaire

use application::IntakeService;
use domain::{
    question_prompt, HistoryQuestionnaire, InsuranceInfo, PatientProfile, QUESTIONNAIRE_CATEGORIES,
};

use crate::prompts;

/// Run the full intake wizard
pub async fn run(intake: &IntakeService) -> anyhow::Result<()> {
    println!("AI Health Assistant - Patient Intake");
    println!();

    let profile = collect_profile()?;
    intake.record_profile(&profile).await?;

    let insurance = collect_insurance()?;
    intake.record_insurance(&insurance).await?;
    println!("Patient information saved.");
    println!();

    if prompts::read_yes_no("Take the patient history questionnaire now?")? {
        let questionnaire = collect_history()?;
        let path = intake.submit_history(&questionnaire).await?;
        println!();
        println!(
            "History saved; report written to {} ({} questions answered).",
            path.display(),
            questionnaire.answered_count()
        );
    }

    if prompts::read_yes_no("Generate a summary report of everything on file?")? {
        let path = intake.summary_report().await?;
        println!("Summary report written to {}.", path.display());
    }

    Ok(())
}

fn collect_profile() -> anyhow::Result<PatientProfile> {
    loop {
        let name = prompts::read_nonempty("Enter your name:")?;
        let dob = prompts::read_date("Enter your date of birth")?;
        match PatientProfile::new(name, dob) {
            Ok(profile) => return Ok(profile),
            Err(e) => println!("{e}"),
        }
    }
}

fn collect_insurance() -> anyhow::Result<InsuranceInfo> {
    let provider = prompts::read_nonempty("Enter your insurance provider:")?;
    let member_id = prompts::read_nonempty("Enter your insurance ID:")?;
    Ok(InsuranceInfo {
        provider,
        member_id,
    })
}

fn collect_history() -> anyhow::Result<HistoryQuestionnaire> {
    println!();
    println!("Patient History Questionnaire (press Enter to skip any question)");

    let mut questionnaire = HistoryQuestionnaire::new();
    for category in QUESTIONNAIRE_CATEGORIES {
        println!();
        println!("-- {} --", category.title);
        for &field in category.fields {
            let question = question_prompt(field).unwrap_or(field);
            let answer = prompts::read_line(question)?;
            questionnaire.record_answer(field, answer);
        }
    }

    Ok(questionnaire)
}
