//! Prompt construction for symptom analysis and voice consultations

use domain::Consultation;

/// Build the structured analysis prompt for a symptom description
///
/// The response format spelled out here is what `parse_diagnosis` expects:
/// dash-prefixed cause lines, a life-threatening line, and a risk rating line.
pub fn analysis_prompt(symptoms: &str) -> String {
    format!(
        "Given these symptoms, please analyze:\n\
         Symptoms: {symptoms}\n\
         \n\
         Please respond in this format:\n\
         Potential Causes:\n\
         - [cause 1]\n\
         - [cause 2]\n\
         - [cause 3]\n\
         \n\
         Life-Threatening Assessment:\n\
         [Yes/No] - [brief explanation]\n\
         \n\
         Risk Rating: [1-10]\n"
    )
}

/// Build the doctor-turn prompt for a voice consultation
///
/// Early in the exchange (two or fewer patient turns) the model is steered
/// toward gathering information; after that, toward wrapping up.
pub fn consultation_prompt(consultation: &Consultation) -> String {
    let stage_guidance = if consultation.patient_turn_count() <= 2 {
        "Ask one short follow-up question to learn more about the symptoms."
    } else {
        "You have enough information. Briefly summarize the likely causes and \
         advise the patient on next steps."
    };

    format!(
        "You are a doctor conducting a spoken intake consultation. \
         Reply in one or two sentences of plain, reassuring language. \
         Do not prescribe medication. {stage_guidance}\n\
         \n\
         Conversation so far:\n\
         {transcript}\n\
         \n\
         Doctor:",
        transcript = consultation.transcript()
    )
}
