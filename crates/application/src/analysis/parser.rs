//! Line-oriented parser for model triage replies
//!
//! The reply format is requested by `analysis_prompt` but never guaranteed,
//! so every rule here tolerates missing or malformed lines:
//! - Lines starting with `-` become potential causes
//! - A line containing `risk rating:` yields the rating (first digit run,
//!   clamped to 0-10; 5 when the line carries no digits)
//! - A line containing `life-threatening` yields the assessment text after
//!   its last colon

use domain::{DiagnosisResult, RiskRating, NO_ASSESSMENT_AVAILABLE};

/// Parse a model reply into a structured diagnosis result
pub fn parse_diagnosis(reply: &str) -> DiagnosisResult {
    let mut causes = Vec::new();
    let mut risk_rating = RiskRating::UNPARSED;
    let mut life_threatening = NO_ASSESSMENT_AVAILABLE.to_string();

    for line in reply.lines() {
        let trimmed = line.trim();
        let lowered = trimmed.to_lowercase();

        if trimmed.starts_with('-') {
            let cause = trimmed.trim_matches(['-', ' ']);
            if !cause.is_empty() {
                causes.push(capitalize(cause));
            }
        } else if lowered.contains("risk rating:") {
            risk_rating = parse_rating(trimmed);
        } else if lowered.contains("life-threatening") {
            if let Some(assessment) = parse_assessment(trimmed) {
                life_threatening = assessment;
            }
        }
    }

    DiagnosisResult::new(causes, life_threatening, risk_rating)
}

/// First contiguous digit run on the line, clamped to the 0-10 scale
fn parse_rating(line: &str) -> RiskRating {
    let digits: String = line
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(char::is_ascii_digit)
        .collect();

    if digits.is_empty() {
        return RiskRating::UNPARSED;
    }

    // Overlong runs saturate rather than fail
    let value = digits.parse::<u64>().unwrap_or(u64::MAX).min(10);
    RiskRating::new(u8::try_from(value).unwrap_or(10))
}

/// Text after the last colon, or the whole line when there is none
fn parse_assessment(line: &str) -> Option<String> {
    let after_colon = line.rsplit(':').next().unwrap_or(line).trim();
    if after_colon.is_empty() {
        None
    } else {
        Some(after_colon.to_string())
    }
}

/// First character uppercased, the rest lowercased
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
    })
}
