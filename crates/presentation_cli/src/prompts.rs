//! Terminal prompt helpers for the intake wizard

use std::io::{self, Write};

use chrono::NaiveDate;
use domain::{DurationUnit, PainRating, SymptomDuration};

/// Print a label and read one trimmed line from stdin
pub fn read_line(label: &str) -> anyhow::Result<String> {
    print!("{label} ");
    io::stdout().flush()?;

    let mut buffer = String::new();
    io::stdin().read_line(&mut buffer)?;
    Ok(buffer.trim().to_string())
}

/// Keep asking until the answer is non-empty
pub fn read_nonempty(label: &str) -> anyhow::Result<String> {
    loop {
        let answer = read_line(label)?;
        if !answer.is_empty() {
            return Ok(answer);
        }
        println!("Please enter a value.");
    }
}

/// Read a yes/no answer; empty input means no
pub fn read_yes_no(label: &str) -> anyhow::Result<bool> {
    let answer = read_line(&format!("{label} [y/N]"))?;
    Ok(matches!(answer.to_lowercase().as_str(), "y" | "yes"))
}

/// Read a date in YYYY-MM-DD form
pub fn read_date(label: &str) -> anyhow::Result<NaiveDate> {
    loop {
        let answer = read_nonempty(&format!("{label} (YYYY-MM-DD):"))?;
        match NaiveDate::parse_from_str(&answer, "%Y-%m-%d") {
            Ok(date) => return Ok(date),
            Err(_) => println!("Please use the YYYY-MM-DD format."),
        }
    }
}

/// Read a pain rating on the 1-10 scale
pub fn read_pain_rating() -> anyhow::Result<PainRating> {
    loop {
        let answer = read_nonempty("Rate your pain (1-10):")?;
        if let Ok(value) = answer.parse::<u8>() {
            if let Ok(rating) = PainRating::new(value) {
                return Ok(rating);
            }
        }
        println!("Please enter a number between 1 and 10.");
    }
}

/// Read an optional symptom duration; blank skips it
pub fn read_optional_duration() -> anyhow::Result<Option<SymptomDuration>> {
    let value = read_line("How long have you had these symptoms? (number, blank to skip)")?;
    if value.is_empty() {
        return Ok(None);
    }

    let Ok(value) = value.parse::<u32>() else {
        println!("Not a number; skipping duration.");
        return Ok(None);
    };
    if value == 0 {
        println!("Duration must be at least 1; skipping.");
        return Ok(None);
    }

    let unit = loop {
        let answer = read_nonempty("Unit - (h)ours, (d)ays, (w)eeks, (m)onths:")?;
        match answer.to_lowercase().as_str() {
            "h" | "hours" | "hour" => break DurationUnit::Hours,
            "d" | "days" | "day" => break DurationUnit::Days,
            "w" | "weeks" | "week" => break DurationUnit::Weeks,
            "m" | "months" | "month" => break DurationUnit::Months,
            _ => println!("Please answer h, d, w, or m."),
        }
    };

    Ok(SymptomDuration::new(value, unit).ok())
}
