//! Appointment entity - A scheduled virtual consultation slot

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// A confirmed appointment slot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    /// Attending doctor
    pub doctor: String,
    /// Appointment date
    pub date: NaiveDate,
    /// Appointment time
    pub time: NaiveTime,
    /// Where the appointment takes place
    pub location: String,
}

impl Appointment {
    /// Create an appointment slot
    pub fn new(
        doctor: impl Into<String>,
        date: NaiveDate,
        time: NaiveTime,
        location: impl Into<String>,
    ) -> Self {
        Self {
            doctor: doctor.into(),
            date,
            time,
            location: location.into(),
        }
    }

    /// Date formatted for confirmation output, e.g. "Tuesday, March 04, 2025"
    pub fn formatted_date(&self) -> String {
        self.date.format("%A, %B %d, %Y").to_string()
    }

    /// Time formatted on a 12-hour clock, e.g. "4:35 PM"
    pub fn formatted_time(&self) -> String {
        self.time.format("%-I:%M %p").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_format_spells_out_weekday_and_month() {
        let appointment = Appointment::new(
            "Dr. AIbert",
            NaiveDate::from_ymd_opt(2025, 3, 4).unwrap(),
            NaiveTime::from_hms_opt(9, 5, 0).unwrap(),
            "Virtual Consultation",
        );
        assert_eq!(appointment.formatted_date(), "Tuesday, March 04, 2025");
    }

    #[test]
    fn morning_time_uses_am() {
        let appointment = Appointment::new(
            "Dr. AIbert",
            NaiveDate::from_ymd_opt(2025, 3, 4).unwrap(),
            NaiveTime::from_hms_opt(9, 5, 0).unwrap(),
            "Virtual Consultation",
        );
        assert_eq!(appointment.formatted_time(), "9:05 AM");
    }

    #[test]
    fn afternoon_time_uses_pm_on_twelve_hour_clock() {
        let appointment = Appointment::new(
            "Dr. AIbert",
            NaiveDate::from_ymd_opt(2025, 3, 4).unwrap(),
            NaiveTime::from_hms_opt(16, 55, 0).unwrap(),
            "Virtual Consultation",
        );
        assert_eq!(appointment.formatted_time(), "4:55 PM");
    }
}
