//! Appointment service - Follow-up appointment scheduling

use chrono::{Duration, NaiveTime, Utc};
use domain::Appointment;
use rand::Rng;
use tracing::instrument;

const DOCTOR_NAME: &str = "Dr. AIbert";
const LOCATION: &str = "Virtual Consultation";

/// Service for booking follow-up appointments
#[derive(Debug, Default, Clone, Copy)]
pub struct AppointmentService;

impl AppointmentService {
    /// Create a new appointment service
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Schedule an appointment for tomorrow during office hours
    ///
    /// Slots fall on five-minute marks between 09:00 and 16:55.
    #[instrument(skip(self))]
    pub fn schedule(&self) -> Appointment {
        let mut rng = rand::thread_rng();
        let hour = rng.gen_range(9..=16);
        let minute = rng.gen_range(0..12) * 5;

        let date = Utc::now().date_naive() + Duration::days(1);
        // Hour and minute are bounded above, so this is always Some.
        let time = NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or(NaiveTime::MIN);

        Appointment::new(DOCTOR_NAME, date, time, LOCATION)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Timelike;

    use super::*;

    #[test]
    fn appointments_land_tomorrow() {
        let service = AppointmentService::new();
        let tomorrow = Utc::now().date_naive() + Duration::days(1);

        let appointment = service.schedule();
        assert_eq!(appointment.date, tomorrow);
        assert_eq!(appointment.doctor, "Dr. AIbert");
        assert_eq!(appointment.location, "Virtual Consultation");
    }

    #[test]
    fn slots_stay_within_office_hours() {
        let service = AppointmentService::new();

        for _ in 0..100 {
            let appointment = service.schedule();
            let hour = appointment.time.hour();
            let minute = appointment.time.minute();

            assert!((9..=16).contains(&hour), "hour out of range: {hour}");
            assert!(minute < 60);
            assert_eq!(minute % 5, 0, "minute not on a five-minute mark: {minute}");
            assert_eq!(appointment.time.second(), 0);
        }
    }

    #[test]
    fn formatted_time_uses_twelve_hour_clock() {
        let service = AppointmentService::new();
        let appointment = service.schedule();
        let formatted = appointment.formatted_time();

        assert!(formatted.ends_with("AM") || formatted.ends_with("PM"));
    }
}
