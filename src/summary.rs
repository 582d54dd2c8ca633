//! Appointment summary shown beside the booking form, and the confirmation text.

use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;

use crate::config::APPOINTMENT_DURATION_MINUTES;
use crate::models::{Appointment, Provider, TIME_LABEL_FORMAT};

/// "Monday, December 30, 2024"
const LONG_DATE_FORMAT: &str = "%A, %B %-d, %Y";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BookingSummary {
    pub provider_name: String,
    pub specialization: String,
    pub consultation_fee: u32,
    pub duration_minutes: u32,
    /// Present once both a date and a time are picked.
    pub selected: Option<SelectedSlot>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectedSlot {
    pub date: NaiveDate,
    pub time: NaiveTime,
}

impl BookingSummary {
    pub fn new(provider: &Provider, date: Option<NaiveDate>, time: Option<NaiveTime>) -> Self {
        Self {
            provider_name: provider.name.clone(),
            specialization: provider.specialization.clone(),
            consultation_fee: provider.consultation_fee,
            duration_minutes: APPOINTMENT_DURATION_MINUTES,
            selected: date.zip(time).map(|(date, time)| SelectedSlot { date, time }),
        }
    }

    pub fn fee_label(&self) -> String {
        format!("${}", self.consultation_fee)
    }

    pub fn duration_label(&self) -> String {
        format!("{} minutes", self.duration_minutes)
    }
}

/// Long, human date used in pickers and confirmations.
pub fn long_date(date: NaiveDate) -> String {
    date.format(LONG_DATE_FORMAT).to_string()
}

/// Text for the confirmation screen after a successful booking.
pub fn confirmation_message(provider: &Provider, appointment: &Appointment) -> String {
    format!(
        "Your appointment with {} has been successfully booked for {} at {}. \
         A confirmation email has been sent to {}.",
        provider.name,
        long_date(appointment.date),
        appointment.time.format(TIME_LABEL_FORMAT),
        appointment.patient_email,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AppointmentStatus;
    use crate::seed::roster_with;
    use uuid::Uuid;

    fn cardiologist() -> Provider {
        roster_with(|_| Vec::new()).unwrap().remove(0)
    }

    #[test]
    fn summary_without_selection() {
        let summary = BookingSummary::new(&cardiologist(), None, None);
        assert_eq!(summary.provider_name, "Dr. Sarah Johnson");
        assert_eq!(summary.fee_label(), "$200");
        assert_eq!(summary.duration_label(), "30 minutes");
        assert!(summary.selected.is_none());
    }

    #[test]
    fn summary_needs_both_date_and_time() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 2);
        let time = NaiveTime::from_hms_opt(14, 0, 0);
        assert!(BookingSummary::new(&cardiologist(), date, None).selected.is_none());
        let summary = BookingSummary::new(&cardiologist(), date, time);
        assert_eq!(
            summary.selected,
            Some(SelectedSlot {
                date: date.unwrap(),
                time: time.unwrap(),
            })
        );
    }

    #[test]
    fn long_date_spells_out_weekday() {
        let date = NaiveDate::from_ymd_opt(2024, 12, 30).unwrap();
        assert_eq!(long_date(date), "Monday, December 30, 2024");
    }

    #[test]
    fn confirmation_names_doctor_slot_and_email() {
        let provider = cardiologist();
        let appointment = Appointment {
            id: Uuid::new_v4(),
            provider_id: provider.id.clone(),
            patient_name: "Ada".into(),
            patient_email: "ada@example.com".into(),
            date: NaiveDate::from_ymd_opt(2025, 1, 3).unwrap(),
            time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            status: AppointmentStatus::Confirmed,
            booked_at: NaiveDate::from_ymd_opt(2024, 12, 1)
                .unwrap()
                .and_hms_opt(8, 0, 0)
                .unwrap(),
        };
        assert_eq!(
            confirmation_message(&provider, &appointment),
            "Your appointment with Dr. Sarah Johnson has been successfully booked for \
             Friday, January 3, 2025 at 09:00. A confirmation email has been sent to ada@example.com."
        );
    }
}
