use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::enums::AppointmentStatus;

/// Raw booking form input, exactly as the patient entered it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRequest {
    pub patient_name: String,
    pub patient_email: String,
    pub date: String, // YYYY-MM-DD
    pub time: String, // HH:MM
}

impl BookingRequest {
    pub fn new(
        patient_name: impl Into<String>,
        patient_email: impl Into<String>,
        date: impl Into<String>,
        time: impl Into<String>,
    ) -> Self {
        Self {
            patient_name: patient_name.into(),
            patient_email: patient_email.into(),
            date: date.into(),
            time: time.into(),
        }
    }
}

/// A confirmed booking held by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: Uuid,
    pub provider_id: String,
    pub patient_name: String,
    pub patient_email: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub status: AppointmentStatus,
    pub booked_at: NaiveDateTime,
}

impl Appointment {
    pub fn occupies(&self, provider_id: &str, date: NaiveDate, time: NaiveTime) -> bool {
        self.provider_id == provider_id && self.date == date && self.time == time
    }
}
