use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use super::enums::AvailabilityStatus;
use super::slot::Slot;

/// A doctor listed in the directory, with their bookable calendar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Provider {
    pub id: String,
    pub name: String,
    pub specialization: String,
    pub description: String,
    pub experience_years: u32,
    pub rating: f32,
    pub education: String,
    pub languages: Vec<String>,
    /// Whole currency units.
    pub consultation_fee: u32,
    pub availability_status: AvailabilityStatus,
    pub image_url: String,
    pub slots: Vec<Slot>,
}

impl Provider {
    /// Distinct dates with at least one open slot, ascending.
    pub fn available_dates(&self) -> Vec<NaiveDate> {
        let mut dates: Vec<NaiveDate> = self
            .slots
            .iter()
            .filter(|s| s.available)
            .map(|s| s.date)
            .collect();
        dates.sort_unstable();
        dates.dedup();
        dates
    }

    /// Open times on `date`, ascending. Empty when nothing is open.
    pub fn available_times(&self, date: NaiveDate) -> Vec<NaiveTime> {
        let mut times: Vec<NaiveTime> = self
            .slots
            .iter()
            .filter(|s| s.available && s.date == date)
            .map(|s| s.time)
            .collect();
        times.sort_unstable();
        times.dedup();
        times
    }

    pub fn slot(&self, date: NaiveDate, time: NaiveTime) -> Option<&Slot> {
        self.slots.iter().find(|s| s.is_at(date, time))
    }

    pub(crate) fn slot_mut(&mut self, date: NaiveDate, time: NaiveTime) -> Option<&mut Slot> {
        self.slots.iter_mut().find(|s| s.is_at(date, time))
    }

    pub fn open_slot_count(&self) -> usize {
        self.slots.iter().filter(|s| s.available).count()
    }
}
