use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Label format for a slot's time of day.
pub const TIME_LABEL_FORMAT: &str = "%H:%M";

/// Calendar format for a slot's date.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// One bookable time on a provider's calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    /// `{date}-{time}`, unique within one provider.
    pub id: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub available: bool,
}

impl Slot {
    pub fn new(date: NaiveDate, time: NaiveTime, available: bool) -> Self {
        Self {
            id: slot_id(date, time),
            date,
            time,
            available,
        }
    }

    /// `HH:MM` label shown in time pickers.
    pub fn time_label(&self) -> String {
        self.time.format(TIME_LABEL_FORMAT).to_string()
    }

    pub fn is_at(&self, date: NaiveDate, time: NaiveTime) -> bool {
        self.date == date && self.time == time
    }
}

/// Deterministic slot identifier derived from date and time.
pub fn slot_id(date: NaiveDate, time: NaiveTime) -> String {
    format!(
        "{}-{}",
        date.format(DATE_FORMAT),
        time.format(TIME_LABEL_FORMAT)
    )
}
