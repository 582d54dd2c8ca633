//! Booking form validation.
//!
//! Every field is checked before anything is reported, so the form can show
//! all problems at once. A request that passes comes back as a
//! `ValidatedBooking` with parsed calendar values.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use chrono::{NaiveDate, NaiveTime};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::models::{BookingRequest, DATE_FORMAT, TIME_LABEL_FORMAT};

static EMAIL_SHAPE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").unwrap());

// ═══════════════════════════════════════════════════════════
// Types
// ═══════════════════════════════════════════════════════════

/// Form field a validation message belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingField {
    PatientName,
    PatientEmail,
    Date,
    Time,
}

impl BookingField {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PatientName => "patient_name",
            Self::PatientEmail => "patient_email",
            Self::Date => "date",
            Self::Time => "time",
        }
    }
}

impl std::fmt::Display for BookingField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-field validation messages, ordered by field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationErrors {
    fields: BTreeMap<BookingField, String>,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn get(&self, field: BookingField) -> Option<&str> {
        self.fields.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: BookingField) -> bool {
        self.fields.contains_key(&field)
    }

    pub fn iter(&self) -> impl Iterator<Item = (BookingField, &str)> {
        self.fields.iter().map(|(f, m)| (*f, m.as_str()))
    }

    fn add(&mut self, field: BookingField, message: impl Into<String>) {
        self.fields.insert(field, message.into());
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for (field, message) in self.iter() {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{field}: {message}")?;
            first = false;
        }
        Ok(())
    }
}

/// Booking input that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedBooking {
    pub patient_name: String,
    pub patient_email: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
}

// ═══════════════════════════════════════════════════════════
// Validation
// ═══════════════════════════════════════════════════════════

/// Whether `email` has the basic `something@domain.tld` shape.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_SHAPE.is_match(email)
}

/// Check every field of `request`, collecting all failures.
pub fn validate_booking(request: &BookingRequest) -> Result<ValidatedBooking, ValidationErrors> {
    let mut errors = ValidationErrors::default();

    let patient_name = request.patient_name.trim();
    if patient_name.is_empty() {
        errors.add(BookingField::PatientName, "Patient name is required");
    }

    let patient_email = request.patient_email.trim();
    if patient_email.is_empty() {
        errors.add(BookingField::PatientEmail, "Email is required");
    } else if !is_valid_email(patient_email) {
        errors.add(BookingField::PatientEmail, "Please enter a valid email address");
    }

    let date = parse_required(
        &request.date,
        |s| NaiveDate::parse_from_str(s, DATE_FORMAT).ok(),
    );
    match date {
        Field::Missing => errors.add(BookingField::Date, "Please select a date"),
        Field::Malformed => errors.add(
            BookingField::Date,
            "Invalid date format (expected YYYY-MM-DD)",
        ),
        Field::Parsed(_) => {}
    }

    let time = parse_required(
        &request.time,
        |s| NaiveTime::parse_from_str(s, TIME_LABEL_FORMAT).ok(),
    );
    match time {
        Field::Missing => errors.add(BookingField::Time, "Please select a time"),
        Field::Malformed => errors.add(BookingField::Time, "Invalid time format (expected HH:MM)"),
        Field::Parsed(_) => {}
    }

    match (date, time) {
        (Field::Parsed(date), Field::Parsed(time)) if errors.is_empty() => Ok(ValidatedBooking {
            patient_name: patient_name.to_string(),
            patient_email: patient_email.to_string(),
            date,
            time,
        }),
        _ => Err(errors),
    }
}

enum Field<T> {
    Missing,
    Malformed,
    Parsed(T),
}

fn parse_required<T>(raw: &str, parse: impl Fn(&str) -> Option<T>) -> Field<T> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Field::Missing;
    }
    match parse(raw) {
        Some(value) => Field::Parsed(value),
        None => Field::Malformed,
    }
}

// ═══════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════
