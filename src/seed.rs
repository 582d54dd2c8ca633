//! Seed roster and slot-grid construction.
//!
//! `default_roster` reproduces the six-doctor directory with randomized slot
//! availability. Tests use `SlotGrid` with explicit availability instead.

use std::collections::HashSet;

use chrono::{NaiveDate, NaiveTime};
use rand::Rng;
use thiserror::Error;

use crate::config::{SEED_DATES, SEED_TIMES};
use crate::models::{AvailabilityStatus, Provider, Slot, DATE_FORMAT, TIME_LABEL_FORMAT};

#[derive(Error, Debug, PartialEq)]
pub enum SeedError {
    #[error("Invalid seed date: {0}")]
    InvalidDate(String),
    #[error("Invalid seed time: {0}")]
    InvalidTime(String),
    #[error("Duplicate slot {slot_id} for provider {provider_id}")]
    DuplicateSlot { provider_id: String, slot_id: String },
    #[error("Duplicate provider id: {0}")]
    DuplicateProvider(String),
    #[error("Availability ratio must be a number between 0 and 1, got {0}")]
    InvalidRatio(f64),
}

// ═══════════════════════════════════════════════════════════
// SlotGrid — dates × times
// ═══════════════════════════════════════════════════════════

/// Cartesian grid of calendar dates and times of day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotGrid {
    dates: Vec<NaiveDate>,
    times: Vec<NaiveTime>,
}

impl SlotGrid {
    /// Parse `YYYY-MM-DD` dates and `HH:MM` times.
    pub fn parse(dates: &[&str], times: &[&str]) -> Result<Self, SeedError> {
        let dates = dates
            .iter()
            .map(|d| {
                NaiveDate::parse_from_str(d, DATE_FORMAT)
                    .map_err(|_| SeedError::InvalidDate(d.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        let times = times
            .iter()
            .map(|t| {
                NaiveTime::parse_from_str(t, TIME_LABEL_FORMAT)
                    .map_err(|_| SeedError::InvalidTime(t.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { dates, times })
    }

    /// The fixed five-day, six-time grid every seeded doctor gets.
    pub fn standard() -> Result<Self, SeedError> {
        Self::parse(&SEED_DATES, &SEED_TIMES)
    }

    pub fn len(&self) -> usize {
        self.dates.len() * self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Every slot, with availability decided by `available(date, time)`.
    pub fn slots_with<F>(&self, mut available: F) -> Vec<Slot>
    where
        F: FnMut(NaiveDate, NaiveTime) -> bool,
    {
        let mut slots = Vec::with_capacity(self.len());
        for &date in &self.dates {
            for &time in &self.times {
                slots.push(Slot::new(date, time, available(date, time)));
            }
        }
        slots
    }

    /// Every slot open.
    pub fn all_open(&self) -> Vec<Slot> {
        self.slots_with(|_, _| true)
    }

    /// Each slot open with probability `ratio`.
    pub fn random<R: Rng>(&self, rng: &mut R, ratio: f64) -> Result<Vec<Slot>, SeedError> {
        let ratio = checked_ratio(ratio)?;
        Ok(self.slots_with(|_, _| rng.gen_bool(ratio)))
    }
}

// ═══════════════════════════════════════════════════════════
// Roster
// ═══════════════════════════════════════════════════════════

/// Static profile fields of a seeded doctor; slots are attached separately.
struct DoctorProfile {
    id: &'static str,
    name: &'static str,
    specialization: &'static str,
    image_url: &'static str,
    experience_years: u32,
    rating: f32,
    availability_status: AvailabilityStatus,
    description: &'static str,
    education: &'static str,
    languages: &'static [&'static str],
    consultation_fee: u32,
}

const DOCTORS: [DoctorProfile; 6] = [
    DoctorProfile {
        id: "1",
        name: "Dr. Sarah Johnson",
        specialization: "Cardiology",
        image_url: "https://images.pexels.com/photos/5452268/pexels-photo-5452268.jpeg?auto=compress&cs=tinysrgb&w=400",
        experience_years: 12,
        rating: 4.8,
        availability_status: AvailabilityStatus::Available,
        description: "Dr. Sarah Johnson is a board-certified cardiologist with over 12 years of experience in treating heart conditions. She specializes in preventive cardiology and cardiac interventions.",
        education: "MD from Harvard Medical School",
        languages: &["English", "Spanish"],
        consultation_fee: 200,
    },
    DoctorProfile {
        id: "2",
        name: "Dr. Michael Chen",
        specialization: "Dermatology",
        image_url: "https://images.pexels.com/photos/6749771/pexels-photo-6749771.jpeg?auto=compress&cs=tinysrgb&w=400",
        experience_years: 8,
        rating: 4.9,
        availability_status: AvailabilityStatus::Available,
        description: "Dr. Michael Chen is a dermatologist specializing in medical and cosmetic dermatology. He has extensive experience in treating skin conditions and aesthetic procedures.",
        education: "MD from Stanford University",
        languages: &["English", "Mandarin"],
        consultation_fee: 150,
    },
    DoctorProfile {
        id: "3",
        name: "Dr. Emily Rodriguez",
        specialization: "Pediatrics",
        image_url: "https://images.pexels.com/photos/5452293/pexels-photo-5452293.jpeg?auto=compress&cs=tinysrgb&w=400",
        experience_years: 10,
        rating: 4.7,
        availability_status: AvailabilityStatus::Busy,
        description: "Dr. Emily Rodriguez is a pediatrician dedicated to providing comprehensive healthcare for children from infancy through adolescence.",
        education: "MD from Johns Hopkins University",
        languages: &["English", "Spanish", "Portuguese"],
        consultation_fee: 180,
    },
    DoctorProfile {
        id: "4",
        name: "Dr. David Kim",
        specialization: "Orthopedics",
        image_url: "https://images.pexels.com/photos/6749778/pexels-photo-6749778.jpeg?auto=compress&cs=tinysrgb&w=400",
        experience_years: 15,
        rating: 4.6,
        availability_status: AvailabilityStatus::Available,
        description: "Dr. David Kim is an orthopedic surgeon specializing in sports medicine and joint replacement surgery. He has helped numerous athletes return to peak performance.",
        education: "MD from UCLA Medical School",
        languages: &["English", "Korean"],
        consultation_fee: 250,
    },
    DoctorProfile {
        id: "5",
        name: "Dr. Lisa Thompson",
        specialization: "Neurology",
        image_url: "https://images.pexels.com/photos/5452201/pexels-photo-5452201.jpeg?auto=compress&cs=tinysrgb&w=400",
        experience_years: 11,
        rating: 4.9,
        availability_status: AvailabilityStatus::Offline,
        description: "Dr. Lisa Thompson is a neurologist with expertise in treating neurological disorders including epilepsy, migraines, and movement disorders.",
        education: "MD from Mayo Clinic",
        languages: &["English", "French"],
        consultation_fee: 220,
    },
    DoctorProfile {
        id: "6",
        name: "Dr. James Wilson",
        specialization: "Internal Medicine",
        image_url: "https://images.pexels.com/photos/5452274/pexels-photo-5452274.jpeg?auto=compress&cs=tinysrgb&w=400",
        experience_years: 9,
        rating: 4.5,
        availability_status: AvailabilityStatus::Available,
        description: "Dr. James Wilson is an internist focused on preventive care and management of chronic diseases in adults.",
        education: "MD from Yale School of Medicine",
        languages: &["English"],
        consultation_fee: 160,
    },
];

impl DoctorProfile {
    fn to_provider(&self, slots: Vec<Slot>) -> Provider {
        Provider {
            id: self.id.into(),
            name: self.name.into(),
            specialization: self.specialization.into(),
            description: self.description.into(),
            experience_years: self.experience_years,
            rating: self.rating,
            education: self.education.into(),
            languages: self.languages.iter().map(|l| l.to_string()).collect(),
            consultation_fee: self.consultation_fee,
            availability_status: self.availability_status,
            image_url: self.image_url.into(),
            slots,
        }
    }
}

/// The six seeded doctors, each with slots from `slots_for(provider_id)`.
pub fn roster_with<F>(mut slots_for: F) -> Result<Vec<Provider>, SeedError>
where
    F: FnMut(&str) -> Vec<Slot>,
{
    let providers: Vec<Provider> = DOCTORS
        .iter()
        .map(|doc| doc.to_provider(slots_for(doc.id)))
        .collect();
    check_roster(&providers)?;
    Ok(providers)
}

/// Seeded doctors on the standard grid, each slot open with probability `ratio`.
pub fn default_roster(ratio: f64) -> Result<Vec<Provider>, SeedError> {
    let ratio = checked_ratio(ratio)?;
    let grid = SlotGrid::standard()?;
    let mut rng = rand::thread_rng();
    roster_with(|_| grid.slots_with(|_, _| rng.gen_bool(ratio)))
}

/// Clamp `ratio` into [0, 1]; NaN has no probability meaning.
fn checked_ratio(ratio: f64) -> Result<f64, SeedError> {
    if ratio.is_nan() {
        return Err(SeedError::InvalidRatio(ratio));
    }
    Ok(ratio.clamp(0.0, 1.0))
}

/// Reject duplicate provider ids and duplicate (date, time) pairs per provider.
pub fn check_roster(providers: &[Provider]) -> Result<(), SeedError> {
    let mut ids = HashSet::new();
    for provider in providers {
        if !ids.insert(provider.id.as_str()) {
            return Err(SeedError::DuplicateProvider(provider.id.clone()));
        }
        let mut seen = HashSet::new();
        for slot in &provider.slots {
            if !seen.insert((slot.date, slot.time)) {
                return Err(SeedError::DuplicateSlot {
                    provider_id: provider.id.clone(),
                    slot_id: slot.id.clone(),
                });
            }
        }
    }
    Ok(())
}

// ═══════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════
