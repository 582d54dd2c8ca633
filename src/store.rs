//! Scheduling store: the single owner of providers, slots and appointments.
//!
//! Reads take a snapshot under the state read lock. The booking command
//! serializes on the slot's reservation lock, awaits the latency boundary,
//! then flips the slot and appends the appointment in one write.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{Local, NaiveDate, NaiveTime};
use thiserror::Error;
use uuid::Uuid;

use crate::config::StoreConfig;
use crate::latency::{BookingLatency, SimulatedLatency};
use crate::models::{Appointment, AppointmentStatus, BookingRequest, Provider};
use crate::reservation::{SlotKey, SlotLocks};
use crate::search;
use crate::seed::{self, SeedError};
use crate::validation::{self, ValidationErrors};

// ═══════════════════════════════════════════════════════════
// Errors
// ═══════════════════════════════════════════════════════════

#[derive(Error, Debug, PartialEq, Eq)]
pub enum StoreError {
    #[error("Provider not found: {id}")]
    ProviderNotFound { id: String },
    #[error("Invalid booking: {0}")]
    Validation(ValidationErrors),
    #[error("Slot unavailable: provider {provider_id} on {date} at {}", .time.format("%H:%M"))]
    SlotUnavailable {
        provider_id: String,
        date: NaiveDate,
        time: NaiveTime,
    },
    #[error("Internal lock error")]
    LockPoisoned,
}

impl StoreError {
    fn not_found(id: &str) -> Self {
        Self::ProviderNotFound { id: id.to_string() }
    }
}

// ═══════════════════════════════════════════════════════════
// SchedulingStore
// ═══════════════════════════════════════════════════════════

struct StoreState {
    providers: Vec<Provider>,
    appointments: Vec<Appointment>,
}

impl StoreState {
    fn provider(&self, id: &str) -> Result<&Provider, StoreError> {
        self.providers
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| StoreError::not_found(id))
    }

    fn provider_mut(&mut self, id: &str) -> Result<&mut Provider, StoreError> {
        self.providers
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| StoreError::not_found(id))
    }

    fn has_slot(&self, key: &SlotKey) -> Result<bool, StoreError> {
        Ok(self
            .provider(&key.provider_id)?
            .slot(key.date, key.time)
            .is_some())
    }

    fn is_open(&self, key: &SlotKey) -> Result<bool, StoreError> {
        Ok(self
            .provider(&key.provider_id)?
            .slot(key.date, key.time)
            .is_some_and(|s| s.available))
    }
}

/// In-memory provider directory and appointment book.
///
/// Construct one per application (or per test) and share it via `Arc`.
/// `L` is the booking suspend point; production uses `SimulatedLatency`.
pub struct SchedulingStore<L = SimulatedLatency> {
    state: RwLock<StoreState>,
    slot_locks: SlotLocks,
    latency: L,
}

impl SchedulingStore<SimulatedLatency> {
    /// The seeded six-doctor roster with randomized availability.
    pub fn seeded(config: &StoreConfig) -> Result<Self, SeedError> {
        let providers = seed::default_roster(config.seed_availability_ratio)?;
        Self::new(providers, SimulatedLatency::new(config.booking_latency))
    }
}

impl<L: BookingLatency> SchedulingStore<L> {
    /// Build a store over an explicit roster.
    pub fn new(providers: Vec<Provider>, latency: L) -> Result<Self, SeedError> {
        seed::check_roster(&providers)?;
        tracing::debug!(providers = providers.len(), "Scheduling store initialized");
        Ok(Self {
            state: RwLock::new(StoreState {
                providers,
                appointments: Vec::new(),
            }),
            slot_locks: SlotLocks::new(),
            latency,
        })
    }

    fn read_state(&self) -> Result<RwLockReadGuard<'_, StoreState>, StoreError> {
        self.state.read().map_err(|_| StoreError::LockPoisoned)
    }

    fn write_state(&self) -> Result<RwLockWriteGuard<'_, StoreState>, StoreError> {
        self.state.write().map_err(|_| StoreError::LockPoisoned)
    }

    // ── Queries ─────────────────────────────────────────────

    /// Every provider, in roster order.
    pub fn list_providers(&self) -> Result<Vec<Provider>, StoreError> {
        Ok(self.read_state()?.providers.clone())
    }

    pub fn get_provider(&self, id: &str) -> Result<Provider, StoreError> {
        self.read_state()?.provider(id).cloned()
    }

    /// Providers whose name or specialization contains `term`.
    pub fn search_providers(&self, term: &str) -> Result<Vec<Provider>, StoreError> {
        let state = self.read_state()?;
        Ok(search::filter_providers(&state.providers, term)
            .into_iter()
            .cloned()
            .collect())
    }

    /// Dates with at least one open slot, ascending and distinct.
    pub fn list_available_dates(&self, provider_id: &str) -> Result<Vec<NaiveDate>, StoreError> {
        Ok(self.read_state()?.provider(provider_id)?.available_dates())
    }

    /// Open times on `date`, ascending. Empty when the day is fully booked.
    pub fn list_available_times(
        &self,
        provider_id: &str,
        date: NaiveDate,
    ) -> Result<Vec<NaiveTime>, StoreError> {
        Ok(self
            .read_state()?
            .provider(provider_id)?
            .available_times(date))
    }

    /// Confirmed appointments in booking order.
    pub fn list_appointments(&self) -> Result<Vec<Appointment>, StoreError> {
        Ok(self.read_state()?.appointments.clone())
    }

    pub fn appointment_count(&self) -> Result<usize, StoreError> {
        Ok(self.read_state()?.appointments.len())
    }

    // ── Command ─────────────────────────────────────────────

    /// Book the slot named by `request` with `provider_id`.
    ///
    /// Fails with `ProviderNotFound`, `Validation` (every bad field at once)
    /// or `SlotUnavailable`. On success the slot is no longer offered and the
    /// confirmed appointment is returned.
    pub async fn book_appointment(
        &self,
        provider_id: &str,
        request: BookingRequest,
    ) -> Result<Appointment, StoreError> {
        self.read_state()?.provider(provider_id)?;

        let booking = validation::validate_booking(&request).map_err(|errors| {
            tracing::debug!(provider_id, %errors, "Booking rejected by validation");
            StoreError::Validation(errors)
        })?;

        let key = SlotKey::new(provider_id, booking.date, booking.time);

        // Slots are never added or removed, so off-grid requests can be
        // refused without creating a lock entry.
        let exists = self.read_state()?.has_slot(&key)?;
        if !exists {
            return Err(slot_unavailable(&key));
        }

        let _slot = self.slot_locks.acquire(key.clone()).await;

        let open = self.read_state()?.is_open(&key)?;
        if !open {
            return Err(slot_unavailable(&key));
        }

        self.latency.wait().await;

        let appointment = {
            let mut state = self.write_state()?;
            let slot = state
                .provider_mut(provider_id)?
                .slot_mut(key.date, key.time)
                .filter(|s| s.available)
                .ok_or_else(|| slot_unavailable(&key))?;
            slot.available = false;

            let appointment = Appointment {
                id: Uuid::new_v4(),
                provider_id: provider_id.to_string(),
                patient_name: booking.patient_name,
                patient_email: booking.patient_email,
                date: booking.date,
                time: booking.time,
                status: AppointmentStatus::Confirmed,
                booked_at: Local::now().naive_local(),
            };
            state.appointments.push(appointment.clone());
            appointment
        };

        tracing::info!(
            appointment_id = %appointment.id,
            provider_id,
            date = %appointment.date,
            time = %appointment.time.format("%H:%M"),
            "Appointment confirmed"
        );
        Ok(appointment)
    }
}

fn slot_unavailable(key: &SlotKey) -> StoreError {
    tracing::warn!(
        provider_id = %key.provider_id,
        date = %key.date,
        time = %key.time.format("%H:%M"),
        "Requested slot is not available"
    );
    StoreError::SlotUnavailable {
        provider_id: key.provider_id.clone(),
        date: key.date,
        time: key.time,
    }
}

// ═══════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════
