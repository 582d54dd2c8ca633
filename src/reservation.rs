//! Per-slot booking locks.
//!
//! A booking holds its slot's lock from the availability check until the
//! appointment is committed, across the latency suspend point. Two bookings
//! for the same (provider, date, time) therefore run one after the other;
//! bookings for different slots never wait on each other.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::{NaiveDate, NaiveTime};
use tokio::sync::{Mutex as TokioMutex, OwnedMutexGuard};

/// Identifies one slot across the whole store.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SlotKey {
    pub provider_id: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
}

impl SlotKey {
    pub fn new(provider_id: &str, date: NaiveDate, time: NaiveTime) -> Self {
        Self {
            provider_id: provider_id.to_string(),
            date,
            time,
        }
    }
}

/// Held while a booking for `key` is in flight. Dropping it releases the slot.
pub struct SlotGuard {
    key: SlotKey,
    _guard: OwnedMutexGuard<()>,
}

impl SlotGuard {
    pub fn key(&self) -> &SlotKey {
        &self.key
    }
}

/// Lazily-created async mutex per slot.
#[derive(Default)]
pub struct SlotLocks {
    locks: Mutex<HashMap<SlotKey, Arc<TokioMutex<()>>>>,
}

impl SlotLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wait until no other booking holds `key`, then take it.
    pub async fn acquire(&self, key: SlotKey) -> SlotGuard {
        let lock = self.lock_for(&key);
        let guard = lock.lock_owned().await;
        SlotGuard { key, _guard: guard }
    }

    /// Take `key` only if it is free right now.
    pub fn try_acquire(&self, key: SlotKey) -> Option<SlotGuard> {
        let lock = self.lock_for(&key);
        lock.try_lock_owned()
            .ok()
            .map(|guard| SlotGuard { key, _guard: guard })
    }

    /// Number of slots that have ever been contended or booked.
    pub fn tracked(&self) -> usize {
        self.locks.lock().map(|m| m.len()).unwrap_or(0)
    }

    fn lock_for(&self, key: &SlotKey) -> Arc<TokioMutex<()>> {
        // Entries are only ever inserted, so a poisoned map is still consistent.
        let mut locks = match self.locks.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        locks
            .entry(key.clone())
            .or_insert_with(|| Arc::new(TokioMutex::new(())))
            .clone()
    }
}
