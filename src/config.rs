use std::time::Duration;

/// Application-level constants
pub const APP_NAME: &str = "Carebook";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Length of every consultation, shown on the booking summary.
pub const APPOINTMENT_DURATION_MINUTES: u32 = 30;

/// Simulated backend round trip for a booking.
pub const DEFAULT_BOOKING_LATENCY_MS: u64 = 1000;

/// Probability that a seeded slot starts out bookable.
pub const DEFAULT_SEED_AVAILABILITY_RATIO: f64 = 0.7;

/// Calendar dates covered by the seeded slot grid (YYYY-MM-DD).
pub const SEED_DATES: [&str; 5] = [
    "2024-12-30",
    "2024-12-31",
    "2025-01-01",
    "2025-01-02",
    "2025-01-03",
];

/// Times of day covered by the seeded slot grid (HH:MM).
pub const SEED_TIMES: [&str; 6] = ["09:00", "10:00", "11:00", "14:00", "15:00", "16:00"];

const LATENCY_ENV: &str = "CAREBOOK_BOOKING_LATENCY_MS";
const AVAILABILITY_ENV: &str = "CAREBOOK_SEED_AVAILABILITY";

/// Log filter used when `RUST_LOG` is unset.
pub fn default_log_filter() -> String {
    "carebook_lib=info,warn".to_string()
}

/// Runtime knobs for a seeded store.
#[derive(Debug, Clone, PartialEq)]
pub struct StoreConfig {
    /// Delay applied at the booking suspend point.
    pub booking_latency: Duration,
    /// Probability in [0, 1] that a seeded slot is available.
    pub seed_availability_ratio: f64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            booking_latency: Duration::from_millis(DEFAULT_BOOKING_LATENCY_MS),
            seed_availability_ratio: DEFAULT_SEED_AVAILABILITY_RATIO,
        }
    }
}

impl StoreConfig {
    /// Defaults overridden by `CAREBOOK_BOOKING_LATENCY_MS` and
    /// `CAREBOOK_SEED_AVAILABILITY` when set.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Unparseable values keep the default.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(LATENCY_ENV) {
            match raw.trim().parse::<u64>() {
                Ok(ms) => config.booking_latency = Duration::from_millis(ms),
                Err(_) => tracing::warn!("Ignoring invalid {LATENCY_ENV}={raw:?}"),
            }
        }

        if let Some(raw) = lookup(AVAILABILITY_ENV) {
            match raw.trim().parse::<f64>() {
                Ok(ratio) if ratio.is_finite() => {
                    config.seed_availability_ratio = ratio.clamp(0.0, 1.0);
                }
                _ => tracing::warn!("Ignoring invalid {AVAILABILITY_ENV}={raw:?}"),
            }
        }

        config
    }
}
