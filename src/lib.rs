pub mod config;
pub mod latency; // Booking suspend point
pub mod models;
pub mod reservation; // Per-slot booking locks
pub mod search;
pub mod seed;
pub mod store; // SchedulingStore: queries + booking command
pub mod summary;
pub mod validation;

pub use latency::{BookingLatency, NoLatency, SimulatedLatency, YieldLatency};
pub use models::{Appointment, AppointmentStatus, AvailabilityStatus, BookingRequest, Provider, Slot};
pub use store::{SchedulingStore, StoreError};
pub use validation::{BookingField, ValidationErrors};

use tracing_subscriber::EnvFilter;

/// Install the global `tracing` subscriber.
///
/// Honors `RUST_LOG`, falling back to `config::default_log_filter()`.
/// Safe to call more than once; later calls are ignored.
pub fn init_tracing() {
    let installed = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .try_init()
        .is_ok();

    if installed {
        tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);
    }
}
