//! Suspend point for the booking command.
//!
//! A booking stands in for a round trip to a remote scheduling backend. The
//! store awaits a `BookingLatency` between the availability check and the
//! commit, so callers always treat booking as asynchronous. Tests plug in
//! `NoLatency` or `YieldLatency` instead of waiting on the wall clock.

use std::future::Future;
use std::time::Duration;

/// Asynchronous boundary awaited once per booking.
pub trait BookingLatency: Send + Sync {
    fn wait(&self) -> impl Future<Output = ()> + Send;
}

/// Sleeps for a fixed duration on the tokio timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulatedLatency {
    delay: Duration,
}

impl SimulatedLatency {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for SimulatedLatency {
    fn default() -> Self {
        Self::new(Duration::from_millis(crate::config::DEFAULT_BOOKING_LATENCY_MS))
    }
}

impl BookingLatency for SimulatedLatency {
    async fn wait(&self) {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
    }
}

/// Completes immediately.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoLatency;

impl BookingLatency for NoLatency {
    async fn wait(&self) {}
}

/// Yields to the scheduler once, letting other in-flight bookings run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct YieldLatency;

impl BookingLatency for YieldLatency {
    async fn wait(&self) {
        tokio::task::yield_now().await;
    }
}
