//! Submission backends
//!
//! Delivering a candidate entry is an injectable capability so the
//! simulated delay can be swapped for a real service, or for an instant
//! test double, without touching the store.

use std::future::Future;
use std::time::Duration;

use crate::error::Result;
use crate::models::NewFeedback;

/// Artificial delay of the simulated backend.
pub const SIMULATED_DELAY: Duration = Duration::from_secs(1);

/// Capability that delivers a candidate entry to a backing service.
///
/// The store persists an entry only after `submit` resolves successfully;
/// a rejection reason is surfaced to the caller unchanged.
pub trait SubmissionBackend {
    /// Deliver the candidate entry, resolving once it was accepted.
    fn submit(&self, candidate: &NewFeedback) -> impl Future<Output = Result<()>> + Send;
}

/// Stand-in for a real submission service.
///
/// Waits a fixed delay and accepts everything, like the board did before a
/// real API existed.
#[derive(Debug, Clone)]
pub struct SimulatedBackend {
    delay: Duration,
}

impl SimulatedBackend {
    /// Create a backend with the default delay
    #[must_use]
    pub const fn new() -> Self {
        Self {
            delay: SIMULATED_DELAY,
        }
    }

    /// Override the artificial delay (tests use a zero delay)
    #[must_use]
    pub const fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

impl Default for SimulatedBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl SubmissionBackend for SimulatedBackend {
    async fn submit(&self, candidate: &NewFeedback) -> Result<()> {
        tokio::time::sleep(self.delay).await;
        tracing::info!(
            name = %candidate.name,
            rating = candidate.rating,
            "feedback accepted"
        );
        Ok(())
    }
}
