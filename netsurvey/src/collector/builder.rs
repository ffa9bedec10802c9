//! Builder for creating fleet pollers.

use std::time::Duration;

use super::Collaborator;
use super::poller::FleetPoller;
use crate::error::{Error, Result};

/// Builder for constructing a [`FleetPoller`].
///
/// # Example
///
/// ```rust,no_run
/// use std::time::Duration;
///
/// use netsurvey::collector::{CaptureStore, FleetPoller};
///
/// # fn example() -> Result<(), netsurvey::Error> {
/// let poller = FleetPoller::builder(CaptureStore::new("captures"))
///     .concurrency(8)
///     .command_timeout(Duration::from_secs(60))
///     .build()?;
/// # Ok(())
/// # }
/// ```
pub struct FleetPollerBuilder<C> {
    collaborator: C,
    concurrency: usize,
    command_timeout: Duration,
}

impl<C: Collaborator> FleetPollerBuilder<C> {
    /// Create a new builder around a collaborator.
    pub fn new(collaborator: C) -> Self {
        Self {
            collaborator,
            concurrency: 1,
            command_timeout: Duration::from_secs(30),
        }
    }

    /// Set how many devices are polled at once (default: 1, sequential).
    pub fn concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency;
        self
    }

    /// Set the per-command timeout (default: 30s).
    pub fn command_timeout(mut self, timeout: Duration) -> Self {
        self.command_timeout = timeout;
        self
    }

    /// Build the poller.
    pub fn build(self) -> Result<FleetPoller<C>> {
        if self.concurrency == 0 {
            return Err(Error::InvalidConfig {
                message: "Concurrency must be at least 1".to_string(),
            });
        }
        if self.command_timeout.is_zero() {
            return Err(Error::InvalidConfig {
                message: "Command timeout must be non-zero".to_string(),
            });
        }

        Ok(FleetPoller::new(
            self.collaborator,
            self.concurrency,
            self.command_timeout,
        ))
    }
}
