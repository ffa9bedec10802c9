//! Fleet-wide polling.

use std::time::Duration;

use futures_util::stream::{self, StreamExt};
use indexmap::IndexMap;
use log::{debug, info};

use super::Collaborator;
use super::builder::FleetPollerBuilder;
use super::device::{DeviceReport, collect};
use crate::inventory::Device;
use crate::platform::Dialect;
use crate::report::{DialectReport, FleetReport};

/// Polls a fleet of devices and merges the results per dialect.
///
/// Devices run concurrently up to the configured limit. Per-device results
/// are merged in inventory order, whatever order they complete in.
pub struct FleetPoller<C> {
    collaborator: C,
    concurrency: usize,
    command_timeout: Duration,
}

impl<C: Collaborator> FleetPoller<C> {
    /// Start building a poller.
    pub fn builder(collaborator: C) -> FleetPollerBuilder<C> {
        FleetPollerBuilder::new(collaborator)
    }

    pub(crate) fn new(collaborator: C, concurrency: usize, command_timeout: Duration) -> Self {
        Self {
            collaborator,
            concurrency,
            command_timeout,
        }
    }

    /// Maximum number of devices polled at once.
    pub fn concurrency(&self) -> usize {
        self.concurrency
    }

    /// Per-command timeout.
    pub fn command_timeout(&self) -> Duration {
        self.command_timeout
    }

    /// Poll every supported device.
    ///
    /// A dialect with no devices is absent from the returned report.
    pub async fn poll(&self, devices: &[Device]) -> FleetReport {
        let mut report = FleetReport::default();
        for (dialect, members) in partition(devices) {
            report.insert(self.poll_dialect(dialect, &members).await);
        }
        report
    }

    /// Poll devices that all share `dialect`.
    pub async fn poll_dialect(&self, dialect: Dialect, devices: &[&Device]) -> DialectReport {
        let definition = dialect.definition();
        info!(
            "Polling {} {} device(s), {} at a time",
            devices.len(),
            dialect,
            self.concurrency
        );

        // `buffered` yields in submission order
        let reports: Vec<DeviceReport> = stream::iter(devices.iter().copied())
            .map(|device| collect(&self.collaborator, device, &definition, self.command_timeout))
            .buffered(self.concurrency)
            .collect()
            .await;

        let mut merged = DialectReport::new(dialect);
        for report in reports {
            merged.absorb(report);
        }
        merged
    }
}

/// Split devices by dialect, keeping inventory order within each dialect.
///
/// Devices with an unsupported OS are left out.
pub fn partition(devices: &[Device]) -> IndexMap<Dialect, Vec<&Device>> {
    let mut partitions: IndexMap<Dialect, Vec<&Device>> = IndexMap::new();
    for device in devices {
        match device.dialect() {
            Some(dialect) => partitions.entry(dialect).or_default().push(device),
            None => debug!("Skipping {}: unsupported os '{}'", device.name, device.os),
        }
    }
    partitions
}
