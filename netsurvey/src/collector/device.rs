//! Per-device collection.

use std::future::Future;
use std::time::Duration;

use log::{debug, warn};

use super::failure::CommandFailure;
use super::{Collaborator, DeviceSession};
use crate::error::{CommandError, Result};
use crate::inventory::Device;
use crate::normalize::normalize;
use crate::platform::{DialectDefinition, Domain};
use crate::record::{
    CpuProcessRecord, DomainRecords, InterfaceRecord, MemoryProcessRecord, OspfNeighborRecord,
};

/// Everything collected from one device.
///
/// A domain is `None` when its command failed; `Some` (possibly empty) when
/// the command succeeded.
#[derive(Debug, Clone)]
pub struct DeviceReport {
    /// The device polled.
    pub device: Device,

    pub interfaces: Option<Vec<InterfaceRecord>>,
    pub ospf_neighbors: Option<Vec<OspfNeighborRecord>>,
    pub memory_processes: Option<Vec<MemoryProcessRecord>>,
    pub cpu_processes: Option<Vec<CpuProcessRecord>>,

    /// Commands that produced no data, with their causes.
    pub failures: Vec<CommandFailure>,
}

impl DeviceReport {
    /// Create a report with no data for any domain.
    pub fn new(device: Device) -> Self {
        Self {
            device,
            interfaces: None,
            ospf_neighbors: None,
            memory_processes: None,
            cpu_processes: None,
            failures: Vec::new(),
        }
    }

    /// Store the records a command produced.
    pub fn insert(&mut self, records: DomainRecords) {
        match records {
            DomainRecords::Interfaces(r) => self.interfaces = Some(r),
            DomainRecords::OspfNeighbors(r) => self.ospf_neighbors = Some(r),
            DomainRecords::MemoryProcesses(r) => self.memory_processes = Some(r),
            DomainRecords::CpuProcesses(r) => self.cpu_processes = Some(r),
        }
    }

    /// Check if a domain's command succeeded.
    pub fn has_data(&self, domain: Domain) -> bool {
        match domain {
            Domain::Interfaces => self.interfaces.is_some(),
            Domain::OspfNeighbors => self.ospf_neighbors.is_some(),
            Domain::MemoryProcesses => self.memory_processes.is_some(),
            Domain::CpuProcesses => self.cpu_processes.is_some(),
        }
    }

    /// Check if every command succeeded.
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Collect all four domains from one device.
///
/// Never fails as a whole: a failing session or command is logged, recorded
/// in [`DeviceReport::failures`], and leaves only the affected domains
/// without data.
pub async fn collect<C: Collaborator>(
    collaborator: &C,
    device: &Device,
    definition: &DialectDefinition,
    command_timeout: Duration,
) -> DeviceReport {
    let mut report = DeviceReport::new(device.clone());

    let mut session = match open_session(collaborator, device, command_timeout).await {
        Ok(session) => session,
        Err(e) => {
            let cause = e.to_string();
            for domain in Domain::ALL {
                let command = definition.command(domain);
                record_failure(
                    &mut report,
                    CommandFailure::new(device, command, domain, cause.clone()),
                );
            }
            return report;
        }
    };

    for domain in Domain::ALL {
        let command = definition.command(domain);
        let outcome = within(command_timeout, session.parse(command))
            .await
            .and_then(|result| normalize(definition, domain, &result, device));

        match outcome {
            Ok(records) => {
                debug!("{}: '{}' -> {} {}", device.name, command, records.len(), domain);
                report.insert(records);
            }
            Err(e) => {
                record_failure(
                    &mut report,
                    CommandFailure::new(device, command, domain, e.to_string()),
                );
            }
        }
    }

    if let Err(e) = within(command_timeout, session.close()).await {
        warn!("Failed to close session to {}: {}", device.name, e);
    }

    report
}

/// Log a recovered failure and keep it in the report.
fn record_failure(report: &mut DeviceReport, failure: CommandFailure) {
    warn!("{}", failure);
    report.failures.push(failure);
}

async fn open_session<C: Collaborator>(
    collaborator: &C,
    device: &Device,
    timeout: Duration,
) -> Result<C::Session> {
    let mut session = collaborator.session(device)?;
    within(timeout, session.open()).await?;
    Ok(session)
}

/// Bound an operation by the per-command timeout.
async fn within<T>(timeout: Duration, operation: impl Future<Output = Result<T>>) -> Result<T> {
    tokio::time::timeout(timeout, operation)
        .await
        .map_err(|_| CommandError::Timeout(timeout))?
}
