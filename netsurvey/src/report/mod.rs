//! Fleet-wide record sets and the report sink seam.

mod json;

pub use json::JsonReport;

use indexmap::IndexSet;

use crate::collector::{CommandFailure, DeviceReport};
use crate::error::Result;
use crate::platform::{Dialect, Domain};
use crate::record::{CpuProcessRecord, InterfaceRecord, MemoryProcessRecord, OspfNeighborRecord};

/// All records of one dialect, merged across devices in inventory order.
#[derive(Debug, Clone)]
pub struct DialectReport {
    /// The dialect these records came from.
    pub dialect: Dialect,

    pub interfaces: Vec<InterfaceRecord>,
    pub ospf_neighbors: Vec<OspfNeighborRecord>,
    pub memory_processes: Vec<MemoryProcessRecord>,
    pub cpu_processes: Vec<CpuProcessRecord>,

    /// Every recovered command failure, in device order.
    pub failures: Vec<CommandFailure>,

    /// Domains at least one device returned data for.
    covered: IndexSet<Domain>,

    devices: usize,
}

impl DialectReport {
    /// Create an empty report.
    pub fn new(dialect: Dialect) -> Self {
        Self {
            dialect,
            interfaces: Vec::new(),
            ospf_neighbors: Vec::new(),
            memory_processes: Vec::new(),
            cpu_processes: Vec::new(),
            failures: Vec::new(),
            covered: IndexSet::new(),
            devices: 0,
        }
    }

    /// Append one device's records.
    pub fn absorb(&mut self, report: DeviceReport) {
        for domain in Domain::ALL {
            if report.has_data(domain) {
                self.covered.insert(domain);
            }
        }

        self.interfaces.extend(report.interfaces.into_iter().flatten());
        self.ospf_neighbors
            .extend(report.ospf_neighbors.into_iter().flatten());
        self.memory_processes
            .extend(report.memory_processes.into_iter().flatten());
        self.cpu_processes
            .extend(report.cpu_processes.into_iter().flatten());
        self.failures.extend(report.failures);
        self.devices += 1;
    }

    /// Check if any device returned data for a domain.
    ///
    /// When this is false every device failed the domain, and sinks omit its
    /// sheet.
    pub fn has_data(&self, domain: Domain) -> bool {
        self.covered.contains(&domain)
    }

    /// Row indices in [`interfaces`](Self::interfaces) of disabled interfaces.
    pub fn disabled_interface_rows(&self) -> Vec<usize> {
        self.interfaces
            .iter()
            .enumerate()
            .filter(|(_, r)| r.is_disabled())
            .map(|(i, _)| i)
            .collect()
    }

    /// Number of devices merged into this report.
    pub fn device_count(&self) -> usize {
        self.devices
    }

    /// Sheet name for a domain (e.g. "NXOS CPU Processes").
    pub fn sheet_name(&self, domain: Domain) -> String {
        format!("{} {}", self.dialect.label(), domain.title())
    }
}

/// Results of a poll: one independent report per dialect that had devices.
#[derive(Debug, Clone, Default)]
pub struct FleetReport {
    pub ios: Option<DialectReport>,
    pub nxos: Option<DialectReport>,
}

impl FleetReport {
    /// Store a dialect's report, replacing any previous one.
    pub fn insert(&mut self, report: DialectReport) {
        match report.dialect {
            Dialect::Ios => self.ios = Some(report),
            Dialect::Nxos => self.nxos = Some(report),
        }
    }

    /// Get a dialect's report.
    pub fn get(&self, dialect: Dialect) -> Option<&DialectReport> {
        match dialect {
            Dialect::Ios => self.ios.as_ref(),
            Dialect::Nxos => self.nxos.as_ref(),
        }
    }

    /// Reports that are present, in [`Dialect::ALL`] order.
    pub fn dialects(&self) -> impl Iterator<Item = &DialectReport> {
        Dialect::ALL.into_iter().filter_map(|d| self.get(d))
    }

    /// Every recovered failure across dialects.
    pub fn failures(&self) -> impl Iterator<Item = &CommandFailure> {
        self.dialects().flat_map(|r| r.failures.iter())
    }

    /// Check if no dialect had devices.
    pub fn is_empty(&self) -> bool {
        self.ios.is_none() && self.nxos.is_none()
    }
}

/// Consumer of a finished fleet report.
pub trait ReportSink {
    /// Render the report.
    fn write(&mut self, report: &FleetReport) -> Result<()>;
}
