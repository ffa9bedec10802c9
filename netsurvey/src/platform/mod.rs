//! Dialect definitions for multi-OS support.
//!
//! Each supported CLI dialect has a [`DialectDefinition`] naming the literal
//! commands it runs and the shape of the trees its parser returns. The shape
//! tags are fixed here, at ingestion, so the normalizers never guess a tree's
//! layout from the keys it happens to contain.

mod definition;
pub mod vendors;

pub use definition::{DialectDefinition, MemoryLayout, OspfShape};

use std::fmt;

use serde::Serialize;

/// A supported device command language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Dialect {
    /// Cisco IOS and IOS-XE.
    Ios,
    /// Cisco NX-OS.
    Nxos,
}

impl Dialect {
    /// Every supported dialect, in polling order.
    pub const ALL: [Dialect; 2] = [Dialect::Ios, Dialect::Nxos];

    /// Map an inventory `os` tag to a dialect.
    ///
    /// Returns `None` for unsupported tags; those devices are not polled.
    pub fn from_os(os: &str) -> Option<Self> {
        match os.trim().to_ascii_lowercase().as_str() {
            "ios" | "iosxe" => Some(Dialect::Ios),
            "nxos" => Some(Dialect::Nxos),
            _ => None,
        }
    }

    /// Label used in sheet names (e.g. "NXOS Interfaces").
    pub fn label(&self) -> &'static str {
        match self {
            Dialect::Ios => "IOS",
            Dialect::Nxos => "NXOS",
        }
    }

    /// Get the dialect's command and tree-shape definition.
    pub fn definition(&self) -> DialectDefinition {
        match self {
            Dialect::Ios => vendors::cisco_ios::platform(),
            Dialect::Nxos => vendors::cisco_nxos::platform(),
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A telemetry domain; one command and one record kind each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Domain {
    Interfaces,
    OspfNeighbors,
    MemoryProcesses,
    CpuProcesses,
}

impl Domain {
    /// Every domain, in the order commands are sent to a device.
    pub const ALL: [Domain; 4] = [
        Domain::Interfaces,
        Domain::OspfNeighbors,
        Domain::MemoryProcesses,
        Domain::CpuProcesses,
    ];

    /// Record set name (`interfaces`, `cpu_processes`, ...).
    pub fn name(&self) -> &'static str {
        match self {
            Domain::Interfaces => "interfaces",
            Domain::OspfNeighbors => "ospf_neighbors",
            Domain::MemoryProcesses => "memory_processes",
            Domain::CpuProcesses => "cpu_processes",
        }
    }

    /// Human title used for report sheets.
    pub fn title(&self) -> &'static str {
        match self {
            Domain::Interfaces => "Interfaces",
            Domain::OspfNeighbors => "OSPF Neighbors",
            Domain::MemoryProcesses => "Memory Processes",
            Domain::CpuProcesses => "CPU Processes",
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
