//! Flat, schema-stable records produced by the normalizers.
//!
//! Every record starts with the `device` and `ip` of the device it came from.
//! Optional columns are [`Field`]s, so a domain's records always expose the
//! same set of columns.

use serde::Serialize;

use crate::tree::Field;

/// One interface on one device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InterfaceRecord {
    pub device: String,
    pub ip: String,
    pub interface: String,
    pub enabled: bool,
    pub oper_status: String,
    pub admin_state: Field<String>,
    pub auto_negotiate: Field<bool>,
    pub bandwidth: Field<u64>,
    pub mtu: Field<u64>,
    pub port_mode: Field<String>,
    /// Outbound packet rate.
    pub out_rate: Field<u64>,
    /// Inbound packet rate.
    pub in_rate: Field<u64>,
}

impl InterfaceRecord {
    /// Check if the interface is administratively shut down.
    pub fn is_disabled(&self) -> bool {
        !self.enabled
    }
}

/// One row of the CPU process table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CpuProcessRecord {
    pub device: String,
    pub ip: String,
    pub invoked: u64,
    #[serde(rename = "p_id")]
    pub pid: u64,
    pub process: String,
    /// Runtime in milliseconds.
    pub runtime: Field<u64>,
    pub usecs: u64,
}

/// One row of the IOS memory process table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IosMemoryProcessRecord {
    pub device: String,
    pub ip: String,
    #[serde(rename = "p_id")]
    pub pid: u64,
    pub process: String,
    pub tty: u64,
    pub allocated: u64,
    pub freed: u64,
    pub holding: u64,
    pub getbufs: u64,
    pub retbufs: u64,
}

/// One row of the NX-OS memory process table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NxosMemoryProcessRecord {
    pub device: String,
    pub ip: String,
    #[serde(rename = "p_id")]
    pub pid: u64,
    pub process: String,
    pub allocated: u64,
    pub used: u64,
}

/// A memory process row; the two dialects report different columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum MemoryProcessRecord {
    Ios(IosMemoryProcessRecord),
    Nxos(NxosMemoryProcessRecord),
}

impl MemoryProcessRecord {
    /// Name of the device this row came from.
    pub fn device(&self) -> &str {
        match self {
            MemoryProcessRecord::Ios(r) => &r.device,
            MemoryProcessRecord::Nxos(r) => &r.device,
        }
    }
}

/// One OSPF adjacency seen on one interface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OspfNeighborRecord {
    pub device: String,
    pub ip: String,
    pub vrf: Field<String>,
    pub process_id: Field<String>,
    pub area: Field<String>,
    pub interface: String,
    /// Key the neighbor was listed under.
    pub neighbor: String,
    pub router_id: String,
    pub address: String,
    pub state: Field<String>,
    pub priority: Field<u64>,
    pub dr_ip: Field<String>,
    pub bdr_ip: Field<String>,
    pub dead_time: Field<String>,
}

/// The records one command produced, tagged by domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainRecords {
    Interfaces(Vec<InterfaceRecord>),
    OspfNeighbors(Vec<OspfNeighborRecord>),
    MemoryProcesses(Vec<MemoryProcessRecord>),
    CpuProcesses(Vec<CpuProcessRecord>),
}

impl DomainRecords {
    /// Number of records.
    pub fn len(&self) -> usize {
        match self {
            DomainRecords::Interfaces(r) => r.len(),
            DomainRecords::OspfNeighbors(r) => r.len(),
            DomainRecords::MemoryProcesses(r) => r.len(),
            DomainRecords::CpuProcesses(r) => r.len(),
        }
    }

    /// Check if no records were produced.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

