//! Dialect definition holding command literals and tree shapes.

use super::{Dialect, Domain};

/// Layout of the OSPF neighbor tree a dialect's parser returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OspfShape {
    /// `vrf → address_family → ipv4 → instance → areas → interfaces → neighbors`.
    ///
    /// Carries vrf, process id and area ancestry. Every neighbor must name its
    /// router id in `neighbor_router_id`.
    VrfHierarchy,

    /// `interfaces → neighbors`, with no ancestry.
    ///
    /// Neighbors are keyed by router id; `neighbor_router_id` is used when the
    /// parser provides it.
    InterfaceTable,
}

impl OspfShape {
    /// Top-level key of the parsed command result.
    pub fn root_key(&self) -> &'static str {
        match self {
            OspfShape::VrfHierarchy => "vrf",
            OspfShape::InterfaceTable => "interfaces",
        }
    }
}

/// Field layout of the memory process table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemoryLayout {
    /// pid, process, tty, allocated, freed, holding, getbufs, retbufs.
    Ios,
    /// pid, process, mem_alloc, mem_used.
    Nxos,
}

/// Dialect definition containing everything dialect-specific the collector needs.
#[derive(Debug, Clone)]
pub struct DialectDefinition {
    /// The dialect this definition describes.
    pub dialect: Dialect,

    /// Interface status command.
    pub interfaces_command: String,

    /// OSPF neighbor command.
    pub ospf_command: String,

    /// Memory process table command.
    pub memory_command: String,

    /// CPU process table command.
    pub cpu_command: String,

    /// Shape of the OSPF neighbor tree.
    pub ospf_shape: OspfShape,

    /// Field layout of the memory process table.
    pub memory_layout: MemoryLayout,
}

impl DialectDefinition {
    /// Create a definition with the commands shared by both Cisco dialects.
    pub fn new(dialect: Dialect) -> Self {
        Self {
            dialect,
            interfaces_command: "show interfaces".to_string(),
            ospf_command: "show ip ospf neighbor".to_string(),
            memory_command: "show processes memory".to_string(),
            cpu_command: "show processes cpu".to_string(),
            ospf_shape: OspfShape::InterfaceTable,
            memory_layout: MemoryLayout::Ios,
        }
    }

    /// Set the interface status command.
    pub fn with_interfaces_command(mut self, command: impl Into<String>) -> Self {
        self.interfaces_command = command.into();
        self
    }

    /// Set the OSPF neighbor command and the shape of its result.
    pub fn with_ospf_command(mut self, command: impl Into<String>, shape: OspfShape) -> Self {
        self.ospf_command = command.into();
        self.ospf_shape = shape;
        self
    }

    /// Set the memory process command and its field layout.
    pub fn with_memory_command(mut self, command: impl Into<String>, layout: MemoryLayout) -> Self {
        self.memory_command = command.into();
        self.memory_layout = layout;
        self
    }

    /// Set the CPU process command.
    pub fn with_cpu_command(mut self, command: impl Into<String>) -> Self {
        self.cpu_command = command.into();
        self
    }

    /// Get the literal command for a domain.
    pub fn command(&self, domain: Domain) -> &str {
        match domain {
            Domain::Interfaces => &self.interfaces_command,
            Domain::OspfNeighbors => &self.ospf_command,
            Domain::MemoryProcesses => &self.memory_command,
            Domain::CpuProcesses => &self.cpu_command,
        }
    }
}
