//! # Netsurvey
//!
//! Fleet telemetry collection for Cisco IOS/IOS-XE and NX-OS devices.
//!
//! Netsurvey sends each device its dialect's four show commands, takes the
//! parsed result trees from a command/parse collaborator, and flattens them
//! into schema-stable records: interfaces, OSPF neighbors, memory processes
//! and CPU processes. Records are merged per dialect and handed to a report
//! sink.
//!
//! ## Features
//!
//! - Pluggable command/parse collaborator ([`collector::Collaborator`])
//! - Offline collection from captured parser output ([`collector::CaptureStore`])
//! - Per-command failure isolation with per-command timeouts
//! - Bounded concurrent polling with results kept in inventory order
//! - Typed optional fields rendered as `n/a` when absent
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use netsurvey::collector::CaptureStore;
//! use netsurvey::{FleetPoller, Inventory, JsonReport, ReportSink};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), netsurvey::Error> {
//!     let inventory = Inventory::load("network_testbed.yml")?;
//!
//!     let poller = FleetPoller::builder(CaptureStore::new("captures"))
//!         .concurrency(4)
//!         .build()?;
//!     let report = poller.poll(inventory.devices()).await;
//!
//!     JsonReport::create("network_analytics.json")?.write(&report)?;
//!     Ok(())
//! }
//! ```

pub mod collector;
pub mod error;
pub mod inventory;
pub mod normalize;
pub mod platform;
pub mod record;
pub mod report;
pub mod tree;

// Re-export main types for convenience
pub use collector::{CommandFailure, FleetPoller, FleetPollerBuilder};
pub use error::{Error, Result};
pub use inventory::{Device, Inventory};
pub use platform::{Dialect, DialectDefinition, Domain};
pub use record::{
    CpuProcessRecord, InterfaceRecord, MemoryProcessRecord, OspfNeighborRecord,
};
pub use report::{DialectReport, FleetReport, JsonReport, ReportSink};
pub use tree::Field;
