//! Record normalizers.
//!
//! Each normalizer is a pure function from one command's result tree and a
//! device to a list of flat records. [`normalize`] is the ingestion point:
//! it strips the dialect's root key from the raw command result and routes
//! the tree to the right normalizer.

mod cpu;
mod interfaces;
mod memory;
mod ospf;

pub use cpu::normalize_cpu_processes;
pub use interfaces::normalize_interfaces;
pub use memory::{normalize_memory_processes_ios, normalize_memory_processes_nxos};
pub use ospf::{OspfTree, normalize_ospf_neighbors};

use serde_json::Value;

use crate::error::{ExtractError, Result};
use crate::inventory::Device;
use crate::platform::{DialectDefinition, Domain, MemoryLayout};
use crate::record::DomainRecords;

/// Normalize a raw command result for one domain.
///
/// An empty result (no entries at all) yields an empty record list. A
/// non-empty result missing the dialect's root key is an extraction error.
pub fn normalize(
    definition: &DialectDefinition,
    domain: Domain,
    result: &Value,
    device: &Device,
) -> Result<DomainRecords> {
    if result.as_object().is_some_and(|map| map.is_empty()) {
        return Ok(empty(domain));
    }

    let records = match domain {
        Domain::Interfaces => DomainRecords::Interfaces(normalize_interfaces(result, device)?),
        Domain::OspfNeighbors => {
            let shape = definition.ospf_shape;
            let tree = OspfTree::new(shape, root_child(result, shape.root_key())?);
            DomainRecords::OspfNeighbors(normalize_ospf_neighbors(tree, device)?)
        }
        Domain::MemoryProcesses => {
            let tree = root_child(result, "pid")?;
            DomainRecords::MemoryProcesses(match definition.memory_layout {
                MemoryLayout::Ios => normalize_memory_processes_ios(tree, device)?,
                MemoryLayout::Nxos => normalize_memory_processes_nxos(tree, device)?,
            })
        }
        Domain::CpuProcesses => {
            DomainRecords::CpuProcesses(normalize_cpu_processes(root_child(result, "index")?, device)?)
        }
    };
    Ok(records)
}

fn empty(domain: Domain) -> DomainRecords {
    match domain {
        Domain::Interfaces => DomainRecords::Interfaces(Vec::new()),
        Domain::OspfNeighbors => DomainRecords::OspfNeighbors(Vec::new()),
        Domain::MemoryProcesses => DomainRecords::MemoryProcesses(Vec::new()),
        Domain::CpuProcesses => DomainRecords::CpuProcesses(Vec::new()),
    }
}

fn root_child<'a>(result: &'a Value, key: &str) -> Result<&'a Value> {
    result.get(key).ok_or_else(|| {
        ExtractError::MissingField {
            entry: "<root>".to_string(),
            field: key.to_string(),
        }
        .into()
    })
}
