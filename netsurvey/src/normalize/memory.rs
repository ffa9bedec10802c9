//! Memory process table normalization (`show processes memory`).
//!
//! Both dialects nest entries two levels deep: an outer key per pid holding
//! an `index` mapping of process entries. Only the leaf fields differ.

use serde_json::Value;

use crate::error::Result;
use crate::inventory::Device;
use crate::record::{IosMemoryProcessRecord, MemoryProcessRecord, NxosMemoryProcessRecord};
use crate::tree::{self, Entry};

/// Flatten an IOS memory process table.
pub fn normalize_memory_processes_ios(
    tree: &Value,
    device: &Device,
) -> Result<Vec<MemoryProcessRecord>> {
    process_entries(tree)?
        .into_iter()
        .map(|entry| -> Result<MemoryProcessRecord> {
            Ok(MemoryProcessRecord::Ios(IosMemoryProcessRecord {
                device: device.name.clone(),
                ip: device.ip.clone(),
                pid: entry.required("pid")?,
                process: entry.required("process")?,
                tty: entry.required("tty")?,
                allocated: entry.required("allocated")?,
                freed: entry.required("freed")?,
                holding: entry.required("holding")?,
                getbufs: entry.required("getbufs")?,
                retbufs: entry.required("retbufs")?,
            }))
        })
        .collect()
}

/// Flatten an NX-OS memory process table.
pub fn normalize_memory_processes_nxos(
    tree: &Value,
    device: &Device,
) -> Result<Vec<MemoryProcessRecord>> {
    process_entries(tree)?
        .into_iter()
        .map(|entry| -> Result<MemoryProcessRecord> {
            Ok(MemoryProcessRecord::Nxos(NxosMemoryProcessRecord {
                device: device.name.clone(),
                ip: device.ip.clone(),
                pid: entry.required("pid")?,
                process: entry.required("process")?,
                allocated: entry.required("mem_alloc")?,
                used: entry.required("mem_used")?,
            }))
        })
        .collect()
}

/// Collect the leaf entries of `<pid> → index → <n>`, in source order.
fn process_entries(tree: &Value) -> Result<Vec<Entry<'_>>> {
    let mut entries = Vec::new();
    for outer in tree::root(tree)?.entries()? {
        entries.extend(outer.required_child("index")?.entries()?);
    }
    Ok(entries)
}
