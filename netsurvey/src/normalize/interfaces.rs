//! Interface status normalization (`show interface[s]`).

use serde_json::Value;

use crate::error::Result;
use crate::inventory::Device;
use crate::record::InterfaceRecord;
use crate::tree::{self, Entry};

/// Flatten an interface tree keyed by interface name.
///
/// `enabled` and `oper_status` must be present on every interface; one
/// missing value fails the whole result.
pub fn normalize_interfaces(tree: &Value, device: &Device) -> Result<Vec<InterfaceRecord>> {
    tree::root(tree)?
        .entries()?
        .into_iter()
        .map(|entry| interface_record(entry, device))
        .collect()
}

fn interface_record(entry: Entry<'_>, device: &Device) -> Result<InterfaceRecord> {
    Ok(InterfaceRecord {
        device: device.name.clone(),
        ip: device.ip.clone(),
        interface: entry.key().to_string(),
        enabled: entry.required("enabled")?,
        oper_status: entry.required("oper_status")?,
        admin_state: entry.optional("admin_state")?,
        auto_negotiate: entry.optional("auto_negotiate")?,
        bandwidth: entry.optional("bandwidth")?,
        mtu: entry.optional("mtu")?,
        port_mode: entry.optional("port_mode")?,
        out_rate: entry.optional_path(&["counters", "rate", "out_rate_pkts"])?,
        in_rate: entry.optional_path(&["counters", "rate", "in_rate_pkts"])?,
    })
}
