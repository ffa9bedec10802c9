//! OSPF neighbor normalization.
//!
//! The two dialects return differently shaped trees. Each shape has its own
//! adapter that reduces it to a list of [`OspfInterface`] views: one
//! interface mapping plus whatever ancestry (vrf, process, area) the shape
//! carries. Neighbor flattening then runs once over those views.
//!
//! ```text
//! VrfHierarchy:   vrf → <vrf> → address_family → ipv4 → instance → <process>
//!                     → areas → <area> → interfaces → <interface> → neighbors → <id>
//! InterfaceTable: <interface> → neighbors → <id>
//! ```

use serde_json::Value;

use crate::error::Result;
use crate::inventory::Device;
use crate::platform::OspfShape;
use crate::record::OspfNeighborRecord;
use crate::tree::{self, Entry, Field};

/// An OSPF neighbor tree tagged with its shape.
///
/// The value is the tree below the shape's root key.
#[derive(Debug, Clone, Copy)]
pub enum OspfTree<'a> {
    VrfHierarchy(&'a Value),
    InterfaceTable(&'a Value),
}

impl<'a> OspfTree<'a> {
    /// Tag a tree with the shape its dialect declares.
    pub fn new(shape: OspfShape, tree: &'a Value) -> Self {
        match shape {
            OspfShape::VrfHierarchy => OspfTree::VrfHierarchy(tree),
            OspfShape::InterfaceTable => OspfTree::InterfaceTable(tree),
        }
    }
}

/// Where a neighbor's router id comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RouterId {
    /// `neighbor_router_id` must be present.
    Field,
    /// `neighbor_router_id` if present, else the neighbor key.
    FieldOrKey,
}

/// One interface's neighbor table plus its ancestry.
#[derive(Debug)]
struct OspfInterface<'a> {
    vrf: Field<String>,
    process_id: Field<String>,
    area: Field<String>,
    entry: Entry<'a>,
    router_id: RouterId,
}

/// Flatten an OSPF neighbor tree into one record per neighbor.
///
/// `address` (and the router id) are required on every neighbor; all other
/// neighbor attributes default to `n/a`.
pub fn normalize_ospf_neighbors(
    tree: OspfTree<'_>,
    device: &Device,
) -> Result<Vec<OspfNeighborRecord>> {
    let interfaces = match tree {
        OspfTree::VrfHierarchy(tree) => vrf_hierarchy(tree)?,
        OspfTree::InterfaceTable(tree) => interface_table(tree)?,
    };

    let mut records = Vec::new();
    for interface in &interfaces {
        for neighbor in interface.entry.children("neighbors")? {
            records.push(neighbor_record(interface, neighbor, device)?);
        }
    }
    Ok(records)
}

fn vrf_hierarchy(tree: &Value) -> Result<Vec<OspfInterface<'_>>> {
    let mut interfaces = Vec::new();
    for vrf in tree::root(tree)?.entries()? {
        let Some(instances) = vrf.descend(&["address_family", "ipv4", "instance"])? else {
            continue;
        };
        for instance in instances.entries()? {
            for area in instance.children("areas")? {
                for entry in area.children("interfaces")? {
                    interfaces.push(OspfInterface {
                        vrf: Field::Value(vrf.key().to_string()),
                        process_id: Field::Value(instance.key().to_string()),
                        area: Field::Value(area.key().to_string()),
                        entry,
                        router_id: RouterId::Field,
                    });
                }
            }
        }
    }
    Ok(interfaces)
}

fn interface_table(tree: &Value) -> Result<Vec<OspfInterface<'_>>> {
    Ok(tree::root(tree)?
        .entries()?
        .into_iter()
        .map(|entry| OspfInterface {
            vrf: Field::NotApplicable,
            process_id: Field::NotApplicable,
            area: Field::NotApplicable,
            entry,
            router_id: RouterId::FieldOrKey,
        })
        .collect())
}

fn neighbor_record(
    interface: &OspfInterface<'_>,
    neighbor: Entry<'_>,
    device: &Device,
) -> Result<OspfNeighborRecord> {
    let router_id: String = match interface.router_id {
        RouterId::Field => neighbor.required("neighbor_router_id")?,
        RouterId::FieldOrKey => match neighbor.optional::<String>("neighbor_router_id")? {
            Field::Value(id) => id,
            Field::NotApplicable => neighbor.key().to_string(),
        },
    };

    Ok(OspfNeighborRecord {
        device: device.name.clone(),
        ip: device.ip.clone(),
        vrf: interface.vrf.clone(),
        process_id: interface.process_id.clone(),
        area: interface.area.clone(),
        interface: interface.entry.key().to_string(),
        neighbor: neighbor.key().to_string(),
        router_id,
        address: neighbor.required("address")?,
        state: neighbor.optional("state")?,
        priority: neighbor.optional("priority")?,
        dr_ip: neighbor.optional("dr_ip_addr")?,
        bdr_ip: neighbor.optional("bdr_ip_addr")?,
        dead_time: neighbor.optional("dead_time")?,
    })
}
