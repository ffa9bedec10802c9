//! Cisco NX-OS dialect definition.
//!
//! NX-OS differs from IOS in the literal text of the interface and OSPF
//! commands, in the OSPF tree (full vrf/instance/area hierarchy), and in the
//! memory process fields (`mem_alloc`, `mem_used`).

use crate::platform::{Dialect, DialectDefinition, MemoryLayout, OspfShape};

/// Create the NX-OS dialect definition.
pub fn platform() -> DialectDefinition {
    DialectDefinition::new(Dialect::Nxos)
        .with_interfaces_command("show interface")
        .with_ospf_command("show ip ospf neighbors detail", OspfShape::VrfHierarchy)
        .with_memory_command("show processes memory", MemoryLayout::Nxos)
        .with_cpu_command("show processes cpu")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::Domain;

    #[test]
    fn test_nxos_platform() {
        let platform = platform();
        assert_eq!(platform.dialect, Dialect::Nxos);
        assert_eq!(platform.command(Domain::Interfaces), "show interface");
        assert_eq!(
            platform.command(Domain::OspfNeighbors),
            "show ip ospf neighbors detail"
        );
        assert_eq!(platform.command(Domain::CpuProcesses), "show processes cpu");
    }

    #[test]
    fn test_nxos_shapes() {
        let platform = platform();
        assert_eq!(platform.ospf_shape, OspfShape::VrfHierarchy);
        assert_eq!(platform.ospf_shape.root_key(), "vrf");
        assert_eq!(platform.memory_layout, MemoryLayout::Nxos);
    }
}
