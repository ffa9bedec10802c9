//! Cisco IOS / IOS-XE dialect definition.
//!
//! # Result Trees
//!
//! ```text
//! show interfaces          {<interface>: {enabled, oper_status, counters: {rate: {...}}}}
//! show ip ospf neighbor    {interfaces: {<interface>: {neighbors: {<router id>: {...}}}}}
//! show processes memory    {pid: {<pid>: {index: {<n>: {pid, process, tty, ...}}}}}
//! show processes cpu       {index: {<n>: {pid, process, invoked, usecs, runtime_ms}}}
//! ```

use crate::platform::{Dialect, DialectDefinition, MemoryLayout, OspfShape};

/// Create the IOS dialect definition.
pub fn platform() -> DialectDefinition {
    DialectDefinition::new(Dialect::Ios)
        .with_interfaces_command("show interfaces")
        .with_ospf_command("show ip ospf neighbor", OspfShape::InterfaceTable)
        .with_memory_command("show processes memory", MemoryLayout::Ios)
        .with_cpu_command("show processes cpu")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::Domain;

    #[test]
    fn test_ios_platform() {
        let platform = platform();
        assert_eq!(platform.dialect, Dialect::Ios);
        assert_eq!(platform.command(Domain::Interfaces), "show interfaces");
        assert_eq!(platform.command(Domain::OspfNeighbors), "show ip ospf neighbor");
        assert_eq!(platform.command(Domain::MemoryProcesses), "show processes memory");
        assert_eq!(platform.command(Domain::CpuProcesses), "show processes cpu");
    }

    #[test]
    fn test_ios_shapes() {
        let platform = platform();
        assert_eq!(platform.ospf_shape, OspfShape::InterfaceTable);
        assert_eq!(platform.ospf_shape.root_key(), "interfaces");
        assert_eq!(platform.memory_layout, MemoryLayout::Ios);
    }
}
