//! Built-in dialect definitions.

pub mod cisco_ios;
pub mod cisco_nxos;
