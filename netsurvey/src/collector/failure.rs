//! Recovered per-command failures.

use std::fmt;

use serde::Serialize;

use crate::inventory::Device;
use crate::platform::Domain;

/// A command that produced no data for a device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandFailure {
    /// The device the command was sent to.
    pub device: String,

    /// The literal command.
    pub command: String,

    /// The domain left without data.
    pub domain: Domain,

    /// The underlying cause.
    pub cause: String,
}

impl CommandFailure {
    /// Create a new failure.
    pub fn new(
        device: &Device,
        command: impl Into<String>,
        domain: Domain,
        cause: impl Into<String>,
    ) -> Self {
        Self {
            device: device.name.clone(),
            command: command.into(),
            domain,
            cause: cause.into(),
        }
    }
}

impl fmt::Display for CommandFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: '{}' failed: {}", self.device, self.command, self.cause)
    }
}
