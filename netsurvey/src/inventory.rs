//! Device inventory loaded from a testbed file.
//!
//! The testbed uses the pyATS layout; only the fields the poller needs are
//! read:
//!
//! ```yaml
//! devices:
//!   core-rtr-1:
//!     os: iosxe
//!     connections:
//!       cli:
//!         ip: 10.0.0.1
//!         protocol: ssh
//! ```

use std::path::Path;

use indexmap::IndexMap;
use log::debug;
use serde::Deserialize;

use crate::error::{InventoryError, Result};
use crate::platform::Dialect;

/// A device to poll.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Device {
    /// Stable device identity (testbed key).
    pub name: String,

    /// Management IP address.
    pub ip: String,

    /// OS tag from the inventory (`ios`, `iosxe`, `nxos`, ...).
    pub os: String,
}

impl Device {
    /// Create a new device.
    pub fn new(name: impl Into<String>, ip: impl Into<String>, os: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ip: ip.into(),
            os: os.into(),
        }
    }

    /// The device's dialect, or `None` if its OS is unsupported.
    pub fn dialect(&self) -> Option<Dialect> {
        Dialect::from_os(&self.os)
    }
}

/// Ordered list of devices from a testbed.
#[derive(Debug, Clone, Default)]
pub struct Inventory {
    devices: Vec<Device>,
}

#[derive(Debug, Deserialize)]
struct Testbed {
    #[serde(default)]
    devices: IndexMap<String, TestbedDevice>,
}

#[derive(Debug, Deserialize)]
struct TestbedDevice {
    #[serde(default)]
    os: String,
    #[serde(default)]
    connections: IndexMap<String, TestbedConnection>,
}

#[derive(Debug, Deserialize)]
struct TestbedConnection {
    ip: Option<String>,
}

impl Inventory {
    /// Load a testbed YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Reading testbed from {:?}", path);
        let text = std::fs::read_to_string(path).map_err(|source| InventoryError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&text)
    }

    /// Parse testbed YAML.
    ///
    /// A supported device without a cli ip is an error. Unsupported devices
    /// without one are left out, since they are never polled.
    pub fn from_yaml(text: &str) -> Result<Self> {
        let testbed: Testbed = serde_yaml::from_str(text).map_err(InventoryError::Yaml)?;

        let mut devices = Vec::new();
        for (name, entry) in testbed.devices {
            let ip = entry.connections.get("cli").and_then(|cli| cli.ip.clone());
            match (ip, Dialect::from_os(&entry.os)) {
                (Some(ip), _) => devices.push(Device::new(name, ip, entry.os)),
                (None, Some(_)) => {
                    return Err(InventoryError::MissingAddress { device: name }.into());
                }
                (None, None) => {
                    debug!("Skipping {}: unsupported os '{}' without cli ip", name, entry.os)
                }
            }
        }

        debug!("Loaded {} devices from testbed", devices.len());
        Ok(Self { devices })
    }

    /// All devices, in testbed order.
    pub fn devices(&self) -> &[Device] {
        &self.devices
    }

    /// Number of devices.
    pub fn len(&self) -> usize {
        self.devices.len()
    }

    /// Check if the inventory is empty.
    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }
}
