//! Device collection and fleet polling.
//!
//! The collector layer drives the command/parse collaborator: it opens one
//! session per device, sends the dialect's four commands, and hands each
//! result tree to the normalizers. Failures are isolated per command.

mod builder;
pub mod capture;
mod device;
mod failure;
#[cfg(test)]
pub(crate) mod mock;
mod poller;

pub use builder::FleetPollerBuilder;
pub use capture::{CaptureSession, CaptureStore};
pub use device::{DeviceReport, collect};
pub use failure::CommandFailure;
pub use poller::{FleetPoller, partition};

use std::future::Future;

use serde_json::Value;

use crate::error::Result;
use crate::inventory::Device;

/// A session with one device, able to run a command and return its parsed
/// result tree.
pub trait DeviceSession: Send {
    /// Open the session.
    fn open(&mut self) -> impl Future<Output = Result<()>> + Send;

    /// Run a command and parse its output into a nested key-value tree.
    ///
    /// Connection, timeout and parse failures are all reported as errors.
    fn parse(&mut self, command: &str) -> impl Future<Output = Result<Value>> + Send;

    /// Close the session.
    fn close(&mut self) -> impl Future<Output = Result<()>> + Send;
}

/// Factory for device sessions.
///
/// # Example
///
/// ```rust,no_run
/// use netsurvey::collector::{CaptureStore, Collaborator, DeviceSession};
/// use netsurvey::Device;
///
/// # async fn example() -> Result<(), netsurvey::Error> {
/// let store = CaptureStore::new("captures");
/// let device = Device::new("core-rtr-1", "10.0.0.1", "iosxe");
///
/// let mut session = store.session(&device)?;
/// session.open().await?;
/// let tree = session.parse("show interfaces").await?;
/// println!("{} interfaces", tree.as_object().map_or(0, |m| m.len()));
/// session.close().await?;
/// # Ok(())
/// # }
/// ```
pub trait Collaborator: Send + Sync {
    /// Session type produced for each device.
    type Session: DeviceSession;

    /// Create a session for a device. Does not connect.
    fn session(&self, device: &Device) -> Result<Self::Session>;
}
