//! Collaborator backed by previously captured result trees.
//!
//! Captures live under a root directory, one subdirectory per device and one
//! JSON file per command:
//!
//! ```text
//! captures/
//!   core-rtr-1/
//!     show_interfaces.json
//!     show_ip_ospf_neighbor.json
//! ```

use std::io;
use std::path::PathBuf;

use log::debug;
use serde_json::Value;

use super::{Collaborator, DeviceSession};
use crate::error::{CommandError, Result};
use crate::inventory::Device;

/// File stem for a command: its words joined with underscores.
pub fn command_slug(command: &str) -> String {
    command.split_whitespace().collect::<Vec<_>>().join("_")
}

/// Directory of captured result trees.
#[derive(Debug, Clone)]
pub struct CaptureStore {
    root: PathBuf,
}

impl CaptureStore {
    /// Create a store rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Directory holding one device's captures.
    pub fn device_dir(&self, device: &str) -> PathBuf {
        self.root.join(device)
    }

    /// Where the capture of `command` on `device` is expected.
    pub fn capture_path(&self, device: &str, command: &str) -> PathBuf {
        self.device_dir(device)
            .join(format!("{}.json", command_slug(command)))
    }
}

impl Collaborator for CaptureStore {
    type Session = CaptureSession;

    fn session(&self, device: &Device) -> Result<CaptureSession> {
        Ok(CaptureSession {
            store: self.clone(),
            device: device.name.clone(),
        })
    }
}

/// Session reading one device's captures.
#[derive(Debug)]
pub struct CaptureSession {
    store: CaptureStore,
    device: String,
}

impl DeviceSession for CaptureSession {
    async fn open(&mut self) -> Result<()> {
        let dir = self.store.device_dir(&self.device);
        let is_dir = tokio::fs::metadata(&dir)
            .await
            .map(|m| m.is_dir())
            .unwrap_or(false);

        if !is_dir {
            return Err(CommandError::Session {
                device: self.device.clone(),
                message: format!("no capture directory at {}", dir.display()),
            }
            .into());
        }
        Ok(())
    }

    async fn parse(&mut self, command: &str) -> Result<Value> {
        let path = self.store.capture_path(&self.device, command);
        debug!("Reading capture {}", path.display());

        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(CommandError::CaptureMissing { path }.into());
            }
            Err(e) => return Err(CommandError::Io(e).into()),
        };

        let tree = serde_json::from_slice(&bytes).map_err(CommandError::Json)?;
        Ok(tree)
    }

    async fn close(&mut self) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::time::Duration;

    use super::*;
    use crate::collector::{DeviceReport, collect};
    use crate::error::Error;
    use crate::platform::{Dialect, Domain};

    fn store_with(device: &str, files: &[(&str, &str)]) -> (tempfile::TempDir, CaptureStore) {
        let dir = tempfile::tempdir().unwrap();
        let device_dir = dir.path().join(device);
        fs::create_dir(&device_dir).unwrap();
        for (name, body) in files {
            fs::write(device_dir.join(name), body).unwrap();
        }
        let store = CaptureStore::new(dir.path());
        (dir, store)
    }

    #[test]
    fn test_command_slug() {
        assert_eq!(command_slug("show ip ospf neighbor"), "show_ip_ospf_neighbor");
        assert_eq!(command_slug("  show   interface "), "show_interface");
    }

    #[test]
    fn test_capture_path() {
        let store = CaptureStore::new("/captures");
        assert_eq!(
            store.capture_path("leaf-1", "show processes cpu"),
            PathBuf::from("/captures/leaf-1/show_processes_cpu.json")
        );
    }

    #[tokio::test]
    async fn test_parse_reads_capture() {
        let (_dir, store) = store_with(
            "rtr-1",
            &[("show_interfaces.json", r#"{"Gi1": {"enabled": true}}"#)],
        );
        let device = Device::new("rtr-1", "10.0.0.1", "ios");

        let mut session = store.session(&device).unwrap();
        session.open().await.unwrap();
        let tree = session.parse("show interfaces").await.unwrap();
        assert_eq!(tree["Gi1"]["enabled"], Value::Bool(true));
    }

    #[tokio::test]
    async fn test_missing_capture() {
        let (_dir, store) = store_with("rtr-1", &[]);
        let device = Device::new("rtr-1", "10.0.0.1", "ios");

        let mut session = store.session(&device).unwrap();
        session.open().await.unwrap();
        let result = session.parse("show processes cpu").await;
        let expected = store.capture_path("rtr-1", "show processes cpu");
        assert!(matches!(
            result,
            Err(Error::Command(CommandError::CaptureMissing { ref path })) if *path == expected
        ));
    }

    #[tokio::test]
    async fn test_malformed_capture() {
        let (_dir, store) = store_with("rtr-1", &[("show_processes_cpu.json", "{not json")]);
        let device = Device::new("rtr-1", "10.0.0.1", "ios");

        let mut session = store.session(&device).unwrap();
        session.open().await.unwrap();
        let result = session.parse("show processes cpu").await;
        assert!(matches!(result, Err(Error::Command(CommandError::Json(_)))));
    }

    #[tokio::test]
    async fn test_open_without_device_dir() {
        let dir = tempfile::tempdir().unwrap();
        let store = CaptureStore::new(dir.path());
        let device = Device::new("ghost", "10.9.9.9", "nxos");

        let mut session = store.session(&device).unwrap();
        let result = session.open().await;
        assert!(matches!(
            result,
            Err(Error::Command(CommandError::Session { .. }))
        ));
    }

    #[tokio::test]
    async fn test_collect_from_captures() {
        let (_dir, store) = store_with(
            "leaf-1",
            &[
                (
                    "show_interface.json",
                    r#"{"Ethernet1/1": {"enabled": false, "oper_status": "down"}}"#,
                ),
                (
                    "show_processes_cpu.json",
                    r#"{"index": {"1": {"invoked": 1, "pid": 1, "process": "init", "runtime": 3, "usecs": 1}}}"#,
                ),
            ],
        );
        let device = Device::new("leaf-1", "10.0.1.1", "nxos");
        let definition = Dialect::Nxos.definition();

        let report: DeviceReport =
            collect(&store, &device, &definition, Duration::from_secs(5)).await;

        assert!(report.has_data(Domain::Interfaces));
        assert!(report.has_data(Domain::CpuProcesses));
        assert!(!report.has_data(Domain::OspfNeighbors));
        assert!(!report.has_data(Domain::MemoryProcesses));
        assert_eq!(report.failures.len(), 2);
        assert!(report.interfaces.unwrap()[0].is_disabled());
    }
}
