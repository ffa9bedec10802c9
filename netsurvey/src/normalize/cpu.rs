//! CPU process table normalization (`show processes cpu`).

use serde_json::Value;

use crate::error::Result;
use crate::inventory::Device;
use crate::record::CpuProcessRecord;
use crate::tree::{self, Entry};

/// Flatten a CPU process table keyed by process index.
///
/// Runtime is read from `runtime_ms`, falling back to the legacy `runtime`
/// field; it is `n/a` when neither is present.
pub fn normalize_cpu_processes(tree: &Value, device: &Device) -> Result<Vec<CpuProcessRecord>> {
    tree::root(tree)?
        .entries()?
        .into_iter()
        .map(|entry| cpu_record(entry, device))
        .collect()
}

fn cpu_record(entry: Entry<'_>, device: &Device) -> Result<CpuProcessRecord> {
    let runtime = entry
        .optional::<u64>("runtime_ms")?
        .or_else(|| entry.optional("runtime"))?;

    Ok(CpuProcessRecord {
        device: device.name.clone(),
        ip: device.ip.clone(),
        invoked: entry.required("invoked")?,
        pid: entry.required("pid")?,
        process: entry.required("process")?,
        runtime,
        usecs: entry.required("usecs")?,
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::Error;
    use crate::error::ExtractError;
    use crate::tree::Field;

    fn device() -> Device {
        Device::new("core-rtr-1", "10.0.0.1", "iosxe")
    }

    #[test]
    fn test_runtime_ms() {
        let tree = json!({
            "1": {"invoked": 3, "pid": 1, "process": "Chunk Manager", "runtime_ms": 12, "usecs": 4000}
        });
        let records = normalize_cpu_processes(&tree, &device()).unwrap();
        assert_eq!(
            records,
            [CpuProcessRecord {
                device: "core-rtr-1".to_string(),
                ip: "10.0.0.1".to_string(),
                invoked: 3,
                pid: 1,
                process: "Chunk Manager".to_string(),
                runtime: Field::Value(12),
                usecs: 4000,
            }]
        );
    }

    #[test]
    fn test_legacy_runtime_matches_ms_case() {
        let legacy = json!({"1": {"invoked": 3, "pid": 1, "process": "init", "runtime": 12, "usecs": 4000}});
        let modern = json!({"1": {"invoked": 3, "pid": 1, "process": "init", "runtime_ms": 12, "usecs": 4000}});

        let legacy = normalize_cpu_processes(&legacy, &device()).unwrap();
        let modern = normalize_cpu_processes(&modern, &device()).unwrap();
        assert_eq!(legacy, modern);
    }

    #[test]
    fn test_runtime_ms_takes_precedence() {
        let tree = json!({"1": {"invoked": 3, "pid": 1, "process": "init", "runtime_ms": 12, "runtime": 99, "usecs": 4000}});
        let records = normalize_cpu_processes(&tree, &device()).unwrap();
        assert_eq!(records[0].runtime, Field::Value(12));
    }

    #[test]
    fn test_no_runtime_is_sentinel() {
        let tree = json!({"1": {"invoked": 3, "pid": 1, "process": "init", "usecs": 4000}});
        let records = normalize_cpu_processes(&tree, &device()).unwrap();
        assert!(records[0].runtime.is_not_applicable());

        let row = serde_json::to_value(&records[0]).unwrap();
        assert_eq!(row["runtime"], json!("n/a"));
        assert_eq!(row["p_id"], json!(1));
    }

    #[test]
    fn test_missing_usecs_fails() {
        let tree = json!({
            "1": {"invoked": 3, "pid": 1, "process": "init", "runtime_ms": 0, "usecs": 0},
            "2": {"invoked": 3, "pid": 2, "process": "kthreadd", "runtime_ms": 0}
        });
        let err = normalize_cpu_processes(&tree, &device()).unwrap_err();
        assert!(matches!(
            err,
            Error::Extract(ExtractError::MissingField { ref field, .. }) if field == "usecs"
        ));
    }
}
