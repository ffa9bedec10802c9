//! Scripted collaborator for tests.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use serde_json::{Value, json};

use super::{Collaborator, DeviceSession};
use crate::error::{CommandError, Result};
use crate::inventory::Device;

#[derive(Debug, Clone)]
enum Output {
    Tree(Value),
    Delayed(Duration, Value),
    Fail(String),
    Hang,
}

/// Collaborator serving scripted outputs per (device, command).
#[derive(Debug, Clone, Default)]
pub(crate) struct MockCollaborator {
    outputs: HashMap<(String, String), Output>,
    unreachable: HashSet<String>,
    events: Arc<Mutex<Vec<String>>>,
}

impl MockCollaborator {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_tree(mut self, device: &str, command: &str, tree: Value) -> Self {
        self.outputs
            .insert((device.to_string(), command.to_string()), Output::Tree(tree));
        self
    }

    pub(crate) fn with_delay(mut self, device: &str, command: &str, delay: Duration) -> Self {
        let key = (device.to_string(), command.to_string());
        if let Some(Output::Tree(tree)) = self.outputs.remove(&key) {
            self.outputs.insert(key, Output::Delayed(delay, tree));
        }
        self
    }

    pub(crate) fn with_failure(mut self, device: &str, command: &str, message: &str) -> Self {
        self.outputs.insert(
            (device.to_string(), command.to_string()),
            Output::Fail(message.to_string()),
        );
        self
    }

    pub(crate) fn with_hang(mut self, device: &str, command: &str) -> Self {
        self.outputs
            .insert((device.to_string(), command.to_string()), Output::Hang);
        self
    }

    pub(crate) fn unreachable(mut self, device: &str) -> Self {
        self.unreachable.insert(device.to_string());
        self
    }

    /// Session opens, commands and closes, in the order they happened.
    pub(crate) fn events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }
}

impl Collaborator for MockCollaborator {
    type Session = MockSession;

    fn session(&self, device: &Device) -> Result<MockSession> {
        let outputs = self
            .outputs
            .iter()
            .filter(|((name, _), _)| *name == device.name)
            .map(|((_, command), output)| (command.clone(), output.clone()))
            .collect();

        Ok(MockSession {
            device: device.name.clone(),
            reachable: !self.unreachable.contains(&device.name),
            outputs,
            events: self.events.clone(),
        })
    }
}

pub(crate) struct MockSession {
    device: String,
    reachable: bool,
    outputs: HashMap<String, Output>,
    events: Arc<Mutex<Vec<String>>>,
}

impl MockSession {
    fn log(&self, event: String) {
        self.events.lock().unwrap().push(event);
    }
}

impl DeviceSession for MockSession {
    async fn open(&mut self) -> Result<()> {
        if !self.reachable {
            return Err(CommandError::Session {
                device: self.device.clone(),
                message: "connection refused".to_string(),
            }
            .into());
        }
        self.log(format!("open {}", self.device));
        Ok(())
    }

    async fn parse(&mut self, command: &str) -> Result<Value> {
        self.log(command.to_string());
        let parse_error = |message: &str| CommandError::Parse {
            command: command.to_string(),
            message: message.to_string(),
        };

        match self.outputs.get(command).cloned() {
            Some(Output::Tree(tree)) => Ok(tree),
            Some(Output::Delayed(delay, tree)) => {
                tokio::time::sleep(delay).await;
                Ok(tree)
            }
            Some(Output::Fail(message)) => Err(parse_error(&message).into()),
            Some(Output::Hang) => std::future::pending().await,
            None => Err(parse_error("no output scripted").into()),
        }
    }

    async fn close(&mut self) -> Result<()> {
        self.log(format!("close {}", self.device));
        Ok(())
    }
}

/// Two IOS interfaces, the second one shut down.
pub(crate) fn interface_tree() -> Value {
    json!({
        "GigabitEthernet1": {
            "enabled": true,
            "oper_status": "up",
            "bandwidth": 1000000,
            "mtu": 1500,
            "counters": {"rate": {"in_rate_pkts": 5, "out_rate_pkts": 7}}
        },
        "GigabitEthernet2": {
            "enabled": false,
            "oper_status": "down",
            "bandwidth": 1000000,
            "mtu": 1500
        }
    })
}

/// Successful outputs for all four IOS commands on `device`.
pub(crate) fn ios_outputs(mock: MockCollaborator, device: &str) -> MockCollaborator {
    mock.with_tree(device, "show interfaces", interface_tree())
        .with_tree(
            device,
            "show ip ospf neighbor",
            json!({
                "interfaces": {
                    "GigabitEthernet1": {
                        "neighbors": {
                            "10.16.2.2": {"address": "10.0.12.2", "state": "FULL/DR", "priority": 1}
                        }
                    }
                }
            }),
        )
        .with_tree(
            device,
            "show processes memory",
            json!({
                "pid": {"1": {"index": {"1": {
                    "pid": 1, "tty": 0, "allocated": 3207024, "freed": 3207024,
                    "holding": 0, "getbufs": 0, "retbufs": 0, "process": "Chunk Manager"
                }}}}
            }),
        )
        .with_tree(
            device,
            "show processes cpu",
            json!({
                "five_sec_cpu_total": 2,
                "index": {"1": {
                    "invoked": 26, "pid": 1, "process": "Chunk Manager",
                    "runtime_ms": 4, "usecs": 153
                }}
            }),
        )
}

/// Successful outputs for all four NX-OS commands on `device`.
pub(crate) fn nxos_outputs(mock: MockCollaborator, device: &str) -> MockCollaborator {
    mock.with_tree(
        device,
        "show interface",
        json!({
            "Ethernet1/1": {"enabled": true, "oper_status": "up", "port_mode": "routed"}
        }),
    )
    .with_tree(
        device,
        "show ip ospf neighbors detail",
        json!({
            "vrf": {"default": {"address_family": {"ipv4": {"instance": {"1": {"areas": {
                "0.0.0.0": {"interfaces": {"Ethernet1/1": {"neighbors": {
                    "2.2.2.2": {"neighbor_router_id": "2.2.2.2", "address": "10.1.1.2", "state": "full"}
                }}}}
            }}}}}}}
        }),
    )
    .with_tree(
        device,
        "show processes memory",
        json!({
            "pid": {"1": {"index": {"1": {
                "pid": 1, "process": "init", "mem_alloc": 212992, "mem_used": 2637824
            }}}}
        }),
    )
    .with_tree(
        device,
        "show processes cpu",
        json!({
            "index": {"1": {"invoked": 1, "pid": 1, "process": "init", "runtime_ms": 1, "usecs": 1}}
        }),
    )
}
