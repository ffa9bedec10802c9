//! Poll a fleet and write the telemetry report.
//!
//! # Usage
//!
//! ```bash
//! netsurvey --testbed network_testbed.yml --captures captures/ --concurrency 8
//! ```
//!
//! Captures are parser result trees saved as
//! `<captures>/<device>/<command_words_joined_by_underscores>.json`.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use log::{info, warn};

use netsurvey::collector::CaptureStore;
use netsurvey::{Domain, FleetPoller, Inventory, JsonReport, ReportSink};

#[derive(Parser)]
#[command(name = "netsurvey", about = "Network fleet telemetry report", version)]
struct Args {
    /// Testbed file listing the devices
    #[arg(short, long, default_value = "network_testbed.yml")]
    testbed: PathBuf,

    /// Directory of captured parser output
    #[arg(short, long, default_value = "captures")]
    captures: PathBuf,

    /// Report file to write
    #[arg(short, long, default_value = "network_analytics.json")]
    output: PathBuf,

    /// Devices polled at once
    #[arg(long, default_value = "1")]
    concurrency: usize,

    /// Per-command timeout in seconds
    #[arg(long, default_value = "30")]
    timeout: u64,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let inventory = Inventory::load(&args.testbed)?;
    info!(
        "Loaded {} device(s) from {}",
        inventory.len(),
        args.testbed.display()
    );

    let poller = FleetPoller::builder(CaptureStore::new(&args.captures))
        .concurrency(args.concurrency)
        .command_timeout(Duration::from_secs(args.timeout))
        .build()?;

    let report = poller.poll(inventory.devices()).await;
    if report.is_empty() {
        warn!("No IOS or NXOS devices in {}", args.testbed.display());
    }

    for dialect in report.dialects() {
        let counts: Vec<String> = Domain::ALL
            .iter()
            .filter(|d| dialect.has_data(**d))
            .map(|d| {
                let rows = match d {
                    Domain::Interfaces => dialect.interfaces.len(),
                    Domain::OspfNeighbors => dialect.ospf_neighbors.len(),
                    Domain::MemoryProcesses => dialect.memory_processes.len(),
                    Domain::CpuProcesses => dialect.cpu_processes.len(),
                };
                format!("{} {}", rows, d)
            })
            .collect();
        info!(
            "{}: {} device(s), {}",
            dialect.dialect,
            dialect.device_count(),
            counts.join(", ")
        );
    }

    let failures = report.failures().count();
    if failures > 0 {
        warn!("{} command(s) produced no data", failures);
    }

    JsonReport::create(&args.output)?.write(&report)?;
    info!("Report written to {}", args.output.display());

    Ok(())
}
