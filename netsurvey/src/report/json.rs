//! JSON workbook report.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::{debug, info};
use serde::Serialize;
use serde_json::Value;

use super::{DialectReport, FleetReport, ReportSink};
use crate::collector::CommandFailure;
use crate::error::{ReportError, Result};
use crate::platform::Domain;

/// Writes a fleet report as a JSON workbook: one sheet per dialect and
/// domain, plus the list of recovered failures.
///
/// A sheet is omitted when no device of the dialect returned data for its
/// domain. The interface sheet lists the rows of disabled interfaces in
/// `highlight_rows`.
pub struct JsonReport<W: Write> {
    writer: W,
}

#[derive(Serialize)]
struct Workbook<'a> {
    sheets: Vec<Sheet>,
    failures: Vec<&'a CommandFailure>,
}

#[derive(Serialize)]
struct Sheet {
    name: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    highlight_rows: Vec<usize>,
    rows: Value,
}

impl JsonReport<BufWriter<File>> {
    /// Create a report writing to a new file at `path`.
    pub fn create(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Creating report {}", path.display());
        let file = File::create(path).map_err(ReportError::Io)?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> JsonReport<W> {
    /// Create a report writing to `writer`.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Get the underlying writer back.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ReportSink for JsonReport<W> {
    fn write(&mut self, report: &FleetReport) -> Result<()> {
        let mut sheets = Vec::new();
        for dialect in report.dialects() {
            for domain in Domain::ALL {
                if !dialect.has_data(domain) {
                    debug!("Omitting empty sheet '{}'", dialect.sheet_name(domain));
                    continue;
                }
                sheets.push(sheet(dialect, domain)?);
            }
        }
        info!("Writing {} sheet(s)", sheets.len());

        let workbook = Workbook {
            sheets,
            failures: report.failures().collect(),
        };
        serde_json::to_writer_pretty(&mut self.writer, &workbook).map_err(ReportError::Json)?;
        self.writer.write_all(b"\n").map_err(ReportError::Io)?;
        self.writer.flush().map_err(ReportError::Io)?;
        Ok(())
    }
}

fn sheet(report: &DialectReport, domain: Domain) -> Result<Sheet> {
    let (rows, highlight_rows) = match domain {
        Domain::Interfaces => (
            serde_json::to_value(&report.interfaces),
            report.disabled_interface_rows(),
        ),
        Domain::OspfNeighbors => (serde_json::to_value(&report.ospf_neighbors), Vec::new()),
        Domain::MemoryProcesses => (serde_json::to_value(&report.memory_processes), Vec::new()),
        Domain::CpuProcesses => (serde_json::to_value(&report.cpu_processes), Vec::new()),
    };

    Ok(Sheet {
        name: report.sheet_name(domain),
        highlight_rows,
        rows: rows.map_err(ReportError::Json)?,
    })
}
