//! JSON output formatter.
//!
//! Writes a finished audit as machine-readable JSON.

use serde::Serialize;
use std::io::Write;

use crate::audit::AuditReport;

/// Formats an audit report as JSON.
#[derive(Debug, Default)]
pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    healthy: bool,
    findings: usize,
    #[serde(flatten)]
    report: &'a AuditReport,
}

impl JsonFormatter {
    /// Create a new JSON formatter.
    pub fn new() -> Self {
        Self
    }

    /// Write `report` to `writer`, followed by a newline.
    pub fn format<W: Write>(&self, report: &AuditReport, writer: &mut W) -> std::io::Result<()> {
        let output = JsonOutput {
            healthy: report.is_healthy(),
            findings: report.findings(),
            report,
        };

        serde_json::to_writer_pretty(&mut *writer, &output).map_err(std::io::Error::other)?;
        writeln!(writer)?;

        Ok(())
    }
}
