use crate::probe::{ProbeOutcome, ProbeResult};
use prettytable::format;
use prettytable::{Cell, Row, Table};
use std::fmt;
use std::io::{self, Write};

/// Writes the console block for one probe
///
/// ```text
///
/// Testing http://localhost:8093/api/admin/reports/kpi...
/// Status: 200
/// Success. Returned 3 rows.
/// Sample: {"bucket":"2025-01-01"}
/// ```
pub fn write_probe<W: Write>(out: &mut W, result: &ProbeResult) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Testing {}...", result.url)?;
    if let Some(status) = result.status {
        writeln!(out, "Status: {}", status.as_u16())?;
    }

    match &result.outcome {
        ProbeOutcome::Rows { count, sample } => {
            writeln!(out, "Success. Returned {count} rows.")?;
            if let Some(sample) = sample {
                writeln!(out, "Sample: {sample}")?;
            }
        }
        ProbeOutcome::Document(value) => writeln!(out, "Success. Data: {value}")?,
        ProbeOutcome::Rejected { body, .. } => writeln!(out, "Error: {body}")?,
        ProbeOutcome::Failed(e) => writeln!(out, "Request failed: {e}")?,
    }
    Ok(())
}

/// Tabular overview of a whole probe run
pub struct ProbeSummary<'a>(pub &'a [ProbeResult]);

impl fmt::Display for ProbeSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);

        table.add_row(Row::new(vec![
            Cell::new("ENDPOINT"),
            Cell::new("STATUS"),
            Cell::new("RESULT"),
        ]));

        for result in self.0 {
            let status = result
                .status
                .map(|s| s.as_u16().to_string())
                .unwrap_or_else(|| "-".to_string());
            table.add_row(Row::new(vec![
                Cell::new(&result.path),
                Cell::new(&status),
                Cell::new(&result.outcome.label()),
            ]));
        }

        write!(f, "{table}")
    }
}
