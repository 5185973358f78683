//! The payslip run driver.
//!
//! This module wires the collaborators together: read timesheet rows,
//! aggregate them into pay records, write the payslip file. The policy for
//! row-level defects lives here — offending rows are reported and skipped so
//! the rest of the file proceeds, while resource and configuration defects
//! abort the run.

use std::collections::BTreeMap;
use std::path::Path;

use tracing::{debug, warn};

use crate::aggregation::{IngestOutcome, PayRecordAggregator};
use crate::error::EngineResult;
use crate::io::{TimesheetReader, write_payslips};
use crate::models::PayRecord;

/// The outcome of a payslip run.
#[derive(Debug)]
pub struct RunReport {
    /// The finished pay records, keyed by employee id.
    pub records: BTreeMap<u32, PayRecord>,
    /// The number of rows merged into records.
    pub rows_ingested: u64,
    /// The number of rows rejected and skipped.
    pub rows_skipped: u64,
}

/// Reads a timesheet file, aggregates it and writes the payslip file.
///
/// Rows failing row-level validation (malformed rows, invalid values,
/// diverged hours/rates counts) are logged at warn level and skipped without
/// touching any record. A missing or unreadable input aborts before any row
/// is processed, and every output row is derived before the output file is
/// created, so a failed run never leaves a partial payslip file.
///
/// # Errors
///
/// Propagates resource failures from the reader and writer, and
/// configuration defects ([`EngineError::NoMatchingBracket`]) surfaced while
/// deriving output rows.
///
/// [`EngineError::NoMatchingBracket`]: crate::error::EngineError::NoMatchingBracket
pub fn generate_payslips<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
) -> EngineResult<RunReport> {
    let mut reader = TimesheetReader::open(&input)?;
    let mut aggregator = PayRecordAggregator::new();
    let mut rows_ingested = 0;
    let mut rows_skipped = 0;

    for (line, parsed) in reader.rows() {
        let result = parsed.and_then(|row| {
            let id = row.employee_id;
            aggregator.ingest(row).map(|outcome| (id, outcome))
        });
        match result {
            Ok((id, IngestOutcome::Created)) => {
                debug!(line, employee_id = id, "created pay record");
                rows_ingested += 1;
            }
            Ok((id, IngestOutcome::Updated)) => {
                debug!(line, employee_id = id, "extended pay record");
                rows_ingested += 1;
            }
            Err(err) if err.is_row_level() => {
                warn!(line, error = %err, "skipping row");
                rows_skipped += 1;
            }
            Err(err) => return Err(err),
        }
    }

    let records = aggregator.into_records();
    write_payslips(&records, output)?;

    debug!(
        employees = records.len(),
        rows_ingested, rows_skipped, "payslip run complete"
    );

    Ok(RunReport {
        records,
        rows_ingested,
        rows_skipped,
    })
}
