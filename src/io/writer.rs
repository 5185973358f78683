//! Payslip CSV output.

use std::collections::BTreeMap;
use std::path::Path;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::error::{EngineError, EngineResult};
use crate::models::{PayRecord, VisaClass};

/// One exported payslip row. Visa and year-to-date are empty for residents.
#[derive(Debug, Serialize)]
struct PayslipRow {
    id: u32,
    income: Decimal,
    tax: Decimal,
    net: Decimal,
    visa: Option<VisaClass>,
    #[serde(rename = "yeartodate")]
    year_to_date: Option<Decimal>,
}

fn write_error(path: &Path, message: impl ToString) -> EngineError {
    EngineError::OutputWriteError {
        path: path.display().to_string(),
        message: message.to_string(),
    }
}

/// Writes one payslip row per pay record to a CSV file.
///
/// Every row is derived before the output file is created, so a tax
/// calculation failure aborts the run without leaving a partial file behind.
/// Currency fields are written in exact decimal form with no rounding.
///
/// # Errors
///
/// Propagates derivation errors from the records (configuration defects,
/// hours/rates mismatches) and returns
/// [`EngineError::OutputWriteError`] if the file cannot be created or
/// written.
pub fn write_payslips<P: AsRef<Path>>(
    records: &BTreeMap<u32, PayRecord>,
    path: P,
) -> EngineResult<()> {
    let mut rows = Vec::with_capacity(records.len());
    for record in records.values() {
        rows.push(PayslipRow {
            id: record.id(),
            income: record.income()?,
            tax: record.tax()?,
            net: record.net()?,
            visa: record.visa(),
            year_to_date: record.year_to_date()?,
        });
    }

    let path = path.as_ref();
    let mut writer = csv::Writer::from_path(path).map_err(|err| write_error(path, err))?;
    for row in &rows {
        writer.serialize(row).map_err(|err| write_error(path, err))?;
    }
    writer.flush().map_err(|err| write_error(path, err))?;
    Ok(())
}
