//! Timesheet CSV reading and row parsing.

use std::fs::File;
use std::io::ErrorKind;
use std::path::Path;
use std::str::FromStr;

use csv::StringRecord;
use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{TimesheetRow, VisaClass};

/// The minimum number of columns a data row must have.
///
/// Employee id, hours and rates are required; visa and year-to-date are
/// optional trailing columns.
pub const MIN_COLUMNS: usize = 3;

/// Reads timesheet rows from a CSV file.
///
/// The expected column order is fixed: employee id, comma-joined hours,
/// comma-joined rates, then an optional visa designator and an optional
/// year-to-date amount. A header row is skipped before the first data row.
/// Rows are yielded lazily and each row parses independently, so one bad row
/// does not stop the scan.
///
/// # Example
///
/// ```no_run
/// use payslip_engine::io::TimesheetReader;
///
/// let mut reader = TimesheetReader::open("timesheet.csv")?;
/// for (line, row) in reader.rows() {
///     match row {
///         Ok(row) => println!("employee {} on line {line}", row.employee_id),
///         Err(err) => eprintln!("line {line}: {err}"),
///     }
/// }
/// # Ok::<(), payslip_engine::error::EngineError>(())
/// ```
#[derive(Debug)]
pub struct TimesheetReader {
    reader: csv::Reader<File>,
    path: String,
}

impl TimesheetReader {
    /// Opens a timesheet file for reading.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InputNotFound`] if the path does not exist and
    /// [`EngineError::InputReadError`] for any other open failure. Both are
    /// fatal to the run; no rows are produced.
    pub fn open<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let file = File::open(path).map_err(|err| match err.kind() {
            ErrorKind::NotFound => EngineError::InputNotFound {
                path: path_str.clone(),
            },
            _ => EngineError::InputReadError {
                path: path_str.clone(),
                message: err.to_string(),
            },
        })?;

        // Flexible parsing lets short rows through to our own structural
        // check, which reports them as malformed instead of a csv error.
        let reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(file);

        Ok(Self {
            reader,
            path: path_str,
        })
    }

    /// Iterates over data rows as `(line_number, parse_result)` pairs.
    ///
    /// Row-level failures (malformed rows, unparseable fields) are yielded
    /// as `Err` items so the caller decides whether to skip or abort; the
    /// iterator itself keeps going.
    pub fn rows(&mut self) -> impl Iterator<Item = (u64, EngineResult<TimesheetRow>)> + '_ {
        let path = self.path.clone();
        self.reader.records().map(move |result| match result {
            Ok(record) => {
                let line = record.position().map_or(0, |position| position.line());
                (line, parse_record(&record, line))
            }
            Err(err) => {
                let line = err.position().map_or(0, |position| position.line());
                (
                    line,
                    Err(EngineError::InputReadError {
                        path: path.clone(),
                        message: err.to_string(),
                    }),
                )
            }
        })
    }
}

/// Parses one raw CSV record into a [`TimesheetRow`].
fn parse_record(record: &StringRecord, line: u64) -> EngineResult<TimesheetRow> {
    if record.len() < MIN_COLUMNS {
        return Err(EngineError::MalformedRow {
            line,
            expected: MIN_COLUMNS,
            found: record.len(),
        });
    }

    let employee_id = parse_employee_id(record.get(0).unwrap_or_default())?;
    let hours = parse_decimal_list(record.get(1).unwrap_or_default(), "hours")?;
    let rates = parse_decimal_list(record.get(2).unwrap_or_default(), "rates")?;
    if hours.len() != rates.len() {
        return Err(EngineError::HoursRatesMismatch {
            id: employee_id,
            hours: hours.len(),
            rates: rates.len(),
        });
    }

    // An unrecognised designator demotes the row to resident handling.
    let visa = record.get(3).and_then(VisaClass::parse);

    let year_to_date = match record.get(4).map(str::trim).filter(|raw| !raw.is_empty()) {
        Some(raw) => Some(parse_decimal(raw, "year to date")?),
        None => None,
    };

    Ok(TimesheetRow {
        employee_id,
        hours,
        rates,
        visa,
        year_to_date,
    })
}

fn parse_employee_id(raw: &str) -> EngineResult<u32> {
    let id = raw
        .trim()
        .parse::<u32>()
        .map_err(|_| EngineError::InvalidValue {
            field: "employee id".to_string(),
            message: format!("expected a positive integer, got '{raw}'"),
        })?;
    if id == 0 {
        return Err(EngineError::InvalidValue {
            field: "employee id".to_string(),
            message: "must be greater than zero".to_string(),
        });
    }
    Ok(id)
}

fn parse_decimal(raw: &str, field: &str) -> EngineResult<Decimal> {
    Decimal::from_str(raw.trim()).map_err(|_| EngineError::InvalidValue {
        field: field.to_string(),
        message: format!("expected a decimal value, got '{raw}'"),
    })
}

/// Parses a comma-joined list of decimals, requiring at least one value.
fn parse_decimal_list(raw: &str, field: &str) -> EngineResult<Vec<Decimal>> {
    if raw.trim().is_empty() {
        return Err(EngineError::InvalidValue {
            field: field.to_string(),
            message: "expected one or more decimal values, got an empty field".to_string(),
        });
    }
    raw.split(',')
        .map(|value| parse_decimal(value, field))
        .collect()
}
