//! Error types for the Payslip Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while computing payslips.

use rust_decimal::Decimal;
use thiserror::Error;

/// The main error type for the Payslip Engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use payslip_engine::error::EngineError;
///
/// let error = EngineError::InputNotFound {
///     path: "/missing/timesheet.csv".to_string(),
/// };
/// assert_eq!(error.to_string(), "Input file not found: /missing/timesheet.csv");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// No bracket in the tax schedule covers the given income.
    ///
    /// This signals a configuration defect (a malformed bracket table or a
    /// negative income reaching the calculator), not bad user input.
    #[error("No tax bracket matches income: {income}")]
    NoMatchingBracket {
        /// The income value for which no bracket was found.
        income: Decimal,
    },

    /// A bracket table failed its partition invariant at construction.
    #[error("Invalid tax schedule: {message}")]
    InvalidSchedule {
        /// A description of the violated invariant.
        message: String,
    },

    /// A field of an input row held an unusable value.
    #[error("Invalid {field}: {message}")]
    InvalidValue {
        /// The field that was invalid (e.g. "hours", "employee id").
        field: String,
        /// A description of what made the value invalid.
        message: String,
    },

    /// An input row had fewer columns than the minimum required.
    #[error("Malformed row at line {line}: expected at least {expected} columns, found {found}")]
    MalformedRow {
        /// The 1-based line number of the offending row.
        line: u64,
        /// The minimum number of columns required.
        expected: usize,
        /// The number of columns actually present.
        found: usize,
    },

    /// A pay record's hours and rates sequences have diverged in length.
    ///
    /// Hours and rates are paired positionally, so derivation refuses to
    /// proceed rather than silently truncating to the shorter sequence.
    #[error("Pay record {id} has {hours} hour entries but {rates} rate entries")]
    HoursRatesMismatch {
        /// The employee id of the affected record.
        id: u32,
        /// The number of hour entries.
        hours: usize,
        /// The number of rate entries.
        rates: usize,
    },

    /// The input file was not found at the specified path.
    #[error("Input file not found: {path}")]
    InputNotFound {
        /// The path that was not found.
        path: String,
    },

    /// The input file exists but could not be read.
    #[error("Failed to read input file '{path}': {message}")]
    InputReadError {
        /// The path to the unreadable file.
        path: String,
        /// A description of the read failure.
        message: String,
    },

    /// The output file could not be created or written.
    #[error("Failed to write output file '{path}': {message}")]
    OutputWriteError {
        /// The path to the output file.
        path: String,
        /// A description of the write failure.
        message: String,
    },
}

impl EngineError {
    /// Returns true if this error is contained to a single input row.
    ///
    /// Row-level defects (malformed rows, invalid values, diverged
    /// hours/rates counts) can be reported and skipped while the rest of the
    /// file proceeds; every other error is fatal to the run.
    pub fn is_row_level(&self) -> bool {
        matches!(
            self,
            EngineError::InvalidValue { .. }
                | EngineError::MalformedRow { .. }
                | EngineError::HoursRatesMismatch { .. }
        )
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
