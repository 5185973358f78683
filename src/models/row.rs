//! Parsed timesheet row.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::visa::VisaClass;

/// One parsed line of a timesheet file.
///
/// This is the shape the input reader produces and the aggregator consumes:
/// the employee id, the positionally-paired hours and rates from that line,
/// and the optional working holiday fields. Visa and year-to-date only
/// matter on the first row seen for an employee; later rows for the same id
/// contribute hours and rates only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimesheetRow {
    /// The employee this row belongs to. Positive, the aggregation key.
    pub employee_id: u32,
    /// Hours worked, one entry per comma-separated value in the line.
    pub hours: Vec<Decimal>,
    /// Hourly rates, parallel to `hours` by position.
    pub rates: Vec<Decimal>,
    /// Recognised visa subclass, if the line carried one.
    pub visa: Option<VisaClass>,
    /// Income already earned this tax year, if the line carried one.
    pub year_to_date: Option<Decimal>,
}
