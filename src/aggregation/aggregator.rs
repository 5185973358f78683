//! Create-or-extend aggregation of timesheet rows.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use crate::error::EngineResult;
use crate::models::{PayRecord, TimesheetRow};

use super::factory::{create_pay_record, ensure_paired, ensure_strictly_positive};

/// What [`PayRecordAggregator::ingest`] did with a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IngestOutcome {
    /// A new pay record was created for a first-seen employee id.
    Created,
    /// An existing pay record was extended with the row's hours and rates.
    Updated,
}

/// Merges timesheet rows into one pay record per employee id.
///
/// The aggregator exclusively owns the id-to-record mapping for the duration
/// of a run. The first row seen for an id creates a record via the factory;
/// every later row for the same id appends its hours and rates in arrival
/// order and never re-derives the variant fields, so visa and year-to-date
/// stay as the first row set them.
///
/// # Example
///
/// ```
/// use payslip_engine::aggregation::{IngestOutcome, PayRecordAggregator};
/// use payslip_engine::models::TimesheetRow;
/// use rust_decimal_macros::dec;
///
/// let mut aggregator = PayRecordAggregator::new();
/// let row = TimesheetRow {
///     employee_id: 1,
///     hours: vec![dec!(10)],
///     rates: vec![dec!(40)],
///     visa: None,
///     year_to_date: None,
/// };
/// assert_eq!(aggregator.ingest(row.clone()).unwrap(), IngestOutcome::Created);
/// assert_eq!(aggregator.ingest(row).unwrap(), IngestOutcome::Updated);
/// assert_eq!(aggregator.len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct PayRecordAggregator {
    records: BTreeMap<u32, PayRecord>,
}

impl PayRecordAggregator {
    /// Creates an empty aggregator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Merges one row into the mapping, creating or extending a record.
    ///
    /// The row is validated in full before any state changes, so a rejected
    /// row leaves the mapping and every existing record untouched.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidValue`](crate::error::EngineError::InvalidValue)
    /// for non-positive hours or rates and
    /// [`EngineError::HoursRatesMismatch`](crate::error::EngineError::HoursRatesMismatch)
    /// for unequal counts within the row.
    pub fn ingest(&mut self, row: TimesheetRow) -> EngineResult<IngestOutcome> {
        match self.records.entry(row.employee_id) {
            Entry::Vacant(entry) => {
                entry.insert(create_pay_record(
                    row.employee_id,
                    row.hours,
                    row.rates,
                    row.visa,
                    row.year_to_date,
                )?);
                Ok(IngestOutcome::Created)
            }
            Entry::Occupied(mut entry) => {
                ensure_strictly_positive(&row.hours, "hours")?;
                ensure_strictly_positive(&row.rates, "rates")?;
                ensure_paired(row.employee_id, &row.hours, &row.rates)?;

                let record = entry.get_mut();
                record.append_hours(row.hours);
                record.append_rates(row.rates);
                Ok(IngestOutcome::Updated)
            }
        }
    }

    /// The finished mapping, in ascending employee id order.
    pub fn records(&self) -> &BTreeMap<u32, PayRecord> {
        &self.records
    }

    /// Consumes the aggregator, yielding the finished mapping.
    pub fn into_records(self) -> BTreeMap<u32, PayRecord> {
        self.records
    }

    /// The number of distinct employees aggregated so far.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if no rows have been aggregated.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
