//! Pay record variants and their derived pay figures.
//!
//! A pay record accumulates the hours and hourly rates contributed by every
//! timesheet row seen for one employee. Income, tax and net are derived from
//! the accumulated state on every access and are never cached, so they always
//! reflect the latest merged data.

use std::fmt::Write as _;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::tax::{calculate_tax, calculate_tax_on_base, resident, working_holiday};

use super::visa::VisaClass;

/// Sums `hours[i] * rates[i]` over the positionally-paired sequences.
///
/// Fails fast on a length mismatch instead of truncating to the shorter
/// sequence.
fn period_gross(id: u32, hours: &[Decimal], rates: &[Decimal]) -> EngineResult<Decimal> {
    if hours.len() != rates.len() {
        return Err(EngineError::HoursRatesMismatch {
            id,
            hours: hours.len(),
            rates: rates.len(),
        });
    }
    Ok(hours.iter().zip(rates.iter()).map(|(hour, rate)| hour * rate).sum())
}

fn join_values(values: &[Decimal]) -> String {
    values
        .iter()
        .map(Decimal::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// A pay record for an employee taxed under the resident schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResidentPayRecord {
    id: u32,
    hours: Vec<Decimal>,
    rates: Vec<Decimal>,
}

impl ResidentPayRecord {
    /// Creates a resident pay record from the first row seen for an employee.
    pub fn new(id: u32, hours: Vec<Decimal>, rates: Vec<Decimal>) -> Self {
        Self { id, hours, rates }
    }

    /// The employee id this record aggregates rows for.
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Gross income for the period: the sum of `hours[i] * rates[i]`.
    pub fn income(&self) -> EngineResult<Decimal> {
        period_gross(self.id, &self.hours, &self.rates)
    }

    /// Tax withheld under the resident schedule.
    pub fn tax(&self) -> EngineResult<Decimal> {
        calculate_tax(self.income()?, resident())
    }

    /// Net pay: income less tax.
    pub fn net(&self) -> EngineResult<Decimal> {
        Ok(self.income()? - self.tax()?)
    }
}

/// A pay record for an employee on a working holiday visa.
///
/// Carries the visa subclass and the income already earned this tax year,
/// both fixed at creation. The tax band is selected from cumulative
/// year-to-date income, but the rate is applied to the current period's
/// gross only, and net pay is likewise computed against the period gross.
/// This asymmetry is the literal behaviour of the withholding rules this
/// engine models and is preserved exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkingHolidayPayRecord {
    id: u32,
    hours: Vec<Decimal>,
    rates: Vec<Decimal>,
    visa: VisaClass,
    prior_year_to_date: Decimal,
}

impl WorkingHolidayPayRecord {
    /// Creates a working holiday pay record from the first row seen for an
    /// employee.
    pub fn new(
        id: u32,
        hours: Vec<Decimal>,
        rates: Vec<Decimal>,
        visa: VisaClass,
        prior_year_to_date: Decimal,
    ) -> Self {
        Self {
            id,
            hours,
            rates,
            visa,
            prior_year_to_date,
        }
    }

    /// The employee id this record aggregates rows for.
    pub fn id(&self) -> u32 {
        self.id
    }

    /// The visa subclass, fixed at creation.
    pub fn visa(&self) -> VisaClass {
        self.visa
    }

    /// Gross earnings from this period's rows only.
    pub fn period_gross(&self) -> EngineResult<Decimal> {
        period_gross(self.id, &self.hours, &self.rates)
    }

    /// Total income: the prior year-to-date carryover plus this period's
    /// gross.
    pub fn income(&self) -> EngineResult<Decimal> {
        Ok(self.prior_year_to_date + self.period_gross()?)
    }

    /// Cumulative year-to-date income including this period.
    ///
    /// Identical to [`income`](Self::income); exposed separately for output
    /// labelling.
    pub fn year_to_date(&self) -> EngineResult<Decimal> {
        self.income()
    }

    /// Tax withheld under the working holiday schedule.
    ///
    /// The band is selected from [`year_to_date`](Self::year_to_date) but the
    /// rate applies to [`period_gross`](Self::period_gross) only.
    pub fn tax(&self) -> EngineResult<Decimal> {
        calculate_tax_on_base(self.year_to_date()?, self.period_gross()?, working_holiday())
    }

    /// Net pay: this period's gross less tax.
    pub fn net(&self) -> EngineResult<Decimal> {
        Ok(self.period_gross()? - self.tax()?)
    }
}

/// A pay record for one employee, polymorphic over the two tax regimes.
///
/// Created once per distinct employee id from the first row seen for that id;
/// every later row for the same id extends the record in place via
/// [`append_hours`](Self::append_hours) and [`append_rates`](Self::append_rates).
///
/// # Example
///
/// ```
/// use payslip_engine::models::{PayRecord, ResidentPayRecord};
/// use rust_decimal_macros::dec;
///
/// let mut record = PayRecord::Resident(ResidentPayRecord::new(
///     1,
///     vec![dec!(10)],
///     vec![dec!(40)],
/// ));
/// record.append_hours(vec![dec!(5)]);
/// record.append_rates(vec![dec!(45)]);
///
/// assert_eq!(record.income().unwrap(), dec!(625));
/// assert_eq!(record.tax().unwrap(), dec!(173.0649));
/// assert_eq!(record.net().unwrap(), dec!(451.9351));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayRecord {
    /// An employee taxed under the resident schedule.
    Resident(ResidentPayRecord),
    /// An employee taxed under the working holiday schedule.
    WorkingHoliday(WorkingHolidayPayRecord),
}

impl PayRecord {
    /// The employee id this record aggregates rows for.
    pub fn id(&self) -> u32 {
        match self {
            PayRecord::Resident(record) => record.id(),
            PayRecord::WorkingHoliday(record) => record.id(),
        }
    }

    /// The hours contributed so far, one entry per timesheet line.
    pub fn hours(&self) -> &[Decimal] {
        match self {
            PayRecord::Resident(record) => &record.hours,
            PayRecord::WorkingHoliday(record) => &record.hours,
        }
    }

    /// The hourly rates contributed so far, parallel to
    /// [`hours`](Self::hours) by position.
    pub fn rates(&self) -> &[Decimal] {
        match self {
            PayRecord::Resident(record) => &record.rates,
            PayRecord::WorkingHoliday(record) => &record.rates,
        }
    }

    /// Gross income subject to tax, recomputed from current state.
    ///
    /// For residents this is the period gross; for working holiday makers it
    /// includes the prior year-to-date carryover.
    pub fn income(&self) -> EngineResult<Decimal> {
        match self {
            PayRecord::Resident(record) => record.income(),
            PayRecord::WorkingHoliday(record) => record.income(),
        }
    }

    /// Tax withheld under the record's schedule, recomputed from current
    /// state.
    pub fn tax(&self) -> EngineResult<Decimal> {
        match self {
            PayRecord::Resident(record) => record.tax(),
            PayRecord::WorkingHoliday(record) => record.tax(),
        }
    }

    /// Net pay, recomputed from current state.
    pub fn net(&self) -> EngineResult<Decimal> {
        match self {
            PayRecord::Resident(record) => record.net(),
            PayRecord::WorkingHoliday(record) => record.net(),
        }
    }

    /// The visa subclass for working holiday records, `None` for residents.
    pub fn visa(&self) -> Option<VisaClass> {
        match self {
            PayRecord::Resident(_) => None,
            PayRecord::WorkingHoliday(record) => Some(record.visa()),
        }
    }

    /// Cumulative year-to-date income for working holiday records, `None`
    /// for residents.
    pub fn year_to_date(&self) -> EngineResult<Option<Decimal>> {
        match self {
            PayRecord::Resident(_) => Ok(None),
            PayRecord::WorkingHoliday(record) => record.year_to_date().map(Some),
        }
    }

    /// Appends hours from a later timesheet row, preserving arrival order.
    pub fn append_hours(&mut self, hours: Vec<Decimal>) {
        match self {
            PayRecord::Resident(record) => record.hours.extend(hours),
            PayRecord::WorkingHoliday(record) => record.hours.extend(hours),
        }
    }

    /// Appends rates from a later timesheet row, preserving arrival order.
    pub fn append_rates(&mut self, rates: Vec<Decimal>) {
        match self {
            PayRecord::Resident(record) => record.rates.extend(rates),
            PayRecord::WorkingHoliday(record) => record.rates.extend(rates),
        }
    }

    /// Renders the multi-line diagnostic block for this record.
    ///
    /// Tax is rounded to two decimal places for display only; the exported
    /// value keeps full precision.
    pub fn describe(&self) -> EngineResult<String> {
        let mut out = String::new();
        let label = match self {
            PayRecord::Resident(_) => "Resident",
            PayRecord::WorkingHoliday(_) => "Working Holiday",
        };
        let _ = writeln!(out, "{label} ID: {}", self.id());
        let _ = writeln!(out, "Hours: {}", join_values(self.hours()));
        let _ = writeln!(out, "Hourly Rates: {}", join_values(self.rates()));
        let _ = writeln!(out, "Income: {}", self.income()?);
        if let PayRecord::WorkingHoliday(record) = self {
            let _ = writeln!(out, "Visa Type: {}", record.visa());
            let _ = writeln!(out, "Year to Date: {}", record.year_to_date()?);
        }
        let _ = writeln!(out, "Total Tax: {:.2}", self.tax()?.round_dp(2));
        let _ = writeln!(out, "{}", "_".repeat(35));
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn resident_record() -> PayRecord {
        PayRecord::Resident(ResidentPayRecord::new(
            1,
            vec![dec!(10), dec!(5)],
            vec![dec!(40), dec!(45)],
        ))
    }

    fn working_holiday_record() -> PayRecord {
        PayRecord::WorkingHoliday(WorkingHolidayPayRecord::new(
            2,
            vec![dec!(100)],
            vec![dec!(30)],
            VisaClass::Subclass417,
            dec!(36000),
        ))
    }

    #[test]
    fn test_resident_income_is_sum_of_hour_rate_pairs() {
        assert_eq!(resident_record().income().unwrap(), dec!(625));
    }

    #[test]
    fn test_resident_tax_uses_resident_schedule() {
        // 625 falls in (361, 932, 0.3477, 44.2476)
        assert_eq!(resident_record().tax().unwrap(), dec!(173.0649));
    }

    #[test]
    fn test_resident_net_is_income_less_tax() {
        assert_eq!(resident_record().net().unwrap(), dec!(451.9351));
    }

    #[test]
    fn test_resident_has_no_variant_fields() {
        let record = resident_record();
        assert_eq!(record.visa(), None);
        assert_eq!(record.year_to_date().unwrap(), None);
    }

    #[test]
    fn test_working_holiday_income_includes_carryover() {
        assert_eq!(working_holiday_record().income().unwrap(), dec!(39000));
    }

    #[test]
    fn test_working_holiday_year_to_date_equals_income() {
        let record = working_holiday_record();
        assert_eq!(
            record.year_to_date().unwrap(),
            Some(record.income().unwrap())
        );
    }

    #[test]
    fn test_working_holiday_band_selected_on_cumulative_income() {
        // 39,000 year to date selects the 32% band; tax applies to the
        // 3,000 period gross only.
        assert_eq!(working_holiday_record().tax().unwrap(), dec!(960.00));
    }

    #[test]
    fn test_working_holiday_net_uses_period_gross() {
        // 3,000 period gross less 960 tax, not 39,000 less 960.
        assert_eq!(working_holiday_record().net().unwrap(), dec!(2040.00));
    }

    #[test]
    fn test_append_extends_sequences_in_arrival_order() {
        let mut record = resident_record();
        record.append_hours(vec![dec!(2)]);
        record.append_rates(vec![dec!(50)]);

        assert_eq!(record.hours(), &[dec!(10), dec!(5), dec!(2)]);
        assert_eq!(record.rates(), &[dec!(40), dec!(45), dec!(50)]);
        assert_eq!(record.income().unwrap(), dec!(725));
    }

    #[test]
    fn test_derivation_reflects_appends_without_caching() {
        let mut record = working_holiday_record();
        let before = record.tax().unwrap();

        record.append_hours(vec![dec!(10)]);
        record.append_rates(vec![dec!(30)]);

        // 3,300 period gross at 32% (39,300 year to date)
        assert_eq!(record.tax().unwrap(), dec!(1056.00));
        assert_ne!(record.tax().unwrap(), before);
    }

    #[test]
    fn test_derivation_is_idempotent() {
        let record = resident_record();
        assert_eq!(record.income().unwrap(), record.income().unwrap());
        assert_eq!(record.tax().unwrap(), record.tax().unwrap());
        assert_eq!(record.net().unwrap(), record.net().unwrap());
    }

    #[test]
    fn test_length_mismatch_fails_instead_of_truncating() {
        let mut record = resident_record();
        record.append_hours(vec![dec!(8)]);

        match record.income().unwrap_err() {
            EngineError::HoursRatesMismatch { id, hours, rates } => {
                assert_eq!(id, 1);
                assert_eq!(hours, 3);
                assert_eq!(rates, 2);
            }
            other => panic!("Expected HoursRatesMismatch, got {:?}", other),
        }
        assert!(record.tax().is_err());
        assert!(record.net().is_err());
    }

    #[test]
    fn test_describe_resident_block() {
        let description = resident_record().describe().unwrap();
        assert!(description.contains("Resident ID: 1"));
        assert!(description.contains("Hours: 10, 5"));
        assert!(description.contains("Hourly Rates: 40, 45"));
        assert!(description.contains("Income: 625"));
        assert!(description.contains("Total Tax: 173.36"));
        assert!(!description.contains("Visa Type"));
    }

    #[test]
    fn test_describe_working_holiday_block_has_variant_fields() {
        let description = working_holiday_record().describe().unwrap();
        assert!(description.contains("Working Holiday ID: 2"));
        assert!(description.contains("Visa Type: 417"));
        assert!(description.contains("Year to Date: 39000"));
        assert!(description.contains("Total Tax: 960.00"));
    }

    #[test]
    fn test_pay_record_serialization_round_trip() {
        let record = working_holiday_record();
        let json = serde_json::to_string(&record).unwrap();
        let deserialized: PayRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, deserialized);
    }
}
