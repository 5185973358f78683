//! Pay record construction from row shape.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{PayRecord, ResidentPayRecord, VisaClass, WorkingHolidayPayRecord};

/// Checks that every value in a sequence is strictly positive.
///
/// Zero hours or a negative rate would corrupt the merged record, so the
/// row is rejected before any record is constructed or mutated.
pub(crate) fn ensure_strictly_positive(values: &[Decimal], field: &str) -> EngineResult<()> {
    match values.iter().find(|value| **value <= Decimal::ZERO) {
        Some(value) => Err(EngineError::InvalidValue {
            field: field.to_string(),
            message: format!("must be a positive value, got {value}"),
        }),
        None => Ok(()),
    }
}

pub(crate) fn ensure_paired(id: u32, hours: &[Decimal], rates: &[Decimal]) -> EngineResult<()> {
    if hours.len() != rates.len() {
        return Err(EngineError::HoursRatesMismatch {
            id,
            hours: hours.len(),
            rates: rates.len(),
        });
    }
    Ok(())
}

/// Creates a pay record of the variant implied by the row's shape.
///
/// A working holiday record is produced only when a recognised visa subclass
/// **and** a year-to-date value are both present; everything else is a
/// resident. Every hour and rate must be strictly positive and the two
/// sequences must be the same length; a violation fails before any record is
/// constructed, so no partial record ever exists.
///
/// # Errors
///
/// Returns [`EngineError::InvalidValue`] for a non-positive hour or rate and
/// [`EngineError::HoursRatesMismatch`] for unequal sequence lengths.
///
/// # Examples
///
/// ```
/// use payslip_engine::aggregation::create_pay_record;
/// use payslip_engine::models::{PayRecord, VisaClass};
/// use rust_decimal_macros::dec;
///
/// let record = create_pay_record(
///     2,
///     vec![dec!(100)],
///     vec![dec!(30)],
///     Some(VisaClass::Subclass417),
///     Some(dec!(36000)),
/// )
/// .unwrap();
/// assert!(matches!(record, PayRecord::WorkingHoliday(_)));
///
/// let record = create_pay_record(1, vec![dec!(10)], vec![dec!(40)], None, None).unwrap();
/// assert!(matches!(record, PayRecord::Resident(_)));
/// ```
pub fn create_pay_record(
    id: u32,
    hours: Vec<Decimal>,
    rates: Vec<Decimal>,
    visa: Option<VisaClass>,
    year_to_date: Option<Decimal>,
) -> EngineResult<PayRecord> {
    ensure_strictly_positive(&hours, "hours")?;
    ensure_strictly_positive(&rates, "rates")?;
    ensure_paired(id, &hours, &rates)?;

    let record = match (visa, year_to_date) {
        (Some(visa), Some(year_to_date)) => PayRecord::WorkingHoliday(
            WorkingHolidayPayRecord::new(id, hours, rates, visa, year_to_date),
        ),
        _ => PayRecord::Resident(ResidentPayRecord::new(id, hours, rates)),
    };
    Ok(record)
}
