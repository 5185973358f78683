//! Pure tax calculation over a bracket table.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};

use super::bracket::TaxBracketTable;

/// Calculates the tax owed on `income` under the given schedule.
///
/// The band satisfying `lower_bound <= income < upper_bound` is selected by
/// an ascending scan and the tax is `marginal_rate * income - fixed_offset`.
///
/// # Errors
///
/// Returns [`EngineError::NoMatchingBracket`] if no band covers `income`.
/// With a validated table this only happens for negative income and signals
/// a configuration defect, not a user-input defect.
///
/// # Example
///
/// ```
/// use payslip_engine::tax::{calculate_tax, resident};
/// use rust_decimal_macros::dec;
///
/// let tax = calculate_tax(dec!(625), resident()).unwrap();
/// assert_eq!(tax, dec!(173.0649)); // 0.3477 * 625 - 44.2476
/// ```
pub fn calculate_tax(income: Decimal, table: &TaxBracketTable) -> EngineResult<Decimal> {
    calculate_tax_on_base(income, income, table)
}

/// Calculates tax with the bracket selected from one quantity and the rate
/// applied to another.
///
/// The band is chosen by half-open containment of `bracket_income`, while
/// the returned tax is `marginal_rate * taxable_base - fixed_offset`. The
/// working holiday regime depends on this split: its band is selected from
/// cumulative year-to-date income, but only the current period's gross is
/// taxed. [`calculate_tax`] is the symmetric case where both quantities are
/// the same value.
///
/// # Errors
///
/// Returns [`EngineError::NoMatchingBracket`] if no band covers
/// `bracket_income`.
///
/// # Example
///
/// ```
/// use payslip_engine::tax::{calculate_tax_on_base, working_holiday};
/// use rust_decimal_macros::dec;
///
/// // $39,000 year to date selects the 32% band, but only the $3,000
/// // earned this period is taxed.
/// let tax = calculate_tax_on_base(dec!(39000), dec!(3000), working_holiday()).unwrap();
/// assert_eq!(tax, dec!(960.00));
/// ```
pub fn calculate_tax_on_base(
    bracket_income: Decimal,
    taxable_base: Decimal,
    table: &TaxBracketTable,
) -> EngineResult<Decimal> {
    let bracket = table
        .bracket_for(bracket_income)
        .ok_or(EngineError::NoMatchingBracket {
            income: bracket_income,
        })?;
    Ok(bracket.marginal_rate * taxable_base - bracket.fixed_offset)
}
