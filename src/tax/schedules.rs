//! Fixed withholding schedules.
//!
//! The engine ships exactly two bracket tables: the resident weekly
//! withholding schedule and the working holiday maker schedule. Both are
//! fixed at compile time; there is no tax-year configuration.

use std::sync::LazyLock;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::bracket::{TaxBracket, TaxBracketTable};

fn bracket(
    lower_bound: Decimal,
    upper_bound: Option<Decimal>,
    marginal_rate: Decimal,
    fixed_offset: Decimal,
) -> TaxBracket {
    TaxBracket {
        lower_bound,
        upper_bound,
        marginal_rate,
        fixed_offset,
    }
}

static RESIDENT: LazyLock<TaxBracketTable> = LazyLock::new(|| {
    TaxBracketTable::new(vec![
        bracket(dec!(0), Some(dec!(72)), dec!(0.19), dec!(0.19)),
        bracket(dec!(72), Some(dec!(361)), dec!(0.2342), dec!(3.213)),
        bracket(dec!(361), Some(dec!(932)), dec!(0.3477), dec!(44.2476)),
        bracket(dec!(932), Some(dec!(1380)), dec!(0.345), dec!(41.7311)),
        bracket(dec!(1380), Some(dec!(3111)), dec!(0.39), dec!(103.8657)),
        bracket(dec!(3111), None, dec!(0.47), dec!(352.788)),
    ])
    .expect("resident schedule is a valid partition")
});

static WORKING_HOLIDAY: LazyLock<TaxBracketTable> = LazyLock::new(|| {
    TaxBracketTable::new(vec![
        bracket(dec!(0), Some(dec!(37000)), dec!(0.15), dec!(0)),
        bracket(dec!(37000), Some(dec!(90000)), dec!(0.32), dec!(0)),
        bracket(dec!(90000), Some(dec!(180000)), dec!(0.37), dec!(0)),
        bracket(dec!(180000), None, dec!(0.45), dec!(0)),
    ])
    .expect("working holiday schedule is a valid partition")
});

/// Returns the six-band resident weekly withholding schedule.
///
/// Each band carries a marginal rate and a fixed subtractive offset; tax for
/// an income within a band is `rate * income - offset`.
pub fn resident() -> &'static TaxBracketTable {
    &RESIDENT
}

/// Returns the four-band working holiday maker schedule.
///
/// All offsets are zero. Callers select the band from cumulative
/// year-to-date income but apply the rate to the current period's gross; see
/// [`calculate_tax_on_base`](super::calculate_tax_on_base).
pub fn working_holiday() -> &'static TaxBracketTable {
    &WORKING_HOLIDAY
}
