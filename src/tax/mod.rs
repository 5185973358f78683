//! Tax calculation logic for the Payslip Engine.
//!
//! This module contains the marginal bracket model, the fixed withholding
//! schedules for the resident and working holiday regimes, and the pure
//! calculator functions that resolve a bracket and return the tax owed.

mod bracket;
mod calculator;
mod schedules;

pub use bracket::{TaxBracket, TaxBracketTable};
pub use calculator::{calculate_tax, calculate_tax_on_base};
pub use schedules::{resident, working_holiday};
