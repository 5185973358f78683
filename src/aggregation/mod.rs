//! Row aggregation for the Payslip Engine.
//!
//! This module merges timesheet rows keyed by employee id: the factory
//! chooses the pay record variant from the shape of the first row, and the
//! aggregator creates on first sight and extends on repeat.

mod aggregator;
mod factory;

pub use aggregator::{IngestOutcome, PayRecordAggregator};
pub use factory::create_pay_record;
