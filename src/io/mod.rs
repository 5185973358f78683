//! File collaborators for the Payslip Engine.
//!
//! The reader and writer are thin adapters around the core: the reader turns
//! delimited text into [`TimesheetRow`](crate::models::TimesheetRow) values
//! and the writer serializes finished pay records to a tabular file. Neither
//! contains pay logic.

mod reader;
mod writer;

pub use reader::{MIN_COLUMNS, TimesheetReader};
pub use writer::write_payslips;
