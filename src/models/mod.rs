//! Core data models for the Payslip Engine.
//!
//! This module contains the pay record variants, the visa classes that gate
//! the working holiday regime, and the parsed timesheet row.

mod pay_record;
mod row;
mod visa;

pub use pay_record::{PayRecord, ResidentPayRecord, WorkingHolidayPayRecord};
pub use row::TimesheetRow;
pub use visa::VisaClass;
