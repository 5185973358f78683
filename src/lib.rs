//! Payslip Engine for resident and working holiday tax schedules
//!
//! This crate computes per-employee gross income, progressive income tax and
//! net pay from timesheet rows. Rows belonging to the same employee are merged
//! into a single pay record before tax is applied, and each record derives its
//! income, tax and net figures on demand from the merged data.

#![warn(missing_docs)]

pub mod aggregation;
pub mod error;
pub mod io;
pub mod models;
pub mod pipeline;
pub mod tax;
