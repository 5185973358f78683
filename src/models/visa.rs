//! Working holiday visa classes.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A working holiday visa subclass recognised by the engine.
///
/// Only these two subclasses place an employee on the working holiday tax
/// schedule. Any other designator in the input is treated as absent and the
/// employee is paid as a resident.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VisaClass {
    /// Working Holiday visa (subclass 417).
    #[serde(rename = "417")]
    Subclass417,
    /// Work and Holiday visa (subclass 462).
    #[serde(rename = "462")]
    Subclass462,
}

impl VisaClass {
    /// Parses a visa designator from an input field.
    ///
    /// Returns `None` for anything other than the two recognised subclass
    /// codes, including the empty string.
    ///
    /// # Examples
    ///
    /// ```
    /// use payslip_engine::models::VisaClass;
    ///
    /// assert_eq!(VisaClass::parse("417"), Some(VisaClass::Subclass417));
    /// assert_eq!(VisaClass::parse("462"), Some(VisaClass::Subclass462));
    /// assert_eq!(VisaClass::parse("500"), None);
    /// assert_eq!(VisaClass::parse(""), None);
    /// ```
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "417" => Some(VisaClass::Subclass417),
            "462" => Some(VisaClass::Subclass462),
            _ => None,
        }
    }

    /// Returns the subclass code as it appears in timesheet files.
    pub fn code(&self) -> &'static str {
        match self {
            VisaClass::Subclass417 => "417",
            VisaClass::Subclass462 => "462",
        }
    }
}

impl fmt::Display for VisaClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
