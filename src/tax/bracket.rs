//! Marginal tax bracket model.
//!
//! This module defines the [`TaxBracket`] band and the ordered, immutable
//! [`TaxBracketTable`] that a withholding schedule is made of.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// A single marginal-rate band in a progressive withholding schedule.
///
/// A band covers the half-open income interval `[lower_bound, upper_bound)`.
/// The final band of a schedule has no upper bound (`None`), which models
/// the open-ended top interval.
///
/// # Example
///
/// ```
/// use payslip_engine::tax::TaxBracket;
/// use rust_decimal_macros::dec;
///
/// let band = TaxBracket {
///     lower_bound: dec!(361),
///     upper_bound: Some(dec!(932)),
///     marginal_rate: dec!(0.3477),
///     fixed_offset: dec!(44.2476),
/// };
/// assert!(band.contains(dec!(625)));
/// assert!(band.contains(dec!(361)));
/// assert!(!band.contains(dec!(932)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    /// The inclusive lower bound of the band.
    pub lower_bound: Decimal,
    /// The exclusive upper bound of the band, or `None` for the top band.
    pub upper_bound: Option<Decimal>,
    /// The marginal rate applied within this band.
    pub marginal_rate: Decimal,
    /// The fixed amount subtracted after the rate is applied.
    pub fixed_offset: Decimal,
}

impl TaxBracket {
    /// Returns true if `income` falls within this band.
    ///
    /// Membership is lower-inclusive and upper-exclusive.
    pub fn contains(&self, income: Decimal) -> bool {
        income >= self.lower_bound && self.upper_bound.is_none_or(|upper| income < upper)
    }
}

/// An ordered, immutable list of marginal-rate bands for one tax regime.
///
/// Construction validates that the bands partition `[0, +infinity)`: the
/// first band starts at zero, consecutive bands are contiguous, and only the
/// final band is unbounded. Every non-negative income therefore falls in
/// exactly one band.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracketTable {
    brackets: Vec<TaxBracket>,
}

impl TaxBracketTable {
    /// Builds a bracket table, validating the partition invariant.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidSchedule`] if the table is empty, does
    /// not start at zero, has a gap or overlap between consecutive bands, has
    /// a bounded band that fails to extend its range, or has an unbounded
    /// band anywhere but last.
    ///
    /// # Example
    ///
    /// ```
    /// use payslip_engine::tax::{TaxBracket, TaxBracketTable};
    /// use rust_decimal_macros::dec;
    ///
    /// let table = TaxBracketTable::new(vec![
    ///     TaxBracket {
    ///         lower_bound: dec!(0),
    ///         upper_bound: Some(dec!(100)),
    ///         marginal_rate: dec!(0.1),
    ///         fixed_offset: dec!(0),
    ///     },
    ///     TaxBracket {
    ///         lower_bound: dec!(100),
    ///         upper_bound: None,
    ///         marginal_rate: dec!(0.2),
    ///         fixed_offset: dec!(0),
    ///     },
    /// ])
    /// .unwrap();
    /// assert_eq!(table.brackets().len(), 2);
    /// ```
    pub fn new(brackets: Vec<TaxBracket>) -> EngineResult<Self> {
        let Some(first) = brackets.first() else {
            return Err(EngineError::InvalidSchedule {
                message: "schedule contains no brackets".to_string(),
            });
        };

        if first.lower_bound != Decimal::ZERO {
            return Err(EngineError::InvalidSchedule {
                message: format!(
                    "first bracket must start at 0, starts at {}",
                    first.lower_bound
                ),
            });
        }

        for (index, pair) in brackets.windows(2).enumerate() {
            let (current, next) = (&pair[0], &pair[1]);
            match current.upper_bound {
                None => {
                    return Err(EngineError::InvalidSchedule {
                        message: format!("bracket {index} is unbounded but not last"),
                    });
                }
                Some(upper) if upper != next.lower_bound => {
                    return Err(EngineError::InvalidSchedule {
                        message: format!(
                            "bracket {index} ends at {upper} but bracket {} starts at {}",
                            index + 1,
                            next.lower_bound
                        ),
                    });
                }
                Some(upper) if upper <= current.lower_bound => {
                    return Err(EngineError::InvalidSchedule {
                        message: format!("bracket {index} has an empty range"),
                    });
                }
                Some(_) => {}
            }
        }

        // windows(2) never inspects the last band's upper bound.
        if let Some(last) = brackets.last()
            && last.upper_bound.is_some()
        {
            return Err(EngineError::InvalidSchedule {
                message: "final bracket must be unbounded".to_string(),
            });
        }

        Ok(Self { brackets })
    }

    /// Returns the band containing `income`, scanning in ascending order.
    ///
    /// Returns `None` only for negative income, since a validated table
    /// covers all of `[0, +infinity)`.
    pub fn bracket_for(&self, income: Decimal) -> Option<&TaxBracket> {
        self.brackets.iter().find(|bracket| bracket.contains(income))
    }

    /// Returns the bands of this table in ascending order.
    pub fn brackets(&self) -> &[TaxBracket] {
        &self.brackets
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn band(lower: Decimal, upper: Option<Decimal>) -> TaxBracket {
        TaxBracket {
            lower_bound: lower,
            upper_bound: upper,
            marginal_rate: dec!(0.1),
            fixed_offset: Decimal::ZERO,
        }
    }

    fn two_band_table() -> TaxBracketTable {
        TaxBracketTable::new(vec![
            band(dec!(0), Some(dec!(100))),
            band(dec!(100), None),
        ])
        .unwrap()
    }

    #[test]
    fn test_contains_is_lower_inclusive() {
        let bracket = band(dec!(100), Some(dec!(200)));
        assert!(bracket.contains(dec!(100)));
    }

    #[test]
    fn test_contains_is_upper_exclusive() {
        let bracket = band(dec!(100), Some(dec!(200)));
        assert!(!bracket.contains(dec!(200)));
        assert!(bracket.contains(dec!(199.99)));
    }

    #[test]
    fn test_unbounded_band_contains_large_income() {
        let bracket = band(dec!(100), None);
        assert!(bracket.contains(dec!(1000000000)));
    }

    #[test]
    fn test_empty_table_is_rejected() {
        let result = TaxBracketTable::new(vec![]);
        match result.unwrap_err() {
            EngineError::InvalidSchedule { message } => {
                assert!(message.contains("no brackets"));
            }
            other => panic!("Expected InvalidSchedule, got {:?}", other),
        }
    }

    #[test]
    fn test_table_must_start_at_zero() {
        let result = TaxBracketTable::new(vec![band(dec!(10), None)]);
        assert!(result.is_err());
    }

    #[test]
    fn test_gap_between_bands_is_rejected() {
        let result = TaxBracketTable::new(vec![
            band(dec!(0), Some(dec!(100))),
            band(dec!(150), None),
        ]);
        match result.unwrap_err() {
            EngineError::InvalidSchedule { message } => {
                assert!(message.contains("ends at 100"));
            }
            other => panic!("Expected InvalidSchedule, got {:?}", other),
        }
    }

    #[test]
    fn test_overlapping_bands_are_rejected() {
        let result = TaxBracketTable::new(vec![
            band(dec!(0), Some(dec!(100))),
            band(dec!(90), None),
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_bounded_final_band_is_rejected() {
        let result = TaxBracketTable::new(vec![
            band(dec!(0), Some(dec!(100))),
            band(dec!(100), Some(dec!(200))),
        ]);
        match result.unwrap_err() {
            EngineError::InvalidSchedule { message } => {
                assert!(message.contains("must be unbounded"));
            }
            other => panic!("Expected InvalidSchedule, got {:?}", other),
        }
    }

    #[test]
    fn test_unbounded_band_before_last_is_rejected() {
        let result = TaxBracketTable::new(vec![band(dec!(0), None), band(dec!(100), None)]);
        assert!(result.is_err());
    }

    #[test]
    fn test_bracket_for_boundary_income_selects_upper_band() {
        let table = two_band_table();
        let bracket = table.bracket_for(dec!(100)).unwrap();
        assert_eq!(bracket.lower_bound, dec!(100));
    }

    #[test]
    fn test_bracket_for_negative_income_is_none() {
        let table = two_band_table();
        assert!(table.bracket_for(dec!(-0.01)).is_none());
    }

    #[test]
    fn test_bracket_for_zero_selects_first_band() {
        let table = two_band_table();
        let bracket = table.bracket_for(Decimal::ZERO).unwrap();
        assert_eq!(bracket.lower_bound, Decimal::ZERO);
    }

    #[test]
    fn test_table_serialization_round_trip() {
        let table = two_band_table();
        let json = serde_json::to_string(&table).unwrap();
        let deserialized: TaxBracketTable = serde_json::from_str(&json).unwrap();
        assert_eq!(table, deserialized);
    }
}
