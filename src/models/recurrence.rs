//! Recurrence rules for ledger entries
//!
//! A recurrence rule decides in which months an entry contributes. Expansion
//! is a pure function of the rule, the entry's start month, and the target
//! month; no calendar dates are involved.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::month::Month;

/// How an entry repeats across months
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum Recurrence {
    /// Contributes only in the start month
    Once,
    /// Contributes in every month from the start month onward
    Monthly,
    /// Contributes in exactly this many consecutive months from the start month
    ForMonths(u32),
}

impl Recurrence {
    /// Whether an entry starting in `start` is active in `target`
    ///
    /// Assumes a well-formed rule; `ForMonths(0)` is rejected by entry
    /// validation before expansion ever runs.
    pub fn active_in(&self, start: Month, target: Month) -> bool {
        let elapsed = target.months_since(start);
        if elapsed < 0 {
            return false;
        }
        match self {
            Self::Once => elapsed == 0,
            Self::Monthly => true,
            Self::ForMonths(count) => elapsed < *count as i64,
        }
    }

    /// Validate the rule
    pub fn validate(&self) -> Result<(), RecurrenceValidationError> {
        match self {
            Self::ForMonths(0) => Err(RecurrenceValidationError::ZeroMonths),
            _ => Ok(()),
        }
    }

    pub fn description(&self) -> String {
        match self {
            Self::Once => "This month only".to_string(),
            Self::Monthly => "Every month".to_string(),
            Self::ForMonths(count) => format!("For {} months", count),
        }
    }
}

impl fmt::Display for Recurrence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// Validation errors for recurrence rules
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecurrenceValidationError {
    ZeroMonths,
}

impl fmt::Display for RecurrenceValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroMonths => write!(f, "Recurrence month count must be at least 1"),
        }
    }
}

impl std::error::Error for RecurrenceValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_once_active_exactly_one_month() {
        let start = Month::new(2024, 3);
        let rule = Recurrence::Once;

        let active: Vec<Month> = (0..24)
            .map(|i| Month::new(2023, 6).plus_months(i))
            .filter(|m| rule.active_in(start, *m))
            .collect();

        assert_eq!(active, vec![start]);
    }

    #[test]
    fn test_monthly_unbounded_forward() {
        let start = Month::new(2024, 1);
        let rule = Recurrence::Monthly;

        assert!(!rule.active_in(start, Month::new(2023, 12)));
        assert!(rule.active_in(start, start));
        assert!(rule.active_in(start, Month::new(2024, 6)));
        assert!(rule.active_in(start, Month::new(2030, 1)));
    }

    #[test]
    fn test_for_months_contiguous_window() {
        let start = Month::new(2024, 3);
        let rule = Recurrence::ForMonths(3);

        let active: Vec<Month> = (0..24)
            .map(|i| Month::new(2023, 6).plus_months(i))
            .filter(|m| rule.active_in(start, *m))
            .collect();

        assert_eq!(
            active,
            vec![
                Month::new(2024, 3),
                Month::new(2024, 4),
                Month::new(2024, 5),
            ]
        );
    }

    #[test]
    fn test_never_active_before_start() {
        let start = Month::new(2024, 6);
        for rule in [Recurrence::Once, Recurrence::Monthly, Recurrence::ForMonths(12)] {
            assert!(!rule.active_in(start, Month::new(2024, 5)));
            assert!(!rule.active_in(start, Month::new(2020, 1)));
        }
    }

    #[test]
    fn test_for_months_crosses_year_boundary() {
        let start = Month::new(2024, 11);
        let rule = Recurrence::ForMonths(4);

        assert!(rule.active_in(start, Month::new(2024, 11)));
        assert!(rule.active_in(start, Month::new(2025, 2)));
        assert!(!rule.active_in(start, Month::new(2025, 3)));
    }

    #[test]
    fn test_validation() {
        assert!(Recurrence::ForMonths(0).validate().is_err());
        assert!(Recurrence::ForMonths(1).validate().is_ok());
        assert!(Recurrence::Once.validate().is_ok());
        assert!(Recurrence::Monthly.validate().is_ok());
    }

    #[test]
    fn test_description() {
        assert_eq!(Recurrence::Once.to_string(), "This month only");
        assert_eq!(Recurrence::Monthly.to_string(), "Every month");
        assert_eq!(Recurrence::ForMonths(3).to_string(), "For 3 months");
    }

    #[test]
    fn test_serialization() {
        let rule = Recurrence::ForMonths(6);
        let json = serde_json::to_string(&rule).unwrap();
        let deserialized: Recurrence = serde_json::from_str(&json).unwrap();
        assert_eq!(rule, deserialized);
    }
}
