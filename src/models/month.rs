//! Calendar month identifier
//!
//! All recurrence and aggregation logic works on whole months. Months are
//! compared by (year, month) ordinal, never by calendar date, so month
//! arithmetic is always well-defined.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A (year, month) pair identifying one calendar month (e.g., "2024-06")
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Month {
    pub year: i32,
    pub month: u32,
}

impl Month {
    /// Create a month from a year and a 1-based month number
    pub fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }

    /// The month a calendar date falls in
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Zero-based month ordinal, used for all month arithmetic
    fn index(&self) -> i64 {
        self.year as i64 * 12 + self.month as i64 - 1
    }

    /// Number of whole months from `earlier` to `self` (negative if `self`
    /// precedes `earlier`)
    pub fn months_since(&self, earlier: Month) -> i64 {
        self.index() - earlier.index()
    }

    /// The month `count` months after this one (negative counts go backward)
    pub fn plus_months(&self, count: i64) -> Self {
        let index = self.index() + count;
        Self {
            year: index.div_euclid(12) as i32,
            month: index.rem_euclid(12) as u32 + 1,
        }
    }

    /// Get the next month
    pub fn next(&self) -> Self {
        self.plus_months(1)
    }

    /// Get the previous month
    pub fn prev(&self) -> Self {
        self.plus_months(-1)
    }

    /// First calendar day of this month
    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .unwrap_or_else(|| NaiveDate::from_ymd_opt(self.year, 1, 1).unwrap())
    }

    /// Number of days in this month
    pub fn length(&self) -> u32 {
        (self.next().first_day() - self.first_day()).num_days() as u32
    }

    /// The calendar date for a day-of-month within this month
    ///
    /// Days past the end of the month clamp to the last valid day (due day 31
    /// in a 30-day month becomes the 30th).
    pub fn date_with_day(&self, day: u32) -> NaiveDate {
        let day = day.clamp(1, self.length());
        NaiveDate::from_ymd_opt(self.year, self.month, day).unwrap_or_else(|| self.first_day())
    }

    /// Check if a calendar date falls within this month
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// Parse a month from "YYYY-MM" format
    pub fn parse(s: &str) -> Result<Self, MonthParseError> {
        let s = s.trim();
        let (year, month) = s
            .split_once('-')
            .ok_or_else(|| MonthParseError::InvalidFormat(s.to_string()))?;

        let year: i32 = year
            .parse()
            .map_err(|_| MonthParseError::InvalidFormat(s.to_string()))?;
        let month: u32 = month
            .parse()
            .map_err(|_| MonthParseError::InvalidFormat(s.to_string()))?;

        if !(1..=12).contains(&month) {
            return Err(MonthParseError::InvalidMonth(month));
        }

        Ok(Self { year, month })
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// Error type for month parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MonthParseError {
    InvalidFormat(String),
    InvalidMonth(u32),
}

impl fmt::Display for MonthParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonthParseError::InvalidFormat(s) => write!(f, "Invalid month format: {}", s),
            MonthParseError::InvalidMonth(m) => write!(f, "Invalid month: {}", m),
        }
    }
}

impl std::error::Error for MonthParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering() {
        assert!(Month::new(2024, 12) < Month::new(2025, 1));
        assert!(Month::new(2024, 5) < Month::new(2024, 6));
        assert_eq!(Month::new(2024, 6), Month::new(2024, 6));
    }

    #[test]
    fn test_navigation() {
        assert_eq!(Month::new(2024, 12).next(), Month::new(2025, 1));
        assert_eq!(Month::new(2025, 1).prev(), Month::new(2024, 12));
        assert_eq!(Month::new(2024, 6).next(), Month::new(2024, 7));
    }

    #[test]
    fn test_plus_months() {
        assert_eq!(Month::new(2024, 3).plus_months(3), Month::new(2024, 6));
        assert_eq!(Month::new(2024, 11).plus_months(2), Month::new(2025, 1));
        assert_eq!(Month::new(2024, 2).plus_months(-3), Month::new(2023, 11));
    }

    #[test]
    fn test_months_since() {
        assert_eq!(Month::new(2024, 6).months_since(Month::new(2024, 1)), 5);
        assert_eq!(Month::new(2025, 1).months_since(Month::new(2024, 12)), 1);
        assert_eq!(Month::new(2024, 1).months_since(Month::new(2024, 6)), -5);
    }

    #[test]
    fn test_length() {
        assert_eq!(Month::new(2024, 1).length(), 31);
        assert_eq!(Month::new(2024, 4).length(), 30);
        assert_eq!(Month::new(2024, 2).length(), 29); // leap year
        assert_eq!(Month::new(2023, 2).length(), 28);
    }

    #[test]
    fn test_date_with_day_clamps() {
        let june = Month::new(2024, 6); // 30 days
        assert_eq!(
            june.date_with_day(31),
            NaiveDate::from_ymd_opt(2024, 6, 30).unwrap()
        );
        assert_eq!(
            june.date_with_day(5),
            NaiveDate::from_ymd_opt(2024, 6, 5).unwrap()
        );
        assert_eq!(
            Month::new(2023, 2).date_with_day(31),
            NaiveDate::from_ymd_opt(2023, 2, 28).unwrap()
        );
    }

    #[test]
    fn test_contains() {
        let june = Month::new(2024, 6);
        assert!(june.contains(NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()));
        assert!(!june.contains(NaiveDate::from_ymd_opt(2024, 7, 1).unwrap()));
    }

    #[test]
    fn test_from_date() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
        assert_eq!(Month::from_date(date), Month::new(2024, 6));
    }

    #[test]
    fn test_parse() {
        assert_eq!(Month::parse("2024-06").unwrap(), Month::new(2024, 6));
        assert_eq!(Month::parse(" 2025-01 ").unwrap(), Month::new(2025, 1));
        assert!(matches!(
            Month::parse("2024-13"),
            Err(MonthParseError::InvalidMonth(13))
        ));
        assert!(Month::parse("junk").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Month::new(2024, 6)), "2024-06");
        assert_eq!(format!("{}", Month::new(987, 1)), "0987-01");
    }

    #[test]
    fn test_serialization() {
        let month = Month::new(2024, 6);
        let json = serde_json::to_string(&month).unwrap();
        let deserialized: Month = serde_json::from_str(&json).unwrap();
        assert_eq!(month, deserialized);
    }
}
