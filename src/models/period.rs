//! Monthly budget period
//!
//! A period is a calendar year+month pair. Every valid date maps to exactly
//! one period, and every period has inclusive first/last day bounds.
//! Constructed periods are limited to years 1 through 9999, the range the
//! `YYYY-MM` form can express.

use chrono::{Datelike, NaiveDate};
use std::ops::RangeInclusive;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A calendar month used as the budgeting granularity
///
/// Internally anchored on the first day of the month, so the derived ordering
/// is chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Period {
    first_day: NaiveDate,
}

impl Period {
    pub const YEARS: RangeInclusive<i32> = 1..=9999;

    /// Create a period from a year in `YEARS` and a month (1-12)
    pub fn new(year: i32, month: u32) -> Result<Self, PeriodParseError> {
        if !Self::YEARS.contains(&year) {
            return Err(PeriodParseError::InvalidYear(year));
        }
        NaiveDate::from_ymd_opt(year, month, 1)
            .map(|first_day| Self { first_day })
            .ok_or(PeriodParseError::InvalidMonth(month))
    }

    /// Resolve the period containing a date
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            first_day: date.with_day(1).unwrap_or(date),
        }
    }

    /// The period containing today's local date
    pub fn current() -> Self {
        Self::from_date(chrono::Local::now().date_naive())
    }

    pub fn year(&self) -> i32 {
        self.first_day.year()
    }

    pub fn month(&self) -> u32 {
        self.first_day.month()
    }

    /// Number of days in this month
    pub fn days_in_month(&self) -> u32 {
        match self.month() {
            2 if self.first_day.leap_year() => 29,
            2 => 28,
            4 | 6 | 9 | 11 => 30,
            _ => 31,
        }
    }

    /// First calendar day of the period
    pub fn start_date(&self) -> NaiveDate {
        self.first_day
    }

    /// Last calendar day of the period (inclusive)
    pub fn end_date(&self) -> NaiveDate {
        self.first_day
            .with_day(self.days_in_month())
            .unwrap_or(self.first_day)
    }

    /// Inclusive (start, end) bounds
    pub fn bounds(&self) -> (NaiveDate, NaiveDate) {
        (self.start_date(), self.end_date())
    }

    /// Check if a date falls within this period
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start_date() && date <= self.end_date()
    }

    /// The following month; the last supported period is its own successor
    pub fn next(&self) -> Self {
        let (year, month) = match self.month() {
            12 => (self.year() + 1, 1),
            m => (self.year(), m + 1),
        };
        Self::new(year, month).unwrap_or(*self)
    }

    /// The preceding month; the first supported period is its own predecessor
    pub fn prev(&self) -> Self {
        let (year, month) = match self.month() {
            1 => (self.year() - 1, 12),
            m => (self.year(), m - 1),
        };
        Self::new(year, month).unwrap_or(*self)
    }

    /// Parse the canonical `YYYY-MM` form
    pub fn parse(s: &str) -> Result<Self, PeriodParseError> {
        let s = s.trim();
        let invalid = || PeriodParseError::InvalidFormat(s.to_string());

        let (year, month) = s.split_once('-').ok_or_else(invalid)?;
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;

        if !(1..=12).contains(&month) {
            return Err(PeriodParseError::InvalidMonth(month));
        }

        Self::new(year, month)
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year(), self.month())
    }
}

impl FromStr for Period {
    type Err = PeriodParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Period {
    type Error = PeriodParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Period> for String {
    fn from(period: Period) -> Self {
        period.to_string()
    }
}

/// Error type for period parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PeriodParseError {
    InvalidFormat(String),
    InvalidMonth(u32),
    InvalidYear(i32),
}

impl fmt::Display for PeriodParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PeriodParseError::InvalidFormat(s) => write!(f, "Invalid period format: {}", s),
            PeriodParseError::InvalidMonth(m) => write!(f, "Invalid month: {}", m),
            PeriodParseError::InvalidYear(y) => write!(
                f,
                "Invalid year: {} (expected {} to {})",
                y,
                Period::YEARS.start(),
                Period::YEARS.end()
            ),
        }
    }
}

impl std::error::Error for PeriodParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_from_date() {
        let period = Period::from_date(date(2024, 6, 17));
        assert_eq!(period, Period::new(2024, 6).unwrap());
        assert_eq!(period.year(), 2024);
        assert_eq!(period.month(), 6);
    }

    #[test]
    fn test_bounds() {
        let june = Period::new(2024, 6).unwrap();
        assert_eq!(june.bounds(), (date(2024, 6, 1), date(2024, 6, 30)));

        let dec = Period::new(2023, 12).unwrap();
        assert_eq!(dec.end_date(), date(2023, 12, 31));
    }

    #[test]
    fn test_february_bounds() {
        assert_eq!(Period::new(2024, 2).unwrap().end_date(), date(2024, 2, 29));
        assert_eq!(Period::new(2023, 2).unwrap().end_date(), date(2023, 2, 28));
        assert_eq!(Period::new(1900, 2).unwrap().end_date(), date(1900, 2, 28));
        assert_eq!(Period::new(2000, 2).unwrap().end_date(), date(2000, 2, 29));
    }

    #[test]
    fn test_contains_is_inclusive() {
        let june = Period::new(2024, 6).unwrap();
        assert!(june.contains(date(2024, 6, 1)));
        assert!(june.contains(date(2024, 6, 30)));
        assert!(!june.contains(date(2024, 5, 31)));
        assert!(!june.contains(date(2024, 7, 1)));
    }

    #[test]
    fn test_navigation() {
        let dec = Period::new(2024, 12).unwrap();
        assert_eq!(dec.next(), Period::new(2025, 1).unwrap());
        assert_eq!(dec.next().prev(), dec);

        let jan = Period::new(2024, 1).unwrap();
        assert_eq!(jan.prev(), Period::new(2023, 12).unwrap());
    }

    #[test]
    fn test_navigation_saturates_at_range_edges() {
        let last = Period::new(9999, 12).unwrap();
        assert_eq!(last.next(), last);
        let first = Period::new(1, 1).unwrap();
        assert_eq!(first.prev(), first);

        let latest = Period::from_date(NaiveDate::MAX);
        assert_eq!(latest.next(), latest);
        assert_eq!(latest.end_date(), NaiveDate::MAX);
        let earliest = Period::from_date(NaiveDate::MIN);
        assert_eq!(earliest.prev(), earliest);
        assert_eq!(earliest.start_date(), NaiveDate::MIN.with_day(1).unwrap());
    }

    #[test]
    fn test_year_range() {
        assert_eq!(Period::new(262142, 12), Err(PeriodParseError::InvalidYear(262142)));
        assert_eq!(Period::parse("10000-01"), Err(PeriodParseError::InvalidYear(10000)));
        assert_eq!(Period::parse("0-06"), Err(PeriodParseError::InvalidYear(0)));
        assert_eq!(Period::parse("9999-12").unwrap().to_string(), "9999-12");
    }

    #[test]
    fn test_ordering_is_chronological() {
        let a = Period::new(2023, 12).unwrap();
        let b = Period::new(2024, 1).unwrap();
        assert!(a < b);
    }

    #[test]
    fn test_parse() {
        assert_eq!(Period::parse("2024-06").unwrap(), Period::new(2024, 6).unwrap());
        assert_eq!("2024-6".parse::<Period>().unwrap().to_string(), "2024-06");
        assert_eq!(Period::parse("2024-13"), Err(PeriodParseError::InvalidMonth(13)));
        assert!(Period::parse("June").is_err());
        assert!(Period::parse("2024-06-01").is_err());
    }

    #[test]
    fn test_serialization_uses_canonical_string() {
        let period = Period::new(2024, 6).unwrap();
        let json = serde_json::to_string(&period).unwrap();
        assert_eq!(json, "\"2024-06\"");
        let deserialized: Period = serde_json::from_str(&json).unwrap();
        assert_eq!(period, deserialized);
        assert!(serde_json::from_str::<Period>("\"2024-00\"").is_err());
    }
}
