//! Budget period service
//!
//! Resolves dates to monthly periods and parses the period expressions the
//! CLI accepts.

use chrono::{Datelike, NaiveDate};

use crate::error::{BudgetAlertsError, BudgetAlertsResult};
use crate::models::Period;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Period containing a date
pub fn resolve_period(date: NaiveDate) -> Period {
    Period::from_date(date)
}

/// First and last day of a period, inclusive
pub fn period_bounds(period: Period) -> (NaiveDate, NaiveDate) {
    period.bounds()
}

/// Service for period parsing and navigation relative to a reference day
pub struct PeriodService {
    today: NaiveDate,
}

impl PeriodService {
    /// Period service anchored on today's local date
    pub fn new() -> Self {
        Self::anchored(chrono::Local::now().date_naive())
    }

    /// Period service anchored on a fixed date (useful for testing)
    pub fn anchored(today: NaiveDate) -> Self {
        Self { today }
    }

    pub fn current_period(&self) -> Period {
        Period::from_date(self.today)
    }

    /// Parse a period string or get the current period
    pub fn parse_or_current(&self, period_str: Option<&str>) -> BudgetAlertsResult<Period> {
        match period_str {
            Some(s) => self.parse(s),
            None => Ok(self.current_period()),
        }
    }

    /// Parse a period expression
    ///
    /// Formats supported: "2025-01", "January 2025", "Jan", "current", "last", "next"
    pub fn parse(&self, s: &str) -> BudgetAlertsResult<Period> {
        let s_lower = s.trim().to_lowercase();

        match s_lower.as_str() {
            "current" | "now" | "this" => return Ok(self.current_period()),
            "last" | "previous" | "prev" => return Ok(self.current_period().prev()),
            "next" => return Ok(self.current_period().next()),
            _ => {}
        }

        if let Some(period) = self.parse_month_name(&s_lower) {
            return Ok(period);
        }

        Period::parse(&s_lower)
            .map_err(|_| BudgetAlertsError::Validation(format!("Invalid period format: {}", s)))
    }

    /// Parse month names like "June", "jun 2024"; a bare month in the future
    /// refers to last year
    fn parse_month_name(&self, s: &str) -> Option<Period> {
        let (name, rest) = match s.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, rest.trim()),
            None => (s, ""),
        };

        if name.len() < 3 {
            return None;
        }

        let month = MONTH_NAMES
            .iter()
            .position(|full| full.to_lowercase().starts_with(name))? as u32
            + 1;

        let year = if rest.is_empty() {
            if month > self.today.month() {
                self.today.year() - 1
            } else {
                self.today.year()
            }
        } else {
            rest.parse().ok()?
        };

        Period::new(year, month).ok()
    }

    /// The last `count` periods ending with the current one, oldest first
    pub fn recent_periods(&self, count: usize) -> Vec<Period> {
        let mut periods: Vec<Period> =
            std::iter::successors(Some(self.current_period()), |p| Some(p.prev()))
                .take(count)
                .collect();
        periods.reverse();
        periods
    }

    /// The current period and the `count - 1` after it
    pub fn upcoming_periods(&self, count: usize) -> Vec<Period> {
        std::iter::successors(Some(self.current_period()), |p| Some(p.next()))
            .take(count)
            .collect()
    }

    /// Format a period like "June 2024"
    pub fn format_period_friendly(&self, period: &Period) -> String {
        let name = MONTH_NAMES
            .get(period.month() as usize - 1)
            .copied()
            .unwrap_or("Unknown");
        format!("{} {}", name, period.year())
    }
}

impl Default for PeriodService {
    fn default() -> Self {
        Self::new()
    }
}
