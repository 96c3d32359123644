//! Calendar month keys (`YYYY-MM`).

use crate::error::{ForecastError, Result};
use chrono::{Datelike, NaiveDate};
use std::fmt;
use std::str::FromStr;

/// A calendar month, the aggregation bucket for sales data.
///
/// Ordering is chronological, which for well-formed keys matches the
/// lexicographic order of their `YYYY-MM` text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Month(NaiveDate);

impl Month {
    /// Create a month from a year and a 1-based month number.
    pub fn new(year: i32, month: u32) -> Result<Self> {
        NaiveDate::from_ymd_opt(year, month, 1)
            .map(Month)
            .ok_or_else(|| ForecastError::InvalidMonth(format!("{year:04}-{month:02}")))
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// 1-based month of the year.
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// The following calendar month.
    pub fn succ(&self) -> Self {
        let (year, month) = if self.month() == 12 {
            (self.year() + 1, 1)
        } else {
            (self.year(), self.month() + 1)
        };
        // Day 1 exists in every month
        Month(NaiveDate::from_ymd_opt(year, month, 1).unwrap_or(self.0))
    }
}

impl FromStr for Month {
    type Err = ForecastError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let (year, month) = trimmed
            .split_once('-')
            .ok_or_else(|| ForecastError::InvalidMonth(s.to_string()))?;

        let digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if year.len() != 4 || month.len() != 2 || !digits(year) || !digits(month) {
            return Err(ForecastError::InvalidMonth(s.to_string()));
        }

        let year: i32 = year
            .parse()
            .map_err(|_| ForecastError::InvalidMonth(s.to_string()))?;
        let month: u32 = month
            .parse()
            .map_err(|_| ForecastError::InvalidMonth(s.to_string()))?;

        Month::new(year, month).map_err(|_| ForecastError::InvalidMonth(s.to_string()))
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_formats_round_trip() {
        let m: Month = "2024-01".parse().unwrap();
        assert_eq!(m.year(), 2024);
        assert_eq!(m.month(), 1);
        assert_eq!(m.to_string(), "2024-01");
    }

    #[test]
    fn rejects_malformed_keys() {
        for bad in [
            "2024-13", "2024-00", "2024-1", "24-01", "2024/01", "", "January", "+999-12", "2024-+1",
        ] {
            assert!(
                matches!(bad.parse::<Month>(), Err(ForecastError::InvalidMonth(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn ordering_is_chronological() {
        let mut months: Vec<Month> = ["2024-02", "2023-12", "2024-01"]
            .iter()
            .map(|s| s.parse().unwrap())
            .collect();
        months.sort();

        let labels: Vec<String> = months.iter().map(|m| m.to_string()).collect();
        assert_eq!(labels, vec!["2023-12", "2024-01", "2024-02"]);
    }

    #[test]
    fn succ_rolls_over_year() {
        let dec = Month::new(2023, 12).unwrap();
        assert_eq!(dec.succ(), Month::new(2024, 1).unwrap());
        assert_eq!(Month::new(2024, 6).unwrap().succ().to_string(), "2024-07");
    }
}
