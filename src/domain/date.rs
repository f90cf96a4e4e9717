//! Calendar dates and period boundaries
//!
//! Dates carry no time of day and no timezone, so adding days is a pure offset
//! and never shifts across a daylight-saving transition.

use crate::error::{LedgerError, Result};
use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Years that fit the four-digit `YYYY` form
const MIN_YEAR: i32 = 0;
const MAX_YEAR: i32 = 9999;

/// A calendar day, written canonically as `YYYY-MM-DD`
///
/// Years are limited to 0000-9999 so every date formats back to the form it
/// was parsed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// Build a date from its components, `None` if they do not form a real day
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return None;
        }
        NaiveDate::from_ymd_opt(year, month, day).map(CalendarDate)
    }

    /// 0000-01-01
    pub fn earliest() -> Self {
        CalendarDate(NaiveDate::from_ymd_opt(MIN_YEAR, 1, 1).unwrap_or(NaiveDate::MIN))
    }

    /// 9999-12-31
    pub fn latest() -> Self {
        CalendarDate(NaiveDate::from_ymd_opt(MAX_YEAR, 12, 31).unwrap_or(NaiveDate::MAX))
    }

    fn clamped(date: NaiveDate) -> Self {
        CalendarDate(date).clamp(Self::earliest(), Self::latest())
    }

    /// The UTC calendar day containing `instant`, clamped to 0000-9999
    pub fn from_instant(instant: DateTime<Utc>) -> Self {
        Self::clamped(instant.date_naive())
    }

    /// Today's date in UTC
    pub fn today() -> Self {
        Self::from_instant(Utc::now())
    }

    /// Parse `YYYY-MM-DD`
    ///
    /// The input is split on `-` and must yield exactly three numeric components.
    /// Components need not be zero-padded (`2025-6-5` is accepted), but they must
    /// name a real calendar day and the year has at most four digits.
    pub fn parse(input: &str) -> Result<Self> {
        let invalid = || LedgerError::InvalidDateFormat(input.to_string());

        let parts: Vec<&str> = input.trim().split('-').collect();
        if parts.len() != 3 {
            return Err(invalid());
        }
        if parts
            .iter()
            .any(|p| p.is_empty() || !p.bytes().all(|b| b.is_ascii_digit()))
        {
            return Err(invalid());
        }
        if parts[0].len() > 4 {
            return Err(invalid());
        }

        let year: i32 = parts[0].parse().map_err(|_| invalid())?;
        let month: u32 = parts[1].parse().map_err(|_| invalid())?;
        let day: u32 = parts[2].parse().map_err(|_| invalid())?;

        Self::from_ymd(year, month, day).ok_or_else(invalid)
    }

    /// Zero-padded `YYYY-MM-DD`
    pub fn format(&self) -> String {
        self.0.format("%Y-%m-%d").to_string()
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    pub fn weekday(&self) -> Weekday {
        self.0.weekday()
    }

    /// ISO week number (1-53)
    pub fn iso_week(&self) -> u32 {
        self.0.iso_week().week()
    }

    pub fn as_naive(&self) -> NaiveDate {
        self.0
    }

    /// Shift by a signed number of days, saturating at 0000-01-01 and 9999-12-31
    pub fn add_days(&self, days: i64) -> Self {
        let shifted = Duration::try_days(days).and_then(|d| self.0.checked_add_signed(d));
        match shifted {
            Some(date) => Self::clamped(date),
            None if days < 0 => Self::earliest(),
            None => Self::latest(),
        }
    }

    /// Signed number of days from `other` to `self`
    pub fn days_since(&self, other: CalendarDate) -> i64 {
        (self.0 - other.0).num_days()
    }

    /// Monday on or before this date (Sunday closes its week)
    pub fn start_of_week(&self) -> Self {
        self.add_days(-(self.0.weekday().num_days_from_monday() as i64))
    }

    /// Sunday on or after this date
    pub fn end_of_week(&self) -> Self {
        self.start_of_week().add_days(6)
    }

    pub fn start_of_month(&self) -> Self {
        CalendarDate(self.0.with_day(1).unwrap_or(self.0))
    }

    /// Last day of the month: the day before the first of the following month
    pub fn end_of_month(&self) -> Self {
        let (year, month) = if self.0.month() == 12 {
            (self.0.year() + 1, 1)
        } else {
            (self.0.year(), self.0.month() + 1)
        };

        match NaiveDate::from_ymd_opt(year, month, 1) {
            Some(next_month) => Self::clamped(next_month - Duration::days(1)),
            None => Self::latest(),
        }
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl FromStr for CalendarDate {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self> {
        CalendarDate::parse(s)
    }
}

impl TryFrom<String> for CalendarDate {
    type Error = LedgerError;

    fn try_from(value: String) -> Result<Self> {
        CalendarDate::parse(&value)
    }
}

impl From<CalendarDate> for String {
    fn from(date: CalendarDate) -> Self {
        date.format()
    }
}
