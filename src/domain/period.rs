//! Period selection and resolution

use crate::domain::date::CalendarDate;
use crate::error::{LedgerError, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Inclusive range of calendar days with `start <= end`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateRange {
    start: CalendarDate,
    end: CalendarDate,
}

impl DateRange {
    /// Create a range, rejecting an end that precedes the start
    pub fn new(start: CalendarDate, end: CalendarDate) -> Result<Self> {
        if start > end {
            return Err(LedgerError::InvalidRange {
                start: start.format(),
                end: end.format(),
            });
        }
        Ok(DateRange { start, end })
    }

    pub fn start(&self) -> CalendarDate {
        self.start
    }

    pub fn end(&self) -> CalendarDate {
        self.end
    }

    pub fn contains(&self, date: CalendarDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Number of days covered, both ends included
    pub fn len_days(&self) -> i64 {
        self.end.days_since(self.start) + 1
    }
}

/// Boundaries produced by resolving a period
///
/// `Unresolved` is a normal outcome, not an error: it means the user has not
/// finished choosing a period and nothing should be shown yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeriodRange {
    Bounded(DateRange),
    Unresolved,
}

impl PeriodRange {
    pub fn is_resolved(&self) -> bool {
        matches!(self, PeriodRange::Bounded(_))
    }

    pub fn bounds(&self) -> Option<&DateRange> {
        match self {
            PeriodRange::Bounded(range) => Some(range),
            PeriodRange::Unresolved => None,
        }
    }
}

impl From<DateRange> for PeriodRange {
    fn from(range: DateRange) -> Self {
        PeriodRange::Bounded(range)
    }
}

/// A resolved period together with its display label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPeriod {
    pub range: PeriodRange,
    pub label: String,
}

/// Named periods relative to today
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PeriodKind {
    Day,
    Week,
    #[default]
    Month,
}

impl FromStr for PeriodKind {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "day" => Ok(PeriodKind::Day),
            "week" => Ok(PeriodKind::Week),
            "month" => Ok(PeriodKind::Month),
            _ => Err(LedgerError::InvalidPeriod(s.to_string())),
        }
    }
}

/// The period a user has picked
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PeriodSelector {
    /// Today only
    Day,
    /// Monday through Sunday of the current week
    Week,
    /// First through last day of the current month
    Month,
    /// Explicit `YYYY-MM-DD` bounds; an empty string means "not chosen yet"
    Custom { start: String, end: String },
}

const UNSET_LABEL: &str = "Select a start and end date";

impl PeriodSelector {
    pub fn custom(start: impl Into<String>, end: impl Into<String>) -> Self {
        PeriodSelector::Custom {
            start: start.into(),
            end: end.into(),
        }
    }

    /// Resolve this selector against the given reference day
    ///
    /// # Errors
    ///
    /// Returns `InvalidDateFormat` when a non-empty custom bound cannot be parsed.
    /// An incomplete or inverted custom range resolves to `PeriodRange::Unresolved`.
    pub fn resolve(&self, today: CalendarDate) -> Result<ResolvedPeriod> {
        match self {
            PeriodSelector::Day => {
                let range = DateRange {
                    start: today,
                    end: today,
                };
                Ok(bounded(range, today.format()))
            }
            PeriodSelector::Week => {
                let range = DateRange {
                    start: today.start_of_week(),
                    end: today.end_of_week(),
                };
                let label = format!(
                    "Week {}: {} to {}",
                    range.start.iso_week(),
                    range.start,
                    range.end
                );
                Ok(bounded(range, label))
            }
            PeriodSelector::Month => {
                let range = DateRange {
                    start: today.start_of_month(),
                    end: today.end_of_month(),
                };
                let label = today.as_naive().format("%B %Y").to_string();
                Ok(bounded(range, label))
            }
            PeriodSelector::Custom { start, end } => {
                if start.trim().is_empty() || end.trim().is_empty() {
                    return Ok(ResolvedPeriod {
                        range: PeriodRange::Unresolved,
                        label: UNSET_LABEL.to_string(),
                    });
                }

                let start = CalendarDate::parse(start)?;
                let end = CalendarDate::parse(end)?;

                match DateRange::new(start, end) {
                    Ok(range) => Ok(bounded(range, format!("{} to {}", start, end))),
                    Err(_) => Ok(ResolvedPeriod {
                        range: PeriodRange::Unresolved,
                        label: format!("Start date {} is after end date {}", start, end),
                    }),
                }
            }
        }
    }
}

fn bounded(range: DateRange, label: String) -> ResolvedPeriod {
    ResolvedPeriod {
        range: PeriodRange::Bounded(range),
        label,
    }
}

impl From<PeriodKind> for PeriodSelector {
    fn from(kind: PeriodKind) -> Self {
        match kind {
            PeriodKind::Day => PeriodSelector::Day,
            PeriodKind::Week => PeriodSelector::Week,
            PeriodKind::Month => PeriodSelector::Month,
        }
    }
}
