//! Date-range filtering over dated entries

use crate::domain::date::CalendarDate;
use crate::domain::period::PeriodRange;
use crate::error::Result;
use rust_decimal::Decimal;

/// A record carrying a `YYYY-MM-DD` date and a signed amount
pub trait DatedEntry {
    /// Date in canonical string form
    fn date(&self) -> &str;

    /// Signed amount
    fn amount(&self) -> Decimal;

    /// Parsed date
    fn calendar_date(&self) -> Result<CalendarDate> {
        CalendarDate::parse(self.date())
    }
}

impl<T: DatedEntry + ?Sized> DatedEntry for &T {
    fn date(&self) -> &str {
        (**self).date()
    }

    fn amount(&self) -> Decimal {
        (**self).amount()
    }
}

/// Keep the entries whose date lies within `range`, in input order
///
/// Dates are compared as calendar days, not as strings. An unresolved range
/// matches nothing.
///
/// # Errors
///
/// Returns `InvalidDateFormat` for the first entry whose date cannot be parsed.
pub fn filter_by_range<'a, T: DatedEntry>(
    entries: &'a [T],
    range: &PeriodRange,
) -> Result<Vec<&'a T>> {
    let bounds = match range.bounds() {
        Some(bounds) => bounds,
        None => return Ok(Vec::new()),
    };

    let mut matched = Vec::new();
    for entry in entries {
        if bounds.contains(entry.calendar_date()?) {
            matched.push(entry);
        }
    }
    Ok(matched)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::period::DateRange;
    use crate::error::LedgerError;
    use rust_decimal_macros::dec;

    #[derive(Debug)]
    struct Row {
        date: &'static str,
        amount: Decimal,
    }

    impl DatedEntry for Row {
        fn date(&self) -> &str {
            self.date
        }

        fn amount(&self) -> Decimal {
            self.amount
        }
    }

    fn row(date: &'static str) -> Row {
        Row {
            date,
            amount: dec!(1),
        }
    }

    fn range(start: &str, end: &str) -> PeriodRange {
        PeriodRange::Bounded(
            DateRange::new(
                CalendarDate::parse(start).unwrap(),
                CalendarDate::parse(end).unwrap(),
            )
            .unwrap(),
        )
    }

    #[test]
    fn test_empty_input() {
        let rows: Vec<Row> = Vec::new();
        assert!(filter_by_range(&rows, &range("2025-01-01", "2025-12-31"))
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_unresolved_matches_nothing() {
        let rows = vec![row("2025-06-01"), row("2025-06-02")];
        assert!(filter_by_range(&rows, &PeriodRange::Unresolved)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_unresolved_skips_parsing() {
        let rows = vec![row("not a date")];
        assert!(filter_by_range(&rows, &PeriodRange::Unresolved)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_inclusive_bounds_keep_order() {
        let rows = vec![row("2025-06-01"), row("2025-06-15"), row("2025-06-30")];
        let matched = filter_by_range(&rows, &range("2025-06-01", "2025-06-15")).unwrap();
        let dates: Vec<&str> = matched.iter().map(|r| r.date).collect();
        assert_eq!(dates, vec!["2025-06-01", "2025-06-15"]);
    }

    #[test]
    fn test_order_is_input_order_not_date_order() {
        let rows = vec![row("2025-06-20"), row("2025-06-05"), row("2025-06-18")];
        let matched = filter_by_range(&rows, &range("2025-06-01", "2025-06-30")).unwrap();
        let dates: Vec<&str> = matched.iter().map(|r| r.date).collect();
        assert_eq!(dates, vec!["2025-06-20", "2025-06-05", "2025-06-18"]);
    }

    #[test]
    fn test_unpadded_dates_compare_as_dates() {
        // "2025-6-9" sorts after "2025-06-30" as a string
        let rows = vec![row("2025-6-9"), row("2025-7-1")];
        let matched = filter_by_range(&rows, &range("2025-06-01", "2025-06-30")).unwrap();
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].date, "2025-6-9");
    }

    #[test]
    fn test_invalid_entry_date_propagates() {
        let rows = vec![row("2025-06-01"), row("06/02/2025")];
        let err = filter_by_range(&rows, &range("2025-06-01", "2025-06-30")).unwrap_err();
        assert!(matches!(err, LedgerError::InvalidDateFormat(ref s) if s == "06/02/2025"));
    }

    #[test]
    fn test_input_untouched() {
        let rows = vec![row("2025-05-31"), row("2025-06-01")];
        let matched = filter_by_range(&rows, &range("2025-06-01", "2025-06-30")).unwrap();
        assert_eq!(matched.len(), 1);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].date, "2025-05-31");
    }
}
