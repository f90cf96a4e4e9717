//! End-to-end period scenarios over the library API

use chrono::Weekday;
use hrledger::domain::{
    filter_by_range, split_sum, sum, CalendarDate, CashEntry, DateRange, PeriodRange,
    PeriodSelector, SplitTotals,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn date(s: &str) -> CalendarDate {
    CalendarDate::parse(s).unwrap()
}

fn june_income() -> Vec<CashEntry> {
    vec![
        CashEntry::new("2025-06-20", dec!(1000000), "A"),
        CashEntry::new("2025-06-18", dec!(50000), "B"),
        CashEntry::new("2025-06-15", dec!(120000), "C"),
        CashEntry::new("2025-06-22", dec!(25000), "D"),
        CashEntry::new("2025-06-05", dec!(75000), "E"),
    ]
}

#[test]
fn test_month_scenario() {
    let resolved = PeriodSelector::Month.resolve(date("2025-06-20")).unwrap();
    let bounds = resolved.range.bounds().unwrap();
    assert_eq!(bounds.start(), date("2025-06-01"));
    assert_eq!(bounds.end(), date("2025-06-30"));

    let income = june_income();
    let matched = filter_by_range(&income, &resolved.range).unwrap();
    assert_eq!(matched.len(), 5);
    assert_eq!(sum(matched, |e: &CashEntry| e.amount).unwrap(), dec!(1270000));
}

#[test]
fn test_week_scenario_drops_outside_days() {
    // June 20, 2025 is a Friday; its week runs June 16-22
    let resolved = PeriodSelector::Week.resolve(date("2025-06-20")).unwrap();
    let income = june_income();
    let matched = filter_by_range(&income, &resolved.range).unwrap();

    let names: Vec<&str> = matched.iter().map(|e| e.description.as_str()).collect();
    assert_eq!(names, vec!["A", "B", "D"]);
    assert_eq!(sum(matched, |e: &CashEntry| e.amount).unwrap(), dec!(1075000));
}

#[test]
fn test_day_scenario() {
    let resolved = PeriodSelector::Day.resolve(date("2025-06-18")).unwrap();
    let income = june_income();
    let matched = filter_by_range(&income, &resolved.range).unwrap();
    assert_eq!(matched.len(), 1);
    assert_eq!(matched[0].description, "B");
}

#[test]
fn test_incomplete_custom_scenario() {
    let resolved = PeriodSelector::custom("", "2025-06-30")
        .resolve(date("2025-06-20"))
        .unwrap();
    assert_eq!(resolved.range, PeriodRange::Unresolved);

    let income = june_income();
    assert!(filter_by_range(&income, &resolved.range).unwrap().is_empty());
}

#[test]
fn test_custom_range_first_half() {
    let entries = vec![
        CashEntry::new("2025-06-01", dec!(1), "first"),
        CashEntry::new("2025-06-15", dec!(2), "middle"),
        CashEntry::new("2025-06-30", dec!(3), "last"),
    ];
    let range = PeriodRange::Bounded(
        DateRange::new(date("2025-06-01"), date("2025-06-15")).unwrap(),
    );
    let matched = filter_by_range(&entries, &range).unwrap();
    let names: Vec<&str> = matched.iter().map(|e| e.description.as_str()).collect();
    assert_eq!(names, vec!["first", "middle"]);
}

#[test]
fn test_empty_entries_any_range() {
    let empty: Vec<CashEntry> = Vec::new();
    let range = PeriodSelector::Month.resolve(date("2025-06-20")).unwrap().range;
    assert!(filter_by_range(&empty, &range).unwrap().is_empty());
    assert_eq!(sum(&empty, |e: &CashEntry| e.amount).unwrap(), Decimal::ZERO);
}

#[test]
fn test_bonus_deduction_split() {
    let lines = vec![
        CashEntry::new("2025-06-01", dec!(100), "bonus"),
        CashEntry::new("2025-06-02", dec!(-30), "deduction"),
        CashEntry::new("2025-06-03", dec!(0), "nothing"),
    ];
    assert_eq!(sum(&lines, |e: &CashEntry| e.amount).unwrap(), dec!(70));
    assert_eq!(
        split_sum(&lines, |e: &CashEntry| e.amount).unwrap(),
        SplitTotals {
            positive_total: dec!(100),
            negative_total_absolute: dec!(30),
        }
    );
}

#[test]
fn test_boundaries_hold_for_every_day_of_two_years() {
    let mut d = date("2023-01-01");
    while d <= date("2024-12-31") {
        assert_eq!(CalendarDate::parse(&d.format()).unwrap(), d);

        let (ws, we) = (d.start_of_week(), d.end_of_week());
        assert!(ws <= d && d <= we);
        assert_eq!(we.days_since(ws), 6);
        assert_eq!(ws.weekday(), Weekday::Mon);

        let (ms, me) = (d.start_of_month(), d.end_of_month());
        assert_eq!(ms.day(), 1);
        assert_eq!(ms.month(), d.month());
        assert_eq!(me.month(), d.month());
        assert_ne!(me.add_days(1).month(), d.month());

        d = d.add_days(1);
    }
}

#[test]
fn test_month_ends() {
    assert_eq!(date("2024-02-10").end_of_month(), date("2024-02-29"));
    assert_eq!(date("2023-02-10").end_of_month(), date("2023-02-28"));
    assert_eq!(date("2025-09-10").end_of_month(), date("2025-09-30"));
    assert_eq!(date("2025-10-10").end_of_month(), date("2025-10-31"));
}
