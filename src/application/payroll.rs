//! Payroll use case

use crate::domain::{
    filter_by_range, summarize_payroll, CalendarDate, DateRange, PayrollSummary, PeriodSelector,
};
use crate::error::Result;
use crate::infrastructure::Ledger;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PayrollReport {
    pub label: String,
    pub range: Option<DateRange>,
    pub summary: PayrollSummary,
}

/// Service behind the payroll page
pub struct PayrollService<'a> {
    ledger: &'a Ledger,
}

impl<'a> PayrollService<'a> {
    pub fn new(ledger: &'a Ledger) -> Self {
        PayrollService { ledger }
    }

    /// Compute pay for every employee over the selected period
    ///
    /// While the period is unresolved no adjustments apply, so every line shows
    /// the base salary alone.
    pub fn execute(&self, selector: &PeriodSelector, today: CalendarDate) -> Result<PayrollReport> {
        let period = selector.resolve(today)?;
        let adjustments = filter_by_range(&self.ledger.payroll, &period.range)?;

        tracing::debug!(
            period = %period.label,
            adjustments = adjustments.len(),
            employees = self.ledger.employees.len(),
            "payroll adjustments selected"
        );

        Ok(PayrollReport {
            summary: summarize_payroll(&self.ledger.employees, &adjustments)?,
            label: period.label,
            range: period.range.bounds().copied(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Employee, PayrollAdjustment};
    use rust_decimal_macros::dec;

    fn adjustment(id: &str, date: &str, amount: rust_decimal::Decimal) -> PayrollAdjustment {
        PayrollAdjustment {
            employee_id: id.to_string(),
            date: date.to_string(),
            amount,
            reason: "test".to_string(),
        }
    }

    fn ledger() -> Ledger {
        Ledger {
            employees: vec![Employee {
                id: "E001".to_string(),
                name: "Tran Thi B".to_string(),
                base_salary: dec!(12000000),
                position: None,
            }],
            payroll: vec![
                adjustment("E001", "2025-06-16", dec!(1000000)),
                adjustment("E001", "2025-06-22", dec!(-150000)),
                adjustment("E001", "2025-06-23", dec!(-999)),
            ],
            ..Ledger::default()
        }
    }

    #[test]
    fn test_week_payroll() {
        let ledger = ledger();
        let today = CalendarDate::from_ymd(2025, 6, 20).unwrap();
        let report = PayrollService::new(&ledger)
            .execute(&PeriodSelector::Week, today)
            .unwrap();

        let line = &report.summary.lines[0];
        assert_eq!(line.adjustments, 2);
        assert_eq!(line.bonus_total, dec!(1000000));
        assert_eq!(line.deduction_total, dec!(150000));
        assert_eq!(line.net_pay, dec!(12850000));
        assert_eq!(report.summary.net_total, dec!(12850000));
    }

    #[test]
    fn test_unresolved_payroll_uses_base_only() {
        let ledger = ledger();
        let today = CalendarDate::from_ymd(2025, 6, 20).unwrap();
        let report = PayrollService::new(&ledger)
            .execute(&PeriodSelector::custom("2025-06-01", ""), today)
            .unwrap();

        assert!(report.range.is_none());
        assert_eq!(report.summary.lines[0].adjustments, 0);
        assert_eq!(report.summary.lines[0].net_pay, dec!(12000000));
    }
}
