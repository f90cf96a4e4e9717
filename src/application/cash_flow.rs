//! Income/expense report use case

use crate::domain::{
    checked_sub, filter_by_range, AggregationResult, CalendarDate, CashEntry, DateRange,
    PeriodSelector,
};
use crate::error::Result;
use crate::infrastructure::Ledger;
use rust_decimal::Decimal;
use serde::Serialize;

/// Income, expense and net over one period
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CashFlowReport {
    pub label: String,
    /// `None` while the period is unresolved
    pub range: Option<DateRange>,
    pub income: AggregationResult,
    pub expense: AggregationResult,
    pub net: Decimal,
}

/// Service behind the reports page
pub struct CashFlowService<'a> {
    ledger: &'a Ledger,
}

impl<'a> CashFlowService<'a> {
    pub fn new(ledger: &'a Ledger) -> Self {
        CashFlowService { ledger }
    }

    /// Summarize income and expense for the selected period
    ///
    /// # Errors
    ///
    /// Returns `InvalidDateFormat` if the selector or any entry carries a bad date,
    /// and `AmountOverflow` if a total leaves the representable range.
    pub fn execute(&self, selector: &PeriodSelector, today: CalendarDate) -> Result<CashFlowReport> {
        let period = selector.resolve(today)?;

        let income = filter_by_range(&self.ledger.income, &period.range)?;
        let expense = filter_by_range(&self.ledger.expense, &period.range)?;

        let income = AggregationResult::totals(income, |e: &CashEntry| e.amount)?;
        let expense = AggregationResult::totals(expense, |e: &CashEntry| e.amount)?;
        let net = checked_sub(income.total, expense.total)?;

        tracing::debug!(
            period = %period.label,
            income = income.count,
            expense = expense.count,
            "cash flow aggregated"
        );

        Ok(CashFlowReport {
            label: period.label,
            range: period.range.bounds().copied(),
            net,
            income,
            expense,
        })
    }
}
