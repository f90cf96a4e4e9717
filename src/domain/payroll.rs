//! Net pay per employee

use crate::domain::aggregate::{checked_add, checked_sub, AggregationResult};
use crate::domain::entry::{Employee, PayrollAdjustment};
use crate::error::Result;
use rust_decimal::Decimal;
use serde::Serialize;

/// Pay for one employee over a period
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PayrollLine {
    pub employee_id: String,
    pub name: String,
    pub base_salary: Decimal,
    pub adjustments: usize,
    pub bonus_total: Decimal,
    pub deduction_total: Decimal,
    pub net_pay: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct PayrollSummary {
    pub lines: Vec<PayrollLine>,
    pub base_total: Decimal,
    pub bonus_total: Decimal,
    pub deduction_total: Decimal,
    pub net_total: Decimal,
}

/// Combine base salaries with the adjustments of a period
///
/// Lines follow the employee order. Adjustments for ids not on the roster get
/// their own line, named after the id, with a zero base salary.
///
/// # Errors
///
/// Returns `AmountOverflow` when a line or a total leaves the representable range.
pub fn summarize_payroll(
    employees: &[Employee],
    adjustments: &[&PayrollAdjustment],
) -> Result<PayrollSummary> {
    let mut roster: Vec<(String, String, Decimal)> = employees
        .iter()
        .map(|e| (e.id.clone(), e.name.clone(), e.base_salary))
        .collect();

    for adjustment in adjustments {
        if !roster.iter().any(|(id, _, _)| *id == adjustment.employee_id) {
            roster.push((
                adjustment.employee_id.clone(),
                adjustment.employee_id.clone(),
                Decimal::ZERO,
            ));
        }
    }

    let mut summary = PayrollSummary::default();
    for (id, name, base_salary) in roster {
        let own = adjustments
            .iter()
            .copied()
            .filter(|a| a.employee_id == id);
        let totals = AggregationResult::with_split(own, |a: &PayrollAdjustment| a.amount)?;
        let gross = checked_add(base_salary, totals.bonus_total())?;

        let line = PayrollLine {
            employee_id: id,
            name,
            base_salary,
            adjustments: totals.count,
            bonus_total: totals.bonus_total(),
            deduction_total: totals.deduction_total(),
            net_pay: checked_sub(gross, totals.deduction_total())?,
        };

        summary.base_total = checked_add(summary.base_total, line.base_salary)?;
        summary.bonus_total = checked_add(summary.bonus_total, line.bonus_total)?;
        summary.deduction_total = checked_add(summary.deduction_total, line.deduction_total)?;
        summary.net_total = checked_add(summary.net_total, line.net_pay)?;
        summary.lines.push(line);
    }
    Ok(summary)
}
