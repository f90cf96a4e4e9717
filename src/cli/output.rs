//! Output formatting utilities

use crate::application::{CashFlowReport, EntryListing, PayrollReport};
use crate::domain::{DateRange, ResolvedPeriod};
use rust_decimal::Decimal;

/// Group the integer digits of an amount and append the currency
pub fn format_amount(amount: Decimal, currency: &str) -> String {
    let text = amount.round_dp(2).normalize().to_string();
    let (sign, digits) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text.as_str()),
    };
    let (whole, fraction) = match digits.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (digits, None),
    };

    let mut grouped = String::new();
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let mut out = format!("{}{}", sign, grouped);
    if let Some(fraction) = fraction {
        out.push('.');
        out.push_str(fraction);
    }
    if !currency.is_empty() {
        out.push(' ');
        out.push_str(currency);
    }
    out
}

fn format_bounds(range: Option<&DateRange>) -> String {
    match range {
        Some(range) => format!("{} .. {}", range.start(), range.end()),
        None => "(no range)".to_string(),
    }
}

/// Format a resolved period
pub fn format_period(period: &ResolvedPeriod) -> String {
    format!(
        "Period: {}\nRange:  {}\n",
        period.label,
        format_bounds(period.range.bounds())
    )
}

/// Format an income/expense report
pub fn format_cash_flow(report: &CashFlowReport, currency: &str) -> String {
    let mut output = format!(
        "Period: {}\nRange:  {}\n\n",
        report.label,
        format_bounds(report.range.as_ref())
    );
    output.push_str(&format!(
        "Income   {:>4} entries  {}\n",
        report.income.count,
        format_amount(report.income.total, currency)
    ));
    output.push_str(&format!(
        "Expense  {:>4} entries  {}\n",
        report.expense.count,
        format_amount(report.expense.total, currency)
    ));
    output.push_str(&format!("Net                    {}\n", format_amount(report.net, currency)));
    output
}

/// Format a payroll report, one line per employee
pub fn format_payroll(report: &PayrollReport, currency: &str) -> String {
    let mut output = format!(
        "Period: {}\nRange:  {}\n\n",
        report.label,
        format_bounds(report.range.as_ref())
    );

    if report.summary.lines.is_empty() {
        output.push_str("No employees found\n");
        return output;
    }

    for line in &report.summary.lines {
        output.push_str(&format!(
            "{}  {}\n    base {}  bonus {}  deduction {}  net {}\n",
            line.employee_id,
            line.name,
            format_amount(line.base_salary, currency),
            format_amount(line.bonus_total, currency),
            format_amount(line.deduction_total, currency),
            format_amount(line.net_pay, currency),
        ));
    }

    let summary = &report.summary;
    output.push_str(&format!(
        "\nTotal  base {}  bonus {}  deduction {}  net {}\n",
        format_amount(summary.base_total, currency),
        format_amount(summary.bonus_total, currency),
        format_amount(summary.deduction_total, currency),
        format_amount(summary.net_total, currency),
    ));
    output
}

/// Format one page of listed entries
pub fn format_listing(listing: &EntryListing, currency: &str) -> String {
    let mut output = format!("Period: {}\n", listing.label);

    if listing.range.is_none() {
        output.push_str("No period selected\n");
        return output;
    }
    if listing.page.items.is_empty() {
        output.push_str(&format!("No {} entries found\n", listing.kind));
        return output;
    }

    for entry in &listing.page.items {
        output.push_str(&format!(
            "{}  {:>20}  {}\n",
            entry.date,
            format_amount(entry.amount, currency),
            entry.description
        ));
    }
    output.push_str(&format!(
        "Page {}/{} ({} entries)\n",
        listing.page.page, listing.page.total_pages, listing.page.total_items
    ));
    output
}
