//! List entries use case

use crate::domain::{
    filter_by_range, paginate, sort_by_date, CalendarDate, DateRange, DatedEntry, EntryKind, Page,
    PeriodRange, PeriodSelector, SortOrder,
};
use crate::error::Result;
use crate::infrastructure::Ledger;
use rust_decimal::Decimal;
use serde::Serialize;

/// A listed entry, whatever list it came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListedEntry {
    pub date: String,
    pub amount: Decimal,
    pub description: String,
}

#[derive(Debug, Clone, Copy)]
pub struct ListOptions {
    pub order: SortOrder,
    pub page: usize,
    pub page_size: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryListing {
    pub kind: &'static str,
    pub label: String,
    pub range: Option<DateRange>,
    pub page: Page<ListedEntry>,
}

/// Service behind the income, expense and payroll tables
pub struct ListEntriesService<'a> {
    ledger: &'a Ledger,
}

impl<'a> ListEntriesService<'a> {
    pub fn new(ledger: &'a Ledger) -> Self {
        ListEntriesService { ledger }
    }

    /// Filter one list to the selected period, sort it by date and cut out a page
    pub fn execute(
        &self,
        kind: EntryKind,
        selector: &PeriodSelector,
        today: CalendarDate,
        options: ListOptions,
    ) -> Result<EntryListing> {
        let period = selector.resolve(today)?;

        let rows = match kind {
            EntryKind::Income => listed(&self.ledger.income, &period.range, options.order, |e| {
                describe_cash(&e.description, e.category.as_deref())
            })?,
            EntryKind::Expense => {
                listed(&self.ledger.expense, &period.range, options.order, |e| {
                    describe_cash(&e.description, e.category.as_deref())
                })?
            }
            EntryKind::Payroll => {
                listed(&self.ledger.payroll, &period.range, options.order, |a| {
                    if a.reason.is_empty() {
                        a.employee_id.clone()
                    } else {
                        format!("{}: {}", a.employee_id, a.reason)
                    }
                })?
            }
        };

        tracing::debug!(
            kind = kind.as_str(),
            period = %period.label,
            matched = rows.len(),
            of = self.ledger.count(kind),
            "entries filtered"
        );

        Ok(EntryListing {
            kind: kind.as_str(),
            label: period.label,
            range: period.range.bounds().copied(),
            page: paginate(rows, options.page, options.page_size)?,
        })
    }
}

fn listed<T, F>(
    entries: &[T],
    range: &PeriodRange,
    order: SortOrder,
    describe: F,
) -> Result<Vec<ListedEntry>>
where
    T: DatedEntry,
    F: Fn(&T) -> String,
{
    let matched = sort_by_date(filter_by_range(entries, range)?, order)?;
    Ok(matched
        .into_iter()
        .map(|entry| ListedEntry {
            date: entry.date().to_string(),
            amount: entry.amount(),
            description: describe(entry),
        })
        .collect())
}

fn describe_cash(description: &str, category: Option<&str>) -> String {
    match category {
        Some(category) => format!("{} [{}]", description, category),
        None => description.to_string(),
    }
}
