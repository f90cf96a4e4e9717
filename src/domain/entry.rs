//! Ledger records supplied by the data-access layer

use crate::domain::filter::DatedEntry;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// An income or expense line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CashEntry {
    pub date: String,
    pub amount: Decimal,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl CashEntry {
    pub fn new(date: impl Into<String>, amount: Decimal, description: impl Into<String>) -> Self {
        CashEntry {
            date: date.into(),
            amount,
            description: description.into(),
            category: None,
        }
    }
}

impl DatedEntry for CashEntry {
    fn date(&self) -> &str {
        &self.date
    }

    fn amount(&self) -> Decimal {
        self.amount
    }
}

/// A bonus (positive) or deduction (negative) applied to one employee's pay
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayrollAdjustment {
    pub employee_id: String,
    pub date: String,
    pub amount: Decimal,
    #[serde(default)]
    pub reason: String,
}

impl DatedEntry for PayrollAdjustment {
    fn date(&self) -> &str {
        &self.date
    }

    fn amount(&self) -> Decimal {
        self.amount
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: String,
    pub name: String,
    pub base_salary: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
}

/// Which list of a ledger to work on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Income,
    Expense,
    Payroll,
}

impl EntryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryKind::Income => "income",
            EntryKind::Expense => "expense",
            EntryKind::Payroll => "payroll",
        }
    }
}
