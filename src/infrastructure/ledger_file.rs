//! Loading ledger data from TOML files

use crate::domain::{CashEntry, Employee, EntryKind, PayrollAdjustment};
use crate::error::{LedgerError, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Everything the reports work on, as supplied by the caller
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Ledger {
    #[serde(default, rename = "employee")]
    pub employees: Vec<Employee>,
    #[serde(default)]
    pub income: Vec<CashEntry>,
    #[serde(default)]
    pub expense: Vec<CashEntry>,
    #[serde(default)]
    pub payroll: Vec<PayrollAdjustment>,
}

impl Ledger {
    /// Parse a ledger from TOML text
    pub fn from_toml(contents: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    /// Read a ledger file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| LedgerError::LedgerFile {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let ledger = Self::from_toml(&contents).map_err(|e| LedgerError::LedgerFile {
            path: path.to_path_buf(),
            message: e.message().to_string(),
        })?;

        if ledger.is_empty() {
            tracing::warn!(path = %path.display(), "ledger contains no entries");
        } else {
            tracing::info!(
                path = %path.display(),
                employees = ledger.employees.len(),
                income = ledger.income.len(),
                expense = ledger.expense.len(),
                payroll = ledger.payroll.len(),
                "loaded ledger"
            );
        }

        Ok(ledger)
    }

    pub fn is_empty(&self) -> bool {
        self.income.is_empty() && self.expense.is_empty() && self.payroll.is_empty()
    }

    /// Number of entries of one kind
    pub fn count(&self, kind: EntryKind) -> usize {
        match kind {
            EntryKind::Income => self.income.len(),
            EntryKind::Expense => self.expense.len(),
            EntryKind::Payroll => self.payroll.len(),
        }
    }
}
