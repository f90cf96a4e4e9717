//! Error types for hrledger

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for hrledger
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("Invalid date format: {0}")]
    InvalidDateFormat(String),

    #[error("Invalid date range: {start} is after {end}")]
    InvalidRange { start: String, end: String },

    #[error("Invalid period: {0}")]
    InvalidPeriod(String),

    #[error("Amount overflow: {0}")]
    AmountOverflow(String),

    #[error("Invalid page request: {0}")]
    InvalidPage(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Ledger file error in {path}: {message}")]
    LedgerFile { path: PathBuf, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl LedgerError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            LedgerError::LedgerFile { .. } => 2,
            LedgerError::InvalidDateFormat(_)
            | LedgerError::InvalidRange { .. }
            | LedgerError::InvalidPeriod(_) => 3,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            LedgerError::InvalidDateFormat(input) => {
                format!(
                    "Invalid date: '{}'\n\n\
                    Dates must be written as YYYY-MM-DD (e.g., 2025-06-20).\n\n\
                    Examples:\n\
                    hrledger --today 2025-06-20 range --period week\n\
                    hrledger range --from 2025-06-01 --to 2025-06-30",
                    input
                )
            }
            LedgerError::InvalidPeriod(input) => {
                format!(
                    "Invalid period: '{}'\n\n\
                    Valid periods: day, week, month\n\
                    Use --from and --to for a custom range",
                    input
                )
            }
            LedgerError::AmountOverflow(detail) => {
                format!(
                    "Totals are too large to compute: {}\n\n\
                    Check the ledger for mistyped amounts",
                    detail
                )
            }
            LedgerError::InvalidPage(msg) => {
                format!(
                    "{}\n\n\
                    Pages are numbered from 1 and the page size must be at least 1.\n\
                    Example: hrledger list income --ledger ledger.toml --page 2 --page-size 10",
                    msg
                )
            }
            LedgerError::LedgerFile { path, message } => {
                format!(
                    "Could not load ledger {}: {}\n\n\
                    Suggestions:\n\
                    • Check that the file exists and is valid TOML\n\
                    • Entries live in [[income]], [[expense]], [[payroll]] and [[employee]] tables\n\
                    • Dates are strings such as \"2025-06-20\"",
                    path.display(),
                    message
                )
            }
            LedgerError::Config(msg) => {
                if msg.contains("page_size") {
                    format!(
                        "{}\n\n\
                        Example hrledger.toml:\n\
                        page_size = 20",
                        msg
                    )
                } else {
                    format!(
                        "{}\n\n\
                        Set HRLEDGER_CONFIG or pass --config to choose a config file",
                        msg
                    )
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using LedgerError
pub type Result<T> = std::result::Result<T, LedgerError>;
