//! hrledger - Period filtering and aggregation for HR administration
//!
//! Resolves day/week/month/custom periods against an injected reference day,
//! filters dated income, expense and payroll entries to that period and
//! aggregates them into totals, bonus/deduction splits and net pay.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::LedgerError;
