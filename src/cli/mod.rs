//! CLI layer - Command-line interface

pub mod commands;
pub mod output;

pub use commands::{Cli, Commands, ListKind, PeriodArgs};
pub use output::{format_amount, format_cash_flow, format_listing, format_payroll, format_period};
