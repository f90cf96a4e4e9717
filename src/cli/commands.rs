//! CLI command definitions

use crate::domain::{EntryKind, PeriodKind, PeriodSelector};
use crate::error::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Parser, Debug)]
#[command(name = "hrledger")]
#[command(about = "Period reports for income, expenses and payroll", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (default: $HRLEDGER_CONFIG or ./hrledger.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Reference day for day/week/month periods (default: today, UTC)
    #[arg(long, global = true, value_name = "YYYY-MM-DD")]
    pub today: Option<String>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Period selection shared by every command
#[derive(Args, Debug, Default, Clone)]
pub struct PeriodArgs {
    /// Period relative to today (day, week, month)
    #[arg(short, long, conflicts_with_all = ["from", "to"])]
    pub period: Option<String>,

    /// Start of a custom range (YYYY-MM-DD)
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub from: Option<String>,

    /// End of a custom range (YYYY-MM-DD)
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub to: Option<String>,
}

impl PeriodArgs {
    /// Turn the flags into a selector, falling back to `default`
    ///
    /// Giving only one of `--from`/`--to` yields a custom selector with the other
    /// side unset.
    pub fn selector(&self, default: PeriodKind) -> Result<PeriodSelector> {
        if self.from.is_some() || self.to.is_some() {
            return Ok(PeriodSelector::custom(
                self.from.clone().unwrap_or_default(),
                self.to.clone().unwrap_or_default(),
            ));
        }

        match &self.period {
            Some(period) => Ok(PeriodKind::from_str(period)?.into()),
            None => Ok(default.into()),
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Income,
    Expense,
    Payroll,
}

impl From<ListKind> for EntryKind {
    fn from(kind: ListKind) -> Self {
        match kind {
            ListKind::Income => EntryKind::Income,
            ListKind::Expense => EntryKind::Expense,
            ListKind::Payroll => EntryKind::Payroll,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the date range a period resolves to
    Range {
        #[command(flatten)]
        period: PeriodArgs,
    },

    /// List the entries of one kind within a period
    List {
        /// Which entries to list
        #[arg(value_enum)]
        kind: ListKind,

        /// Ledger file (TOML)
        #[arg(short, long)]
        ledger: PathBuf,

        #[command(flatten)]
        period: PeriodArgs,

        /// Page number, starting at 1
        #[arg(long, default_value_t = 1)]
        page: usize,

        /// Rows per page (default from config)
        #[arg(long)]
        page_size: Option<usize>,

        /// Oldest entries first
        #[arg(long)]
        oldest_first: bool,
    },

    /// Income, expense and net totals for a period
    Report {
        /// Ledger file (TOML)
        #[arg(short, long)]
        ledger: PathBuf,

        #[command(flatten)]
        period: PeriodArgs,
    },

    /// Net pay per employee for a period
    Payroll {
        /// Ledger file (TOML)
        #[arg(short, long)]
        ledger: PathBuf,

        #[command(flatten)]
        period: PeriodArgs,
    },
}
