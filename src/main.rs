use clap::Parser;
use hrledger::application::{CashFlowService, ListEntriesService, ListOptions, PayrollService};
use hrledger::cli::{
    format_cash_flow, format_listing, format_payroll, format_period, Cli, Commands,
};
use hrledger::domain::{CalendarDate, SortOrder};
use hrledger::error::Result;
use hrledger::infrastructure::{Config, Ledger};
use serde::Serialize;

fn main() {
    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let config = Config::load(cli.config.as_deref(), &cwd)?;
    config.logging.init();

    let today = match &cli.today {
        Some(value) => CalendarDate::parse(value)?,
        None => CalendarDate::today(),
    };
    tracing::debug!(%today, currency = %config.currency, "starting");

    match cli.command {
        Commands::Range { period } => {
            let resolved = period.selector(config.default_period)?.resolve(today)?;
            if cli.json {
                print_json(&serde_json::json!({
                    "label": resolved.label,
                    "range": resolved.range.bounds(),
                }))
            } else {
                print!("{}", format_period(&resolved));
                Ok(())
            }
        }
        Commands::List {
            kind,
            ledger,
            period,
            page,
            page_size,
            oldest_first,
        } => {
            let selector = period.selector(config.default_period)?;
            let ledger = Ledger::load(&ledger)?;
            let options = ListOptions {
                order: if oldest_first {
                    SortOrder::OldestFirst
                } else {
                    SortOrder::NewestFirst
                },
                page,
                page_size: page_size.unwrap_or(config.page_size),
            };

            let listing =
                ListEntriesService::new(&ledger).execute(kind.into(), &selector, today, options)?;
            if cli.json {
                print_json(&listing)
            } else {
                print!("{}", format_listing(&listing, &config.currency));
                Ok(())
            }
        }
        Commands::Report { ledger, period } => {
            let selector = period.selector(config.default_period)?;
            let ledger = Ledger::load(&ledger)?;

            let report = CashFlowService::new(&ledger).execute(&selector, today)?;
            if cli.json {
                print_json(&report)
            } else {
                print!("{}", format_cash_flow(&report, &config.currency));
                Ok(())
            }
        }
        Commands::Payroll { ledger, period } => {
            let selector = period.selector(config.default_period)?;
            let ledger = Ledger::load(&ledger)?;

            let report = PayrollService::new(&ledger).execute(&selector, today)?;
            if cli.json {
                print_json(&report)
            } else {
                print!("{}", format_payroll(&report, &config.currency));
                Ok(())
            }
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let text = serde_json::to_string_pretty(value)?;
    println!("{}", text);
    Ok(())
}
