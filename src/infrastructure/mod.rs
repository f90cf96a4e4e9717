//! Infrastructure layer - Config, ledger files and logging

pub mod config;
pub mod ledger_file;
pub mod logging;

pub use config::Config;
pub use ledger_file::Ledger;
pub use logging::LoggingConfig;
