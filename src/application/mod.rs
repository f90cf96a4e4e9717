//! Application layer - Use cases and orchestration

pub mod cash_flow;
pub mod list_entries;
pub mod payroll;

pub use cash_flow::{CashFlowReport, CashFlowService};
pub use list_entries::{EntryListing, ListEntriesService, ListOptions, ListedEntry};
pub use payroll::{PayrollReport, PayrollService};
