//! Domain layer - Dates, periods, filtering and aggregation

pub mod aggregate;
pub mod date;
pub mod entry;
pub mod filter;
pub mod listing;
pub mod payroll;
pub mod period;

pub use aggregate::{checked_add, checked_sub, split_sum, sum, AggregationResult, SplitTotals};
pub use date::CalendarDate;
pub use entry::{CashEntry, Employee, EntryKind, PayrollAdjustment};
pub use filter::{filter_by_range, DatedEntry};
pub use listing::{paginate, sort_by_date, Page, SortOrder};
pub use payroll::{summarize_payroll, PayrollLine, PayrollSummary};
pub use period::{DateRange, PeriodKind, PeriodRange, PeriodSelector, ResolvedPeriod};
