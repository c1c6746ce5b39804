//! tally-report: summary statistics, date views, display formatting and CSV export

pub mod export;
pub mod format;
pub mod summary;
pub mod timeline;

pub use export::{export_summary, export_transactions, write_summary, write_transactions};
pub use format::{format_amount, format_number};
pub use summary::Summary;
pub use timeline::{daily_totals, monthly_totals, sort_by_date, Breakdown, DailyTotal, MonthlyTotal};
