mod aggregator;
mod errors;

pub use aggregator::{month_key, report, MonthTotals, MonthlyReport};
pub use errors::ReportError;
