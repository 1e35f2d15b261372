mod amount;
mod errors;
#[cfg(test)]
mod tests;

pub use amount::Amount;
pub use errors::AmountError;

/// `YYYY-MM` grouping key used by the monthly report.
pub type MonthKey = String;
pub type Category = String;
