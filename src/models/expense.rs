use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::types::{Amount, Category};

/// A single accepted expense, as stored in memory and on disk.
///
/// Field order matches the columns of the persisted file, which lets the csv
/// serializer write rows without any per-field mapping.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    /// Local calendar date the expense was entered on.
    pub date: NaiveDate,
    pub amount: Amount,
    pub category: Category,
    pub description: String
}
