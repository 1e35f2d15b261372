use crate::models::{Field, InputError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error("Expense file I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Expense file CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Expense file has an unexpected header [{found}]")]
    InvalidHeader {
        found: String
    },
    #[error("Expense file row on line [{line}] is malformed: {source}")]
    MalformedRow {
        line: u64,
        #[source]
        source: csv::Error
    },
    #[error("Expense file row on line [{line}] has an empty [{field}]")]
    IncompleteRow {
        line: u64,
        field: Field
    },
    #[error("Refusing to rewrite the expense file, [{skipped}] malformed row(s) were skipped on load and would be lost")]
    SkippedRowsPending {
        skipped: usize
    }
}

impl StoreError {
    pub fn is_input(&self) -> bool {
        matches!(self, Self::Input(_))
    }
}
