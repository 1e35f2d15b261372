use crate::types::{Category, MonthKey};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Total for [{category}] in [{month}] exceeds the supported amount range")]
    Overflow {
        month: MonthKey,
        category: Category
    }
}
