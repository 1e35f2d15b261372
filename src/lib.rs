//! Expense ledger: a CSV-backed record of expenses with a monthly report.
//!
//! The [`storage::RecordStore`] owns the records and the file they live in,
//! [`report::report`] summarizes them by month and category.

pub mod models;
pub mod report;
pub mod storage;
pub mod types;
