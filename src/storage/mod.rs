mod errors;
mod record_store;

pub use errors::StoreError;
pub use record_store::RecordStore;

/// File the application reads and writes, relative to the working directory.
pub const DEFAULT_FILE_NAME: &str = "expenses.csv";

/// Column names of the persisted file, in order.
pub const HEADER: [&str; 4] = ["date", "amount", "category", "description"];

/// What `RecordStore::load` does with rows it cannot parse.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub enum LoadPolicy {
    /// The first malformed row fails the whole load.
    #[default]
    Strict,
    /// Malformed rows are logged and dropped.
    SkipMalformed
}
