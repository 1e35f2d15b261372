use crate::models::{ExpenseInput, ExpenseRecord, Field};
use crate::storage::{LoadPolicy, StoreError, HEADER};
use chrono::{Local, NaiveDate};
use csv::{ReaderBuilder, StringRecord, Terminator, WriterBuilder};
use std::fs::File;
use std::io::{BufReader, ErrorKind};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Ordered, file-backed collection of expense records.
///
/// The store owns the only copy of the records. Every successful append
/// rewrites the whole file, so the file always mirrors memory.
#[derive(Debug)]
pub struct RecordStore {
    path: PathBuf,
    records: Vec<ExpenseRecord>,
    skipped: usize
}

impl RecordStore {
    /// Creates an empty store bound to `path` without touching the filesystem.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            records: Vec::new(),
            skipped: 0
        }
    }

    /// Reads the records persisted at `path`.
    ///
    /// A missing or zero-byte file yields an empty store.
    ///
    /// # Errors
    /// Returns `StoreError` if:
    /// - The file cannot be read.
    /// - The header is not `date,amount,category,description`.
    /// - A row is malformed and `policy` is `LoadPolicy::Strict`.
    pub fn load(path: impl Into<PathBuf>, policy: LoadPolicy) -> Result<Self, StoreError> {
        let mut store = Self::new(path);

        let file = match File::open(&store.path) {
            Ok(file) => file,
            Err(error) if error.kind() == ErrorKind::NotFound => {
                info!("No expense file at {}, starting empty", store.path.display());
                return Ok(store);
            }
            Err(error) => return Err(error.into())
        };

        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .from_reader(BufReader::new(file));

        let headers = reader.headers()?.clone();

        if headers.is_empty() {
            return Ok(store);
        }

        if !headers.iter().eq(HEADER) {
            return Err(StoreError::InvalidHeader {
                found: headers.iter().collect::<Vec<_>>().join(",")
            });
        }

        for result in reader.records() {
            let row = match result {
                Ok(row) => row,
                Err(error) if error.is_io_error() => return Err(error.into()),
                Err(error) => {
                    let line = error.position().map(|position| position.line()).unwrap_or_default();
                    store.reject(policy, StoreError::MalformedRow { line, source: error })?;
                    continue;
                }
            };

            match parse_row(&row, &headers) {
                Ok(record) => store.records.push(record),
                Err(error) => store.reject(policy, error)?
            }
        }

        info!("Loaded {} expense(s) from {}", store.records.len(), store.path.display());

        Ok(store)
    }

    /// Validates `input`, stamps it with today's local date and persists it.
    pub fn append(&mut self, input: ExpenseInput) -> Result<&ExpenseRecord, StoreError> {
        self.append_dated(input, Local::now().date_naive())
    }

    /// Validates `input`, stamps it with `date` and persists it.
    ///
    /// # Errors
    /// Returns `StoreError::Input` without any mutation if validation fails.
    /// If the file cannot be written the record is dropped again and the
    /// write error is returned.
    pub fn append_dated(&mut self, input: ExpenseInput, date: NaiveDate) -> Result<&ExpenseRecord, StoreError> {
        let record = input.validate(date)?;
        self.records.push(record);

        if let Err(error) = self.persist() {
            self.records.pop();
            return Err(error);
        }

        let index = self.records.len() - 1;
        let record = &self.records[index];

        debug!("Appended expense [{}]:[{}]:[{}]", record.date, record.category, record.amount);

        Ok(record)
    }

    /// Overwrites the file with the header and every record in order.
    ///
    /// # Errors
    /// Returns `StoreError::SkippedRowsPending` while rows dropped by a
    /// `LoadPolicy::SkipMalformed` load have not been discarded, since the
    /// rewrite would erase them from disk.
    pub fn persist(&self) -> Result<(), StoreError> {
        if self.skipped > 0 {
            return Err(StoreError::SkippedRowsPending { skipped: self.skipped });
        }

        //NOTE: The file is truncated and rewritten in place, a crash mid-write can leave it partial
        let mut writer = WriterBuilder::new()
            .has_headers(false)
            .terminator(Terminator::Any(b'\n'))
            .from_path(&self.path)?;

        writer.write_record(HEADER)?;

        for record in &self.records {
            writer.serialize(record)?;
        }

        writer.flush()?;

        info!("Persisted {} expense(s) to {}", self.records.len(), self.path.display());

        Ok(())
    }

    pub fn all(&self) -> &[ExpenseRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of rows dropped by a `LoadPolicy::SkipMalformed` load and not yet discarded.
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Accepts that skipped rows will be lost on the next write.
    pub fn discard_skipped(&mut self) {
        if self.skipped > 0 {
            warn!("Discarding {} skipped expense row(s) from {}", self.skipped, self.path.display());
            self.skipped = 0;
        }
    }

    fn reject(&mut self, policy: LoadPolicy, error: StoreError) -> Result<(), StoreError> {
        match policy {
            LoadPolicy::Strict => Err(error),
            LoadPolicy::SkipMalformed => {
                warn!("Skipping expense row: {error}");
                self.skipped += 1;
                Ok(())
            }
        }
    }
}

fn parse_row(row: &StringRecord, headers: &StringRecord) -> Result<ExpenseRecord, StoreError> {
    let line = row.position().map(|position| position.line()).unwrap_or_default();

    let record: ExpenseRecord = row.deserialize(Some(headers))
        .map_err(|source| StoreError::MalformedRow { line, source })?;

    if record.category.trim().is_empty() {
        return Err(StoreError::IncompleteRow { line, field: Field::Category });
    }

    if record.description.trim().is_empty() {
        return Err(StoreError::IncompleteRow { line, field: Field::Description });
    }

    Ok(record)
}
