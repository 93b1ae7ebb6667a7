//! Transaction log storage
//!
//! Transactions are appended to `transactions.csv`, one row each, under a
//! `date,amount,description,category` header. Rows are read back by header
//! name, and appended rows follow whatever column order the file already
//! uses.

use std::fs::{File, OpenOptions};
use std::io::{self, ErrorKind, Read, Seek, SeekFrom, Write};
use std::path::PathBuf;

use csv::StringRecord;

use tracing::debug;

use crate::error::TallyError;
use crate::models::Transaction;

/// Column names of the transaction log, in write order
pub const FIELDNAMES: [&str; 4] = ["date", "amount", "description", "category"];

/// Append-only store for the transaction log
pub struct TransactionLog {
    path: PathBuf,
}

impl TransactionLog {
    /// Create a log backed by the given file
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Read every transaction in file order
    ///
    /// A missing file is an empty log. A missing column or an unparseable
    /// row is reported as corrupt data.
    pub fn read_all(&self) -> Result<Vec<Transaction>, TallyError> {
        let Some(file) = self.open_existing()? else {
            return Ok(Vec::new());
        };

        let mut reader = csv::Reader::from_reader(file);
        if self.checked_header(&mut reader)?.is_none() {
            return Ok(Vec::new());
        }

        let transactions = reader
            .deserialize::<Transaction>()
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| TallyError::corrupt(&self.path, e.to_string()))?;

        debug!(count = transactions.len(), "loaded transaction log");
        Ok(transactions)
    }

    /// Append one transaction
    ///
    /// The row follows the column order of the existing header. A log with
    /// no header yet gets the standard one first. A log whose header is
    /// missing a column is left untouched and reported as corrupt.
    pub fn append(&self, transaction: &Transaction) -> Result<(), TallyError> {
        let existing = match self.open_existing()? {
            Some(file) => self.checked_header(&mut csv::Reader::from_reader(file))?,
            None => None,
        };

        let mut file = OpenOptions::new()
            .create(true)
            .read(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| {
                TallyError::Storage(format!("Failed to open {}: {}", self.path.display(), e))
            })?;

        if !ends_with_newline(&mut file)
            .map_err(|e| TallyError::Storage(format!("Failed to inspect log: {}", e)))?
        {
            file.write_all(b"\n")
                .map_err(|e| TallyError::Storage(format!("Failed to write transaction: {}", e)))?;
        }

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);

        let columns = match existing {
            Some(header) => header,
            None => {
                let header = StringRecord::from(FIELDNAMES.to_vec());
                writer
                    .write_record(&header)
                    .map_err(|e| TallyError::Storage(format!("Failed to write header: {}", e)))?;
                header
            }
        };

        let row: Vec<String> = columns
            .iter()
            .map(|column| column_value(transaction, column))
            .collect();
        writer
            .write_record(&row)
            .map_err(|e| TallyError::Storage(format!("Failed to write transaction: {}", e)))?;
        writer
            .flush()
            .map_err(|e| TallyError::Storage(format!("Failed to flush transaction log: {}", e)))?;

        Ok(())
    }

    fn open_existing(&self) -> Result<Option<File>, TallyError> {
        match File::open(&self.path) {
            Ok(file) => Ok(Some(file)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(TallyError::Storage(format!(
                "Failed to open {}: {}",
                self.path.display(),
                e
            ))),
        }
    }

    /// Header of the log, or `None` if the file has no header line yet
    fn checked_header<R: Read>(
        &self,
        reader: &mut csv::Reader<R>,
    ) -> Result<Option<StringRecord>, TallyError> {
        let headers = reader
            .headers()
            .map_err(|e| TallyError::corrupt(&self.path, e.to_string()))?
            .clone();
        if headers.is_empty() {
            return Ok(None);
        }
        if let Some(missing) = FIELDNAMES.iter().find(|f| !headers.iter().any(|h| h == **f)) {
            return Err(TallyError::corrupt(
                &self.path,
                format!("header is missing the '{}' column", missing),
            ));
        }
        Ok(Some(headers))
    }

    /// Path of the backing file
    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

fn column_value(transaction: &Transaction, column: &str) -> String {
    match column {
        "date" => transaction.date_text(),
        "amount" => transaction.amount.canonical(),
        "description" => transaction.description.clone(),
        "category" => transaction.category.clone(),
        _ => String::new(),
    }
}

fn ends_with_newline(file: &mut File) -> io::Result<bool> {
    if file.metadata()?.len() == 0 {
        return Ok(true);
    }
    file.seek(SeekFrom::End(-1))?;
    let mut last = [0u8; 1];
    file.read_exact(&mut last)?;
    Ok(last[0] == b'\n')
}
