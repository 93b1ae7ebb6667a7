//! Balance file storage
//!
//! The balance is a single decimal written as text to `balance.txt`.

use std::path::PathBuf;

use tracing::debug;

use crate::error::TallyError;
use crate::models::Money;

use super::file_io::{read_text, write_text_atomic};

/// Store for the running balance
pub struct BalanceStore {
    path: PathBuf,
}

impl BalanceStore {
    /// Create a store backed by the given file
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Read the stored balance, or zero if nothing has been stored yet
    ///
    /// Unparseable contents are reported as corrupt data, never guessed at.
    pub fn read(&self) -> Result<Money, TallyError> {
        let Some(contents) = read_text(&self.path)? else {
            debug!(path = %self.path.display(), "no balance file, starting from zero");
            return Ok(Money::zero());
        };

        Money::parse(&contents).map_err(|e| TallyError::corrupt(&self.path, e.to_string()))
    }

    /// Overwrite the stored balance
    pub fn write(&self, balance: Money) -> Result<(), TallyError> {
        write_text_atomic(&self.path, &balance.canonical())
    }

    /// Path of the backing file
    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use tempfile::TempDir;

    fn store() -> (TempDir, BalanceStore) {
        let temp_dir = TempDir::new().unwrap();
        let store = BalanceStore::new(temp_dir.path().join("balance.txt"));
        (temp_dir, store)
    }

    #[test]
    fn test_missing_file_is_zero() {
        let (_temp, store) = store();
        assert_eq!(store.read().unwrap(), Money::zero());
    }

    #[test]
    fn test_round_trip_is_exact() {
        let (_temp, store) = store();

        for value in [dec!(100.50), dec!(-0.01), dec!(123456789.123456789), dec!(0)] {
            store.write(Money::new(value)).unwrap();
            let read = store.read().unwrap();
            assert_eq!(read.amount(), value);
            assert_eq!(read.canonical(), value.to_string());
        }
    }

    #[test]
    fn test_written_text_is_canonical() {
        let (_temp, store) = store();
        store.write(Money::new(dec!(-50.00))).unwrap();
        assert_eq!(std::fs::read_to_string(store.path()).unwrap(), "-50.00");
    }

    #[test]
    fn test_tolerates_trailing_newline() {
        let (_temp, store) = store();
        std::fs::write(store.path(), "42.10\n").unwrap();
        assert_eq!(store.read().unwrap(), Money::new(dec!(42.10)));
    }

    #[test]
    fn test_corrupt_balance_is_fatal() {
        let (_temp, store) = store();
        std::fs::write(store.path(), "forty two").unwrap();

        let err = store.read().unwrap_err();
        assert!(err.is_corrupt_data());
        assert!(err.to_string().contains("balance.txt"));
    }
}
