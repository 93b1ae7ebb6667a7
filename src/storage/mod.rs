//! Storage layer for Tally
//!
//! Flat-file persistence for the balance scalar and the transaction log,
//! plus the audit trail of every write. Files are re-read on every call;
//! nothing is cached between calls.

pub mod balance;
pub mod file_io;
pub mod transactions;

pub use balance::BalanceStore;
pub use file_io::{read_text, write_json_atomic, write_text_atomic};
pub use transactions::{TransactionLog, FIELDNAMES};

use serde::Serialize;
use tracing::info;

use crate::audit::{generate_diff, AuditEntry, AuditLogger, EntityType};
use crate::config::paths::TallyPaths;
use crate::error::TallyError;
use crate::models::{Money, Transaction};

/// Main storage coordinator
pub struct Storage {
    paths: TallyPaths,
    pub balance: BalanceStore,
    pub transactions: TransactionLog,
    pub audit: AuditLogger,
}

impl Storage {
    /// Create a new Storage instance rooted at the given paths
    pub fn new(paths: TallyPaths) -> Result<Self, TallyError> {
        paths.ensure_directories()?;

        Ok(Self {
            balance: BalanceStore::new(paths.balance_file()),
            transactions: TransactionLog::new(paths.transactions_file()),
            audit: AuditLogger::new(paths.audit_log()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &TallyPaths {
        &self.paths
    }

    /// Current balance, zero on first run
    pub fn read_balance(&self) -> Result<Money, TallyError> {
        self.balance.read()
    }

    /// Overwrite the stored balance
    pub fn write_balance(&self, value: Money) -> Result<(), TallyError> {
        self.balance.write(value)
    }

    /// Full transaction log in insertion order
    pub fn read_transactions(&self) -> Result<Vec<Transaction>, TallyError> {
        self.transactions.read_all()
    }

    /// Append a transaction stamped with the current local time
    ///
    /// Only the log is written; the balance is left untouched.
    pub fn add_transaction(
        &self,
        amount: Money,
        description: &str,
        category: &str,
    ) -> Result<Transaction, TallyError> {
        let txn = Transaction::new(amount, description, category);
        self.transactions.append(&txn)?;
        info!(date = %txn.date_text(), amount = %txn.amount.canonical(), category = %txn.category, "transaction appended");
        Ok(txn)
    }

    /// Record a create operation in the audit log
    pub fn log_create<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> Result<(), TallyError> {
        self.audit
            .log(&AuditEntry::create(entity_type, entity_id, entity_name, entity))
    }

    /// Record an update operation in the audit log, with a field diff
    pub fn log_update<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        before: &T,
        after: &T,
    ) -> Result<(), TallyError> {
        let diff = match (serde_json::to_value(before), serde_json::to_value(after)) {
            (Ok(b), Ok(a)) => generate_diff(&b, &a),
            _ => None,
        };
        self.audit.log(&AuditEntry::update(
            entity_type,
            entity_id,
            entity_name,
            before,
            after,
            diff,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::Operation;
    use rust_decimal_macros::dec;
    use tempfile::TempDir;

    fn storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let storage = Storage::new(TallyPaths::with_data_dir(temp_dir.path().join("data"))).unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_storage_creation() {
        let (temp_dir, storage) = storage();
        assert!(temp_dir.path().join("data").exists());
        assert_eq!(storage.read_balance().unwrap(), Money::zero());
        assert!(storage.read_transactions().unwrap().is_empty());
    }

    #[test]
    fn test_add_transaction_leaves_balance_alone() {
        let (_temp, storage) = storage();
        storage
            .add_transaction(Money::new(dec!(100)), "Salary", "Income")
            .unwrap();
        storage
            .add_transaction(Money::new(dec!(-50)), "Groceries", "Food")
            .unwrap();

        let transactions = storage.read_transactions().unwrap();
        assert_eq!(transactions.len(), 2);
        assert_eq!(transactions[0].amount, Money::new(dec!(100)));
        assert_eq!(transactions[1].amount, Money::new(dec!(-50)));
        assert!(!storage.paths().balance_file().exists());
    }

    #[test]
    fn test_balance_round_trip() {
        let (_temp, storage) = storage();
        storage.write_balance(Money::new(dec!(100.50))).unwrap();
        assert_eq!(storage.read_balance().unwrap(), Money::new(dec!(100.50)));
    }

    #[test]
    fn test_log_update_records_diff() {
        let (_temp, storage) = storage();
        storage
            .log_update(
                EntityType::Balance,
                "balance",
                None,
                &Money::zero(),
                &Money::new(dec!(-50.00)),
            )
            .unwrap();

        let entries = storage.audit.read_all().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].operation, Operation::Update);
        assert_eq!(entries[0].diff_summary.as_deref(), Some("\"0\" -> \"-50.00\""));
    }
}
