//! Transaction service
//!
//! The one workflow that mutates the ledger: append a transaction, then move
//! the stored balance by its amount.

use crate::audit::EntityType;
use crate::error::{TallyError, TallyResult};
use crate::models::{Money, Transaction};
use crate::storage::Storage;

use super::validation::validate_category;

/// Service for recording transactions
pub struct TransactionService<'a> {
    storage: &'a Storage,
}

/// Input for recording a new transaction
#[derive(Debug, Clone)]
pub struct NewTransaction {
    pub amount: Money,
    pub description: String,
    pub category: String,
}

/// Outcome of recording a transaction
#[derive(Debug, Clone)]
pub struct RecordedTransaction {
    pub transaction: Transaction,
    pub previous_balance: Money,
    pub new_balance: Money,
}

/// New balance after applying one transaction amount
///
/// Fails with [`TallyError::OutOfRange`] when the sum cannot be represented.
pub fn update_balance(current: Money, amount: Money) -> TallyResult<Money> {
    current.checked_add(amount).ok_or_else(|| {
        TallyError::out_of_range(format!(
            "adding {} to the balance of {} exceeds the largest supported amount",
            amount.canonical(),
            current.canonical()
        ))
    })
}

impl<'a> TransactionService<'a> {
    /// Create a new transaction service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Append a transaction and persist the updated balance
    ///
    /// The new balance is computed before anything is written, so a corrupt
    /// balance file or an out-of-range sum aborts the operation without
    /// touching the log.
    pub fn record(&self, input: NewTransaction) -> TallyResult<RecordedTransaction> {
        let category = validate_category(&input.category)?;
        let previous_balance = self.storage.read_balance()?;
        let new_balance = update_balance(previous_balance, input.amount)?;

        let transaction = self
            .storage
            .add_transaction(input.amount, &input.description, &category)?;
        self.storage.write_balance(new_balance)?;

        self.storage.log_create(
            EntityType::Transaction,
            transaction.date_text(),
            Some(transaction.category.clone()),
            &transaction,
        )?;
        self.storage.log_update(
            EntityType::Balance,
            "balance",
            None,
            &previous_balance,
            &new_balance,
        )?;

        Ok(RecordedTransaction {
            transaction,
            previous_balance,
            new_balance,
        })
    }
}
