//! Business logic layer for Tally
//!
//! Validation of raw input and the transaction recording workflow.

pub mod transaction;
pub mod validation;

pub use transaction::{update_balance, NewTransaction, RecordedTransaction, TransactionService};
pub use validation::{validate_amount, validate_budget_limit, validate_category};
