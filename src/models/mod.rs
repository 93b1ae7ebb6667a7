//! Core data models for Tally
//!
//! Money amounts and the transactions recorded in the log.

pub mod money;
pub mod transaction;

pub use money::{Money, MoneyParseError};
pub use transaction::{Transaction, DATE_FORMAT};
