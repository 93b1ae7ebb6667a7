//! Tally - interactive terminal personal finance tracker
//!
//! This library keeps a running balance and an append-only log of
//! categorized transactions in flat files, and reports per-category totals
//! and expenses against a budget limit. All money is exact decimal.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Data directory resolution and user settings
//! - `error`: Custom error types
//! - `models`: Money and transactions
//! - `storage`: Balance file and CSV transaction log
//! - `services`: Input validation and transaction recording
//! - `reports`: Category totals and expense analysis
//! - `display`: Terminal formatting
//! - `audit`: Audit logging system
//! - `shell`: The interactive menu loop
//!
//! # Example
//!
//! ```rust,ignore
//! use tally_cli::config::TallyPaths;
//! use tally_cli::shell::Shell;
//! use tally_cli::storage::Storage;
//!
//! let storage = Storage::new(TallyPaths::resolve(None)?)?;
//! Shell::new(&storage, std::io::stdin().lock(), std::io::stdout()).run()?;
//! ```

pub mod audit;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod reports;
pub mod services;
pub mod shell;
pub mod storage;

pub use error::{TallyError, TallyResult};
