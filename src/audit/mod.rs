//! Audit logging system for Tally
//!
//! Records every mutation of persisted state (new transactions, balance
//! updates, settings edits) in an append-only JSON-lines audit log.
//!
//! # Example
//!
//! ```rust,ignore
//! use tally_cli::audit::{AuditEntry, AuditLogger, EntityType};
//!
//! let logger = AuditLogger::new(paths.audit_log());
//! let entry = AuditEntry::create(EntityType::Transaction, txn.date_text(), None, &txn);
//! logger.log(&entry)?;
//! ```

mod diff;
mod entry;
mod logger;

pub use diff::generate_diff;
pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
