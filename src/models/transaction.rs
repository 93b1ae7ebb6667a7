//! Transaction model
//!
//! A transaction is a dated, categorized, signed amount. Once written to the
//! log it is never edited or removed.

use chrono::{Local, NaiveDateTime, SubsecRound};
use serde::{Deserialize, Serialize};

use super::money::Money;

/// Timestamp layout used in the transaction log
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A financial transaction
///
/// Field order here is the column order of the transaction log header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Local time of entry, second precision
    #[serde(with = "log_timestamp")]
    pub date: NaiveDateTime,

    /// Signed amount (positive = income, negative = expense)
    pub amount: Money,

    /// Free-form description, may be empty
    pub description: String,

    /// Category label used for reporting
    pub category: String,
}

impl Transaction {
    /// Create a transaction stamped with the current local time
    pub fn new(amount: Money, description: impl Into<String>, category: impl Into<String>) -> Self {
        Self::with_date(Local::now().naive_local(), amount, description, category)
    }

    /// Create a transaction with an explicit timestamp (truncated to seconds)
    pub fn with_date(
        date: NaiveDateTime,
        amount: Money,
        description: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            date: date.trunc_subsecs(0),
            amount,
            description: description.into(),
            category: category.into(),
        }
    }

    /// Check if this is an expense entry
    pub fn is_expense(&self) -> bool {
        self.amount.is_negative()
    }

    /// Timestamp rendered in the log format
    pub fn date_text(&self) -> String {
        self.date.format(DATE_FORMAT).to_string()
    }
}

mod log_timestamp {
    use chrono::NaiveDateTime;
    use serde::{self, Deserialize, Deserializer, Serializer};

    use super::DATE_FORMAT;

    pub fn serialize<S: Serializer>(date: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&date.format(DATE_FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
        let text = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(text.trim(), DATE_FORMAT).map_err(|e| {
            serde::de::Error::custom(format!("invalid date '{}': {}", text, e))
        })
    }
}
