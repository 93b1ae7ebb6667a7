//! Transaction display formatting
//!
//! Renders the transaction history as a table.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::Transaction;

#[derive(Tabled)]
struct TransactionRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Category")]
    category: String,
}

impl From<&Transaction> for TransactionRow {
    fn from(txn: &Transaction) -> Self {
        Self {
            date: txn.date_text(),
            amount: txn.amount.to_string(),
            description: txn.description.clone(),
            category: txn.category.clone(),
        }
    }
}

/// Format the transaction history in insertion order
pub fn format_transaction_table(transactions: &[Transaction]) -> String {
    if transactions.is_empty() {
        return "No transactions yet.\n".to_string();
    }

    let mut table = Table::new(transactions.iter().map(TransactionRow::from));
    table.with(Style::psql());

    format!("{}\n", table)
}
