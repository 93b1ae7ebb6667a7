//! Category Report
//!
//! Net total per category across income and expense entries.

use crate::error::TallyResult;
use crate::models::Transaction;

use super::{group_by_category, CategoryTotal};

/// Net totals per category
#[derive(Debug, Clone)]
pub struct CategoryReport {
    /// One row per category that has any entries
    pub categories: Vec<CategoryTotal>,
}

impl CategoryReport {
    /// Sum signed amounts per category
    ///
    /// Categories netting to zero are still listed.
    pub fn generate(transactions: &[Transaction]) -> TallyResult<Self> {
        let categories = group_by_category(
            transactions
                .iter()
                .map(|t| (t.category.as_str(), t.amount)),
        )?;
        Ok(Self { categories })
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::from("--- Category Report ---\n");

        if self.categories.is_empty() {
            output.push_str("No transactions yet.\n");
            return output;
        }

        for row in &self.categories {
            output.push_str(&format!("{}: {}\n", row.category, row.total));
        }

        output
    }
}
