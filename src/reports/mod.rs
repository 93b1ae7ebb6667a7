//! Reports module for Tally
//!
//! Per-category totals over the whole log and expense analysis against the
//! budget limit. Both keep categories in order of first appearance.

pub mod category;
pub mod expenses;

pub use category::CategoryReport;
pub use expenses::{BudgetOutcome, CategoryExpense, ExpenseAnalysis};

use std::collections::HashMap;

use crate::error::{TallyError, TallyResult};
use crate::models::Money;

/// Sum for one category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTotal {
    /// Category name
    pub category: String,
    /// Sum of the amounts in this category
    pub total: Money,
}

/// Group amounts by category, keeping first-appearance order
///
/// Fails if any category total leaves the representable range.
fn group_by_category<'a, I>(entries: I) -> TallyResult<Vec<CategoryTotal>>
where
    I: IntoIterator<Item = (&'a str, Money)>,
{
    let mut index: HashMap<&'a str, usize> = HashMap::new();
    let mut totals: Vec<CategoryTotal> = Vec::new();

    for (category, amount) in entries {
        let slot = *index.entry(category).or_insert_with(|| {
            totals.push(CategoryTotal {
                category: category.to_string(),
                total: Money::zero(),
            });
            totals.len() - 1
        });
        let row = &mut totals[slot];
        row.total = row.total.checked_add(amount).ok_or_else(|| {
            TallyError::out_of_range(format!("the total for category '{}' is too large", category))
        })?;
    }

    Ok(totals)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_group_keeps_first_appearance_order() {
        let entries = vec![
            ("Zoo", Money::new(dec!(1))),
            ("Apple", Money::new(dec!(2))),
            ("Zoo", Money::new(dec!(3))),
        ];
        let totals = group_by_category(entries).unwrap();
        assert_eq!(totals.len(), 2);
        assert_eq!(totals[0].category, "Zoo");
        assert_eq!(totals[0].total, Money::new(dec!(4)));
        assert_eq!(totals[1].category, "Apple");
    }

    #[test]
    fn test_group_overflow_is_an_error() {
        let max = Money::new(rust_decimal::Decimal::MAX);
        let err = group_by_category(vec![("Big", max), ("Small", max), ("Big", max)]).unwrap_err();
        assert!(matches!(err, TallyError::OutOfRange(ref m) if m.contains("'Big'")));
    }
}
