//! Expense Analysis
//!
//! Breaks expenses down by category and compares the total with the budget
//! limit from settings.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::config::Settings;
use crate::error::{TallyError, TallyResult};
use crate::models::{Money, Transaction};

use super::group_by_category;

/// Expense total for one category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryExpense {
    /// Category name
    pub category: String,
    /// Sum of expenses, as a non-negative amount
    pub total: Money,
    /// Share of all expenses, 0-100
    pub percentage: Decimal,
}

/// Total expenses compared with the budget limit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetOutcome {
    /// Expenses stayed at or under the limit by this much
    Saved(Money),
    /// Expenses went over the limit by this much
    Overspent(Money),
}

impl BudgetOutcome {
    /// Compare an expense total with a limit; only `total > limit` overspends
    pub fn evaluate(total_expenses: Money, budget_limit: Money) -> Self {
        if total_expenses > budget_limit {
            Self::Overspent(total_expenses - budget_limit)
        } else {
            Self::Saved(budget_limit - total_expenses)
        }
    }
}

/// Expense breakdown against the budget
#[derive(Debug, Clone)]
pub struct ExpenseAnalysis {
    /// Per-category expenses in order of first appearance
    pub categories: Vec<CategoryExpense>,
    /// Sum of all expenses, non-negative
    pub total_expenses: Money,
    /// Budget limit the total was compared with
    pub budget_limit: Money,
    /// Currency code used for display
    pub currency: String,
    /// Saved or overspent amount
    pub outcome: BudgetOutcome,
}

/// Share of `part` in `whole` as a percentage, zero when `whole` is zero
///
/// Divides first so the intermediate stays within range for any
/// `part <= whole`.
pub fn percentage_of(part: Money, whole: Money) -> Decimal {
    if whole.is_zero() {
        return Decimal::ZERO;
    }
    part.amount() / whole.amount() * Decimal::ONE_HUNDRED
}

impl ExpenseAnalysis {
    /// Analyze strictly negative transactions against the settings limit
    pub fn generate(transactions: &[Transaction], settings: &Settings) -> TallyResult<Self> {
        let grouped = group_by_category(
            transactions
                .iter()
                .filter(|t| t.is_expense())
                .map(|t| (t.category.as_str(), -t.amount)),
        )?;

        let total_expenses = Money::checked_sum(grouped.iter().map(|c| c.total))
            .ok_or_else(|| TallyError::out_of_range("total expenses are too large"))?;

        let categories = grouped
            .into_iter()
            .map(|c| CategoryExpense {
                percentage: percentage_of(c.total, total_expenses),
                category: c.category,
                total: c.total,
            })
            .collect();

        Ok(Self {
            categories,
            total_expenses,
            budget_limit: settings.budget_limit,
            currency: settings.currency.clone(),
            outcome: BudgetOutcome::evaluate(total_expenses, settings.budget_limit),
        })
    }

    /// Format the analysis for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::from("--- Expense Analysis ---\n");

        for row in &self.categories {
            output.push_str(&format!(
                "{}: {} ({}%)\n",
                row.category,
                row.total.format_with_currency(&self.currency),
                format_percentage(row.percentage)
            ));
        }

        output.push_str(&format!(
            "Total expenses: {}\n",
            self.total_expenses.format_with_currency(&self.currency)
        ));
        output.push_str(&format!(
            "Budget limit: {}\n",
            self.budget_limit.format_with_currency(&self.currency)
        ));

        match self.outcome {
            BudgetOutcome::Saved(amount) => output.push_str(&format!(
                "You saved {}\n",
                amount.format_with_currency(&self.currency)
            )),
            BudgetOutcome::Overspent(amount) => output.push_str(&format!(
                "Budget exceeded by {}\n",
                amount.format_with_currency(&self.currency)
            )),
        }

        output
    }
}

fn format_percentage(pct: Decimal) -> String {
    format!(
        "{:.1}",
        pct.round_dp_with_strategy(1, RoundingStrategy::MidpointNearestEven)
    )
}
