//! Input validation
//!
//! Pure functions turning raw user text into typed values. The interactive
//! retry loop lives in `shell::prompt`; nothing here touches the console.

use crate::error::{TallyError, TallyResult};
use crate::models::{Money, MoneyParseError};

/// Parse a signed exact-decimal amount
pub fn validate_amount(text: &str) -> TallyResult<Money> {
    Money::parse(text).map_err(|e| match e {
        MoneyParseError::Empty => {
            TallyError::validation("Invalid amount: enter a number such as 100 or -50.50")
        }
        MoneyParseError::InvalidFormat(s) => TallyError::validation(format!(
            "Invalid amount '{}': enter a number such as 100 or -50.50",
            s
        )),
    })
}

/// Trim a category name and reject it if nothing is left
pub fn validate_category(text: &str) -> TallyResult<String> {
    let category = text.trim();
    if category.is_empty() {
        return Err(TallyError::validation("Category cannot be empty"));
    }
    Ok(category.to_string())
}

/// Parse a budget limit, which must not be negative
pub fn validate_budget_limit(text: &str) -> TallyResult<Money> {
    let limit = validate_amount(text)?;
    if limit.is_negative() {
        return Err(TallyError::validation("Budget limit cannot be negative"));
    }
    Ok(limit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_valid_amounts() {
        assert_eq!(validate_amount("100").unwrap(), Money::new(dec!(100)));
        assert_eq!(validate_amount("-50.5").unwrap(), Money::new(dec!(-50.5)));
        assert_eq!(validate_amount("0.00").unwrap(), Money::zero());
        assert_eq!(validate_amount("100.50").unwrap(), Money::new(dec!(100.50)));
        assert_eq!(validate_amount("  7.25\n").unwrap(), Money::new(dec!(7.25)));
    }

    #[test]
    fn test_invalid_amounts() {
        for text in ["abc", "", "   ", "12.34.56", "not a number", "5 USD", "NaN"] {
            let err = validate_amount(text).unwrap_err();
            assert!(err.is_validation(), "{:?} should be a validation error", text);
            assert!(err.to_string().contains("Invalid amount"));
        }
    }

    #[test]
    fn test_category_is_trimmed() {
        assert_eq!(validate_category(" Food ").unwrap(), "Food");
        assert_eq!(validate_category("Еда").unwrap(), "Еда");
        assert_eq!(validate_category("Eating out").unwrap(), "Eating out");
    }

    #[test]
    fn test_empty_category_rejected() {
        assert!(validate_category("").unwrap_err().is_validation());
        assert!(validate_category(" \t ").unwrap_err().is_validation());
    }

    #[test]
    fn test_budget_limit() {
        assert_eq!(validate_budget_limit("2000").unwrap(), Money::new(dec!(2000)));
        assert_eq!(validate_budget_limit("0").unwrap(), Money::zero());
        assert!(validate_budget_limit("-1").unwrap_err().is_validation());
        assert!(validate_budget_limit("lots").unwrap_err().is_validation());
    }
}
