//! User settings for Tally
//!
//! Holds the display currency, the budget limit used by expense analysis and
//! the list of suggested category names. A missing settings file is created
//! with defaults; an unreadable one is replaced by defaults.

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use super::paths::TallyPaths;
use crate::error::TallyError;
use crate::models::Money;
use crate::storage::file_io::{read_text, write_json_atomic};

/// Category names offered as suggestions on first run
pub const DEFAULT_CATEGORIES: [&str; 5] = ["Groceries", "Transport", "Entertainment", "Bills", "Other"];

/// User settings for Tally
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Currency code shown next to amounts
    #[serde(default = "default_currency")]
    pub currency: String,

    /// Maximum intended total of expenses
    #[serde(default = "default_budget_limit", deserialize_with = "budget_limit_from_json")]
    pub budget_limit: Money,

    /// Suggested category names, in display order
    #[serde(default = "default_categories")]
    pub categories: Vec<String>,
}

/// How the settings returned by [`Settings::load_or_create`] were obtained
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsStatus {
    /// Read from an existing, valid file
    Loaded,
    /// No file existed; defaults were written
    Created,
    /// The file could not be parsed and was overwritten with defaults
    Recovered(String),
}

fn default_currency() -> String {
    "USD".to_string()
}

fn default_budget_limit() -> Money {
    Money::new(1000.into())
}

fn default_categories() -> Vec<String> {
    DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect()
}

/// Accept the limit either as text or as a JSON number
///
/// serde_json keeps the literal digits of numbers (`arbitrary_precision`),
/// so a numeric limit is parsed from its text and never passes through
/// `f64`. Exponent notation such as `1e3` is accepted for numbers only.
/// Negative limits are rejected.
fn budget_limit_from_json<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Money, D::Error> {
    use serde::de::Error;

    let (text, limit) = match Value::deserialize(deserializer)? {
        Value::String(s) => {
            let limit = Money::parse(&s).map_err(D::Error::custom)?;
            (s, limit)
        }
        Value::Number(n) => {
            let text = n.to_string();
            let limit = Money::parse(&text)
                .ok()
                .or_else(|| Decimal::from_scientific(&text).ok().map(Money::new))
                .ok_or_else(|| {
                    D::Error::custom(format!("budget_limit {} is not a representable decimal", text))
                })?;
            (text, limit)
        }
        other => {
            return Err(D::Error::custom(format!(
                "budget_limit must be a decimal, got {}",
                other
            )))
        }
    };

    if limit.is_negative() {
        return Err(D::Error::custom(format!(
            "budget_limit cannot be negative, got {}",
            text
        )));
    }
    Ok(limit)
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            currency: default_currency(),
            budget_limit: default_budget_limit(),
            categories: default_categories(),
        }
    }
}

impl Settings {
    /// Load settings from disk, creating or repairing the file as needed
    pub fn load_or_create(paths: &TallyPaths) -> Result<(Self, SettingsStatus), TallyError> {
        let settings_path = paths.settings_file();

        let Some(contents) = read_text(&settings_path)? else {
            debug!(path = %settings_path.display(), "settings file missing, writing defaults");
            let settings = Settings::default();
            settings.save(paths)?;
            return Ok((settings, SettingsStatus::Created));
        };

        match serde_json::from_str::<Settings>(&contents) {
            Ok(settings) => Ok((settings, SettingsStatus::Loaded)),
            Err(e) => {
                warn!(
                    path = %settings_path.display(),
                    error = %e,
                    "settings file is corrupt, restoring defaults"
                );
                let settings = Settings::default();
                settings.save(paths)?;
                Ok((settings, SettingsStatus::Recovered(e.to_string())))
            }
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &TallyPaths) -> Result<(), TallyError> {
        paths.ensure_directories()?;
        write_json_atomic(paths.settings_file(), self)
    }

    /// Append a category suggestion, ignoring blank names
    ///
    /// Returns whether the list changed. Duplicates are allowed.
    pub fn add_category(&mut self, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() {
            return false;
        }
        self.categories.push(name.to_string());
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use tempfile::TempDir;

    fn temp_paths() -> (TempDir, TallyPaths) {
        let temp_dir = TempDir::new().unwrap();
        let paths = TallyPaths::with_data_dir(temp_dir.path().to_path_buf());
        (temp_dir, paths)
    }

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.currency, "USD");
        assert_eq!(settings.budget_limit, Money::new(dec!(1000)));
        assert_eq!(settings.categories.len(), 5);
    }

    #[test]
    fn test_first_load_creates_file() {
        let (_temp, paths) = temp_paths();

        let (settings, status) = Settings::load_or_create(&paths).unwrap();
        assert_eq!(status, SettingsStatus::Created);
        assert_eq!(settings, Settings::default());
        assert!(paths.settings_file().exists());

        let (_, status) = Settings::load_or_create(&paths).unwrap();
        assert_eq!(status, SettingsStatus::Loaded);
    }

    #[test]
    fn test_save_and_load() {
        let (_temp, paths) = temp_paths();

        let mut settings = Settings::default();
        settings.currency = "EUR".into();
        settings.budget_limit = Money::new(dec!(2000.10));
        settings.add_category("Entertainment");
        settings.save(&paths).unwrap();

        let (loaded, status) = Settings::load_or_create(&paths).unwrap();
        assert_eq!(status, SettingsStatus::Loaded);
        assert_eq!(loaded.currency, "EUR");
        assert_eq!(loaded.budget_limit, Money::new(dec!(2000.10)));
        assert_eq!(loaded.budget_limit.canonical(), "2000.10");
        assert_eq!(loaded.categories.last().map(String::as_str), Some("Entertainment"));
        assert_eq!(loaded.categories.len(), 6);
    }

    #[test]
    fn test_budget_limit_written_as_text() {
        let (_temp, paths) = temp_paths();
        Settings::default().save(&paths).unwrap();

        let raw = std::fs::read_to_string(paths.settings_file()).unwrap();
        let value: Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["budget_limit"], Value::String("1000".into()));
    }

    #[test]
    fn test_numeric_budget_limit_accepted() {
        let (_temp, paths) = temp_paths();
        std::fs::write(
            paths.settings_file(),
            r#"{"currency": "RUB", "budget_limit": 600.5, "categories": ["Food"], "theme": "dark"}"#,
        )
        .unwrap();

        let (settings, status) = Settings::load_or_create(&paths).unwrap();
        assert_eq!(status, SettingsStatus::Loaded);
        assert_eq!(settings.currency, "RUB");
        assert_eq!(settings.budget_limit, Money::new(dec!(600.5)));
        assert_eq!(settings.categories, vec!["Food".to_string()]);
    }

    #[test]
    fn test_numeric_budget_limit_keeps_every_digit() {
        let (_temp, paths) = temp_paths();
        std::fs::write(
            paths.settings_file(),
            r#"{"budget_limit": 1234567890.123456789}"#,
        )
        .unwrap();

        let (settings, status) = Settings::load_or_create(&paths).unwrap();
        assert_eq!(status, SettingsStatus::Loaded);
        assert_eq!(settings.budget_limit, Money::new(dec!(1234567890.123456789)));
        assert_eq!(settings.budget_limit.canonical(), "1234567890.123456789");
    }

    #[test]
    fn test_numeric_budget_limit_in_exponent_form() {
        let (_temp, paths) = temp_paths();
        std::fs::write(paths.settings_file(), r#"{"budget_limit": 1e3}"#).unwrap();

        let (settings, status) = Settings::load_or_create(&paths).unwrap();
        assert_eq!(status, SettingsStatus::Loaded);
        assert_eq!(settings.budget_limit, Money::new(dec!(1000)));
    }

    #[test]
    fn test_missing_keys_take_defaults() {
        let (_temp, paths) = temp_paths();
        std::fs::write(paths.settings_file(), r#"{"currency": "GBP"}"#).unwrap();

        let (settings, _) = Settings::load_or_create(&paths).unwrap();
        assert_eq!(settings.currency, "GBP");
        assert_eq!(settings.budget_limit, Money::new(dec!(1000)));
    }

    #[test]
    fn test_corrupt_file_is_recovered() {
        let (_temp, paths) = temp_paths();
        std::fs::write(paths.settings_file(), "{ not json").unwrap();

        let (settings, status) = Settings::load_or_create(&paths).unwrap();
        assert!(matches!(status, SettingsStatus::Recovered(_)));
        assert_eq!(settings, Settings::default());

        let (_, status) = Settings::load_or_create(&paths).unwrap();
        assert_eq!(status, SettingsStatus::Loaded);
    }

    #[test]
    fn test_negative_limit_is_corruption() {
        let (_temp, paths) = temp_paths();
        std::fs::write(paths.settings_file(), r#"{"budget_limit": "-5"}"#).unwrap();

        let (settings, status) = Settings::load_or_create(&paths).unwrap();
        assert!(matches!(status, SettingsStatus::Recovered(_)));
        assert_eq!(settings.budget_limit, Money::new(dec!(1000)));
    }

    #[test]
    fn test_add_category_skips_blank() {
        let mut settings = Settings::default();
        assert!(!settings.add_category("   "));
        assert!(settings.add_category(" Travel "));
        assert!(settings.add_category("Travel"));
        assert_eq!(settings.categories.len(), 7);
        assert_eq!(settings.categories[5], "Travel");
    }
}
