//! Main menu

use crate::error::{TallyError, TallyResult};

/// Actions offered by the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    ShowBalance,
    AddTransaction,
    ShowHistory,
    CategoryReport,
    AnalyzeExpenses,
    EditSettings,
    Exit,
}

impl MenuChoice {
    /// All choices in menu order
    pub const ALL: [MenuChoice; 7] = [
        MenuChoice::ShowBalance,
        MenuChoice::AddTransaction,
        MenuChoice::ShowHistory,
        MenuChoice::CategoryReport,
        MenuChoice::AnalyzeExpenses,
        MenuChoice::EditSettings,
        MenuChoice::Exit,
    ];

    /// Key the user types to pick this action
    pub fn key(&self) -> char {
        match self {
            Self::ShowBalance => '1',
            Self::AddTransaction => '2',
            Self::ShowHistory => '3',
            Self::CategoryReport => '4',
            Self::AnalyzeExpenses => '5',
            Self::EditSettings => '6',
            Self::Exit => '7',
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::ShowBalance => "Show balance",
            Self::AddTransaction => "Add transaction",
            Self::ShowHistory => "Show transaction history",
            Self::CategoryReport => "Category report",
            Self::AnalyzeExpenses => "Analyze expenses against budget",
            Self::EditSettings => "Edit settings",
            Self::Exit => "Exit",
        }
    }

    /// Parse a menu selection such as `"3"`
    pub fn parse(text: &str) -> TallyResult<Self> {
        let text = text.trim();
        let mut chars = text.chars();
        let choice = match (chars.next(), chars.next()) {
            (Some(c), None) => Self::ALL.iter().copied().find(|choice| choice.key() == c),
            _ => None,
        };

        choice.ok_or_else(|| {
            TallyError::validation(format!(
                "Invalid choice '{}': enter a number from 1 to {}",
                text,
                Self::ALL.len()
            ))
        })
    }
}

/// Render the menu block
pub fn format_menu() -> String {
    let mut output = String::from("\n--- Menu ---\n");
    for choice in MenuChoice::ALL {
        output.push_str(&format!("{}. {}\n", choice.key(), choice.label()));
    }
    output
}
