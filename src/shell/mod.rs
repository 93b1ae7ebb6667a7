//! Interactive menu shell
//!
//! Every iteration reloads the balance, the transaction log and the settings
//! from disk, shows the menu, runs one action and loops until the user
//! exits or the input runs out.

pub mod menu;
pub mod prompt;
pub mod settings_editor;

pub use menu::{format_menu, MenuChoice};
pub use prompt::Prompter;
pub use settings_editor::edit_settings;

use std::io::{BufRead, Write};

use tracing::debug;

use crate::audit::EntityType;
use crate::config::{Settings, SettingsStatus};
use crate::display::format_transaction_table;
use crate::error::{TallyError, TallyResult};
use crate::reports::{CategoryReport, ExpenseAnalysis};
use crate::services::{validate_amount, validate_category, NewTransaction, TransactionService};
use crate::storage::Storage;

/// Whether the loop should keep going after an action
enum Flow {
    Continue,
    Exit,
}

/// The interactive menu loop
pub struct Shell<'a, R, W> {
    storage: &'a Storage,
    prompter: Prompter<R, W>,
    /// Category list most recently offered as suggestions
    suggested: Option<Vec<String>>,
}

impl<'a, R: BufRead, W: Write> Shell<'a, R, W> {
    /// Create a shell reading from `input` and writing to `output`
    pub fn new(storage: &'a Storage, input: R, output: W) -> Self {
        Self {
            storage,
            prompter: Prompter::new(input, output),
            suggested: None,
        }
    }

    /// Run until the user exits
    ///
    /// Closed input ends the session like an exit. Corrupt balance or
    /// transaction data, and I/O failures, are returned to the caller.
    pub fn run(&mut self) -> TallyResult<()> {
        self.prompter
            .say("Welcome to Tally, your personal finance tracker!")?;

        loop {
            match self.step() {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => break,
                Err(TallyError::InputClosed) => {
                    debug!("input closed, leaving the menu loop");
                    self.prompter.say("")?;
                    break;
                }
                Err(e) => return Err(e),
            }
        }

        self.prompter.say("Thank you for using Tally. Goodbye!")
    }

    fn step(&mut self) -> TallyResult<Flow> {
        let balance = self.storage.read_balance()?;
        let transactions = self.storage.read_transactions()?;
        let settings = self.load_settings()?;

        self.prompter.print(&format_menu())?;
        let choice = self.prompter.safe_input(
            &format!("Choose an action (1-{}): ", MenuChoice::ALL.len()),
            MenuChoice::parse,
        )?;
        debug!(?choice, "menu action selected");

        match choice {
            MenuChoice::ShowBalance => self.prompter.say(&format!(
                "\nCurrent balance: {}",
                balance.format_with_currency(&settings.currency)
            ))?,
            MenuChoice::AddTransaction => self.add_transaction(&settings)?,
            MenuChoice::ShowHistory => {
                self.prompter.say("\n--- Transaction History ---")?;
                self.prompter.print(&format_transaction_table(&transactions))?;
            }
            MenuChoice::CategoryReport => {
                self.prompter.say("")?;
                match CategoryReport::generate(&transactions) {
                    Ok(report) => self.prompter.print(&report.format_terminal())?,
                    Err(e) => self.report_out_of_range(e)?,
                }
            }
            MenuChoice::AnalyzeExpenses => {
                self.prompter.say("")?;
                match ExpenseAnalysis::generate(&transactions, &settings) {
                    Ok(analysis) => self.prompter.print(&analysis.format_terminal())?,
                    Err(e) => self.report_out_of_range(e)?,
                }
            }
            MenuChoice::EditSettings => {
                edit_settings(&mut self.prompter, self.storage, settings)?;
            }
            MenuChoice::Exit => return Ok(Flow::Exit),
        }

        Ok(Flow::Continue)
    }

    fn load_settings(&mut self) -> TallyResult<Settings> {
        let (settings, status) = Settings::load_or_create(self.storage.paths())?;

        if let SettingsStatus::Recovered(reason) = status {
            self.prompter.say(&format!(
                "Settings file was corrupt ({}). Default settings have been restored.",
                reason
            ))?;
            self.storage.log_update(
                EntityType::Settings,
                "settings",
                Some(format!("replaced unreadable file: {}", reason)),
                &serde_json::Value::Null,
                &serde_json::to_value(&settings)?,
            )?;
        }

        Ok(settings)
    }

    fn add_transaction(&mut self, settings: &Settings) -> TallyResult<()> {
        let amount = self.prompter.safe_input(
            "Enter the amount (positive for income, negative for expense): ",
            validate_amount,
        )?;
        let description = self.prompter.read_line("Enter a description: ")?;

        if !settings.categories.is_empty()
            && self.suggested.as_ref() != Some(&settings.categories)
        {
            self.prompter.say(&format!(
                "Suggested categories: {}",
                settings.categories.join(", ")
            ))?;
            self.suggested = Some(settings.categories.clone());
        }
        let category = self
            .prompter
            .safe_input("Enter a category: ", validate_category)?;

        let recorded = TransactionService::new(self.storage).record(NewTransaction {
            amount,
            description,
            category,
        });

        match recorded {
            Ok(recorded) => self.prompter.say(&format!(
                "Transaction added. New balance: {}",
                recorded.new_balance.format_with_currency(&settings.currency)
            )),
            Err(e) => self.report_out_of_range(e),
        }
    }

    /// Show an out-of-range error and stay in the menu; pass anything else on
    fn report_out_of_range(&mut self, error: TallyError) -> TallyResult<()> {
        match error {
            TallyError::OutOfRange(_) => self.prompter.say(&format!("Error: {}", error)),
            other => Err(other),
        }
    }
}
