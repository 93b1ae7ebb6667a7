//! Interactive settings editing

use std::io::{BufRead, Write};

use crate::audit::EntityType;
use crate::config::Settings;
use crate::error::TallyResult;
use crate::services::validate_budget_limit;
use crate::storage::Storage;

use super::prompt::Prompter;

/// Walk the user through currency, budget limit and a new category
///
/// Empty answers keep the current values. The result is saved and audited
/// before it is returned.
pub fn edit_settings<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    storage: &Storage,
    current: Settings,
) -> TallyResult<Settings> {
    let mut updated = current.clone();

    prompter.say("\n--- Edit Settings ---")?;

    let currency = prompter.read_line(&format!(
        "Currency [{}] (leave empty to keep): ",
        current.currency
    ))?;
    if !currency.trim().is_empty() {
        updated.currency = currency.trim().to_string();
    }

    let keep_limit = current.budget_limit;
    updated.budget_limit = prompter.safe_input(
        &format!("Budget limit [{}] (leave empty to keep): ", keep_limit),
        |text| {
            if text.trim().is_empty() {
                Ok(keep_limit)
            } else {
                validate_budget_limit(text)
            }
        },
    )?;

    prompter.say(&format!("Categories: {}", current.categories.join(", ")))?;
    let category = prompter.read_line("New category (leave empty to skip): ")?;
    updated.add_category(&category);

    updated.save(storage.paths())?;
    if updated != current {
        storage.log_update(EntityType::Settings, "settings", None, &current, &updated)?;
    }

    prompter.say("Settings saved.")?;
    Ok(updated)
}
