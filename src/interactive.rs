//! Terminal version of the form: prompt for each field, then add.

use crate::error::Result;
use dialoguer::{Confirm, Input, Select};
use portfolio_media_common::{AddOutcome, Category, FormController, MEDIA_FILTER_EXTENSIONS};
use std::path::{Path, PathBuf};

/// Prompt for every field (current values as defaults), then run `add_item`.
/// Returns `None` when the operator declines at the confirmation step.
pub fn run_interactive_add(
    controller: &mut FormController,
    file: Option<&Path>,
) -> Result<Option<AddOutcome>> {
    let file = match file {
        Some(path) => path.to_path_buf(),
        None => {
            let entered: String = Input::new()
                .with_prompt(format!("File ({})", MEDIA_FILTER_EXTENSIONS.join(" ")))
                .validate_with(|input: &String| -> std::result::Result<(), String> {
                    if Path::new(input.trim()).is_file() {
                        Ok(())
                    } else {
                        Err(format!("not a file: {}", input.trim()))
                    }
                })
                .interact_text()?;
            PathBuf::from(entered.trim())
        }
    };
    controller.choose_file(&file);

    let labels: Vec<String> = Category::ALL
        .iter()
        .map(|c| format!("{} ({})", c.label(), c.key()))
        .collect();
    let current = Category::ALL
        .iter()
        .position(|c| *c == controller.form().category)
        .unwrap_or(0);
    let picked = Select::new()
        .with_prompt("Category")
        .items(&labels[..])
        .default(current)
        .interact()?;

    let form = controller.form().clone();
    let title = prompt_text("Title (blank: file name)", &form.title)?;
    let description = prompt_text("Description", &form.description)?;
    let client = prompt_text("Client", &form.client)?;
    let results = prompt_text("Results", &form.results)?;
    let date = prompt_text("Date (YYYY-MM-DD)", &form.date)?;
    let tags = prompt_text("Tags (comma-separated)", &form.tags)?;

    {
        let form = controller.form_mut();
        form.category = Category::ALL[picked];
        form.title = title;
        form.description = description;
        form.client = client;
        form.results = results;
        form.date = date;
        form.tags = tags;
    }
    controller.mark_edited();

    let confirmed = Confirm::new()
        .with_prompt(format!("Add {} to the portfolio?", controller.form().file_label()))
        .default(true)
        .interact()?;
    if !confirmed {
        return Ok(None);
    }

    Ok(Some(controller.add_item()?))
}

fn prompt_text(prompt: &str, initial: &str) -> Result<String> {
    let value: String = Input::new()
        .with_prompt(prompt)
        .with_initial_text(initial)
        .allow_empty(true)
        .interact_text()?;
    Ok(value)
}
