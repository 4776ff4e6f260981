use dialoguer::{Confirm, Input};
use eyre::{eyre, Context, Result};

/// Prompts for a line of text, an empty answer is allowed.
pub fn user_input(prompt: &str) -> Result<String> {
    Input::<String>::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()
        .wrap_err_with(|| eyre!("User input cancelled"))
}

pub fn user_confirm(prompt: &str) -> Result<bool> {
    Confirm::new()
        .with_prompt(prompt)
        .default(true)
        .interact()
        .wrap_err_with(|| eyre!("User confirmation cancelled"))
}
