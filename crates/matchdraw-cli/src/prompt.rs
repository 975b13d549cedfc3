//! Interactive questions for settings the configuration leaves open.

use std::path::Path;

use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input};

use crate::error::CliError;

/// Source of answers for run settings.
pub trait Prompter {
    /// Asks a yes/no question.
    fn confirm(&mut self, question: &str) -> Result<bool, CliError>;

    /// Asks for a positive trial count.
    fn trials(&mut self) -> Result<u64, CliError>;
}

/// Prompts on the terminal, re-asking until the answer is valid.
pub struct TerminalPrompter {
    theme: ColorfulTheme,
}

impl TerminalPrompter {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for TerminalPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for TerminalPrompter {
    fn confirm(&mut self, question: &str) -> Result<bool, CliError> {
        Ok(Confirm::with_theme(&self.theme)
            .with_prompt(question)
            .interact()?)
    }

    fn trials(&mut self) -> Result<u64, CliError> {
        Ok(Input::<u64>::with_theme(&self.theme)
            .with_prompt("How many simulations would you like to run?")
            .validate_with(|trials: &u64| {
                if *trials > 0 {
                    Ok(())
                } else {
                    Err("Please enter a positive integer!")
                }
            })
            .interact_text()?)
    }
}

pub(crate) fn load_question(path: &Path) -> String {
    format!(
        "Would you like to use past data if it exists? (stored in {})",
        path.display()
    )
}

pub(crate) fn save_question(path: &Path) -> String {
    format!(
        "Would you like to save the cache to {} for faster use in later simulations?",
        path.display()
    )
}
