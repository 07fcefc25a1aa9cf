//! dialoguer-backed terminal implementation of the prompt boundary.

use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Select};

use crate::error::PromptError;
use crate::prompt::PromptInterface;

/// Interactive prompts on the current terminal.
pub struct TerminalPrompt;

impl TerminalPrompt {
    pub fn new() -> Self {
        TerminalPrompt
    }
}

impl Default for TerminalPrompt {
    fn default() -> Self {
        Self::new()
    }
}

/// Multi-line messages (the commit preview at the confirmation step) are
/// printed above the prompt; only the final line becomes the prompt text.
fn split_message(message: &str) -> (&str, Option<&str>) {
    match message.rsplit_once('\n') {
        Some((preamble, prompt)) => (prompt, Some(preamble)),
        None => (message, None),
    }
}

fn map_err(e: dialoguer::Error) -> PromptError {
    match e {
        dialoguer::Error::IO(e) => PromptError::Interaction(e),
        _ => PromptError::Aborted,
    }
}

impl PromptInterface for TerminalPrompt {
    fn select(&self, message: &str, items: &[String]) -> Result<usize, PromptError> {
        let (prompt, preamble) = split_message(message);
        if let Some(preamble) = preamble {
            println!("{preamble}");
        }

        Select::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt)
            .items(items)
            .default(0)
            .interact()
            .map_err(map_err)
    }

    fn input(&self, message: &str) -> Result<String, PromptError> {
        let (prompt, preamble) = split_message(message);
        if let Some(preamble) = preamble {
            println!("{preamble}");
        }

        Input::<String>::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
            .map_err(map_err)
    }
}
