//! Interactive user prompting components
//!
//! This module provides the terminal side of the confirmation dialog,
//! separating CLI prompting logic from the view controllers.

use std::io::{self, BufRead, Write};

use owo_colors::OwoColorize;

use crate::error::Result;
use crate::view::{ConfirmDialogState, Confirmer};

/// Prompt user for yes/no confirmation
///
/// # Arguments
/// * `prompt` - The full question to display (without [y/N] suffix)
///
/// # Returns
/// * `true` if user confirms with 'y' or 'Y'
/// * `false` otherwise
pub fn confirm(prompt: &str) -> Result<bool> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    confirm_with(prompt, &mut stdin.lock(), &mut stdout)
}

/// Prompt on arbitrary streams. An empty line or EOF declines.
pub fn confirm_with(prompt: &str, input: &mut impl BufRead, out: &mut impl Write) -> Result<bool> {
    write!(out, "{} [y/N] ", prompt)?;
    out.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;

    let answer = line.trim();
    Ok(answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes"))
}

/// Render a dialog as a terminal question. The labels name the y and N answers.
pub fn dialog_prompt(dialog: &ConfirmDialogState) -> String {
    let title = if dialog.destructive {
        dialog.title.red().bold().to_string()
    } else {
        dialog.title.bold().to_string()
    };
    format!(
        "{} {}\n(y: {}, N: {})",
        title, dialog.message, dialog.confirm_label, dialog.cancel_label
    )
}

/// Confirmation dialog backed by the terminal
#[derive(Debug, Clone, Copy)]
pub struct TerminalConfirmer {
    assume_yes: bool,
}

impl TerminalConfirmer {
    pub fn new(assume_yes: bool) -> Self {
        Self { assume_yes }
    }
}

impl Confirmer for TerminalConfirmer {
    async fn confirm(&self, dialog: &ConfirmDialogState) -> bool {
        if self.assume_yes {
            return true;
        }

        let prompt = dialog_prompt(dialog);
        // stdin reads block, keep them off the runtime workers
        match tokio::task::spawn_blocking(move || confirm(&prompt)).await {
            Ok(Ok(answer)) => answer,
            Ok(Err(e)) => {
                tracing::warn!(error = %e, "confirmation prompt failed, treating as cancel");
                false
            }
            Err(e) => {
                tracing::warn!(error = %e, "confirmation prompt task failed, treating as cancel");
                false
            }
        }
    }
}
