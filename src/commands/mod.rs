mod config;
mod ideas;
pub mod interactive;
mod meetings;

pub use config::{cmd_config_get, cmd_config_set, cmd_config_show};
pub use ideas::{cmd_ideas_delete, cmd_ideas_list, cmd_ideas_menu, render_ideas, render_toasts};
pub use meetings::{cmd_meetings, render_meetings};

use crate::cli::OutputOptions;
use crate::error::Result;

/// Output of a command in both machine and human form
pub struct CommandOutput {
    json: serde_json::Value,
    text: Option<String>,
}

impl CommandOutput {
    pub fn new(json: serde_json::Value) -> Self {
        Self { json, text: None }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Print JSON when requested, otherwise the text form (falling back to JSON)
    pub fn print(self, output: OutputOptions) -> Result<()> {
        if output.json {
            println!("{}", serde_json::to_string_pretty(&self.json)?);
            return Ok(());
        }

        match self.text {
            Some(text) => println!("{text}"),
            None => println!("{}", serde_json::to_string_pretty(&self.json)?),
        }
        Ok(())
    }
}
