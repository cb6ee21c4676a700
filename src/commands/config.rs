//! Configuration commands for managing ideahub settings.
//!
//! - `config show`: Display current configuration
//! - `config get`: Read one value (tokens are masked)
//! - `config set`: Set a configuration value

use owo_colors::OwoColorize;
use serde_json::json;

use super::CommandOutput;
use crate::cli::OutputOptions;
use crate::config::{CONFIG_KEYS, Config};
use crate::error::{IdeaHubError, Result};
use crate::paths::config_path;

/// Reject unknown keys, suggesting dot notation for underscore spellings
fn validate_config_key(key: &str) -> Result<&str> {
    if CONFIG_KEYS.contains(&key) {
        return Ok(key);
    }

    if let Some(pos) = key.find('_') {
        let dot_version = format!("{}.{}", &key[..pos], &key[pos + 1..]);
        if CONFIG_KEYS.contains(&dot_version.as_str()) {
            return Err(IdeaHubError::Config(format!(
                "invalid config key '{key}'. Use dot notation: '{dot_version}'"
            )));
        }
    }
    Err(IdeaHubError::InvalidConfigKey(key.to_string()))
}

/// Show current configuration
pub fn cmd_config_show(output: OutputOptions) -> Result<()> {
    let config = Config::load()?;
    let token_configured = config.token().is_some();

    let json_output = json!({
        "api": {
            "base_url": config.base_url(),
        },
        "auth": {
            "token_configured": token_configured,
        },
        "remote_timeout": config.remote_timeout,
        "config_file": config_path().to_string_lossy(),
    });

    let mut text_output = String::new();
    text_output.push_str(&format!("{}\n\n", "Configuration:".cyan().bold()));
    text_output.push_str(&format!("{}:\n", "api".cyan()));
    text_output.push_str(&format!("  base_url: {}\n\n", config.base_url()));

    let token_status = if token_configured {
        "configured".green().to_string()
    } else {
        "not configured".dimmed().to_string()
    };
    text_output.push_str(&format!("{}:\n", "auth".cyan()));
    text_output.push_str(&format!("  token: {token_status}\n\n"));

    text_output.push_str(&format!(
        "{}: {}s\n\n",
        "remote_timeout".cyan(),
        config.remote_timeout
    ));
    text_output.push_str(&format!(
        "{}",
        format!("Config file: {}", config_path().display()).dimmed()
    ));

    CommandOutput::new(json_output)
        .with_text(text_output)
        .print(output)
}

/// Set a configuration value
pub fn cmd_config_set(key: &str, value: &str, output: OutputOptions) -> Result<()> {
    validate_config_key(key)?;

    let mut config = Config::load()?;
    config.set(key, value)?;
    config.save()?;

    let shown = config.get(key)?;
    let json_output = json!({
        "action": "config_set",
        "key": key,
        "value": shown,
        "success": true,
    });
    let text_output = match shown {
        Some(v) => format!("Set {} to {}", key.cyan(), v),
        None => format!("Cleared {}", key.cyan()),
    };

    CommandOutput::new(json_output)
        .with_text(text_output)
        .print(output)
}

/// Get a specific configuration value
pub fn cmd_config_get(key: &str, output: OutputOptions) -> Result<()> {
    validate_config_key(key)?;

    let config = Config::load()?;
    let value = config.get(key)?;

    let json_output = json!({
        "key": key,
        "value": value,
        "configured": value.is_some(),
        "masked": key == "auth.token" && value.is_some(),
    });
    let text_output = match value {
        Some(v) => v,
        None => "not configured".dimmed().to_string(),
    };

    CommandOutput::new(json_output)
        .with_text(text_output)
        .print(output)
}
