//! Configuration commands for managing credo settings.
//!
//! - `config show`: Display current configuration
//! - `config get`: Print one value
//! - `config set`: Set a configuration value

use owo_colors::OwoColorize;
use serde_json::json;

use super::CommandOutput;
use crate::cli::OutputOptions;
use crate::config::{Config, ConfigKey};
use crate::error::Result;

/// Show current configuration
pub fn cmd_config_show(output: OutputOptions) -> Result<()> {
    let config = Config::load()?;
    let path = Config::config_path()?;
    let api_url = config.api_url()?;
    let token_configured = config.api_token().is_some();

    let json_output = json!({
        "api_url": api_url.as_str(),
        "auth": {
            "token_configured": token_configured,
        },
        "config_file": path.to_string_lossy(),
    });

    let mut text_output = String::new();
    text_output.push_str(&format!("{}\n\n", "Configuration:".cyan().bold()));
    text_output.push_str(&format!("{}: {}\n", "api_url".cyan(), api_url));

    // Auth status (don't show the actual token)
    let token_status = if token_configured {
        "configured".green().to_string()
    } else {
        "not configured".dimmed().to_string()
    };
    text_output.push_str(&format!("{}: {token_status}\n", "auth.token".cyan()));

    text_output.push('\n');
    text_output.push_str(&format!(
        "{}",
        format!("Config file: {}", path.display()).dimmed()
    ));

    CommandOutput::new(json_output)
        .with_text(text_output)
        .print(output)
}

/// Get a specific configuration value
pub fn cmd_config_get(key: &str, output: OutputOptions) -> Result<()> {
    let key: ConfigKey = key.parse()?;
    let config = Config::load()?;
    let value = config.display_value(key);

    let json_output = json!({
        "key": key.as_str(),
        "value": value,
        "masked": key == ConfigKey::Token,
    });

    CommandOutput::new(json_output).with_text(value).print(output)
}

/// Set a configuration value
pub fn cmd_config_set(key: &str, value: &str, output: OutputOptions) -> Result<()> {
    let key: ConfigKey = key.parse()?;

    let mut config = Config::load()?;
    config.set(key, value.to_string())?;
    config.save()?;

    let json_output = json!({
        "action": "config_set",
        "key": key.as_str(),
        "success": true,
    });
    let text_output = format!("Set {}", key.as_str().cyan());

    CommandOutput::new(json_output)
        .with_text(text_output)
        .print(output)
}
