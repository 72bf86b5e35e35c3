//! Command implementations behind the `credo` subcommands.

use std::sync::Arc;

use serde_json::Value;

use crate::api::{Anonymous, ApiClient, CredentialSource, StaticToken};
use crate::cli::OutputOptions;
use crate::config::Config;
use crate::error::Result;

mod assign;
mod config;
mod forgot_password;
mod subscriptions;
mod tasks;

pub use assign::cmd_assign;
pub use config::{cmd_config_get, cmd_config_set, cmd_config_show};
pub use forgot_password::cmd_forgot_password;
pub use subscriptions::{SubscriptionOptions, cmd_subscriptions, cmd_tiers};
pub use tasks::{TaskListOptions, cmd_reviews, cmd_validations, cmd_verifications};

/// Output of a command: JSON always, plus optional human-readable text.
pub struct CommandOutput {
    json: Value,
    text: Option<String>,
}

impl CommandOutput {
    pub fn new(json: Value) -> Self {
        Self { json, text: None }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Print JSON when requested or when there is no text form.
    pub fn print(self, output: OutputOptions) -> Result<()> {
        match self.text {
            Some(text) if !output.json => {
                println!("{text}");
                Ok(())
            }
            _ => print_json(&self.json),
        }
    }
}

pub fn print_json(value: &Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Build an API client from the saved config and environment.
pub(crate) fn connect() -> Result<ApiClient> {
    let config = Config::load()?;
    let credential: Arc<dyn CredentialSource> = match config.api_token() {
        Some(token) => Arc::new(StaticToken::new(token)),
        None => {
            tracing::debug!("no API token configured; requests are sent unauthenticated");
            Arc::new(Anonymous)
        }
    };
    ApiClient::new(config.api_url()?, credential)
}
