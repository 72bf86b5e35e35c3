//! Configuration handling for the dashboard client.
//!
//! Configuration is stored in `<config dir>/config.yaml` and includes:
//! - The base URL of the dashboard API
//! - The bearer token used for authorized endpoints
//!
//! `CREDO_API_URL` and `CREDO_TOKEN` override the file when set and non-empty.

use std::env;
use std::fs;
use std::path::PathBuf;

use directories::ProjectDirs;
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{CredoError, Result};

pub const DEFAULT_API_URL: &str = "http://localhost:8000";

const CONFIG_DIR_ENV: &str = "CREDO_CONFIG_DIR";
const API_URL_ENV: &str = "CREDO_API_URL";
const TOKEN_ENV: &str = "CREDO_TOKEN";

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the dashboard API
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,

    /// Authentication tokens
    #[serde(default)]
    pub auth: AuthConfig,
}

/// Authentication configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

/// Keys accepted by `config get` / `config set`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    ApiUrl,
    Token,
}

impl ConfigKey {
    pub fn as_str(self) -> &'static str {
        match self {
            ConfigKey::ApiUrl => "api_url",
            ConfigKey::Token => "token",
        }
    }
}

impl std::str::FromStr for ConfigKey {
    type Err = CredoError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "api_url" => Ok(ConfigKey::ApiUrl),
            "token" => Ok(ConfigKey::Token),
            _ => Err(CredoError::Config(format!(
                "unknown key '{}', expected 'api_url' or 'token'",
                s
            ))),
        }
    }
}

impl Config {
    /// Directory holding `config.yaml`
    pub fn config_dir() -> Result<PathBuf> {
        if let Ok(dir) = env::var(CONFIG_DIR_ENV)
            && !dir.is_empty()
        {
            return Ok(PathBuf::from(dir));
        }

        ProjectDirs::from("", "", "credo")
            .map(|dirs| dirs.config_dir().to_path_buf())
            .ok_or_else(|| CredoError::Config("cannot determine a config directory".to_string()))
    }

    /// Get the path to the config file
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.yaml"))
    }

    /// Load configuration from file, or return default if not found
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path)?;
        let config: Config = serde_yaml_ng::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = serde_yaml_ng::to_string(self)?;
        fs::write(&path, content)?;
        Ok(())
    }

    /// Resolve the API base URL from environment, file, then default
    pub fn api_url(&self) -> Result<Url> {
        self.api_url_with_env(env::var(API_URL_ENV).ok())
    }

    fn api_url_with_env(&self, env_value: Option<String>) -> Result<Url> {
        let raw = env_value
            .filter(|v| !v.is_empty())
            .or_else(|| self.api_url.clone())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        Url::parse(&raw).map_err(|e| CredoError::Config(format!("invalid api_url '{raw}': {e}")))
    }

    /// Get the bearer token from environment variable or config file
    pub fn api_token(&self) -> Option<SecretString> {
        self.api_token_with_env(env::var(TOKEN_ENV).ok())
    }

    fn api_token_with_env(&self, env_value: Option<String>) -> Option<SecretString> {
        env_value
            .filter(|v| !v.is_empty())
            .or_else(|| self.auth.token.clone())
            .map(SecretString::from)
    }

    pub fn set(&mut self, key: ConfigKey, value: String) -> Result<()> {
        match key {
            ConfigKey::ApiUrl => {
                Url::parse(&value).map_err(|e| {
                    CredoError::Config(format!("invalid api_url '{value}': {e}"))
                })?;
                self.api_url = Some(value);
            }
            ConfigKey::Token => self.auth.token = Some(value),
        }
        Ok(())
    }

    /// Printable value for a key; the token is masked.
    pub fn display_value(&self, key: ConfigKey) -> String {
        match key {
            ConfigKey::ApiUrl => self
                .api_url
                .clone()
                .unwrap_or_else(|| format!("{DEFAULT_API_URL} (default)")),
            ConfigKey::Token => match &self.auth.token {
                Some(token) => mask_token(token),
                None => "(not set)".to_string(),
            },
        }
    }
}

fn mask_token(token: &str) -> String {
    let len = token.chars().count();
    if len <= 8 {
        return "****".to_string();
    }
    let tail: String = token.chars().skip(len - 4).collect();
    format!("****{tail}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_guards::EnvGuard;
    use secrecy::ExposeSecret;
    use serial_test::serial;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.api_url.is_none());
        assert!(config.auth.token.is_none());
        assert_eq!(
            config.api_url_with_env(None).unwrap().as_str(),
            "http://localhost:8000/"
        );
    }

    #[test]
    fn test_env_overrides_file() {
        let mut config = Config::default();
        config.set(ConfigKey::Token, "file-token".to_string()).unwrap();
        config
            .set(ConfigKey::ApiUrl, "https://api.example.com".to_string())
            .unwrap();

        let token = config.api_token_with_env(Some("env-token".to_string())).unwrap();
        assert_eq!(token.expose_secret(), "env-token");

        let token = config.api_token_with_env(Some(String::new())).unwrap();
        assert_eq!(token.expose_secret(), "file-token");

        let url = config
            .api_url_with_env(Some("https://staging.example.com".to_string()))
            .unwrap();
        assert_eq!(url.host_str(), Some("staging.example.com"));
    }

    #[test]
    fn test_invalid_api_url_rejected() {
        let mut config = Config::default();
        assert!(config.set(ConfigKey::ApiUrl, "not a url".to_string()).is_err());
        assert!(config.api_url.is_none());
    }

    #[test]
    fn test_config_key_from_str() {
        assert_eq!("api_url".parse::<ConfigKey>().unwrap(), ConfigKey::ApiUrl);
        assert_eq!("api-url".parse::<ConfigKey>().unwrap(), ConfigKey::ApiUrl);
        assert_eq!("TOKEN".parse::<ConfigKey>().unwrap(), ConfigKey::Token);
        assert!("password".parse::<ConfigKey>().is_err());
    }

    #[test]
    fn test_token_is_masked() {
        let mut config = Config::default();
        assert_eq!(config.display_value(ConfigKey::Token), "(not set)");

        config.auth.token = Some("eyJhbGciOiJIUzI1NiJ9.secret".to_string());
        assert_eq!(config.display_value(ConfigKey::Token), "****cret");

        config.auth.token = Some("short".to_string());
        assert_eq!(config.display_value(ConfigKey::Token), "****");
    }

    #[test]
    fn test_config_serialization() {
        let mut config = Config::default();
        config.set(ConfigKey::Token, "tok_123".to_string()).unwrap();

        let yaml = serde_yaml_ng::to_string(&config).unwrap();
        let parsed: Config = serde_yaml_ng::from_str(&yaml).unwrap();

        assert_eq!(parsed.auth.token.as_deref(), Some("tok_123"));
        assert!(parsed.api_url.is_none());
    }

    #[test]
    #[serial]
    fn test_save_then_load_from_config_dir() {
        let dir = tempfile::TempDir::new().unwrap();
        let _dir_guard = unsafe { EnvGuard::set(CONFIG_DIR_ENV, dir.path()) };
        let _token_guard = unsafe { EnvGuard::remove(TOKEN_ENV) };

        assert_eq!(Config::config_path().unwrap(), dir.path().join("config.yaml"));
        assert!(Config::load().unwrap().auth.token.is_none());

        let mut config = Config::default();
        config
            .set(ConfigKey::ApiUrl, "https://registry.example.org".to_string())
            .unwrap();
        config.set(ConfigKey::Token, "saved-token".to_string()).unwrap();
        config.save().unwrap();

        let loaded = Config::load().unwrap();
        assert_eq!(loaded.api_url.as_deref(), Some("https://registry.example.org"));
        assert_eq!(loaded.api_token().unwrap().expose_secret(), "saved-token");
    }
}
