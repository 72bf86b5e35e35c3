use thiserror::Error;

#[derive(Error, Debug)]
pub enum CredoError {
    /// The server could not be reached: connect failure, timeout, dropped connection.
    #[error("network error: {0}")]
    Network(String),

    /// The server answered with a non-2xx status.
    #[error("server returned {status}: {body}")]
    Server { status: u16, body: String },

    /// A 2xx response whose body did not match the expected record shape.
    #[error("unexpected response body: {0}")]
    Decode(String),

    /// A request was rejected locally before reaching the network.
    #[error("invalid request: {0}")]
    Validation(String),

    /// A list load or mutation failed; the message is the banner or alert text.
    #[error("{0}")]
    Failed(String),

    #[error("invalid status '{0}'")]
    InvalidStatus(String),

    #[error("invalid tier '{0}'")]
    InvalidTier(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    YamlParse(#[from] serde_yaml_ng::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CredoError {
    /// Banner text shown above a list whose refresh failed.
    ///
    /// Transport failures and server rejections get distinct wording; the
    /// label names the collection ("reviews", "subscriptions", ...).
    pub fn banner(&self, label: &str) -> String {
        match self {
            CredoError::Network(_) => "Failed to connect to server".to_string(),
            CredoError::Server { .. } | CredoError::Decode(_) => {
                format!("Failed to load {label}")
            }
            other => other.to_string(),
        }
    }
}

impl From<reqwest::Error> for CredoError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            return CredoError::Decode(err.to_string());
        }
        if let Some(status) = err.status() {
            return CredoError::Server {
                status: status.as_u16(),
                body: err.to_string(),
            };
        }
        CredoError::Network(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, CredoError>;
