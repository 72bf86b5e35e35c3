//! HTTP adapters for the dashboard API.
//!
//! # Security Note - Logging
//!
//! The bearer token is held as a [`SecretString`] and only exposed while the
//! `Authorization` header is built. The header value is marked sensitive and
//! wrapped in [`RedactedHeader`], so neither reqwest's debug logging nor our
//! own `tracing` output can print it.

pub mod auth;
pub mod subscriptions;
pub mod tasks;

use std::fmt;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{self, HeaderValue};
use reqwest::{Client, Method, RequestBuilder, Response};
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

use crate::entity::ListItem;
use crate::error::{CredoError, Result};
use crate::list::{FilterCriteria, FilterMode, PageResult};

pub use auth::{PasswordReset, ResetOutcome};
pub use subscriptions::{AssignTier, SubscriptionSource, TierCatalog};
pub use tasks::CollectionSource;

/// Supplies the bearer credential for authorized endpoints.
///
/// Acquisition and refresh live elsewhere; adapters only read.
pub trait CredentialSource: Send + Sync {
    fn bearer(&self) -> Option<SecretString>;
}

/// A fixed token, typically from config or the environment.
pub struct StaticToken(SecretString);

impl StaticToken {
    pub fn new(token: SecretString) -> Self {
        Self(token)
    }
}

impl CredentialSource for StaticToken {
    fn bearer(&self) -> Option<SecretString> {
        Some(self.0.clone())
    }
}

/// No credential; authorized endpoints will answer 401.
pub struct Anonymous;

impl CredentialSource for Anonymous {
    fn bearer(&self) -> Option<SecretString> {
        None
    }
}

/// Wrapper for sensitive header values that redacts the value when formatted.
struct RedactedHeader {
    value: HeaderValue,
}

impl RedactedHeader {
    fn bearer(token: &SecretString) -> Result<Self> {
        let mut value = HeaderValue::from_str(&format!("Bearer {}", token.expose_secret()))
            .map_err(|_| {
                CredoError::Config("token contains characters not allowed in a header".to_string())
            })?;
        value.set_sensitive(true);
        Ok(Self { value })
    }
}

impl fmt::Display for RedactedHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[REDACTED]")
    }
}

impl fmt::Debug for RedactedHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RedactedHeader")
            .field("value", &"[REDACTED]")
            .finish()
    }
}

/// Whether a request carries the bearer credential
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Auth {
    Bearer,
    None,
}

/// Shared HTTP client bound to one API base URL and one credential.
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: Url,
    credential: Arc<dyn CredentialSource>,
}

impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    /// Create a client for `base_url`.
    ///
    /// Configures a 10s connect timeout and 30s total timeout. No retries.
    pub fn new(base_url: Url, credential: Arc<dyn CredentialSource>) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| CredoError::Config(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url,
            credential,
        })
    }

    /// Resolve an absolute API path against the base URL, keeping any base path prefix.
    fn endpoint(&self, path: &str) -> Result<Url> {
        let raw = format!("{}{}", self.base_url.as_str().trim_end_matches('/'), path);
        Url::parse(&raw).map_err(|e| CredoError::Config(format!("invalid endpoint '{raw}': {e}")))
    }

    fn authorize(&self, request: RequestBuilder, auth: Auth) -> Result<RequestBuilder> {
        if auth == Auth::None {
            return Ok(request);
        }
        match self.credential.bearer() {
            Some(token) => {
                let header = RedactedHeader::bearer(&token)?;
                tracing::trace!("attaching authorization {header}");
                Ok(request.header(header::AUTHORIZATION, header.value))
            }
            None => {
                tracing::debug!("no credential available; sending request unauthenticated");
                Ok(request)
            }
        }
    }

    /// GET `path` with `query` and decode the JSON body.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        let url = self.endpoint(path)?;
        tracing::debug!("GET {url} {query:?}");

        let request = self.authorize(self.http.get(url).query(query), Auth::Bearer)?;
        let response = ensure_success(request.send().await?).await?;
        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|e| CredoError::Decode(e.to_string()))
    }

    /// Send `body` as JSON with `method`; the response body is ignored.
    pub async fn send_json<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: &B,
        auth: Auth,
    ) -> Result<()> {
        let url = self.endpoint(path)?;
        tracing::debug!("{method} {url}");

        let request = self.authorize(self.http.request(method, url).json(body), auth)?;
        ensure_success(request.send().await?).await?;
        Ok(())
    }
}

/// Turn a non-2xx response into `CredoError::Server`, keeping its body.
async fn ensure_success(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = match response.text().await {
        Ok(body) => body,
        Err(e) => {
            tracing::debug!("failed to read {status} response body: {e}");
            String::new()
        }
    };
    Err(CredoError::Server {
        status: status.as_u16(),
        body,
    })
}

/// Reject a page number of 0 before any request is made.
pub(crate) fn check_page<S>(criteria: &FilterCriteria<S>) -> Result<()> {
    if criteria.page == 0 {
        return Err(CredoError::Validation("page must be at least 1".to_string()));
    }
    Ok(())
}

/// One collection endpoint feeding a list view.
pub trait DataSource: Send + Sync {
    type Item: ListItem;

    /// Collection name used in error banners ("reviews", "subscriptions").
    fn label(&self) -> &'static str;

    fn mode(&self) -> FilterMode;

    /// Fetch the page described by `criteria`.
    ///
    /// Client-filtered sources ignore everything but the page check and
    /// return the whole collection.
    fn fetch_page(
        &self,
        criteria: &FilterCriteria<<Self::Item as ListItem>::Status>,
    ) -> impl Future<Output = Result<PageResult<Self::Item>>> + Send;
}

/// A single-field state change applied to one entity.
pub trait Mutator: Send + Sync {
    type Item: ListItem;
    type Value: fmt::Debug + Clone + PartialEq + Send + Sync;

    /// Verb phrase for alerts, e.g. "assign subscription".
    fn action(&self) -> &'static str;

    /// Value preselected when editing starts on `item`.
    fn current_value(&self, item: &Self::Item) -> Option<Self::Value>;

    fn mutate(&self, id: i64, value: &Self::Value) -> impl Future<Output = Result<()>> + Send;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> ApiClient {
        ApiClient::new(Url::parse(base).unwrap(), Arc::new(Anonymous)).unwrap()
    }

    #[test]
    fn test_endpoint_keeps_base_prefix() {
        let api = client("https://example.com/v2/");
        assert_eq!(
            api.endpoint("/admin/tiers").unwrap().as_str(),
            "https://example.com/v2/admin/tiers"
        );

        let api = client("http://localhost:8000");
        assert_eq!(
            api.endpoint("/api/registry/reviews").unwrap().as_str(),
            "http://localhost:8000/api/registry/reviews"
        );
    }

    #[test]
    fn test_redacted_header_never_prints_token() {
        let token = SecretString::from("super-secret-token".to_string());
        let header = RedactedHeader::bearer(&token).unwrap();

        assert_eq!(header.to_string(), "[REDACTED]");
        assert!(!format!("{header:?}").contains("super-secret"));
        assert!(header.value.is_sensitive());
    }

    #[test]
    fn test_check_page_rejects_zero() {
        let mut criteria: FilterCriteria<crate::types::TierCode> = FilterCriteria::default();
        assert!(check_page(&criteria).is_ok());

        criteria.page = 0;
        assert!(matches!(
            check_page(&criteria),
            Err(CredoError::Validation(_))
        ));
    }

    #[test]
    fn test_static_token_exposes_bearer() {
        let source = StaticToken::new(SecretString::from("abc".to_string()));
        assert_eq!(source.bearer().unwrap().expose_secret(), "abc");
        assert!(Anonymous.bearer().is_none());
    }
}
