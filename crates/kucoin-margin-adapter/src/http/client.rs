/*
[INPUT]:  HTTP configuration (base URL, timeouts, credentials) or an injected transport
[OUTPUT]: MarginClient ready for endpoint calls
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing client behavior
*/

use std::fmt;
use std::time::Duration;

use crate::http::transport::{ApiRequest, HttpTransport, Transport};
use crate::http::Result;
use crate::types::ApiResponse;

/// Base URL for the KuCoin REST API
pub const DEFAULT_BASE_URL: &str = "https://api.kucoin.com";

/// Default API key version sent in `KC-API-KEY-VERSION`
pub const DEFAULT_KEY_VERSION: &str = "2";

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

/// Credentials for authenticated requests
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub api_key: String,
    pub api_secret: String,
    pub api_passphrase: String,
    pub key_version: String,
}

impl Credentials {
    pub fn new(
        api_key: impl Into<String>,
        api_secret: impl Into<String>,
        api_passphrase: impl Into<String>,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: api_secret.into(),
            api_passphrase: api_passphrase.into(),
            key_version: DEFAULT_KEY_VERSION.to_string(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &self.api_key)
            .field("api_secret", &"<redacted>")
            .field("api_passphrase", &"<redacted>")
            .field("key_version", &self.key_version)
            .finish()
    }
}

/// Client for the margin borrow-and-lend endpoints.
///
/// Every binding issues exactly one call on the owned transport and hands
/// back whatever the transport produced.
#[derive(Debug, Clone)]
pub struct MarginClient<T = HttpTransport> {
    transport: T,
}

impl MarginClient<HttpTransport> {
    /// Create a client backed by the reqwest transport
    pub fn http(config: ClientConfig, credentials: Option<Credentials>) -> Result<Self> {
        Ok(Self::new(HttpTransport::new(config, credentials)?))
    }
}

impl<T: Transport> MarginClient<T> {
    /// Create a client over an explicit transport
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Get the underlying transport
    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn into_transport(self) -> T {
        self.transport
    }

    pub(crate) async fn call(&self, request: ApiRequest) -> Result<ApiResponse> {
        self.transport.send(request).await.map(ApiResponse::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "https://api.kucoin.com");
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.connect_timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_credentials_debug_redacts_secrets() {
        let credentials = Credentials::new("key", "super-secret", "pass-phrase");
        let rendered = format!("{credentials:?}");
        assert!(rendered.contains("key"));
        assert!(!rendered.contains("super-secret"));
        assert!(!rendered.contains("pass-phrase"));
        assert_eq!(credentials.key_version, "2");
    }

    #[test]
    fn test_http_client_rejects_bad_base_url() {
        let config = ClientConfig {
            base_url: "not a url".to_string(),
            ..ClientConfig::default()
        };
        assert!(MarginClient::http(config, None).is_err());
    }
}
