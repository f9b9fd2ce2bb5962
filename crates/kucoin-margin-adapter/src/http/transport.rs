/*
[INPUT]:  Endpoint descriptors (verb, path, flat parameter object)
[OUTPUT]: Parsed JSON response bodies, returned verbatim
[POS]:    HTTP layer - transport seam and reqwest-backed implementation
[UPDATE]: When changing wire encoding, signing flow or response handling
*/

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method, Url};
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::http::client::{ClientConfig, Credentials};
use crate::http::signature::RequestSigner;
use crate::http::{MarginError, Result};
use crate::types::PageRequest;

/// Flat parameter object forwarded as query string or JSON body
pub type Params = Map<String, Value>;

/// A single call against the REST API
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub params: Params,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>, params: Params) -> Self {
        Self {
            method,
            path: path.into(),
            params,
        }
    }

    pub fn get(path: impl Into<String>, params: Params) -> Self {
        Self::new(Method::GET, path, params)
    }

    pub fn post(path: impl Into<String>, params: Params) -> Self {
        Self::new(Method::POST, path, params)
    }

    pub fn delete(path: impl Into<String>, params: Params) -> Self {
        Self::new(Method::DELETE, path, params)
    }

    /// Whether params travel in the body rather than the query string
    pub fn has_body(&self) -> bool {
        self.method == Method::POST
    }
}

/// Collaborator that performs the actual HTTP exchange.
///
/// Implementations own base URL, authentication and serialization. The
/// endpoint bindings never inspect or rewrap what comes back.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: ApiRequest) -> Result<Value>;
}

#[async_trait]
impl<'a, T: Transport + ?Sized> Transport for &'a T {
    async fn send(&self, request: ApiRequest) -> Result<Value> {
        (**self).send(request).await
    }
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Arc<T> {
    async fn send(&self, request: ApiRequest) -> Result<Value> {
        (**self).send(request).await
    }
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Box<T> {
    async fn send(&self, request: ApiRequest) -> Result<Value> {
        (**self).send(request).await
    }
}

/// Incremental builder for [`Params`]; `None` values are left out entirely.
#[derive(Debug, Default)]
pub(crate) struct ParamsBuilder(Params);

impl ParamsBuilder {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.0.insert(key.to_string(), value.into());
        self
    }

    pub(crate) fn with_opt(self, key: &str, value: Option<impl Into<Value>>) -> Self {
        match value {
            Some(value) => self.with(key, value),
            None => self,
        }
    }

    pub(crate) fn page(self, page: PageRequest) -> Self {
        self.with_opt("currentPage", page.current_page)
            .with_opt("pageSize", page.page_size)
    }

    pub(crate) fn build(self) -> Params {
        self.0
    }
}

/// Serialize a request struct into a flat parameter object
pub(crate) fn to_params<S: Serialize>(value: &S) -> Result<Params> {
    match serde_json::to_value(value)? {
        Value::Object(map) => Ok(map),
        other => Err(MarginError::Config(format!(
            "request parameters must serialize to an object, got {other}"
        ))),
    }
}

/// reqwest-backed transport with KuCoin request signing
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http_client: Client,
    base_url: Url,
    signer: Option<RequestSigner>,
}

impl HttpTransport {
    /// Create a transport with the given configuration
    pub fn new(config: ClientConfig, credentials: Option<Credentials>) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()?;

        let base_url = Url::parse(&config.base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(MarginError::Config(format!(
                "base url cannot carry a path: {}",
                config.base_url
            )));
        }

        Ok(Self {
            http_client,
            base_url,
            signer: credentials.map(RequestSigner::new),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Get credentials if set
    pub fn credentials(&self) -> Option<&Credentials> {
        self.signer.as_ref().map(RequestSigner::credentials)
    }

    /// Build full URL, appending the query string for GET/DELETE.
    ///
    /// The endpoint path is appended to any path already on the base URL.
    fn request_url(&self, request: &ApiRequest) -> Result<Url> {
        let mut url = self.base_url.clone();
        let prefix = url.path().trim_end_matches('/').to_string();
        url.set_path(&format!("{prefix}{}", request.path));
        url.set_query(None);
        url.set_fragment(None);
        if !request.has_body() && !request.params.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in &request.params {
                pairs.append_pair(key, &query_value(value));
            }
        }
        Ok(url)
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: ApiRequest) -> Result<Value> {
        let url = self.request_url(&request)?;
        let endpoint = match url.query() {
            Some(query) => format!("{}?{}", url.path(), query),
            None => url.path().to_string(),
        };
        let body = if request.has_body() {
            serde_json::to_string(&request.params)?
        } else {
            String::new()
        };

        debug!(method = %request.method, endpoint = %endpoint, "sending request");

        let mut builder = self.http_client.request(request.method.clone(), url);
        if request.has_body() {
            builder = builder
                .header(CONTENT_TYPE, "application/json")
                .body(body.clone());
        }
        if let Some(signer) = &self.signer {
            let timestamp = Utc::now().timestamp_millis();
            let headers =
                signer.auth_headers(timestamp, request.method.as_str(), &endpoint, &body)?;
            builder = builder.headers(headers);
        }

        let response = builder.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            warn!(
                method = %request.method,
                endpoint = %endpoint,
                status = status.as_u16(),
                "request returned non-success status"
            );
            return Err(MarginError::status_error(status, text));
        }
        if text.trim().is_empty() {
            return Err(MarginError::InvalidResponse(format!(
                "empty response body from {endpoint}"
            )));
        }

        Ok(serde_json::from_str(&text)?)
    }
}

fn query_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn transport(base_url: &str) -> HttpTransport {
        let config = ClientConfig {
            base_url: base_url.to_string(),
            ..ClientConfig::default()
        };
        HttpTransport::new(config, None).expect("transport init")
    }

    #[test]
    fn test_params_builder_skips_none() {
        let params = ParamsBuilder::new()
            .with("currency", "BTC")
            .with_opt("term", None::<u32>)
            .with_opt("currentPage", Some(2u32))
            .build();

        assert_eq!(Value::Object(params), json!({"currency": "BTC", "currentPage": 2}));
    }

    #[test]
    fn test_to_params_rejects_non_object() {
        assert!(matches!(to_params(&"BTC"), Err(MarginError::Config(_))));
        assert!(to_params(&json!({"a": 1})).is_ok());
    }

    #[test]
    fn test_request_url_for_get_appends_query() {
        let transport = transport("https://api.kucoin.com");
        let request = ApiRequest::get(
            "/api/v1/margin/lend/active",
            ParamsBuilder::new()
                .with("currency", "BTC")
                .with("currentPage", 2u32)
                .with("pageSize", 50u32)
                .build(),
        );

        let url = transport.request_url(&request).expect("url");
        assert_eq!(url.path(), "/api/v1/margin/lend/active");
        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert_eq!(
            pairs,
            vec![
                ("currency".to_string(), "BTC".to_string()),
                ("currentPage".to_string(), "2".to_string()),
                ("pageSize".to_string(), "50".to_string()),
            ]
        );
    }

    #[test]
    fn test_request_url_without_params_has_no_query() {
        let transport = transport("https://api.kucoin.com");
        let request = ApiRequest::delete("/api/v1/margin/lend/abc123", Params::new());
        let url = transport.request_url(&request).expect("url");
        assert_eq!(url.as_str(), "https://api.kucoin.com/api/v1/margin/lend/abc123");
    }

    #[test]
    fn test_request_url_keeps_base_path_prefix() {
        let request = ApiRequest::get("/api/v2/margin/lend/config", Params::new());

        let url = transport("https://gateway.example.com/proxy")
            .request_url(&request)
            .expect("url");
        assert_eq!(url.path(), "/proxy/api/v2/margin/lend/config");

        let url = transport("https://gateway.example.com/proxy/")
            .request_url(&request)
            .expect("url");
        assert_eq!(url.path(), "/proxy/api/v2/margin/lend/config");
    }

    #[test]
    fn test_non_hierarchical_base_url_rejected() {
        let config = ClientConfig {
            base_url: "mailto:ops@example.com".to_string(),
            ..ClientConfig::default()
        };
        assert!(matches!(
            HttpTransport::new(config, None),
            Err(MarginError::Config(_))
        ));
    }

    #[test]
    fn test_request_url_for_post_keeps_params_out_of_query() {
        let transport = transport("https://api.kucoin.com");
        let request = ApiRequest::post(
            "/api/v1/margin/borrow",
            ParamsBuilder::new().with("currency", "USDT").build(),
        );
        let url = transport.request_url(&request).expect("url");
        assert_eq!(url.query(), None);
    }

    #[test]
    fn test_query_value_rendering() {
        assert_eq!(query_value(&json!("BTC")), "BTC");
        assert_eq!(query_value(&json!(7)), "7");
        assert_eq!(query_value(&json!(true)), "true");
    }
}
