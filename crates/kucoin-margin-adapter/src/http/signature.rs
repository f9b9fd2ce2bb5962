/*
[INPUT]:  API credentials, request method, endpoint and body
[OUTPUT]: KuCoin authentication headers (KC-API-*)
[POS]:    HTTP layer - request signing for private endpoints
[UPDATE]: When changing signing algorithm or header format
*/

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use hmac::{Hmac, Mac};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use sha2::Sha256;

use crate::http::client::Credentials;
use crate::http::{MarginError, Result};

type HmacSha256 = Hmac<Sha256>;

pub const HEADER_API_KEY: &str = "kc-api-key";
pub const HEADER_API_SIGN: &str = "kc-api-sign";
pub const HEADER_API_TIMESTAMP: &str = "kc-api-timestamp";
pub const HEADER_API_PASSPHRASE: &str = "kc-api-passphrase";
pub const HEADER_API_KEY_VERSION: &str = "kc-api-key-version";

/// Signs requests for authenticated endpoints
#[derive(Debug, Clone)]
pub struct RequestSigner {
    credentials: Credentials,
}

impl RequestSigner {
    /// Create a new request signer for the given credentials
    pub fn new(credentials: Credentials) -> Self {
        Self { credentials }
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Sign a request according to the KuCoin API scheme
    ///
    /// Format: "{timestamp}{METHOD}{endpoint}{body}"
    /// where `endpoint` includes the query string for GET/DELETE.
    /// Returns base64-encoded HMAC-SHA256 signature
    pub fn sign_request(&self, timestamp: i64, method: &str, endpoint: &str, body: &str) -> String {
        let message = format!("{timestamp}{}{endpoint}{body}", method.to_uppercase());
        self.hmac_base64(message.as_bytes())
    }

    /// Passphrase header value for the configured key version.
    ///
    /// Version 1 keys send the passphrase as-is; later versions send it signed.
    pub fn passphrase(&self) -> String {
        if self.credentials.key_version == "1" {
            self.credentials.api_passphrase.clone()
        } else {
            self.hmac_base64(self.credentials.api_passphrase.as_bytes())
        }
    }

    /// Build the full set of authentication headers for one request
    pub fn auth_headers(
        &self,
        timestamp: i64,
        method: &str,
        endpoint: &str,
        body: &str,
    ) -> Result<HeaderMap> {
        let signature = self.sign_request(timestamp, method, endpoint, body);
        let mut headers = HeaderMap::new();
        insert_header(&mut headers, HEADER_API_KEY, &self.credentials.api_key)?;
        insert_header(&mut headers, HEADER_API_SIGN, &signature)?;
        insert_header(&mut headers, HEADER_API_TIMESTAMP, &timestamp.to_string())?;
        insert_header(&mut headers, HEADER_API_PASSPHRASE, &self.passphrase())?;
        insert_header(
            &mut headers,
            HEADER_API_KEY_VERSION,
            &self.credentials.key_version,
        )?;
        Ok(headers)
    }

    fn hmac_base64(&self, message: &[u8]) -> String {
        let mut mac = HmacSha256::new_from_slice(self.credentials.api_secret.as_bytes())
            .unwrap_or_else(|_| unreachable!("HMAC accepts keys of any length"));
        mac.update(message);
        BASE64.encode(mac.finalize().into_bytes())
    }
}

fn insert_header(headers: &mut HeaderMap, name: &'static str, value: &str) -> Result<()> {
    let value = HeaderValue::from_str(value)
        .map_err(|e| MarginError::Config(format!("invalid value for {name}: {e}")))?;
    headers.insert(HeaderName::from_static(name), value);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_credentials(key_version: &str) -> Credentials {
        Credentials {
            api_key: "test-key".to_string(),
            api_secret: "test-secret".to_string(),
            api_passphrase: "test-passphrase".to_string(),
            key_version: key_version.to_string(),
        }
    }

    #[test]
    fn test_sign_get_request() {
        let signer = RequestSigner::new(test_credentials("2"));
        let signature = signer.sign_request(
            1_700_000_000_000,
            "get",
            "/api/v1/margin/borrow?orderId=a2111213",
            "",
        );
        assert_eq!(signature, "w4zgJFHniJTqAhuvfVuHy1I652wO57esgQ2KXs+FlKs=");
    }

    #[test]
    fn test_sign_post_request() {
        let signer = RequestSigner::new(test_credentials("2"));
        let signature = signer.sign_request(
            1_700_000_000_000,
            "POST",
            "/api/v1/margin/repay/all",
            r#"{"currency":"USDT","sequence":"HIGHEST_RATE_FIRST","size":"10"}"#,
        );
        assert_eq!(signature, "4YUHjPE89jL7uaNbD0vIf4CYTj21wsJGSUYXXLDJzXE=");
    }

    #[test]
    fn test_passphrase_by_key_version() {
        let v2 = RequestSigner::new(test_credentials("2"));
        assert_eq!(
            v2.passphrase(),
            "UbgWiL7WdjQOVBl1OLuMgUbTl9VlKFsjFbLedtCDPrY="
        );

        let v1 = RequestSigner::new(test_credentials("1"));
        assert_eq!(v1.passphrase(), "test-passphrase");
    }

    #[test]
    fn test_auth_headers() {
        let signer = RequestSigner::new(test_credentials("2"));
        let headers = signer
            .auth_headers(1_700_000_000_000, "GET", "/api/v2/margin/accounts", "")
            .expect("headers");

        assert_eq!(headers.get("kc-api-key").unwrap(), "test-key");
        assert_eq!(headers.get("kc-api-timestamp").unwrap(), "1700000000000");
        assert_eq!(headers.get("kc-api-key-version").unwrap(), "2");
        assert!(headers.contains_key("kc-api-sign"));
        assert!(headers.contains_key("kc-api-passphrase"));
    }

    #[test]
    fn test_auth_headers_reject_invalid_key() {
        let mut credentials = test_credentials("2");
        credentials.api_key = "bad\nkey".to_string();
        let signer = RequestSigner::new(credentials);
        let err = signer
            .auth_headers(0, "GET", "/api/v2/margin/accounts", "")
            .expect_err("newline is not a valid header value");
        assert!(matches!(err, MarginError::Config(_)));
    }
}
