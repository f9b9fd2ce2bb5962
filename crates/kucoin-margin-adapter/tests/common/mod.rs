/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for kucoin-margin-adapter tests

use std::sync::Mutex;

use async_trait::async_trait;
use kucoin_margin_adapter::{
    ApiRequest, ClientConfig, Credentials, MarginClient, MarginError, Result, Transport,
};
use serde_json::{Value, json};
use wiremock::MockServer;

/// Setup a mock HTTP server for testing
#[allow(dead_code)]
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Fixed credentials for signing tests
#[allow(dead_code)]
pub fn test_credentials() -> Credentials {
    Credentials::new("test-key", "test-secret", "test-passphrase")
}

/// HTTP-backed client pointed at the mock server
#[allow(dead_code)]
pub fn http_client(server: &MockServer, credentials: Option<Credentials>) -> MarginClient {
    let config = ClientConfig {
        base_url: server.uri(),
        ..ClientConfig::default()
    };
    MarginClient::http(config, credentials).expect("client init")
}

/// What the recording transport hands back
#[allow(dead_code)]
#[derive(Debug, Clone)]
pub enum Canned {
    Body(Value),
    Status(u16, String),
}

/// Transport double that records every request
#[derive(Debug)]
pub struct RecordingTransport {
    requests: Mutex<Vec<ApiRequest>>,
    canned: Canned,
}

#[allow(dead_code)]
impl RecordingTransport {
    pub fn new() -> Self {
        Self::returning(json!({"code": "200000", "data": {}}))
    }

    pub fn returning(body: Value) -> Self {
        Self {
            requests: Mutex::new(Vec::new()),
            canned: Canned::Body(body),
        }
    }

    pub fn failing(status: u16, body: &str) -> Self {
        Self {
            requests: Mutex::new(Vec::new()),
            canned: Canned::Status(status, body.to_string()),
        }
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().expect("requests lock").clone()
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn send(&self, request: ApiRequest) -> Result<Value> {
        self.requests.lock().expect("requests lock").push(request);
        match &self.canned {
            Canned::Body(body) => Ok(body.clone()),
            Canned::Status(status, body) => Err(MarginError::Status {
                status: *status,
                body: body.clone(),
            }),
        }
    }
}
