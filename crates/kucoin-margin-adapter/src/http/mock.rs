/*
[INPUT]:  Requests issued by the endpoint bindings under test
[OUTPUT]: Recorded requests and a canned response
[POS]:    Test infrastructure - in-crate transport double
[UPDATE]: When the Transport trait changes
*/

use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::http::transport::{ApiRequest, Transport};
use crate::http::Result;

#[derive(Debug)]
pub(crate) struct RecordingTransport {
    requests: Mutex<Vec<ApiRequest>>,
    response: Value,
}

impl RecordingTransport {
    pub(crate) fn new() -> Self {
        Self::with_response(json!({"code": "200000", "data": {}}))
    }

    pub(crate) fn with_response(response: Value) -> Self {
        Self {
            requests: Mutex::new(Vec::new()),
            response,
        }
    }

    pub(crate) fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().expect("requests lock").clone()
    }

    /// The one request issued so far; panics on zero or several
    pub(crate) fn single(&self) -> ApiRequest {
        let requests = self.requests();
        assert_eq!(requests.len(), 1, "expected exactly one request");
        requests.into_iter().next().expect("one request")
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn send(&self, request: ApiRequest) -> Result<Value> {
        self.requests.lock().expect("requests lock").push(request);
        Ok(self.response.clone())
    }
}
