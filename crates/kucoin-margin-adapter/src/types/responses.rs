/*
[INPUT]:  Parsed JSON bodies handed back by the transport
[OUTPUT]: Response envelope with read-only accessors and typed data decoding
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Success codes used by the v1 and v2 endpoint families
pub const SUCCESS_CODES: [&str; 2] = ["200000", "200"];

/// Response envelope exactly as returned by the transport.
///
/// Typically `{code, data}` for v1 endpoints and
/// `{success, code, msg, retry, data}` for v2. Nothing is stripped or
/// rewritten; API-level errors stay in the envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApiResponse(pub Value);

impl ApiResponse {
    /// API code as text; numeric codes are rendered as their digits
    pub fn code(&self) -> Option<String> {
        match self.0.get("code")? {
            Value::String(code) => Some(code.clone()),
            Value::Number(code) => Some(code.to_string()),
            _ => None,
        }
    }

    pub fn msg(&self) -> Option<&str> {
        self.0.get("msg").and_then(Value::as_str)
    }

    /// True when the code is a success code and `success` is not false
    pub fn is_success(&self) -> bool {
        let code_ok = self
            .code()
            .is_some_and(|code| SUCCESS_CODES.contains(&code.as_str()));
        let flag_ok = self.0.get("success").and_then(Value::as_bool) != Some(false);
        code_ok && flag_ok
    }

    pub fn data(&self) -> Option<&Value> {
        self.0.get("data")
    }

    /// Decode the `data` field into a typed view
    pub fn decode_data<T: DeserializeOwned>(&self) -> serde_json::Result<T> {
        T::deserialize(self.data().unwrap_or(&Value::Null))
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_inner(self) -> Value {
        self.0
    }
}

impl From<Value> for ApiResponse {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

impl From<ApiResponse> for Value {
    fn from(response: ApiResponse) -> Self {
        response.0
    }
}

impl PartialEq<Value> for ApiResponse {
    fn eq(&self, other: &Value) -> bool {
        &self.0 == other
    }
}
