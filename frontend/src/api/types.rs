use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PasswordResetRequest {
    pub email: String,
}

/// Profile of the signed-in account, as served by the profile provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    pub primary_email: String,
    pub full_name: String,
    #[serde(default)]
    pub nickname: Option<String>,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub primary_activity: Option<String>,
    pub city: String,
    pub state: String,
    pub country: String,
    #[serde(default)]
    pub phone_numbers: Vec<String>,
}

impl ProfileResponse {
    /// Legal entities ("moral" persons) carry a company name and no gender.
    pub fn is_legal_entity(&self) -> bool {
        self.kind == "moral"
    }

    pub fn primary_phone(&self) -> Option<&str> {
        self.phone_numbers.first().map(String::as_str)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
    #[serde(default)]
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.error)
    }
}

impl std::error::Error for ApiError {}

impl ApiError {
    pub fn unknown(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "UNKNOWN".to_string(),
            details: None,
        }
    }

    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "REQUEST_FAILED".to_string(),
            details: None,
        }
    }

    /// Backend code, when the failure came from the backend rather than the transport.
    pub fn backend_code(&self) -> Option<&str> {
        match self.code.as_str() {
            "" | "UNKNOWN" | "REQUEST_FAILED" => None,
            code => Some(code),
        }
    }
}
