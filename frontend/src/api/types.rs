use leptos::*;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use crate::state::session::Role;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    #[serde(default)]
    pub role: Role,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterResponse {
    #[serde(default)]
    pub message: Option<String>,
}

/// Aggregate footprint figures computed by the server for `GET /dashboard`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    #[serde(rename = "total_carbon_footprint_co2e")]
    pub total_footprint: f64,
    pub total_population: i64,
    #[serde(rename = "per_capita_footprint_co2e")]
    pub per_capita_footprint: f64,
    #[serde(default)]
    pub component_breakdown: BTreeMap<String, f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorKind {
    /// No token was present for a call that needs one.
    MissingSession,
    /// The server answered 401 or 403.
    AuthRejected,
    /// Any other non-2xx answer.
    Http,
    /// The request never completed or the body could not be decoded.
    Transport,
    /// Rejected locally before any request was built.
    Validation,
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
    pub code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.error)
    }
}

impl std::error::Error for ApiError {}

impl From<ApiError> for String {
    fn from(error: ApiError) -> Self {
        error.error
    }
}

impl IntoView for ApiError {
    fn into_view(self) -> View {
        self.error.into_view()
    }
}

pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong";

impl ApiError {
    fn new(code: &str, msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: code.to_string(),
            status: None,
            details: None,
        }
    }

    pub fn missing_session() -> Self {
        Self::new("SESSION_MISSING", "Not logged in. Please log in again.")
    }

    pub fn auth_rejected(status: u16, msg: impl Into<String>) -> Self {
        Self {
            status: Some(status),
            ..Self::new("AUTH_REJECTED", msg)
        }
    }

    pub fn http(status: u16, msg: impl Into<String>) -> Self {
        Self {
            status: Some(status),
            ..Self::new("HTTP_ERROR", msg)
        }
    }

    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self::new("REQUEST_FAILED", msg)
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", msg)
    }

    pub fn unknown(msg: impl Into<String>) -> Self {
        Self::new("UNKNOWN", msg)
    }

    pub fn kind(&self) -> ApiErrorKind {
        match self.code.as_str() {
            "SESSION_MISSING" => ApiErrorKind::MissingSession,
            "AUTH_REJECTED" => ApiErrorKind::AuthRejected,
            "HTTP_ERROR" => ApiErrorKind::Http,
            "REQUEST_FAILED" => ApiErrorKind::Transport,
            "VALIDATION_ERROR" => ApiErrorKind::Validation,
            _ => ApiErrorKind::Unknown,
        }
    }

    /// True when the failure ended the session; callers must stop their flow
    /// instead of treating it as a recoverable error.
    pub fn is_session_terminated(&self) -> bool {
        matches!(
            self.kind(),
            ApiErrorKind::MissingSession | ApiErrorKind::AuthRejected
        )
    }

    /// Builds the error for a non-2xx answer, taking the message from the
    /// body's `error` field when there is one.
    pub fn from_status(status: u16, body: &Value) -> Self {
        let message = body
            .get("error")
            .and_then(Value::as_str)
            .filter(|msg| !msg.trim().is_empty())
            .unwrap_or(GENERIC_ERROR_MESSAGE)
            .to_string();
        let mut error = if status == 401 || status == 403 {
            Self::auth_rejected(status, message)
        } else {
            Self::http(status, message)
        };
        error.details = body.get("details").cloned();
        error
    }
}
