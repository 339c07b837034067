use crate::api::{ApiError, LoginResponse};
use leptos::*;

pub const LOGIN_SUCCESS_FALLBACK: &str = "Login successful! Redirecting...";

#[derive(Clone, Copy)]
pub struct LoginFormState {
    pub email: RwSignal<String>,
    pub password: RwSignal<String>,
}

impl Default for LoginFormState {
    fn default() -> Self {
        Self {
            email: create_rw_signal(String::new()),
            password: create_rw_signal(String::new()),
        }
    }
}

pub fn validate_credentials(email: &str, password: &str) -> Result<(), ApiError> {
    if email.trim().is_empty() {
        return Err(ApiError::validation("Email is required"));
    }
    if password.is_empty() {
        return Err(ApiError::validation("Password is required"));
    }
    Ok(())
}

pub fn success_message(response: &LoginResponse) -> String {
    response
        .message
        .clone()
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| LOGIN_SUCCESS_FALLBACK.to_string())
}
