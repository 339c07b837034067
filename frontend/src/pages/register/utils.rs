use crate::api::{ApiError, RegisterResponse};
use crate::state::session::Role;
use leptos::*;

pub const REGISTER_SUCCESS_FALLBACK: &str = "Registration successful!";

/// Roles offered on the registration form.
pub const ROLE_CHOICES: [Role; 2] = [Role::User, Role::Admin];

#[derive(Clone, Copy)]
pub struct RegisterFormState {
    pub name: RwSignal<String>,
    pub email: RwSignal<String>,
    pub password: RwSignal<String>,
    pub role: RwSignal<Role>,
}

impl Default for RegisterFormState {
    fn default() -> Self {
        Self {
            name: create_rw_signal(String::new()),
            email: create_rw_signal(String::new()),
            password: create_rw_signal(String::new()),
            role: create_rw_signal(Role::User),
        }
    }
}

impl RegisterFormState {
    pub fn reset(&self) {
        self.name.set(String::new());
        self.email.set(String::new());
        self.password.set(String::new());
        self.role.set(Role::User);
    }
}

pub fn validate_registration(name: &str, email: &str, password: &str) -> Result<(), ApiError> {
    if name.trim().is_empty() {
        return Err(ApiError::validation("Name is required"));
    }
    if email.trim().is_empty() {
        return Err(ApiError::validation("Email is required"));
    }
    if password.is_empty() {
        return Err(ApiError::validation("Password is required"));
    }
    Ok(())
}

pub fn success_message(response: &RegisterResponse) -> String {
    response
        .message
        .clone()
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| REGISTER_SUCCESS_FALLBACK.to_string())
}
