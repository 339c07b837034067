use log::info;
use reqwest::Method;

use super::{
    client::ApiClient,
    types::{ApiError, LoginRequest, LoginResponse, RegisterRequest, RegisterResponse},
};
use crate::state::session::Session;

impl ApiClient {
    pub async fn register(&self, request: &RegisterRequest) -> Result<RegisterResponse, ApiError> {
        self.send_json(Method::POST, "/auth/register", Some(request), false)
            .await
    }

    /// Logs in and stores the returned token and role as the current session.
    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        let response: LoginResponse = self
            .send_json(Method::POST, "/auth/login", Some(request), false)
            .await?;
        if response.token.is_empty() {
            return Err(ApiError::unknown("Login response did not include a token"));
        }

        let session = Session::new(response.token.clone(), response.role.clone());
        self.session_store()
            .set(&session)
            .map_err(|e| ApiError::unknown(e.to_string()))?;
        info!("Logged in with role {}", response.role);
        Ok(response)
    }

    /// Local only: the server keeps no session state to revoke.
    pub fn logout(&self) {
        self.session_store().clear();
        info!("Logged out");
        self.navigator().redirect_to_login();
    }
}
