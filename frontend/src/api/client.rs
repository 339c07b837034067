use log::{debug, error, warn};
use reqwest::{header::CONTENT_TYPE, Client, Method, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use std::rc::Rc;

use crate::{
    api::types::ApiError,
    config,
    state::session::{BrowserSessionStore, Session, SessionStore},
    utils::navigation::{BrowserNavigator, Navigator},
};

/// Builds and sends every request to the remote service.
///
/// Cloning is cheap and clones share the HTTP connection pool, the session
/// store and the navigator.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
    session: Rc<dyn SessionStore>,
    navigator: Rc<dyn Navigator>,
    on_session_ended: Option<Rc<dyn Fn()>>,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
            session: Rc::new(BrowserSessionStore),
            navigator: Rc::new(BrowserNavigator),
            on_session_ended: None,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: Some(config::normalize_base_url(&base_url.into())),
            ..Self::new()
        }
    }

    pub fn with_session_store(mut self, store: impl SessionStore + 'static) -> Self {
        self.session = Rc::new(store);
        self
    }

    pub fn with_navigator(mut self, navigator: impl Navigator + 'static) -> Self {
        self.navigator = Rc::new(navigator);
        self
    }

    /// Runs whenever a request finds the session missing or rejected, after
    /// the store has been cleared.
    pub fn on_session_ended(mut self, hook: impl Fn() + 'static) -> Self {
        self.on_session_ended = Some(Rc::new(hook));
        self
    }

    pub fn session_store(&self) -> &dyn SessionStore {
        self.session.as_ref()
    }

    pub fn navigator(&self) -> &dyn Navigator {
        self.navigator.as_ref()
    }

    pub fn current_session(&self) -> Option<Session> {
        self.session.get()
    }

    pub(crate) async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.clone()
        } else {
            config::await_api_base_url().await
        }
    }

    fn handle_auth_rejected(&self, status: StatusCode, path: &str) {
        warn!("{} from {}; clearing session", status.as_u16(), path);
        self.session.clear();
        self.end_session();
    }

    fn end_session(&self) {
        if let Some(hook) = &self.on_session_ended {
            hook();
        }
        self.navigator.redirect_to_login();
    }

    /// Sends one request and normalizes the answer.
    ///
    /// With `requires_auth` and no session, nothing is sent: the caller gets
    /// `SESSION_MISSING` and the navigator is asked for the login page. Any
    /// 401/403 clears the session, whichever endpoint produced it.
    pub async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
        requires_auth: bool,
    ) -> Result<Value, ApiError> {
        let session = if requires_auth {
            match self.session.get() {
                Some(session) => Some(session),
                None => {
                    warn!("No session for {} {}; redirecting to login", method, path);
                    self.end_session();
                    return Err(ApiError::missing_session());
                }
            }
        } else {
            None
        };

        let url = join_url(&self.resolved_base_url().await, path);
        debug!("{} {}", method, url);

        let mut request = self
            .client
            .request(method, &url)
            .header(CONTENT_TYPE, "application/json");
        if let Some(session) = &session {
            request = request.bearer_auth(&session.token);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(|e| {
            error!("Request to {} failed: {}", url, e);
            ApiError::request_failed(format!("Request failed: {}", e))
        })?;

        let status = response.status();
        let text = response.text().await.map_err(|e| {
            error!("Reading response from {} failed: {}", url, e);
            ApiError::request_failed(format!("Request failed: {}", e))
        })?;
        let parsed = parse_body(&text);

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            self.handle_auth_rejected(status, path);
            return Err(ApiError::from_status(
                status.as_u16(),
                parsed.as_ref().unwrap_or(&Value::Null),
            ));
        }

        if !status.is_success() {
            let err = ApiError::from_status(
                status.as_u16(),
                parsed.as_ref().unwrap_or(&Value::Null),
            );
            warn!("{} {} -> {}: {}", status.as_u16(), path, err.code, err.error);
            return Err(err);
        }

        parsed.map_err(|e| {
            error!("Malformed response from {}: {}", url, e);
            ApiError::request_failed(format!("Failed to parse response: {}", e))
        })
    }

    /// Typed wrapper over [`ApiClient::send`].
    pub async fn send_json<B, T>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        requires_auth: bool,
    ) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = body
            .map(serde_json::to_value)
            .transpose()
            .map_err(|e| ApiError::validation(format!("Failed to encode request: {}", e)))?;
        let value = self.send(method, path, body.as_ref(), requires_auth).await?;
        serde_json::from_value(value)
            .map_err(|e| ApiError::request_failed(format!("Failed to parse response: {}", e)))
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

pub(crate) fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

// An empty body (e.g. a bare 204) reads as `null`.
fn parse_body(text: &str) -> Result<Value, serde_json::Error> {
    if text.trim().is_empty() {
        Ok(Value::Null)
    } else {
        serde_json::from_str(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_url_handles_slashes() {
        assert_eq!(join_url("http://h:8080", "/electric"), "http://h:8080/electric");
        assert_eq!(join_url("http://h:8080/", "electric/3"), "http://h:8080/electric/3");
        assert_eq!(join_url("http://h/api/", "/dashboard"), "http://h/api/dashboard");
    }

    #[test]
    fn parse_body_treats_blank_as_null() {
        assert_eq!(parse_body("").unwrap(), Value::Null);
        assert_eq!(parse_body("  \n").unwrap(), Value::Null);
        assert_eq!(parse_body(r#"{"a":1}"#).unwrap()["a"], 1);
        assert!(parse_body("<html>").is_err());
    }
}
