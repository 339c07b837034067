use serde::{Deserialize, Serialize};
use std::{cell::RefCell, rc::Rc};
use thiserror::Error;

use crate::utils::storage as storage_utils;

pub const TOKEN_KEY: &str = "jwt_token";
pub const ROLE_KEY: &str = "user_role";

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    Admin,
    #[default]
    User,
    Other(String),
}

impl Role {
    pub fn as_str(&self) -> &str {
        match self {
            Role::Admin => "admin",
            Role::User => "user",
            Role::Other(other) => other,
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }
}

impl From<String> for Role {
    fn from(raw: String) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "admin" => Role::Admin,
            "user" | "" => Role::User,
            other => Role::Other(other.to_string()),
        }
    }
}

impl From<&str> for Role {
    fn from(raw: &str) -> Self {
        Role::from(raw.to_string())
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.as_str().to_string()
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The authenticated user as far as this client knows it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub role: Role,
}

impl Session {
    pub fn new(token: impl Into<String>, role: impl Into<Role>) -> Self {
        Self {
            token: token.into(),
            role: role.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("localStorage is not available: {0}")]
    Unavailable(String),
    #[error("failed to write `{key}` to localStorage")]
    Write { key: &'static str },
}

/// Durable slot holding the current session.
///
/// There is no expiry check here; a stale token is only discovered when the
/// server rejects it.
pub trait SessionStore {
    fn get(&self) -> Option<Session>;
    fn set(&self, session: &Session) -> Result<(), StorageError>;
    fn clear(&self);
}

/// `window.localStorage`, under the `jwt_token` / `user_role` keys.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserSessionStore;

impl SessionStore for BrowserSessionStore {
    fn get(&self) -> Option<Session> {
        let storage = storage_utils::local_storage().ok()?;
        let token = storage
            .get_item(TOKEN_KEY)
            .ok()
            .flatten()
            .filter(|t| !t.is_empty())?;
        let role = storage
            .get_item(ROLE_KEY)
            .ok()
            .flatten()
            .map(Role::from)
            .unwrap_or(Role::User);
        Some(Session { token, role })
    }

    fn set(&self, session: &Session) -> Result<(), StorageError> {
        let storage = storage_utils::local_storage().map_err(StorageError::Unavailable)?;
        storage
            .set_item(TOKEN_KEY, &session.token)
            .map_err(|_| StorageError::Write { key: TOKEN_KEY })?;
        storage
            .set_item(ROLE_KEY, session.role.as_str())
            .map_err(|_| StorageError::Write { key: ROLE_KEY })?;
        Ok(())
    }

    fn clear(&self) {
        if let Ok(storage) = storage_utils::local_storage() {
            let _ = storage.remove_item(TOKEN_KEY);
            let _ = storage.remove_item(ROLE_KEY);
        }
    }
}

/// In-process store; clones share the same slot.
#[derive(Debug, Clone, Default)]
pub struct MemorySessionStore {
    slot: Rc<RefCell<Option<Session>>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_session(session: Session) -> Self {
        Self {
            slot: Rc::new(RefCell::new(Some(session))),
        }
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self) -> Option<Session> {
        self.slot.borrow().clone()
    }

    fn set(&self, session: &Session) -> Result<(), StorageError> {
        *self.slot.borrow_mut() = Some(session.clone());
        Ok(())
    }

    fn clear(&self) {
        self.slot.borrow_mut().take();
    }
}
