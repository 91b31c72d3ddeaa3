//! Port abstraction for user persistence and its errors.

use std::sync::Mutex;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{NewUser, User};

/// Persistence errors raised by user store adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserStoreError {
    /// Store connection could not be established.
    #[error("user store connection failed: {message}")]
    Connection { message: String },

    /// Query or mutation failed during execution.
    #[error("user store query failed: {message}")]
    Query { message: String },
}

impl UserStoreError {
    /// Create a connection error with the given message.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Create a query error with the given message.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

/// Driving port for the persistence collaborator.
///
/// The store owns the full lifecycle of user records: identifiers are
/// assigned by the implementation, never by callers. No update or
/// delete operation is exposed.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Return every stored user, in insertion order where the backend
    /// defines one.
    async fn list_users(&self) -> Result<Vec<User>, UserStoreError>;

    /// Persist one user from the creation payload and return the
    /// stored record, including its generated identifier.
    async fn create_user(&self, new_user: NewUser) -> Result<User, UserStoreError>;
}

/// In-memory store used by tests and as the fallback when no database
/// is configured at startup.
#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    users: Mutex<Vec<User>>,
}

impl InMemoryUserStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn list_users(&self) -> Result<Vec<User>, UserStoreError> {
        let users = self
            .users
            .lock()
            .map_err(|_| UserStoreError::query("user store mutex poisoned"))?;
        Ok(users.clone())
    }

    async fn create_user(&self, new_user: NewUser) -> Result<User, UserStoreError> {
        let user = User::new(Uuid::new_v4(), new_user);
        let mut users = self
            .users
            .lock()
            .map_err(|_| UserStoreError::query("user store mutex poisoned"))?;
        users.push(user.clone());
        Ok(user)
    }
}
