//! User data model.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// The single domain entity managed by this service.
///
/// ## Serialisation contract
/// Serialises as `{"id": "<uuid>", "name": ..., "email": ...}`. The
/// identifier is generated by the persistence layer at creation time;
/// `name` and `email` are stored verbatim. Email uniqueness is left to
/// the database schema and is not enforced here.
///
/// # Examples
/// ```
/// use backend::domain::{NewUser, User};
/// use uuid::Uuid;
///
/// let user = User::new(Uuid::new_v4(), NewUser::new("Ada", "ada@example.com"));
/// assert_eq!(user.name, "Ada");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    /// Stable identifier assigned by the persistence store.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    pub id: Uuid,
    /// The person's name, exactly as submitted.
    #[schema(example = "Ada Lovelace")]
    pub name: String,
    /// The person's email address, exactly as submitted.
    #[schema(example = "ada@example.com")]
    pub email: String,
}

impl User {
    /// Assemble a user from a generated identifier and a creation payload.
    #[must_use]
    pub fn new(id: Uuid, new_user: NewUser) -> Self {
        let NewUser { name, email } = new_user;
        Self { id, name, email }
    }
}

/// Creation payload for a [`User`]; the body of `POST /api/users`.
///
/// Both fields are trusted as parsed. Presence is enforced by JSON
/// deserialisation; content is not validated (see the store port docs).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct NewUser {
    /// The person's name.
    #[schema(example = "Ada Lovelace")]
    pub name: String,
    /// The person's email address.
    #[schema(example = "ada@example.com")]
    pub email: String,
}

impl NewUser {
    /// Build a creation payload from borrowed parts.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}
