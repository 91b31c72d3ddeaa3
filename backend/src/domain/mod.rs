//! Domain primitives and ports.
//!
//! Purpose: define the strongly typed domain entities and the driving
//! port used by the HTTP adapter and the persistence layer. Keep types
//! transport agnostic and document serialisation contracts (serde) in
//! each type's Rustdoc.
//!
//! Public surface:
//! - [`User`] / [`NewUser`] — the single managed entity and its
//!   creation payload.
//! - [`Error`] / [`ErrorCode`] — API error response payload.
//! - [`ports::UserStore`] — the persistence collaborator port.

pub mod error;
pub mod ports;
pub mod user;

pub use self::error::{Error, ErrorCode};
pub use self::user::{NewUser, User};
