//! Ports connecting the domain to its adapters.
//!
//! Inbound adapters (HTTP handlers) depend on these traits rather than
//! on concrete persistence types, so handlers stay testable without
//! I/O and the storage backend can be swapped at startup.

mod user_store;

pub use user_store::{InMemoryUserStore, UserStore, UserStoreError};
