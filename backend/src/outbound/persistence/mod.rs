//! PostgreSQL persistence adapter using Diesel ORM.
//!
//! Concrete implementation of the `UserStore` port backed by
//! PostgreSQL via Diesel with async support through `diesel-async` and
//! `bb8` connection pooling.
//!
//! # Architecture
//!
//! - **Thin adapter**: the store implementation only translates between
//!   Diesel rows and domain types. No business logic lives here.
//! - **Internal models**: Diesel row structs (`models.rs`) and the
//!   schema definition (`schema.rs`) never leave this module.
//! - **Scoped connections**: every operation checks a connection out of
//!   the pool and the guard is dropped on all exit paths, so release is
//!   guaranteed on success and failure alike.
//! - **Strongly typed errors**: pool and Diesel failures are mapped to
//!   the port's `UserStoreError` variants.

mod diesel_user_store;
mod models;
mod pool;
mod schema;

pub use diesel_user_store::DieselUserStore;
pub use pool::{DbPool, PoolConfig, PoolError};
