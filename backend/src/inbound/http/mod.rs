//! HTTP inbound adapter exposing REST endpoints and the client page.

pub mod error;
pub mod health;
pub mod page;
pub mod state;
pub mod users;

pub use error::ApiResult;
