//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they
//! only depend on the domain port and remain testable without I/O. The
//! store handle is constructed once at startup and injected here;
//! handlers hold no state of their own across requests.

use std::sync::Arc;

use crate::domain::ports::UserStore;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// The persistence collaborator behind the users endpoints.
    pub users: Arc<dyn UserStore>,
}

impl HttpState {
    /// Bundle the given store for injection into handlers.
    pub fn new(users: Arc<dyn UserStore>) -> Self {
        Self { users }
    }
}
