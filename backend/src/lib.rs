//! Backend library modules.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

/// Public OpenAPI surface served in debug builds and used by tooling.
pub use doc::ApiDoc;
/// Request tracing middleware attaching a `trace-id` header.
pub use middleware::trace::Trace;
