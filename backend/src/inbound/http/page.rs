//! Client view served at the application root.
//!
//! The page is a self-contained HTML document embedded at compile
//! time. Its script starts from an empty list, issues one fetch to
//! `/api/users` on load, and dumps the parsed response as text. There
//! is deliberately no loading indicator, error path, or re-fetch
//! trigger; a failed fetch leaves the empty initial state in place.

use actix_web::{get, http::header::ContentType, HttpResponse};

const USERS_PAGE: &str = include_str!("../../../assets/users.html");

/// Serve the users page.
#[get("/")]
pub async fn index() -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(USERS_PAGE)
}
