//! Server construction and wiring.

mod config;

pub use config::ServerConfig;

use std::sync::Arc;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{web, App, HttpServer};

use backend::domain::ports::{InMemoryUserStore, UserStore};
use backend::inbound::http::health::{live, ready, HealthState};
use backend::inbound::http::page::index;
use backend::inbound::http::state::HttpState;
use backend::inbound::http::users::{create_user, list_users};
use backend::outbound::persistence::DieselUserStore;
use backend::Trace;

#[cfg(debug_assertions)]
use actix_web::HttpResponse;
#[cfg(debug_assertions)]
use backend::ApiDoc;
#[cfg(debug_assertions)]
use utoipa::OpenApi;

/// Pick the store implementation from the configuration.
///
/// Database-backed when a pool is configured, otherwise the in-memory
/// fallback so the server starts without a database.
fn build_store(config: &ServerConfig) -> Arc<dyn UserStore> {
    match &config.db_pool {
        Some(pool) => Arc::new(DieselUserStore::new(pool.clone())),
        None => Arc::new(InMemoryUserStore::new()),
    }
}

#[cfg(debug_assertions)]
async fn openapi_json() -> HttpResponse {
    HttpResponse::Ok().json(ApiDoc::openapi())
}

fn build_app(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let api = web::scope("/api").service(list_users).service(create_user);

    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(Trace)
        .service(api)
        .service(index)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.route("/api-docs/openapi.json", web::get().to(openapi_json));

    app
}

/// Construct an Actix HTTP server from the provided configuration.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let http_state = web::Data::new(HttpState::new(build_store(&config)));
    let server_health_state = health_state.clone();

    let server = HttpServer::new(move || {
        build_app(server_health_state.clone(), http_state.clone())
    })
    .bind(config.bind_addr)?
    .run();

    health_state.mark_ready();
    Ok(server)
}
