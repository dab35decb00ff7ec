//! Pages Server Library
//!
//! A minimal content backend: text pages addressed by slug, stored one file
//! per page, served over a small JSON API with permissive CORS.
//!
//! # Modules
//!
//! - `document`: Slug validation and the document store
//! - `routes`: HTTP handlers
//! - `config`, `error`, `state`: Process configuration, HTTP errors, shared state
//!
//! The server binary is in main.rs.

pub mod config;
pub mod document;
pub mod error;
pub mod routes;
pub mod state;

use axum::{
    http::{header, Method},
    routing::get,
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

pub use config::Config;
pub use state::AppState;

/// Build the application router.
///
/// Unmatched paths fall through to static files under the configured
/// `static_dir`.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    let static_files = ServeDir::new(&state.config().storage.static_dir);

    Router::new()
        .route("/health", get(routes::health::health_check))
        .route("/api/health", get(routes::health::health_check))
        .merge(routes::pages::router())
        .fallback_service(static_files)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
