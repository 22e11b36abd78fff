use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub mod config;
pub mod routes;

/// Builds the full service: every route plus the CORS and tracing layers.
pub fn app() -> Router {
    Router::new()
        .merge(routes::data::router())
        .merge(routes::health::router())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
