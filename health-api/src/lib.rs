//! Companion backend for the ping console.
//!
//! Exposes `GET /health` with CORS configured for the front end's origin.
//! The router is built by [`create_app`] so tests can drive it directly.

pub mod config;
pub mod routes;

use axum::{Router, routing::get};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use config::{ApiConfig, ConfigError, FrontOrigin};

/// CORS layer allowing all methods and headers from the configured origin.
pub fn cors_layer(origin: &FrontOrigin) -> CorsLayer {
    let allow_origin = match origin {
        FrontOrigin::Any => AllowOrigin::any(),
        FrontOrigin::Exact(value) => AllowOrigin::list([value.clone()]),
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Builds the HTTP router.
pub fn create_app(cfg: &ApiConfig) -> Router {
    Router::new()
        .route("/health", get(routes::health::health))
        .layer(cors_layer(&cfg.front_origin))
        .layer(TraceLayer::new_for_http())
}
