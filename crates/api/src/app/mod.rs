//! HTTP API application wiring (Axum router + service wiring).
//!
//! - `services.rs`: shared read-only state handed to handlers
//! - `routes/`: HTTP routes + handlers (one file per area)
//! - `dto.rs`: response shapes

use std::sync::Arc;

use axum::{Extension, Router};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use shopfront_products::ProductCatalog;

pub mod dto;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub fn build_app(catalog: ProductCatalog) -> Router {
    let services = Arc::new(services::AppServices::new(catalog));

    routes::router()
        .layer(Extension(services))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
}
