use axum::{Router, routing::get};

pub mod products;
pub mod system;

/// Router for every endpoint. There is no authentication.
pub fn router() -> Router {
    Router::new()
        .route("/", get(system::greet))
        .route("/health", get(system::health))
        .route("/products", get(products::list_products))
        .route("/product/:id", get(products::get_product))
}
