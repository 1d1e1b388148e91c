use std::sync::Arc;

use axum::{
    Json,
    extract::{Extension, Path},
};

use shopfront_products::Product;

use crate::app::dto::{ProductIdParam, ProductLookup};
use crate::app::services::AppServices;

pub async fn list_products(Extension(services): Extension<Arc<AppServices>>) -> Json<Vec<Product>> {
    Json(services.products_list().to_vec())
}

/// A non-integer `id` is rejected by the `Path` extractor (400). An unknown id,
/// including one too large for any product, is not an error: it answers 200
/// with the not-found string.
pub async fn get_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(ProductIdParam(id)): Path<ProductIdParam>,
) -> Json<ProductLookup> {
    let found = id.and_then(|id| services.products_get(id));
    if found.is_none() {
        tracing::debug!(product_id = ?id, "product lookup missed");
    }
    Json(ProductLookup::from(found))
}
