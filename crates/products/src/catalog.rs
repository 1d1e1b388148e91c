//! Immutable, ordered product catalog.
//!
//! The catalog is built once at startup and shared by reference for the life of
//! the process. There is no way to add, remove or edit an entry after
//! construction, so concurrent readers need no locking.

use std::sync::Arc;

use shopfront_core::{Entity, ProductId};

use crate::product::Product;

/// Read-only, insertion-ordered sequence of products.
///
/// Cloning is cheap (shared `Arc`).
#[derive(Debug, Clone)]
pub struct ProductCatalog {
    products: Arc<[Product]>,
}

impl ProductCatalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            products: products.into(),
        }
    }

    /// The catalog served by the API.
    pub fn seeded() -> Self {
        Self::new(vec![
            Product::new(1, "phone", "budget phone", 99.0, 10),
            Product::new(2, "Laptop", "Gaming laptop", 999.0, 5),
            Product::new(3, "Pen", "Blue ink pen", 1.99, 100),
            Product::new(4, "Table", "Wooden table", 199.99, 20),
        ])
    }

    /// All products, in insertion order.
    pub fn all(&self) -> &[Product] {
        &self.products
    }

    /// Linear scan by id; the first match wins if ids collide.
    pub fn find(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id() == id)
    }
}
