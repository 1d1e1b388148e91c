use shopfront_core::ProductId;
use shopfront_products::{Product, ProductCatalog};

/// Read-only state shared by every handler.
#[derive(Debug, Clone)]
pub struct AppServices {
    catalog: ProductCatalog,
}

impl AppServices {
    pub fn new(catalog: ProductCatalog) -> Self {
        Self { catalog }
    }

    pub fn products_list(&self) -> &[Product] {
        self.catalog.all()
    }

    pub fn products_get(&self, id: ProductId) -> Option<&Product> {
        self.catalog.find(id)
    }
}
