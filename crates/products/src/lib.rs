//! Products domain module.
//!
//! This crate contains the product record and the read-only catalog the API
//! serves from, implemented purely as domain logic (no IO, no HTTP, no storage).

pub mod catalog;
pub mod product;

pub use catalog::ProductCatalog;
pub use product::Product;
