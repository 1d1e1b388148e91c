use std::num::IntErrorKind;

use serde::{Deserialize, Deserializer, Serialize, de};

use shopfront_core::ProductId;
use shopfront_products::Product;

/// Body of `GET /`.
pub const GREETING: &str = "Hello from Abhi";

/// Body of `GET /product/{id}` when no product matches.
pub const PRODUCT_NOT_FOUND: &str = "Product not found!";

/// Response of a by-id lookup.
///
/// A miss is reported in the payload (a bare JSON string), not via the status
/// code; clients distinguish the two by shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ProductLookup {
    Found(Product),
    Missing(&'static str),
}

impl From<Option<&Product>> for ProductLookup {
    fn from(value: Option<&Product>) -> Self {
        match value {
            Some(p) => Self::Found(p.clone()),
            None => Self::Missing(PRODUCT_NOT_FOUND),
        }
    }
}

/// `{id}` path segment of `GET /product/{id}`.
///
/// Any integer is accepted, however large. Integers outside the `i64` range
/// cannot name a product and resolve to `None`. Anything that is not an
/// integer fails deserialization, which the `Path` extractor turns into a 400.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductIdParam(pub Option<ProductId>);

impl std::str::FromStr for ProductIdParam {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.parse::<i64>() {
            Ok(v) => Ok(Self(Some(ProductId::new(v)))),
            Err(e) if matches!(e.kind(), IntErrorKind::PosOverflow | IntErrorKind::NegOverflow) => {
                Ok(Self(None))
            }
            Err(e) => Err(e),
        }
    }
}

impl<'de> Deserialize<'de> for ProductIdParam {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse::<ProductIdParam>()
            .map_err(|e| de::Error::custom(format!("invalid product id {raw:?}: {e}")))
    }
}
