//! Strongly-typed identifiers used across the domain.

use serde::{Deserialize, Serialize};

/// Identifier of a product.
///
/// Assigned by hand when the catalog is built; uniqueness is assumed, not checked.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(i64);

impl ProductId {
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn get(&self) -> i64 {
        self.0
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_as_plain_integer() {
        assert_eq!(ProductId::new(42).to_string(), "42");
        assert_eq!(ProductId::new(-3).to_string(), "-3");
    }

    #[test]
    fn serializes_as_bare_integer() {
        let json = serde_json::to_value(ProductId::new(7)).unwrap();
        assert_eq!(json, serde_json::json!(7));
    }

    #[test]
    fn deserializes_from_bare_integer() {
        let id: ProductId = serde_json::from_str("12").unwrap();
        assert_eq!(id.get(), 12);
    }
}
