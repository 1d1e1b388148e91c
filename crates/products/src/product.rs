use serde::{Deserialize, Serialize, Serializer};

use shopfront_core::{Entity, ProductId};

/// A single catalog entry.
///
/// `price` carries no currency; `quantity` is the on-hand stock count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    name: String,
    description: String,
    #[serde(serialize_with = "serialize_price")]
    price: f64,
    quantity: u32,
}

impl Product {
    pub fn new(
        id: i64,
        name: impl Into<String>,
        description: impl Into<String>,
        price: f64,
        quantity: u32,
    ) -> Self {
        Self {
            id: ProductId::new(id),
            name: name.into(),
            description: description.into(),
            price,
            quantity,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> Self::Id {
        self.id
    }
}

/// Whole prices go out as JSON integers (`99`), fractional ones as floats (`1.99`).
fn serialize_price<S: Serializer>(price: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    let whole = price.fract() == 0.0 && *price >= i64::MIN as f64 && *price < i64::MAX as f64;
    if whole {
        serializer.serialize_i64(*price as i64)
    } else {
        serializer.serialize_f64(*price)
    }
}
