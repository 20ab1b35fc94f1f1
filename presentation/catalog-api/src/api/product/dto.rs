use std::str::FromStr;

use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use num_traits::ToPrimitive;
use poem_openapi::Object;

use business::domain::product::model::Product;

#[derive(Debug, Clone, Object)]
pub struct CreateProductRequest {
    /// Product name (unique, cannot be empty)
    pub name: String,
    /// Unit price, must be greater than zero
    pub price: f64,
    /// Units in stock, zero or more
    pub stock: i32,
}

/// Partial update. Omitted fields keep their stored value; an explicit
/// `"stock": 0` empties the stock.
#[derive(Debug, Clone, Object)]
pub struct UpdateProductRequest {
    /// Identifier of the product to update
    pub prod_id: String,
    /// New name (cannot be empty)
    #[oai(skip_serializing_if_is_none)]
    pub name: Option<String>,
    /// New unit price (greater than zero)
    #[oai(skip_serializing_if_is_none)]
    pub price: Option<f64>,
    /// New stock level (zero or more)
    #[oai(skip_serializing_if_is_none)]
    pub stock: Option<i32>,
}

#[derive(Debug, Clone, Object)]
pub struct ProductResponse {
    /// Product unique identifier
    pub prod_id: String,
    /// Product name
    pub prod_name: String,
    /// Unit price
    pub price: f64,
    /// Units in stock
    pub stock: i32,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            prod_id: product.id.to_string(),
            prod_name: product.name,
            price: product.price.to_f64().unwrap_or_default(),
            stock: product.stock,
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}

/// Converts a JSON number into an exact decimal.
///
/// Goes through the shortest round-trip text form so `9.99` stays `9.99`
/// instead of its binary expansion. Returns `None` for NaN and infinities.
pub fn price_from_json(value: f64) -> Option<BigDecimal> {
    if !value.is_finite() {
        return None;
    }
    BigDecimal::from_str(&value.to_string()).ok()
}
