use bigdecimal::BigDecimal;
use uuid::Uuid;

use super::errors::ProductError;
use super::model::{normalize_name, validate_price, validate_stock};

/// Sparse update for a stored product.
///
/// `None` means the field was omitted and the stored value stays as it is.
/// `Some` is an explicit value, zero included: `stock: Some(0)` empties the
/// stock rather than being ignored.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductPatch {
    id: Uuid,
    name: Option<String>,
    price: Option<BigDecimal>,
    stock: Option<i32>,
}

impl ProductPatch {
    /// Validates every explicit value with the same rules used on creation.
    /// An explicit name is stored trimmed.
    pub fn new(
        id: Uuid,
        name: Option<String>,
        price: Option<BigDecimal>,
        stock: Option<i32>,
    ) -> Result<Self, ProductError> {
        let name = name.map(normalize_name).transpose()?;
        if let Some(price) = &price {
            validate_price(price)?;
        }
        if let Some(stock) = stock {
            validate_stock(stock)?;
        }

        Ok(Self {
            id,
            name,
            price,
            stock,
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn price(&self) -> Option<&BigDecimal> {
        self.price.as_ref()
    }

    pub fn stock(&self) -> Option<i32> {
        self.stock
    }

    /// True when no user field is set; applying it would only touch `updated_at`.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.price.is_none() && self.stock.is_none()
    }
}
