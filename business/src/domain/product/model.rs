use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use num_traits::Zero;
use uuid::Uuid;

use super::errors::ProductError;

/// Digits the `NUMERIC(12, 2)` price column keeps after the decimal point.
const PRICE_SCALE: i64 = 2;
/// Smallest price the column cannot hold (10 integer digits).
const PRICE_LIMIT: i64 = 10_000_000_000;

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub price: BigDecimal,
    pub stock: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: Uuid,
        name: String,
        price: BigDecimal,
        stock: i32,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            price,
            stock,
            created_at,
            updated_at,
        }
    }
}

/// A product that has not been stored yet.
///
/// Identity and timestamps are assigned by the store on insert, so only the
/// user-supplied fields live here. Instances are only obtainable through
/// [`NewProduct::new`], which enforces the creation rules.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    name: String,
    price: BigDecimal,
    stock: i32,
}

impl NewProduct {
    pub fn new(name: String, price: BigDecimal, stock: i32) -> Result<Self, ProductError> {
        let name = normalize_name(name)?;
        validate_price(&price)?;
        validate_stock(stock)?;

        Ok(Self { name, price, stock })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> &BigDecimal {
        &self.price
    }

    pub fn stock(&self) -> i32 {
        self.stock
    }
}

/// Trims surrounding whitespace; the trimmed form is what gets stored.
pub(crate) fn normalize_name(name: String) -> Result<String, ProductError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ProductError::NameEmpty);
    }
    Ok(trimmed.to_string())
}

/// A price must be positive and representable without rounding.
pub(crate) fn validate_price(price: &BigDecimal) -> Result<(), ProductError> {
    if *price <= BigDecimal::zero() {
        return Err(ProductError::PriceNotPositive);
    }
    if *price >= BigDecimal::from(PRICE_LIMIT) {
        return Err(ProductError::PriceTooLarge);
    }
    // 9.990 normalizes to scale 2, 0.001 stays at scale 3.
    let (_, scale) = price.normalized().as_bigint_and_exponent();
    if scale > PRICE_SCALE {
        return Err(ProductError::PriceTooPrecise);
    }
    Ok(())
}

pub(crate) fn validate_stock(stock: i32) -> Result<(), ProductError> {
    if stock < 0 {
        return Err(ProductError::StockNegative);
    }
    Ok(())
}
