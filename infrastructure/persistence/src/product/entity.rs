use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::product::model::Product;

/// Row shape of the `products` table.
#[derive(Debug, FromRow)]
pub struct ProductEntity {
    pub prod_id: Uuid,
    pub prod_name: String,
    pub price: BigDecimal,
    pub stock: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ProductEntity {
    pub fn into_domain(self) -> Product {
        Product::from_repository(
            self.prod_id,
            self.prod_name,
            self.price,
            self.stock,
            self.created_at,
            self.updated_at,
        )
    }
}
