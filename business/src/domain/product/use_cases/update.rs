use async_trait::async_trait;
use bigdecimal::BigDecimal;
use uuid::Uuid;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;

/// Partial update. Omitted (`None`) fields keep their stored value.
pub struct UpdateProductParams {
    pub id: Uuid,
    pub name: Option<String>,
    pub price: Option<BigDecimal>,
    pub stock: Option<i32>,
}

#[async_trait]
pub trait UpdateProductUseCase: Send + Sync {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError>;
}
