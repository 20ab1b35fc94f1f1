use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{NewProduct, Product};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};

pub struct CreateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateProductUseCase for CreateProductUseCaseImpl {
    async fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Creating product: {}", params.name));

        let new_product = NewProduct::new(params.name, params.price, params.stock)?;

        let product = self.repository.create(&new_product).await.map_err(|e| {
            self.logger
                .warn(&format!("Product creation failed: {}", e));
            ProductError::from(e)
        })?;

        self.logger
            .info(&format!("Product created with id: {}", product.id));
        Ok(product)
    }
}
