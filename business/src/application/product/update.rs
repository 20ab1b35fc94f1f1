use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::patch::ProductPatch;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};

pub struct UpdateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateProductUseCase for UpdateProductUseCaseImpl {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Updating product: {}", params.id));

        let patch = ProductPatch::new(params.id, params.name, params.price, params.stock)?;

        if patch.is_empty() {
            self.logger.debug(&format!(
                "Patch for product {} carries no fields, returning stored state",
                patch.id()
            ));
        }

        let updated = self.repository.update_by_id(&patch).await.map_err(|e| {
            self.logger
                .warn(&format!("Product update failed for {}: {}", patch.id(), e));
            ProductError::from(e)
        })?;

        self.logger
            .info(&format!("Product updated: {}", updated.id));
        Ok(updated)
    }
}
