use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;

use super::model::{NewProduct, Product};
use super::patch::ProductPatch;

/// Persistence port for products.
///
/// Every method is a single round trip to the store. Implementations must
/// report a missing row as [`RepositoryError::NotFound`] and a uniqueness
/// violation as [`RepositoryError::Conflict`].
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn create(&self, product: &NewProduct) -> Result<Product, RepositoryError>;
    async fn fetch_by_id(&self, id: Uuid) -> Result<Product, RepositoryError>;
    async fn fetch_all(&self) -> Result<Vec<Product>, RepositoryError>;
    async fn update_by_id(&self, patch: &ProductPatch) -> Result<Product, RepositoryError>;
    /// Removes the row and returns its last stored state.
    async fn delete_by_id(&self, id: Uuid) -> Result<Product, RepositoryError>;
}
