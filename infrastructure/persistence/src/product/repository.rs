use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::product::model::{NewProduct, Product};
use business::domain::product::patch::ProductPatch;
use business::domain::product::repository::ProductRepository;

use super::entity::ProductEntity;
use crate::errors::classify;

const PRODUCT_COLUMNS: &str = "prod_id, prod_name, price, stock, created_at, updated_at";

pub struct ProductRepositoryPostgres {
    pool: PgPool,
}

impl ProductRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn insert_statement() -> String {
    format!(
        "INSERT INTO products (prod_name, price, stock) VALUES ($1, $2, $3) RETURNING {}",
        PRODUCT_COLUMNS
    )
}

fn select_by_id_statement() -> String {
    format!("SELECT {} FROM products WHERE prod_id = $1", PRODUCT_COLUMNS)
}

fn select_all_statement() -> String {
    format!(
        "SELECT {} FROM products ORDER BY created_at, prod_id",
        PRODUCT_COLUMNS
    )
}

fn delete_statement() -> String {
    format!(
        "DELETE FROM products WHERE prod_id = $1 RETURNING {}",
        PRODUCT_COLUMNS
    )
}

/// Builds the single-statement partial update for `patch`.
///
/// Assignments follow a fixed order (name, stock, price) and `updated_at` is
/// always refreshed last. Every user value is bound, never interpolated.
fn update_statement(patch: &ProductPatch) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::new("UPDATE products SET ");

    {
        let mut assignments = builder.separated(", ");
        if let Some(name) = patch.name() {
            assignments.push("prod_name = ");
            assignments.push_bind_unseparated(name.to_string());
        }
        if let Some(stock) = patch.stock() {
            assignments.push("stock = ");
            assignments.push_bind_unseparated(stock);
        }
        if let Some(price) = patch.price() {
            assignments.push("price = ");
            assignments.push_bind_unseparated(price.clone());
        }
        assignments.push("updated_at = NOW()");
    }

    builder.push(" WHERE prod_id = ");
    builder.push_bind(patch.id());
    builder.push(" RETURNING ");
    builder.push(PRODUCT_COLUMNS);
    builder
}

#[async_trait]
impl ProductRepository for ProductRepositoryPostgres {
    async fn create(&self, product: &NewProduct) -> Result<Product, RepositoryError> {
        let sql = insert_statement();
        let entity = sqlx::query_as::<_, ProductEntity>(&sql)
            .bind(product.name())
            .bind(product.price())
            .bind(product.stock())
            .fetch_one(&self.pool)
            .await
            .map_err(classify)?;

        Ok(entity.into_domain())
    }

    async fn fetch_by_id(&self, id: Uuid) -> Result<Product, RepositoryError> {
        let sql = select_by_id_statement();
        let entity = sqlx::query_as::<_, ProductEntity>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(classify)?
            .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn fetch_all(&self) -> Result<Vec<Product>, RepositoryError> {
        let sql = select_all_statement();
        let entities = sqlx::query_as::<_, ProductEntity>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(classify)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn update_by_id(&self, patch: &ProductPatch) -> Result<Product, RepositoryError> {
        // Nothing to write: report the stored row (or its absence) untouched.
        if patch.is_empty() {
            return self.fetch_by_id(patch.id()).await;
        }

        let mut statement = update_statement(patch);
        let entity = statement
            .build_query_as::<ProductEntity>()
            .fetch_optional(&self.pool)
            .await
            .map_err(classify)?
            .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<Product, RepositoryError> {
        let sql = delete_statement();
        let entity = sqlx::query_as::<_, ProductEntity>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(classify)?
            .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }
}
