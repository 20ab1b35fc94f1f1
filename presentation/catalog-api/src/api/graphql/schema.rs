use std::sync::Arc;

use async_graphql::http::GraphiQLSource;
use async_graphql::{EmptyMutation, EmptySubscription, ErrorExtensions, Object, Schema, SimpleObject};
use chrono::{DateTime, Utc};
use num_traits::ToPrimitive;
use poem::{IntoResponse, handler, web::Html};

use business::domain::product::model::Product;
use business::domain::product::use_cases::get_all::GetAllProductsUseCase;

use crate::api::error::IntoErrorResponse;

pub type CatalogSchema = Schema<QueryRoot, EmptyMutation, EmptySubscription>;

/// Read-only GraphQL view of a catalog product. Field names match the REST body.
#[derive(SimpleObject)]
#[graphql(name = "Product", rename_fields = "snake_case")]
pub struct ProductObject {
    pub prod_id: String,
    pub prod_name: String,
    pub price: f64,
    pub stock: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Product> for ProductObject {
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

pub struct QueryRoot {
    get_all_use_case: Arc<dyn GetAllProductsUseCase>,
}

#[Object]
impl QueryRoot {
    /// Every product in the catalog, oldest first.
    async fn products(&self) -> async_graphql::Result<Vec<ProductObject>> {
        match self.get_all_use_case.execute().await {
            Ok(products) => Ok(products.into_iter().map(ProductObject::from).collect()),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                let kind = json.0.error;
                Err(async_graphql::Error::new(json.0.message)
                    .extend_with(|_, ext| ext.set("code", kind)))
            }
        }
    }
}

pub fn build_schema(get_all_use_case: Arc<dyn GetAllProductsUseCase>) -> CatalogSchema {
    Schema::build(
        QueryRoot { get_all_use_case },
        EmptyMutation,
        EmptySubscription,
    )
    .finish()
}

#[handler]
pub async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint("/graphql").finish())
}
