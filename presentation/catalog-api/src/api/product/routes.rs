use std::sync::Arc;

use poem_openapi::{ApiResponse, OpenApi, param::Path, payload::Json};
use uuid::Uuid;

use business::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};
use business::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};
use business::domain::product::use_cases::get_all::GetAllProductsUseCase;
use business::domain::product::use_cases::get_by_id::{
    GetProductByIdParams, GetProductByIdUseCase,
};
use business::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};

use crate::api::error::{ErrorResponse, IntoErrorResponse, bad_request_body};
use crate::api::product::dto::{
    CreateProductRequest, ProductResponse, UpdateProductRequest, price_from_json,
};
use crate::api::tags::ApiTags;

pub struct ProductApi {
    create_use_case: Arc<dyn CreateProductUseCase>,
    get_all_use_case: Arc<dyn GetAllProductsUseCase>,
    get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
    update_use_case: Arc<dyn UpdateProductUseCase>,
    delete_use_case: Arc<dyn DeleteProductUseCase>,
}

impl ProductApi {
    pub fn new(
        create_use_case: Arc<dyn CreateProductUseCase>,
        get_all_use_case: Arc<dyn GetAllProductsUseCase>,
        get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
        update_use_case: Arc<dyn UpdateProductUseCase>,
        delete_use_case: Arc<dyn DeleteProductUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            get_all_use_case,
            get_by_id_use_case,
            update_use_case,
            delete_use_case,
        }
    }
}

fn parse_id(raw: &str) -> Result<Uuid, Json<ErrorResponse>> {
    Uuid::parse_str(raw).map_err(|_| ErrorResponse::validation("product.invalid_id"))
}

/// Product catalog API
///
/// Endpoints for creating, reading, updating, and deleting catalog products.
#[OpenApi]
impl ProductApi {
    /// Create a new product
    ///
    /// Store-generated identity and timestamps are returned in the body.
    #[oai(path = "/product", method = "post", tag = "ApiTags::Products")]
    async fn create_product(&self, body: Json<CreateProductRequest>) -> CreateProductResponse {
        let Some(price) = price_from_json(body.0.price) else {
            return CreateProductResponse::BadRequest(ErrorResponse::validation(
                "product.invalid_price",
            ));
        };

        let params = CreateProductParams {
            name: body.0.name,
            price,
            stock: body.0.stock,
        };

        match self.create_use_case.execute(params).await {
            Ok(product) => CreateProductResponse::Created(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreateProductResponse::BadRequest(json),
                    409 => CreateProductResponse::Conflict(json),
                    _ => CreateProductResponse::InternalError(json),
                }
            }
        }
    }

    /// List all products
    #[oai(path = "/product", method = "get", tag = "ApiTags::Products")]
    async fn get_all_products(&self) -> GetAllProductsResponse {
        match self.get_all_use_case.execute().await {
            Ok(products) => {
                let responses: Vec<ProductResponse> =
                    products.into_iter().map(|p| p.into()).collect();
                GetAllProductsResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetAllProductsResponse::InternalError(json)
            }
        }
    }

    /// Get a product by ID
    #[oai(path = "/product/:id", method = "get", tag = "ApiTags::Products")]
    async fn get_product_by_id(&self, id: Path<String>) -> GetProductByIdResponse {
        let id = match parse_id(&id.0) {
            Ok(id) => id,
            Err(json) => return GetProductByIdResponse::BadRequest(json),
        };

        match self
            .get_by_id_use_case
            .execute(GetProductByIdParams { id })
            .await
        {
            Ok(product) => GetProductByIdResponse::Ok(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetProductByIdResponse::NotFound(json),
                    _ => GetProductByIdResponse::InternalError(json),
                }
            }
        }
    }

    /// Partially update a product
    ///
    /// Only the fields present in the body are changed; `updated_at` is
    /// refreshed whenever something is written.
    #[oai(path = "/product", method = "patch", tag = "ApiTags::Products")]
    async fn update_product(&self, body: Json<UpdateProductRequest>) -> UpdateProductResponse {
        let id = match parse_id(&body.0.prod_id) {
            Ok(id) => id,
            Err(json) => return UpdateProductResponse::BadRequest(json),
        };

        let price = match body.0.price {
            Some(raw) => match price_from_json(raw) {
                Some(price) => Some(price),
                None => {
                    return UpdateProductResponse::BadRequest(ErrorResponse::validation(
                        "product.invalid_price",
                    ));
                }
            },
            None => None,
        };

        let params = UpdateProductParams {
            id,
            name: body.0.name,
            price,
            stock: body.0.stock,
        };

        match self.update_use_case.execute(params).await {
            Ok(product) => UpdateProductResponse::Ok(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => UpdateProductResponse::BadRequest(json),
                    404 => UpdateProductResponse::NotFound(json),
                    409 => UpdateProductResponse::Conflict(json),
                    _ => UpdateProductResponse::InternalError(json),
                }
            }
        }
    }

    /// Delete a product
    ///
    /// Permanently removes the product and returns its last stored state.
    #[oai(path = "/product/:id", method = "delete", tag = "ApiTags::Products")]
    async fn delete_product(&self, id: Path<String>) -> DeleteProductResponse {
        let id = match parse_id(&id.0) {
            Ok(id) => id,
            Err(json) => return DeleteProductResponse::BadRequest(json),
        };

        match self
            .delete_use_case
            .execute(DeleteProductParams { id })
            .await
        {
            Ok(product) => DeleteProductResponse::Ok(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => DeleteProductResponse::NotFound(json),
                    _ => DeleteProductResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(ApiResponse)]
#[oai(bad_request_handler = "create_bad_request")]
pub enum CreateProductResponse {
    #[oai(status = 201)]
    Created(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

fn create_bad_request(err: poem::Error) -> CreateProductResponse {
    CreateProductResponse::BadRequest(bad_request_body(&err))
}

#[derive(ApiResponse)]
pub enum GetAllProductsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<ProductResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(ApiResponse)]
#[oai(bad_request_handler = "get_by_id_bad_request")]
pub enum GetProductByIdResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

fn get_by_id_bad_request(err: poem::Error) -> GetProductByIdResponse {
    GetProductByIdResponse::BadRequest(bad_request_body(&err))
}

#[derive(ApiResponse)]
#[oai(bad_request_handler = "update_bad_request")]
pub enum UpdateProductResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

fn update_bad_request(err: poem::Error) -> UpdateProductResponse {
    UpdateProductResponse::BadRequest(bad_request_body(&err))
}

#[derive(ApiResponse)]
#[oai(bad_request_handler = "delete_bad_request")]
pub enum DeleteProductResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

fn delete_bad_request(err: poem::Error) -> DeleteProductResponse {
    DeleteProductResponse::BadRequest(bad_request_body(&err))
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use bigdecimal::BigDecimal;
    use business::application::product::create::CreateProductUseCaseImpl;
    use business::application::product::delete::DeleteProductUseCaseImpl;
    use business::application::product::get_all::GetAllProductsUseCaseImpl;
    use business::application::product::get_by_id::GetProductByIdUseCaseImpl;
    use business::application::product::update::UpdateProductUseCaseImpl;
    use business::domain::errors::RepositoryError;
    use business::domain::logger::Logger;
    use business::domain::product::model::{NewProduct, Product};
    use business::domain::product::patch::ProductPatch;
    use business::domain::product::repository::ProductRepository;
    use chrono::{Duration, Utc};
    use poem::http::StatusCode;
    use poem::test::TestClient;
    use poem_openapi::OpenApiService;
    use serde_json::json;
    use std::str::FromStr;
    use std::sync::Mutex;

    struct Silent;

    impl Logger for Silent {
        fn info(&self, _message: &str) {}
        fn warn(&self, _message: &str) {}
        fn error(&self, _message: &str) {}
        fn debug(&self, _message: &str) {}
    }

    /// Vec-backed store with the unique-name rule. `unavailable` fails every call.
    #[derive(Default)]
    struct InMemoryRepo {
        rows: Mutex<Vec<Product>>,
        unavailable: bool,
    }

    impl InMemoryRepo {
        fn with_widget() -> (Arc<Self>, Uuid) {
            let now = Utc::now();
            let id = Uuid::new_v4();
            let widget = Product::from_repository(
                id,
                "Widget".to_string(),
                BigDecimal::from_str("9.99").unwrap(),
                10,
                now,
                now,
            );
            let repo = Self {
                rows: Mutex::new(vec![widget]),
                unavailable: false,
            };
            (Arc::new(repo), id)
        }

        fn check(&self) -> Result<(), RepositoryError> {
            if self.unavailable {
                return Err(RepositoryError::persistence(
                    "server closed the connection unexpectedly",
                ));
            }
            Ok(())
        }
    }

    #[async_trait]
    impl ProductRepository for InMemoryRepo {
        async fn create(&self, product: &NewProduct) -> Result<Product, RepositoryError> {
            self.check()?;
            let mut rows = self.rows.lock().unwrap();
            if rows.iter().any(|p| p.name == product.name()) {
                return Err(RepositoryError::Conflict);
            }
            let now = Utc::now();
            let created = Product::from_repository(
                Uuid::new_v4(),
                product.name().to_string(),
                product.price().clone(),
                product.stock(),
                now,
                now,
            );
            rows.push(created.clone());
            Ok(created)
        }

        async fn fetch_by_id(&self, id: Uuid) -> Result<Product, RepositoryError> {
            self.check()?;
            let rows = self.rows.lock().unwrap();
            rows.iter()
                .find(|p| p.id == id)
                .cloned()
                .ok_or(RepositoryError::NotFound)
        }

        async fn fetch_all(&self) -> Result<Vec<Product>, RepositoryError> {
            self.check()?;
            Ok(self.rows.lock().unwrap().clone())
        }

        async fn update_by_id(&self, patch: &ProductPatch) -> Result<Product, RepositoryError> {
            self.check()?;
            let mut rows = self.rows.lock().unwrap();
            if let Some(name) = patch.name() {
                if rows.iter().any(|p| p.name == name && p.id != patch.id()) {
                    return Err(RepositoryError::Conflict);
                }
            }
            let row = rows
                .iter_mut()
                .find(|p| p.id == patch.id())
                .ok_or(RepositoryError::NotFound)?;
            if let Some(name) = patch.name() {
                row.name = name.to_string();
            }
            if let Some(stock) = patch.stock() {
                row.stock = stock;
            }
            if let Some(price) = patch.price() {
                row.price = price.clone();
            }
            row.updated_at = row.updated_at + Duration::milliseconds(1);
            Ok(row.clone())
        }

        async fn delete_by_id(&self, id: Uuid) -> Result<Product, RepositoryError> {
            self.check()?;
            let mut rows = self.rows.lock().unwrap();
            let index = rows
                .iter()
                .position(|p| p.id == id)
                .ok_or(RepositoryError::NotFound)?;
            Ok(rows.remove(index))
        }
    }

    fn client(repository: Arc<InMemoryRepo>) -> TestClient<poem::Route> {
        let logger: Arc<dyn Logger> = Arc::new(Silent);
        let api = ProductApi::new(
            Arc::new(CreateProductUseCaseImpl {
                repository: repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(GetAllProductsUseCaseImpl {
                repository: repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(GetProductByIdUseCaseImpl {
                repository: repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(UpdateProductUseCaseImpl {
                repository: repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(DeleteProductUseCaseImpl { repository, logger }),
        );
        let service = OpenApiService::new(api, "Catalog", "test");
        TestClient::new(poem::Route::new().nest("/", service))
    }

    async fn assert_create_rejected(price: serde_json::Value, message: &str) {
        let (repo, _) = InMemoryRepo::with_widget();
        let cli = client(repo.clone());

        let resp = cli
            .post("/product")
            .body_json(&json!({ "name": "Gadget", "price": price, "stock": 1 }))
            .send()
            .await;

        resp.assert_status(StatusCode::BAD_REQUEST);
        resp.assert_json(json!({ "error": "ValidationError", "message": message }))
            .await;
        assert_eq!(repo.rows.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn should_return_created_product() {
        let cli = client(Arc::new(InMemoryRepo::default()));

        let resp = cli
            .post("/product")
            .body_json(&json!({ "name": "  Gadget ", "price": 4.5, "stock": 0 }))
            .send()
            .await;

        resp.assert_status(StatusCode::CREATED);
        let json = resp.json().await;
        let body = json.value().object();
        body.get("prod_name").assert_string("Gadget");
        body.get("price").assert_f64(4.5);
        body.get("stock").assert_i64(0);
    }

    #[tokio::test]
    async fn should_return_conflict_for_duplicate_name() {
        let (repo, _) = InMemoryRepo::with_widget();
        let cli = client(repo);

        let resp = cli
            .post("/product")
            .body_json(&json!({ "name": "Widget", "price": 9.99, "stock": 10 }))
            .send()
            .await;

        resp.assert_status(StatusCode::CONFLICT);
        resp.assert_json(json!({ "error": "Conflict", "message": "product.name_conflict" }))
            .await;
    }

    #[tokio::test]
    async fn should_return_structured_bad_request_for_missing_field() {
        let cli = client(Arc::new(InMemoryRepo::default()));

        let resp = cli
            .post("/product")
            .body_json(&json!({ "name": "Gadget" }))
            .send()
            .await;

        resp.assert_status(StatusCode::BAD_REQUEST);
        resp.assert_json(json!({ "error": "ValidationError", "message": "request.malformed" }))
            .await;
    }

    #[tokio::test]
    async fn should_reject_non_positive_price_before_storing() {
        assert_create_rejected(json!(0), "product.price_not_positive").await;
    }

    #[tokio::test]
    async fn should_reject_sub_cent_price_before_storing() {
        assert_create_rejected(json!(0.001), "product.price_too_precise").await;
        assert_create_rejected(json!(9.999), "product.price_too_precise").await;
    }

    #[tokio::test]
    async fn should_reject_price_beyond_column_range_before_storing() {
        assert_create_rejected(json!(10_000_000_000i64), "product.price_too_large").await;
    }

    #[tokio::test]
    async fn should_return_bad_request_for_malformed_id() {
        let cli = client(Arc::new(InMemoryRepo::default()));

        let resp = cli.get("/product/not-a-uuid").send().await;

        resp.assert_status(StatusCode::BAD_REQUEST);
        resp.assert_json(json!({ "error": "ValidationError", "message": "product.invalid_id" }))
            .await;
    }

    #[tokio::test]
    async fn should_return_not_found_for_unknown_id() {
        let (repo, _) = InMemoryRepo::with_widget();
        let cli = client(repo);

        let resp = cli
            .get(format!("/product/{}", Uuid::new_v4()))
            .send()
            .await;

        resp.assert_status(StatusCode::NOT_FOUND);
        resp.assert_json(json!({ "error": "NotFound", "message": "product.not_found" }))
            .await;
    }

    #[tokio::test]
    async fn should_patch_stock_only() {
        let (repo, id) = InMemoryRepo::with_widget();
        let cli = client(repo);

        let resp = cli
            .patch("/product")
            .body_json(&json!({ "prod_id": id.to_string(), "stock": 5 }))
            .send()
            .await;

        resp.assert_status_is_ok();
        let json = resp.json().await;
        let body = json.value().object();
        body.get("prod_id").assert_string(&id.to_string());
        body.get("prod_name").assert_string("Widget");
        body.get("price").assert_f64(9.99);
        body.get("stock").assert_i64(5);
    }

    #[tokio::test]
    async fn should_patch_stock_to_zero() {
        let (repo, id) = InMemoryRepo::with_widget();
        let cli = client(repo);

        let resp = cli
            .patch("/product")
            .body_json(&json!({ "prod_id": id.to_string(), "stock": 0 }))
            .send()
            .await;

        resp.assert_status_is_ok();
        let json = resp.json().await;
        json.value().object().get("stock").assert_i64(0);
    }

    #[tokio::test]
    async fn should_reject_patch_with_empty_name() {
        let (repo, id) = InMemoryRepo::with_widget();
        let cli = client(repo.clone());

        let resp = cli
            .patch("/product")
            .body_json(&json!({ "prod_id": id.to_string(), "name": "" }))
            .send()
            .await;

        resp.assert_status(StatusCode::BAD_REQUEST);
        resp.assert_json(json!({ "error": "ValidationError", "message": "product.name_empty" }))
            .await;
        assert_eq!(repo.rows.lock().unwrap()[0].name, "Widget");
    }

    #[tokio::test]
    async fn should_return_not_found_when_patching_unknown_product() {
        let (repo, _) = InMemoryRepo::with_widget();
        let cli = client(repo);

        let resp = cli
            .patch("/product")
            .body_json(&json!({ "prod_id": Uuid::new_v4().to_string(), "stock": 5 }))
            .send()
            .await;

        resp.assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn should_return_deleted_snapshot() {
        let (repo, id) = InMemoryRepo::with_widget();
        let cli = client(repo.clone());

        let resp = cli.delete(format!("/product/{}", id)).send().await;

        resp.assert_status_is_ok();
        let json = resp.json().await;
        json.value().object().get("prod_id").assert_string(&id.to_string());
        assert!(repo.rows.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_not_leak_store_errors_on_internal_failure() {
        let repo = InMemoryRepo {
            unavailable: true,
            ..Default::default()
        };
        let cli = client(Arc::new(repo));

        let resp = cli
            .delete(format!("/product/{}", Uuid::new_v4()))
            .send()
            .await;

        resp.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        resp.assert_json(json!({ "error": "InternalError", "message": "product.internal" }))
            .await;
    }

    #[tokio::test]
    async fn should_list_products() {
        let (repo, _) = InMemoryRepo::with_widget();
        let cli = client(repo);

        let resp = cli.get("/product").send().await;

        resp.assert_status_is_ok();
        let json = resp.json().await;
        let list = json.value().array();
        list.assert_len(1);
        list.get(0).object().get("prod_name").assert_string("Widget");
    }
}
