use std::sync::Arc;

use poem_openapi::{
    OpenApi,
    param::{Path, Query},
    payload::Json,
};
use uuid::Uuid;

use business::application::catalog::sync::CatalogSync;
use business::domain::product::use_cases::commit_price::{CommitPriceParams, CommitPriceUseCase};
use business::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};
use business::domain::product::use_cases::delete::{DeleteProductsParams, DeleteProductsUseCase};
use business::domain::product::use_cases::import::{ImportProductsParams, ImportProductsUseCase};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::product::dto::{
    CommitPriceRequest, CreateProductRequest, DeleteProductsRequest, DeletedProductsResponse,
    ImportProductsRequest, ProductResponse, price_input,
};
use crate::api::tags::ApiTags;

pub struct ProductApi {
    catalog: Arc<CatalogSync>,
    create_use_case: Arc<dyn CreateProductUseCase>,
    import_use_case: Arc<dyn ImportProductsUseCase>,
    commit_price_use_case: Arc<dyn CommitPriceUseCase>,
    delete_use_case: Arc<dyn DeleteProductsUseCase>,
}

impl ProductApi {
    pub fn new(
        catalog: Arc<CatalogSync>,
        create_use_case: Arc<dyn CreateProductUseCase>,
        import_use_case: Arc<dyn ImportProductsUseCase>,
        commit_price_use_case: Arc<dyn CommitPriceUseCase>,
        delete_use_case: Arc<dyn DeleteProductsUseCase>,
    ) -> Self {
        Self {
            catalog,
            create_use_case,
            import_use_case,
            commit_price_use_case,
            delete_use_case,
        }
    }

    async fn delete(&self, ids: Vec<Uuid>, confirmed: bool) -> Result<usize, (u16, Json<ErrorResponse>)> {
        self.delete_use_case
            .execute(DeleteProductsParams { ids, confirmed })
            .await
            .map_err(|err| {
                let (status, json) = err.into_error_response();
                (status.as_u16(), json)
            })
    }
}

/// Shared catalog API
///
/// Reads come from the session snapshot; writes go to the store and reach
/// the snapshot through the change feed.
#[OpenApi]
impl ProductApi {
    /// List the catalog
    ///
    /// Products ordered by name. `search` keeps names containing the text.
    #[oai(path = "/products", method = "get", tag = "ApiTags::Products")]
    async fn list_products(&self, search: Query<Option<String>>) -> ListProductsResponse {
        match self.catalog.products().await {
            Ok(products) => {
                let needle = search.0.map(|s| s.trim().to_lowercase()).unwrap_or_default();
                let responses: Vec<ProductResponse> = products
                    .into_iter()
                    .filter(|p| needle.is_empty() || p.name.to_lowercase().contains(&needle))
                    .map(|p| p.into())
                    .collect();
                ListProductsResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    503 => ListProductsResponse::ServiceUnavailable(json),
                    _ => ListProductsResponse::InternalError(json),
                }
            }
        }
    }

    /// Add a product
    ///
    /// The price accepts numbers or formatted strings; anything unparsable
    /// stores the product unpriced.
    #[oai(path = "/products", method = "post", tag = "ApiTags::Products")]
    async fn create_product(&self, body: Json<CreateProductRequest>) -> CreateProductResponse {
        let params = CreateProductParams {
            name: body.0.name,
            price: price_input(body.0.price),
        };

        match self.create_use_case.execute(params).await {
            Ok(product) => CreateProductResponse::Created(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreateProductResponse::BadRequest(json),
                    409 => CreateProductResponse::Conflict(json),
                    503 => CreateProductResponse::ServiceUnavailable(json),
                    _ => CreateProductResponse::InternalError(json),
                }
            }
        }
    }

    /// Bulk import
    ///
    /// Parses one product per line and inserts everything found.
    #[oai(path = "/products/import", method = "post", tag = "ApiTags::Products")]
    async fn import_products(&self, body: Json<ImportProductsRequest>) -> ImportProductsResponse {
        match self
            .import_use_case
            .execute(ImportProductsParams { text: body.0.text })
            .await
        {
            Ok(products) => ImportProductsResponse::Created(Json(
                products.into_iter().map(|p| p.into()).collect(),
            )),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => ImportProductsResponse::BadRequest(json),
                    409 => ImportProductsResponse::Conflict(json),
                    503 => ImportProductsResponse::ServiceUnavailable(json),
                    _ => ImportProductsResponse::InternalError(json),
                }
            }
        }
    }

    /// Save a price
    ///
    /// Updates the price, records today's history entry and closes a pending
    /// review.
    #[oai(path = "/products/:id/price", method = "put", tag = "ApiTags::Products")]
    async fn commit_price(
        &self,
        id: Path<String>,
        body: Json<CommitPriceRequest>,
    ) -> CommitPriceResponse {
        let Ok(uuid) = Uuid::parse_str(&id.0) else {
            return CommitPriceResponse::BadRequest(ErrorResponse::invalid_id("product.invalid_id"));
        };

        let params = CommitPriceParams {
            product_id: uuid,
            price: price_input(body.0.price),
        };

        match self.commit_price_use_case.execute(params).await {
            Ok(product) => CommitPriceResponse::Ok(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CommitPriceResponse::BadRequest(json),
                    404 => CommitPriceResponse::NotFound(json),
                    503 => CommitPriceResponse::ServiceUnavailable(json),
                    _ => CommitPriceResponse::InternalError(json),
                }
            }
        }
    }

    /// Delete a product
    ///
    /// Requires `confirm=true`.
    #[oai(path = "/products/:id", method = "delete", tag = "ApiTags::Products")]
    async fn delete_product(
        &self,
        id: Path<String>,
        confirm: Query<Option<bool>>,
    ) -> DeleteProductResponse {
        let Ok(uuid) = Uuid::parse_str(&id.0) else {
            return DeleteProductResponse::BadRequest(ErrorResponse::invalid_id("product.invalid_id"));
        };

        match self.delete(vec![uuid], confirm.0.unwrap_or(false)).await {
            Ok(_) => DeleteProductResponse::NoContent,
            Err((400, json)) => DeleteProductResponse::BadRequest(json),
            Err((404, json)) => DeleteProductResponse::NotFound(json),
            Err((503, json)) => DeleteProductResponse::ServiceUnavailable(json),
            Err((_, json)) => DeleteProductResponse::InternalError(json),
        }
    }

    /// Delete several products
    ///
    /// Requires `confirm: true` in the body.
    #[oai(path = "/products/delete", method = "post", tag = "ApiTags::Products")]
    async fn delete_products(&self, body: Json<DeleteProductsRequest>) -> BulkDeleteResponse {
        match self.delete(body.0.ids, body.0.confirm).await {
            Ok(deleted) => BulkDeleteResponse::Ok(Json(DeletedProductsResponse {
                deleted: deleted as u64,
            })),
            Err((400, json)) => BulkDeleteResponse::BadRequest(json),
            Err((404, json)) => BulkDeleteResponse::NotFound(json),
            Err((503, json)) => BulkDeleteResponse::ServiceUnavailable(json),
            Err((_, json)) => BulkDeleteResponse::InternalError(json),
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum ListProductsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<ProductResponse>>),
    #[oai(status = 503)]
    ServiceUnavailable(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateProductResponse {
    #[oai(status = 201)]
    Created(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 503)]
    ServiceUnavailable(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum ImportProductsResponse {
    #[oai(status = 201)]
    Created(Json<Vec<ProductResponse>>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 503)]
    ServiceUnavailable(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum CommitPriceResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 503)]
    ServiceUnavailable(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteProductResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 503)]
    ServiceUnavailable(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum BulkDeleteResponse {
    #[oai(status = 200)]
    Ok(Json<DeletedProductsResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 503)]
    ServiceUnavailable(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
