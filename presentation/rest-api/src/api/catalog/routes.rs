use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::application::catalog::sync::CatalogSync;

use crate::api::catalog::dto::CatalogStatusResponse;
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;

pub struct CatalogApi {
    catalog: Arc<CatalogSync>,
}

impl CatalogApi {
    pub fn new(catalog: Arc<CatalogSync>) -> Self {
        Self { catalog }
    }

    async fn current_status(&self) -> CatalogStatusResponse {
        CatalogStatusResponse::new(
            self.catalog.status().await,
            self.catalog.product_count().await,
            self.catalog.pending_review_count().await,
        )
    }
}

/// Session catalog snapshot
#[OpenApi]
impl CatalogApi {
    /// Snapshot state
    #[oai(path = "/catalog/status", method = "get", tag = "ApiTags::Catalog")]
    async fn status(&self) -> Json<CatalogStatusResponse> {
        Json(self.current_status().await)
    }

    /// Reload the whole catalog
    ///
    /// Used to retry after a failed load, e.g. once the schema is applied.
    #[oai(path = "/catalog/reload", method = "post", tag = "ApiTags::Catalog")]
    async fn reload(&self) -> ReloadCatalogResponse {
        match self.catalog.load().await {
            Ok(_) => ReloadCatalogResponse::Ok(Json(self.current_status().await)),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    503 => ReloadCatalogResponse::ServiceUnavailable(json),
                    _ => ReloadCatalogResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum ReloadCatalogResponse {
    #[oai(status = 200)]
    Ok(Json<CatalogStatusResponse>),
    #[oai(status = 503)]
    ServiceUnavailable(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
