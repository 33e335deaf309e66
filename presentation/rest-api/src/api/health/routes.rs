use std::sync::Arc;

use chrono::Utc;
use poem_openapi::{Object, OpenApi, payload::Json};
use serde::{Deserialize, Serialize};

use business::application::catalog::sync::{CatalogStatus, CatalogSync};

use crate::api::tags::ApiTags;

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct HealthCheckResponse {
    /// `healthy` when the catalog is loaded, `degraded` otherwise
    pub status: String,
    pub timestamp: String,
    pub version: String,
}

/// Liveness probe. Always answers 200; a failed catalog only degrades the
/// reported status.
pub struct Api {
    catalog: Arc<CatalogSync>,
}

impl Api {
    pub fn new(catalog: Arc<CatalogSync>) -> Self {
        Self { catalog }
    }
}

#[OpenApi]
impl Api {
    /// Health check
    #[oai(path = "/health", method = "get", tag = "ApiTags::Health")]
    async fn health_check(&self) -> Json<HealthCheckResponse> {
        let status = match self.catalog.status().await {
            CatalogStatus::Ready => "healthy",
            CatalogStatus::Loading | CatalogStatus::Failed(_) => "degraded",
        };

        Json(HealthCheckResponse {
            status: status.to_string(),
            timestamp: Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        })
    }
}
