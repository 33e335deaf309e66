use std::sync::Arc;

use business::application::catalog::sync::{CatalogSync, SyncHandle};
use business::domain::catalog::errors::CatalogError;
use business::domain::catalog::use_cases::seed::{
    SeedCatalogParams, SeedCatalogUseCase, SeedOutcome,
};

/// Catalog lifecycle around the server run: seed an empty store, take the
/// first snapshot, then follow the change feed until closed.
///
/// Every step only logs on failure. The API stays up and reports the
/// catalog state through `/catalog/status`.
pub struct CatalogSession {
    handle: Option<SyncHandle>,
}

impl CatalogSession {
    pub async fn open(
        catalog: Arc<CatalogSync>,
        seeder: Arc<dyn SeedCatalogUseCase>,
        seed_text: Option<String>,
    ) -> Self {
        match seeder.execute(SeedCatalogParams { seed_text }).await {
            Ok(SeedOutcome::Seeded(count)) => tracing::info!("Catalog seeded with {} products", count),
            Ok(SeedOutcome::AlreadyPopulated(count)) => {
                tracing::debug!("Catalog already holds {} products, skipping seed", count)
            }
            Ok(SeedOutcome::NoSource) => tracing::debug!("No catalog seed configured"),
            Err(e) => tracing::warn!("Catalog seeding failed: {}", e),
        }

        match catalog.load().await {
            Ok(count) => tracing::info!("Catalog ready: {} products", count),
            Err(CatalogError::TableMissing) => tracing::warn!(
                "Catalog table is missing; apply the SQL served at /setup/schema, then POST /catalog/reload"
            ),
            Err(e) => tracing::warn!("Initial catalog load failed: {}", e),
        }

        let handle = match catalog.start().await {
            Ok(handle) => Some(handle),
            Err(e) => {
                tracing::warn!("Catalog change feed unavailable: {}", e);
                None
            }
        };

        Self { handle }
    }

    /// Unsubscribes from the change feed.
    pub fn close(self) {
        if let Some(handle) = self.handle {
            handle.stop();
            tracing::info!("Catalog sync stopped");
        }
    }
}
