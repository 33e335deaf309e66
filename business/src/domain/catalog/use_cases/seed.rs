use async_trait::async_trait;

use crate::domain::catalog::errors::CatalogError;

pub struct SeedCatalogParams {
    /// Bulk-import text used when the catalog is empty.
    pub seed_text: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// The store already holds this many products.
    AlreadyPopulated(u64),
    /// Empty store and nothing to seed it with.
    NoSource,
    Seeded(usize),
}

/// First-start initialization: fills an empty catalog from seed text.
#[async_trait]
pub trait SeedCatalogUseCase: Send + Sync {
    async fn execute(&self, params: SeedCatalogParams) -> Result<SeedOutcome, CatalogError>;
}
