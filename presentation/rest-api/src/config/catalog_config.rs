use std::env;
use std::time::Duration;

/// Catalog session settings
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    pub fetch_timeout: Duration,
    pub seed_file: Option<String>,
}

impl CatalogConfig {
    /// Environment variables:
    /// - CATALOG_FETCH_TIMEOUT_SECS: Hard timeout of a full catalog fetch (default: 10)
    /// - CATALOG_SEED_FILE: Bulk-import text used to seed an empty catalog (optional)
    pub fn from_env() -> Self {
        Self::from_values(
            env::var("CATALOG_FETCH_TIMEOUT_SECS").ok(),
            env::var("CATALOG_SEED_FILE").ok(),
        )
    }

    fn from_values(timeout: Option<String>, seed_file: Option<String>) -> Self {
        let secs = timeout
            .and_then(|v| v.parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .unwrap_or(10);

        Self {
            fetch_timeout: Duration::from_secs(secs),
            seed_file: seed_file.filter(|path| !path.trim().is_empty()),
        }
    }

    /// Reads the seed file, if one is configured.
    pub async fn seed_text(&self) -> anyhow::Result<Option<String>> {
        match &self.seed_file {
            Some(path) => Ok(Some(tokio::fs::read_to_string(path).await?)),
            None => Ok(None),
        }
    }
}
