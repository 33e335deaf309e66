use dotenvy::dotenv;

mod api {
    pub mod error;
    pub mod tags;
    pub mod catalog {
        pub mod dto;
        pub mod error_mapper;
        pub mod routes;
    }
    pub mod draft {
        pub mod dto;
        pub mod routes;
    }
    pub mod export {
        pub mod dto;
        pub mod error_mapper;
        pub mod routes;
    }
    pub mod health {
        pub mod routes;
    }
    pub mod history {
        pub mod dto;
        pub mod error_mapper;
        pub mod routes;
    }
    pub mod order {
        pub mod dto;
        pub mod error_mapper;
        pub mod routes;
    }
    pub mod product {
        pub mod dto;
        pub mod error_mapper;
        pub mod routes;
    }
    pub mod review {
        pub mod dto;
        pub mod error_mapper;
        pub mod routes;
    }
    pub mod schema {
        pub mod routes;
    }
}
mod config {
    pub mod app_config;
    pub mod catalog_config;
    pub mod cors_config;
    pub mod database_config;
    pub mod notifier_config;
    pub mod server_config;
}
mod setup {
    pub mod dependency_injection;
    pub mod server;
    pub mod session;
}

use config::{app_config::AppConfig, database_config};
use setup::{dependency_injection::DependencyContainer, server::Server, session::CatalogSession};

/// Shared price list service
///
/// - config/: environment-driven settings
/// - setup/: dependency wiring, catalog session lifecycle, HTTP server
/// - api/: routes, DTOs and error mapping per aggregate
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize tracing with RUST_LOG env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // 2. Load environment variables
    dotenv().ok();

    // 3. Load configuration
    let config = AppConfig::from_env();

    // 4. Initialize database (and migrations unless disabled)
    let pool = database_config::init_database().await?;

    // 5. Wire dependencies
    let container = DependencyContainer::new(pool, &config);

    // 6. Open the catalog session
    let seed_text = match config.catalog.seed_text().await {
        Ok(text) => text,
        Err(e) => {
            tracing::warn!("Catalog seed file unreadable: {}", e);
            None
        }
    };
    let session =
        CatalogSession::open(container.catalog.clone(), container.seeder.clone(), seed_text).await;

    // 7. Run server until shutdown, then unsubscribe
    let result = Server::run(config, container).await;
    session.close();

    result
}
