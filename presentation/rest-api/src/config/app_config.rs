use super::{
    catalog_config::CatalogConfig, cors_config, notifier_config::NotifierConfig,
    server_config::ServerConfig,
};
use poem::middleware::Cors;

pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
    pub catalog: CatalogConfig,
    pub notifier: NotifierConfig,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig::from_env(),
            cors: cors_config::init_cors(),
            catalog: CatalogConfig::from_env(),
            notifier: NotifierConfig::from_env(),
        }
    }
}
