use std::sync::Arc;

use tokio::sync::Mutex;

use logger::TracingLogger;
use notifier::{LogNotifier, WebhookNotifier};
use persistence::catalog::listener::PgCatalogChangeSource;
use persistence::order::repository::OrderRepositoryPostgres;
use persistence::price_history::repository::PriceHistoryRepositoryPostgres;
use persistence::product::repository::ProductRepositoryPostgres;

use business::application::catalog::seed::SeedCatalogUseCaseImpl;
use business::application::catalog::sync::CatalogSync;
use business::application::export::build::ExportCatalogUseCaseImpl;
use business::application::order::delete::DeleteOrderUseCaseImpl;
use business::application::order::get_all::GetAllOrdersUseCaseImpl;
use business::application::order::get_by_id::GetOrderByIdUseCaseImpl;
use business::application::order::save::SaveOrderUseCaseImpl;
use business::application::order::update::UpdateOrderUseCaseImpl;
use business::application::price_history::get_all::GetPriceHistoryUseCaseImpl;
use business::application::product::commit_price::CommitPriceUseCaseImpl;
use business::application::product::create::CreateProductUseCaseImpl;
use business::application::product::delete::DeleteProductsUseCaseImpl;
use business::application::product::import::ImportProductsUseCaseImpl;
use business::application::review::complete::CompleteReviewUseCaseImpl;
use business::application::review::request::RequestReviewUseCaseImpl;
use business::domain::catalog::use_cases::seed::SeedCatalogUseCase;
use business::domain::logger::Logger;
use business::domain::order::draft::OrderDraft;
use business::domain::product::services::NotificationService;

use crate::api::catalog::routes::CatalogApi;
use crate::api::draft::routes::{DraftApi, DraftSession};
use crate::api::export::routes::ExportApi;
use crate::api::health::routes::Api as HealthApi;
use crate::api::history::routes::HistoryApi;
use crate::api::order::routes::OrderApi;
use crate::api::product::routes::ProductApi;
use crate::api::review::routes::ReviewApi;
use crate::api::schema::routes::SchemaApi;
use crate::config::app_config::AppConfig;

pub struct DependencyContainer {
    pub health_api: HealthApi,
    pub product_api: ProductApi,
    pub review_api: ReviewApi,
    pub history_api: HistoryApi,
    pub order_api: OrderApi,
    pub draft_api: DraftApi,
    pub export_api: ExportApi,
    pub catalog_api: CatalogApi,
    pub schema_api: SchemaApi,
    /// Session catalog, opened and closed around the server run
    pub catalog: Arc<CatalogSync>,
    pub seeder: Arc<dyn SeedCatalogUseCase>,
}

impl DependencyContainer {
    pub fn new(pool: sqlx::PgPool, config: &AppConfig) -> Self {
        let logger: Arc<dyn Logger> = Arc::new(TracingLogger);

        // Infrastructure adapters
        let product_repository = Arc::new(ProductRepositoryPostgres::new(pool.clone()));
        let history_repository = Arc::new(PriceHistoryRepositoryPostgres::new(pool.clone()));
        let order_repository = Arc::new(OrderRepositoryPostgres::new(pool.clone()));
        let change_source = Arc::new(PgCatalogChangeSource::new(pool, logger.clone()));

        let notifier: Arc<dyn NotificationService> = match &config.notifier.webhook_url {
            Some(url) => Arc::new(WebhookNotifier::new(
                url.clone(),
                config.notifier.timeout,
                logger.clone(),
            )),
            None => Arc::new(LogNotifier {
                logger: logger.clone(),
            }),
        };

        // Catalog session
        let catalog = Arc::new(CatalogSync::new(
            product_repository.clone(),
            change_source,
            notifier,
            logger.clone(),
            config.catalog.fetch_timeout,
        ));
        let draft: DraftSession = Arc::new(Mutex::new(OrderDraft::default()));

        // Product use cases
        let create_use_case = Arc::new(CreateProductUseCaseImpl {
            repository: product_repository.clone(),
            history_repository: history_repository.clone(),
            logger: logger.clone(),
        });
        let import_use_case = Arc::new(ImportProductsUseCaseImpl {
            repository: product_repository.clone(),
            history_repository: history_repository.clone(),
            logger: logger.clone(),
        });
        let commit_price_use_case = Arc::new(CommitPriceUseCaseImpl {
            repository: product_repository.clone(),
            history_repository: history_repository.clone(),
            logger: logger.clone(),
        });
        let delete_products_use_case = Arc::new(DeleteProductsUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let seeder = Arc::new(SeedCatalogUseCaseImpl {
            repository: product_repository.clone(),
            importer: import_use_case.clone(),
            logger: logger.clone(),
        });

        // Review use cases
        let request_review_use_case = Arc::new(RequestReviewUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let complete_review_use_case = Arc::new(CompleteReviewUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });

        // History and export
        let history_use_case = Arc::new(GetPriceHistoryUseCaseImpl {
            repository: history_repository.clone(),
            logger: logger.clone(),
        });
        let export_use_case = Arc::new(ExportCatalogUseCaseImpl {
            repository: product_repository,
            history_repository,
            logger: logger.clone(),
        });

        // Order use cases
        let get_all_orders_use_case = Arc::new(GetAllOrdersUseCaseImpl {
            repository: order_repository.clone(),
            logger: logger.clone(),
        });
        let get_order_use_case = Arc::new(GetOrderByIdUseCaseImpl {
            repository: order_repository.clone(),
            logger: logger.clone(),
        });
        let update_order_use_case = Arc::new(UpdateOrderUseCaseImpl {
            repository: order_repository.clone(),
            logger: logger.clone(),
        });
        let delete_order_use_case = Arc::new(DeleteOrderUseCaseImpl {
            repository: order_repository.clone(),
            logger: logger.clone(),
        });
        let save_order_use_case = Arc::new(SaveOrderUseCaseImpl {
            repository: order_repository,
            logger,
        });

        Self {
            health_api: HealthApi::new(catalog.clone()),
            product_api: ProductApi::new(
                catalog.clone(),
                create_use_case,
                import_use_case,
                commit_price_use_case,
                delete_products_use_case,
            ),
            review_api: ReviewApi::new(
                catalog.clone(),
                request_review_use_case,
                complete_review_use_case,
            ),
            history_api: HistoryApi::new(history_use_case),
            order_api: OrderApi::new(
                get_all_orders_use_case,
                get_order_use_case,
                update_order_use_case,
                delete_order_use_case,
                draft.clone(),
            ),
            draft_api: DraftApi::new(draft, catalog.clone(), save_order_use_case),
            export_api: ExportApi::new(export_use_case),
            catalog_api: CatalogApi::new(catalog.clone()),
            schema_api: SchemaApi,
            catalog,
            seeder,
        }
    }
}
