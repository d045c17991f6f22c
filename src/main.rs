use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use address_locator::config::{LoggingSettings, Settings, StorageBackend};
use address_locator::core::ProximityFilter;
use address_locator::routes::{self, AppState};
use address_locator::services::{AddressStore, InMemoryStore, PostgresStore};
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

/// RUST_LOG, when set, takes precedence over the configured level
fn init_logging(logging: &LoggingSettings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if logging.format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.json().init();
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = Settings::load();

    // Fall back to default logging so configuration errors are still reported
    let logging = settings
        .as_ref()
        .map(|s| s.logging.clone())
        .unwrap_or_default();
    init_logging(&logging);

    info!("Starting address locator service...");

    let settings = settings.map_err(|e| {
        error!("Failed to load configuration: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e)
    })?;

    info!("Configuration loaded successfully");

    let store: Arc<dyn AddressStore> = match settings.database.backend {
        StorageBackend::Postgres => {
            let db_max_conn = settings.database.max_connections.unwrap_or(10);
            let store = PostgresStore::from_settings(
                &settings.database.url,
                Some(db_max_conn),
                settings.database.min_connections,
                settings.database.acquire_timeout_secs,
                settings.database.idle_timeout_secs,
            )
            .await
            .map_err(|e| {
                error!("Failed to connect to PostgreSQL: {}", e);
                std::io::Error::new(std::io::ErrorKind::Other, e)
            })?;

            info!("PostgreSQL store initialized (max: {} connections)", db_max_conn);
            Arc::new(store)
        }
        StorageBackend::Memory => {
            warn!("Using in-memory address store, data will not survive a restart");
            Arc::new(InMemoryStore::new())
        }
    };

    let filter = ProximityFilter::new(settings.proximity.distance_method);

    info!("Proximity filter using {} distance", filter.method());

    // Build application state
    let app_state = AppState {
        store,
        filter,
        pagination: settings.pagination.clone(),
    };

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::JsonConfig::default().error_handler(routes::handle_json_payload_error))
            .app_data(web::QueryConfig::default().error_handler(routes::handle_query_payload_error))
            .app_data(web::PathConfig::default().error_handler(routes::handle_path_error))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .wrap(middleware::NormalizePath::trim())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
